//! The optimal ate pairing engine for BN-family curves (SPEC_FULL.md §4.6), generic over
//! the curve's field-tower and group parameter tables so that `bn254::Parameters` is the
//! only curve-specific piece.
//!
//! Grounded on `algebra-core/src/curves/models/bn/mod.rs` (trait shape, `ell`,
//! `miller_loop`, `final_exponentiation` bodies) and `bn/g2.rs` (line-function
//! precomputation). That file and `algebra/src/bn254/curves/mod.rs` name the same
//! constants differently (`SIX_U_PLUS_2_NAF`/`CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2` vs.
//! `ATE_LOOP_COUNT`/`TWIST_MUL_BY_Q_Y`) — see DESIGN.md for the numeric check confirming
//! they are the same values. This module keeps the `algebra-core` names; `bn254::Parameters`
//! supplies the `algebra`-table literals under them.

use num_traits::One;

use crate::curves::{AffineCurve, ModelParameters, PairingEngine, SWModelParameters};
use crate::fields::fq12::{Fq12, Fq12Parameters};
use crate::fields::fq2::{QuadExtField, QuadExtParameters};
use crate::fields::fq6::CubicExtParameters;
use crate::fields::{Field, PrimeField, SquareRootField};

pub mod g1;
pub mod g2;

pub use g1::{G1Affine, G1Prepared, G1Projective};
pub use g2::{G2Affine, G2Prepared, G2Projective};

/// The constant table a BN-family pairing needs on top of its field tower and group
/// parameters: the NAF recoding of `6u+2` driving the Miller loop, the loop parameter `u`
/// itself (consumed by the final exponentiation's hard part), and the power of the cubic
/// non-residue used to build the two Frobenius-twist addition steps appended after the loop.
pub trait BnParameters: 'static + Send + Sync + Sized {
    const SIX_U_PLUS_2_NAF: &'static [i8];
    const U: &'static [u64];

    type Fp: PrimeField + SquareRootField;
    type Fp2Params: QuadExtParameters<BaseField = Self::Fp, FrobCoeff = Self::Fp>;
    type Fp6Params: CubicExtParameters<
        BaseField = QuadExtField<Self::Fp2Params>,
        FrobCoeff = QuadExtField<Self::Fp2Params>,
    >;
    type Fp12Params: Fq12Parameters<Fp6Params = Self::Fp6Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = QuadExtField<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;

    /// The cubic non-residue raised to `(q - 1) / 2`, used to twist the `y` coordinate of
    /// the Frobenius image `Q1 = pi(Q)` during G2 precomputation (SPEC_FULL.md §4.6).
    const CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2: QuadExtField<Self::Fp2Params>;
}

#[derive(derivative::Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Bn<P: BnParameters>(core::marker::PhantomData<fn() -> P>);

impl<P: BnParameters> Bn<P> {
    /// Evaluates the line function stored in `coeffs` at `p` and folds it into `f` via the
    /// sparse Fq12 multiplication (SPEC_FULL.md §4.6's "sparse Fq¹² multiplication").
    fn ell(
        f: &mut Fq12<P::Fp12Params>,
        coeffs: &(
            QuadExtField<P::Fp2Params>,
            QuadExtField<P::Fp2Params>,
            QuadExtField<P::Fp2Params>,
        ),
        p: &G1Affine<P>,
    ) {
        let mut c0 = coeffs.0;
        let mut c1 = coeffs.1;

        c0.c0 *= &p.y;
        c0.c1 *= &p.y;

        c1.c0 *= &p.x;
        c1.c1 *= &p.x;

        f.mul_by_034(&c0, &c1, &coeffs.2);
    }

    fn exp_by_x(f: &mut Fq12<P::Fp12Params>) {
        *f = f.pow(P::U);
    }
}

impl<P: BnParameters> PairingEngine for Bn<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = QuadExtField<P::Fp2Params>;
    type Fqk = Fq12<P::Fp12Params>;

    /// Double-and-add Miller loop over `SIX_U_PLUS_2_NAF`, consuming the precomputed line
    /// coefficients one at a time per pair, then the two Frobenius-twist steps appended at
    /// the end of `G2Prepared::from`.
    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        let mut pairs = Vec::new();
        for (p, q) in i {
            if !p.is_zero() && !q.is_zero() {
                pairs.push((p, q.ell_coeffs.iter()));
            }
        }

        let mut f = Self::Fqk::one();

        for i in (1..P::SIX_U_PLUS_2_NAF.len()).rev() {
            if i != P::SIX_U_PLUS_2_NAF.len() - 1 {
                f.square_in_place();
            }
            for (p, coeffs) in &mut pairs {
                Self::ell(&mut f, coeffs.next().unwrap(), &p.0);
            }
            let bit = P::SIX_U_PLUS_2_NAF[i - 1];
            if bit != 0 {
                for (p, coeffs) in &mut pairs {
                    Self::ell(&mut f, coeffs.next().unwrap(), &p.0);
                }
            }
        }

        for (p, coeffs) in &mut pairs {
            Self::ell(&mut f, coeffs.next().unwrap(), &p.0);
        }
        for (p, coeffs) in &mut pairs {
            Self::ell(&mut f, coeffs.next().unwrap(), &p.0);
        }

        for (_p, coeffs) in &mut pairs {
            debug_assert!(coeffs.next().is_none());
        }

        f
    }

    /// Easy part `f^((p^6 - 1)(p^2 + 1))` followed by the Devegili-Scott-Dahab hard-part
    /// addition chain for `(p^4 - p^2 + 1) / r`, specialized to the BN parameter `u`
    /// (SPEC_FULL.md §4.6, resolving the "naive 4096-bit exponent" Open Question).
    fn final_exponentiation(r: &Self::Fqk) -> Option<Self::Fqk> {
        let mut f1 = *r;
        f1.conjugate();

        r.inverse().map(|f2| {
            let mut r = f1;
            r *= &f2;
            let f2 = r;
            r.frobenius_map(2);
            r *= &f2;

            let mut fp = r;
            fp.frobenius_map(1);

            let mut fp2 = r;
            fp2.frobenius_map(2);
            let mut fp3 = fp2;
            fp3.frobenius_map(1);

            let mut fu = r;
            Self::exp_by_x(&mut fu);

            let mut fu2 = fu;
            Self::exp_by_x(&mut fu2);

            let mut fu3 = fu2;
            Self::exp_by_x(&mut fu3);

            let mut y3 = fu;
            y3.frobenius_map(1);

            let mut fu2p = fu2;
            fu2p.frobenius_map(1);

            let mut fu3p = fu3;
            fu3p.frobenius_map(1);

            let mut y2 = fu2;
            y2.frobenius_map(2);

            let mut y0 = fp;
            y0 *= &fp2;
            y0 *= &fp3;

            let mut y1 = r;
            y1.conjugate();

            let mut y5 = fu2;
            y5.conjugate();

            y3.conjugate();

            let mut y4 = fu;
            y4 *= &fu2p;
            y4.conjugate();

            let mut y6 = fu3;
            y6 *= &fu3p;
            y6.conjugate();

            y6.square_in_place();
            y6 *= &y4;
            y6 *= &y5;

            let mut t1 = y3;
            t1 *= &y5;
            t1 *= &y6;

            y6 *= &y2;

            t1.square_in_place();
            t1 *= &y6;
            t1.square_in_place();

            let mut t0 = t1;
            t0 *= &y1;

            t1 *= &y0;

            t0.square_in_place();
            t0 *= &t1;

            t0
        })
    }
}
