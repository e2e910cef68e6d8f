//! G2 precomputation: walks the Miller-loop parameter and records, for each step, the
//! doubling (and, where the NAF digit is nonzero, addition) line-function coefficients,
//! then appends the two Frobenius-twist steps. Grounded on
//! `algebra-core/src/curves/models/bn/g2.rs` (read in full; `doubling_step`/`addition_step`
//! are Algorithms 26/27 of https://eprint.iacr.org/2010/354.pdf, ported field-method-for-
//! field-method).

use num_traits::One;

use crate::curves::bn::BnParameters;
use crate::curves::short_weierstrass_jacobian::{GroupAffine, GroupProjective};
use crate::curves::AffineCurve;
use crate::fields::fq2::QuadExtField;
use crate::fields::fq6::CubicExtParameters;
use crate::fields::Field;

pub type G2Affine<P> = GroupAffine<<P as BnParameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as BnParameters>::G2Parameters>;

type Coeffs<P> = (
    QuadExtField<<P as BnParameters>::Fp2Params>,
    QuadExtField<<P as BnParameters>::Fp2Params>,
    QuadExtField<<P as BnParameters>::Fp2Params>,
);

#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters"),
    PartialEq(bound = "P: BnParameters"),
    Eq(bound = "P: BnParameters")
)]
pub struct G2Prepared<P: BnParameters> {
    /// One (c0, c1, c2) triple per Miller-loop step, in the order the loop consumes them.
    pub ell_coeffs: Vec<Coeffs<P>>,
    pub infinity: bool,
}

#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = "P: BnParameters"),
    Copy(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters")
)]
struct G2HomProjective<P: BnParameters> {
    x: QuadExtField<P::Fp2Params>,
    y: QuadExtField<P::Fp2Params>,
    z: QuadExtField<P::Fp2Params>,
}

impl<P: BnParameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}

impl<P: BnParameters> Default for G2Prepared<P> {
    fn default() -> Self {
        Self::from(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: BnParameters> From<G2Affine<P>> for G2Prepared<P> {
    fn from(q: G2Affine<P>) -> Self {
        if q.is_zero() {
            return Self {
                ell_coeffs: Vec::new(),
                infinity: true,
            };
        }

        let mut coeffs = Vec::new();
        let mut r = G2HomProjective {
            x: q.x,
            y: q.y,
            z: QuadExtField::<P::Fp2Params>::one(),
        };

        let negq = -q;

        for i in (1..P::SIX_U_PLUS_2_NAF.len()).rev() {
            coeffs.push(doubling_step::<P>(&mut r));
            let bit = P::SIX_U_PLUS_2_NAF[i - 1];
            match bit {
                1 => coeffs.push(addition_step::<P>(&mut r, &q)),
                -1 => coeffs.push(addition_step::<P>(&mut r, &negq)),
                _ => continue,
            }
        }

        // Q1 = pi(Q): conjugate, then twist by the degree-6 Frobenius coefficient.
        let mut q1 = q;
        q1.x.c1 = -q1.x.c1;
        q1.x *= &P::Fp6Params::FROBENIUS_COEFF_C1[1];

        q1.y.c1 = -q1.y.c1;
        q1.y *= &P::CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2;

        coeffs.push(addition_step::<P>(&mut r, &q1));

        // -Q2 = -pi^2(Q): the degree-2 Frobenius coefficient is always real, so only `x`
        // needs twisting and no conjugation is needed for `y`.
        let mut minus_q2 = q;
        minus_q2.x *= &P::Fp6Params::FROBENIUS_COEFF_C1[2];

        coeffs.push(addition_step::<P>(&mut r, &minus_q2));

        Self {
            ell_coeffs: coeffs,
            infinity: false,
        }
    }
}

/// Adaptation of Algorithm 26, https://eprint.iacr.org/2010/354.pdf: doubles `r` in place
/// and returns the doubling line's `(c0, c1, c2)` coefficients.
fn doubling_step<P: BnParameters>(r: &mut G2HomProjective<P>) -> Coeffs<P> {
    let mut tmp0 = r.x;
    tmp0.square_in_place();

    let mut tmp1 = r.y;
    tmp1.square_in_place();

    let mut tmp2 = tmp1;
    tmp2.square_in_place();

    let mut tmp3 = tmp1;
    tmp3 += &r.x;
    tmp3.square_in_place();
    tmp3 -= &tmp0;
    tmp3 -= &tmp2;
    tmp3.double_in_place();

    let mut tmp4 = tmp0;
    tmp4.double_in_place();
    tmp4 += &tmp0;

    let mut tmp6 = r.x;
    tmp6 += &tmp4;

    let mut tmp5 = tmp4;
    tmp5.square_in_place();

    let zsquared = r.z.square();

    r.x = tmp5;
    r.x -= &tmp3;
    r.x -= &tmp3;

    r.z += &r.y;
    r.z.square_in_place();
    r.z -= &tmp1;
    r.z -= &zsquared;

    r.y = tmp3;
    r.y -= &r.x;
    r.y *= &tmp4;

    tmp2.double_in_place();
    tmp2.double_in_place();
    tmp2.double_in_place();

    r.y -= &tmp2;

    tmp3 = tmp4;
    tmp3 *= &zsquared;
    tmp3.double_in_place();
    tmp3 = -tmp3;

    tmp6.square_in_place();
    tmp6 -= &tmp0;
    tmp6 -= &tmp5;

    tmp1.double_in_place();
    tmp1.double_in_place();

    tmp6 -= &tmp1;

    tmp0 = r.z;
    tmp0 *= &zsquared;
    tmp0.double_in_place();

    (tmp0, tmp3, tmp6)
}

/// Adaptation of Algorithm 27, https://eprint.iacr.org/2010/354.pdf: adds affine `q` into
/// `r` in place and returns the addition line's `(c0, c1, c2)` coefficients.
fn addition_step<P: BnParameters>(
    r: &mut G2HomProjective<P>,
    q: &G2Affine<P>,
) -> Coeffs<P> {
    let zsquared = r.z.square();
    let ysquared = q.y.square();

    let mut t0 = zsquared;
    t0 *= &q.x;

    let mut t1 = q.y;
    t1 += &r.z;
    t1.square_in_place();
    t1 -= &ysquared;
    t1 -= &zsquared;
    t1 *= &zsquared;

    let mut t2 = t0;
    t2 -= &r.x;

    let mut t3 = t2;
    t3.square_in_place();

    let mut t4 = t3;
    t4.double_in_place();
    t4.double_in_place();

    let mut t5 = t4;
    t5 *= &t2;

    let mut t6 = t1;
    t6 -= &r.y;
    t6 -= &r.y;

    let mut t9 = t6;
    t9 *= &q.x;

    let mut t7 = t4;
    t7 *= &r.x;

    r.x = t6;
    r.x.square_in_place();
    r.x -= &t5;
    r.x -= &t7;
    r.x -= &t7;

    r.z += &t2;
    r.z.square_in_place();
    r.z -= &zsquared;
    r.z -= &t3;

    let mut t10 = q.y;
    t10 += &r.z;

    let mut t8 = t7;
    t8 -= &r.x;
    t8 *= &t6;

    t0 = r.y;
    t0 *= &t5;
    t0.double_in_place();

    r.y = t8;
    r.y -= &t0;

    t10.square_in_place();
    t10 -= &ysquared;

    let ztsquared = r.z.square();
    t10 -= &ztsquared;

    t9.double_in_place();
    t9 -= &t10;

    t10 = r.z;
    t10.double_in_place();

    t6 = -t6;

    t1 = t6;
    t1.double_in_place();

    (t10, t1, t9)
}
