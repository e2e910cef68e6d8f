//! The full extension field Fq12 = Fq6\[w\]/(w^2 - v), SPEC_FULL.md §4.4 — reuses the
//! generic `QuadExtField` from `fq2.rs` for the top of the tower instead of writing a
//! bespoke degree-12 implementation.

use core::marker::PhantomData;

use crate::fields::fq2::{QuadExtField, QuadExtParameters};
use crate::fields::fq6::{CubicExtField, CubicExtParameters};

/// The constant table needed to build Fq12 on top of a chosen Fq6 instantiation.
pub trait Fq12Parameters: 'static + Send + Sync + Sized {
    type Fp6Params: CubicExtParameters;

    const NONRESIDUE: CubicExtField<Self::Fp6Params>;

    /// Frobenius coefficients for `c1`, indexed by `power % 12`. Same coefficient type as
    /// Fq6's own (`Fq2`), since both towers share the same degree-2 base.
    const FROBENIUS_COEFF_FP12_C1: &'static [<Self::Fp6Params as CubicExtParameters>::FrobCoeff];

    fn mul_fp6_by_nonresidue(
        fe: &CubicExtField<Self::Fp6Params>,
    ) -> CubicExtField<Self::Fp6Params> {
        // Multiplying an Fq6 element by `v` (the image of Fq12's quadratic nonresidue,
        // represented as the Fq6 element `(0, 1, 0)`) cycles the Karatsuba components:
        // `(c0,c1,c2)*v = xi*c2 + c0*v + c1*v^2`.
        CubicExtField::new(
            Self::Fp6Params::mul_base_field_by_nonresidue(&fe.c2),
            fe.c0,
            fe.c1,
        )
    }
}

/// Adapts an `Fq12Parameters` impl into the generic `QuadExtParameters` contract.
pub struct Fq12ParamsWrapper<P: Fq12Parameters>(PhantomData<P>);

impl<P: Fq12Parameters> QuadExtParameters for Fq12ParamsWrapper<P> {
    type BaseField = CubicExtField<P::Fp6Params>;
    type FrobCoeff = <P::Fp6Params as CubicExtParameters>::FrobCoeff;

    const NONRESIDUE: Self::BaseField = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP12_C1;

    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        P::mul_fp6_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(c1: &mut Self::BaseField, power: usize) {
        let coeff = Self::FROBENIUS_COEFF_C1[power % Self::FROBENIUS_COEFF_C1.len()];
        c1.mul_assign_by_base_field(&coeff);
    }
}

pub type Fq12<P> = QuadExtField<Fq12ParamsWrapper<P>>;

impl<P: Fq12Parameters> Fq12<P> {
    /// Negates `c1`, i.e. raises to the `p^6`-th power — the easy part of final
    /// exponentiation uses this in place of a full `inverse()`.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    /// Sparse multiplication by a Miller-loop line-function value of the form
    /// `(c0, 0, 0, c3, c4, 0)` in the `(1, w, w^2, v, vw, vw^2)` basis over Fq2
    /// (SPEC_FULL.md §5.2's line-function evaluation), built out of two `mul_by_01`
    /// Fq6 sparse products rather than the full dense Fq12 x Fq12 product.
    pub fn mul_by_034(
        &mut self,
        c0: &<P::Fp6Params as CubicExtParameters>::BaseField,
        c3: &<P::Fp6Params as CubicExtParameters>::BaseField,
        c4: &<P::Fp6Params as CubicExtParameters>::BaseField,
    ) {
        let mut a = self.c0;
        a.mul_assign_by_base_field(c0);

        let mut b = self.c1;
        b.mul_by_01(c3, c4);

        let o = *c0 + c3;
        let mut e = self.c0 + &self.c1;
        e.mul_by_01(&o, c4);

        self.c1 = e - &a - &b;
        self.c0 = a + &P::mul_fp6_by_nonresidue(&b);
    }
}
