//! Generic quadratic extension `BaseField[x]/(x^2 - NONRESIDUE)`.
//!
//! Instantiated with `BaseField = Fq` to get Fq2 (SPEC_FULL.md §4.2), and again with
//! `BaseField = Fq6` to get Fq12 (§4.4) — the same closed-form Karatsuba multiply, squaring,
//! and norm-based inversion formulas serve both tower levels, one generic struct reused for
//! every quadratic level of the tower instead of a bespoke type per level.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};
use rand::Rng;

use crate::fields::{Field, LegendreSymbol, SquareRootField, UniformRand};

/// The constant table a `QuadExtField` needs: the quadratic non-residue defining the
/// extension, and the Frobenius coefficients used to twist `c1` under `x -> x^(p^power)`.
pub trait QuadExtParameters: 'static + Send + Sync + Sized {
    type BaseField: Field;
    type FrobCoeff: Field;

    const NONRESIDUE: Self::BaseField;
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];

    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField;

    fn mul_base_field_by_frob_coeff(c1: &mut Self::BaseField, power: usize);
}

#[derive(derivative::Derivative)]
#[derivative(
    Copy(bound = "P: QuadExtParameters"),
    Clone(bound = "P: QuadExtParameters"),
    Default(bound = "P: QuadExtParameters"),
    Eq(bound = "P: QuadExtParameters"),
    PartialEq(bound = "P: QuadExtParameters"),
    Hash(bound = "P: QuadExtParameters")
)]
pub struct QuadExtField<P: QuadExtParameters> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
}

impl<P: QuadExtParameters> QuadExtField<P> {
    pub const fn new(c0: P::BaseField, c1: P::BaseField) -> Self {
        QuadExtField { c0, c1 }
    }

    /// The norm `c0^2 - NONRESIDUE * c1^2`, landing in the base field. Used by inversion.
    pub fn norm(&self) -> P::BaseField {
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        t0 - P::mul_base_field_by_nonresidue(&t1)
    }

    /// Multiplies `self` by an element of the base field, componentwise. Used by Fq12's
    /// Frobenius coefficient application (its `c1: Fq6` is scaled by an Fq2 in
    /// `mul_base_field_by_frob_coeff`, which in turn calls into Fq6's own scalar multiply)
    /// and, for Fq2 itself, by the Miller-loop line-function construction.
    pub fn mul_assign_by_base_field(&mut self, elem: &P::BaseField) {
        self.c0 *= elem;
        self.c1 *= elem;
    }
}

impl<P: QuadExtParameters> Field for QuadExtField<P> {
    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    /// Complex squaring (SPEC_FULL.md §4.2): `a = c0*c1`; `b = (c1*NONRESIDUE + c0)(c0+c1)`;
    /// `r0 = b - a - NONRESIDUE*a`; `r1 = 2a`.
    fn square_in_place(&mut self) -> &mut Self {
        let a = self.c0 * &self.c1;
        let b = (P::mul_base_field_by_nonresidue(&self.c1) + &self.c0) * &(self.c0 + &self.c1);
        self.c0 = b - &a - &P::mul_base_field_by_nonresidue(&a);
        self.c1 = a.double();
        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            let norm = self.norm();
            norm.inverse().map(|t| QuadExtField {
                c0: self.c0 * &t,
                c1: -(self.c1 * &t),
            })
        }
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inv) = self.inverse() {
            *self = inv;
            Some(self)
        } else {
            None
        }
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut self.c1, power);
    }
}

impl<P: QuadExtParameters> Zero for QuadExtField<P> {
    fn zero() -> Self {
        QuadExtField::new(P::BaseField::zero(), P::BaseField::zero())
    }
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

impl<P: QuadExtParameters> One for QuadExtField<P> {
    fn one() -> Self {
        QuadExtField::new(P::BaseField::one(), P::BaseField::zero())
    }
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }
}

impl<P: QuadExtParameters> UniformRand for QuadExtField<P> {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        QuadExtField::new(P::BaseField::rand(rng), P::BaseField::rand(rng))
    }
}

impl<P: QuadExtParameters> fmt::Debug for QuadExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} + {:?} * u)", self.c0, self.c1)
    }
}
impl<P: QuadExtParameters> fmt::Display for QuadExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<P: QuadExtParameters> Neg for QuadExtField<P> {
    type Output = Self;
    fn neg(self) -> Self {
        QuadExtField::new(-self.c0, -self.c1)
    }
}

impl<'a, P: QuadExtParameters> Add<&'a Self> for QuadExtField<P> {
    type Output = Self;
    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}
impl<P: QuadExtParameters> Add<Self> for QuadExtField<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self + &other
    }
}
impl<'a, P: QuadExtParameters> AddAssign<&'a Self> for QuadExtField<P> {
    fn add_assign(&mut self, other: &'a Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
    }
}
impl<P: QuadExtParameters> AddAssign<Self> for QuadExtField<P> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<'a, P: QuadExtParameters> Sub<&'a Self> for QuadExtField<P> {
    type Output = Self;
    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}
impl<P: QuadExtParameters> Sub<Self> for QuadExtField<P> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self - &other
    }
}
impl<'a, P: QuadExtParameters> SubAssign<&'a Self> for QuadExtField<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
    }
}
impl<P: QuadExtParameters> SubAssign<Self> for QuadExtField<P> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<'a, P: QuadExtParameters> Mul<&'a Self> for QuadExtField<P> {
    type Output = Self;
    fn mul(mut self, other: &'a Self) -> Self {
        self *= other;
        self
    }
}
impl<P: QuadExtParameters> Mul<Self> for QuadExtField<P> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        self * &other
    }
}
impl<'a, P: QuadExtParameters> MulAssign<&'a Self> for QuadExtField<P> {
    /// Karatsuba: `aa = c0*d0`, `bb = c1*d1`; `r0 = aa + NONRESIDUE*bb`,
    /// `r1 = (c0+c1)(d0+d1) - aa - bb`.
    fn mul_assign(&mut self, other: &'a Self) {
        let aa = self.c0 * &other.c0;
        let bb = self.c1 * &other.c1;
        let o = other.c0 + &other.c1;
        let c1 = (self.c0 + &self.c1) * &o - &aa - &bb;
        let c0 = aa + &P::mul_base_field_by_nonresidue(&bb);
        self.c0 = c0;
        self.c1 = c1;
    }
}
impl<P: QuadExtParameters> MulAssign<Self> for QuadExtField<P> {
    fn mul_assign(&mut self, other: Self) {
        *self *= &other;
    }
}

impl<'a, P: QuadExtParameters> Div<&'a Self> for QuadExtField<P> {
    type Output = Self;
    fn div(mut self, other: &'a Self) -> Self {
        self *= &other.inverse().expect("division by zero");
        self
    }
}
impl<P: QuadExtParameters> Div<Self> for QuadExtField<P> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        self / &other
    }
}
impl<'a, P: QuadExtParameters> DivAssign<&'a Self> for QuadExtField<P> {
    fn div_assign(&mut self, other: &'a Self) {
        *self *= &other.inverse().expect("division by zero");
    }
}
impl<P: QuadExtParameters> DivAssign<Self> for QuadExtField<P> {
    fn div_assign(&mut self, other: Self) {
        *self /= &other;
    }
}

/// Square-root support for `Fq2` via the complex method (Scott, "Computing square roots
/// in Fp2..."), needed only when the base field is itself square-rootable — i.e. for Fq2,
/// never invoked for Fq12.
impl<P: QuadExtParameters> QuadExtField<P>
where
    P::BaseField: SquareRootField,
{
    pub fn complex_sqrt(&self) -> Option<Self> {
        if self.c1.is_zero() {
            return self.c0.sqrt().map(|c0| QuadExtField::new(c0, P::BaseField::zero()));
        }
        let norm = self.norm();
        let alpha = norm.sqrt()?;
        let two = P::BaseField::one().double();
        let mut delta = (alpha + &self.c0) / &two;
        if delta.legendre().is_qnr() {
            delta -= &alpha;
        }
        let c0 = delta.sqrt()?;
        let c0_inv = c0.inverse()?;
        let c1 = self.c1 * &(two.inverse()?) * &c0_inv;
        Some(QuadExtField::new(c0, c1))
    }
}
