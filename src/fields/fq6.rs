//! The sextic extension Fq6 = Fq2\[v\]/(v^3 - NONRESIDUE), SPEC_FULL.md §4.3.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};
use rand::Rng;

use crate::fields::{Field, UniformRand};

/// The constant table a `CubicExtField` needs.
pub trait CubicExtParameters: 'static + Send + Sync + Sized {
    type BaseField: Field;
    type FrobCoeff: Field;

    const NONRESIDUE: Self::BaseField;
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];
    const FROBENIUS_COEFF_C2: &'static [Self::FrobCoeff];

    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField;

    /// `c1 *= FROBENIUS_COEFF_C1[power]`, `c2 *= FROBENIUS_COEFF_C2[power]` — implemented
    /// per-instantiation because the coefficient type (`FrobCoeff`) need not equal
    /// `BaseField` (for Fq6, both happen to be Fq2, so this is a direct multiply).
    fn mul_base_field_by_frob_coeff(c1: &mut Self::BaseField, c2: &mut Self::BaseField, power: usize);
}

#[derive(derivative::Derivative)]
#[derivative(
    Copy(bound = "P: CubicExtParameters"),
    Clone(bound = "P: CubicExtParameters"),
    Default(bound = "P: CubicExtParameters"),
    Eq(bound = "P: CubicExtParameters"),
    PartialEq(bound = "P: CubicExtParameters"),
    Hash(bound = "P: CubicExtParameters")
)]
pub struct CubicExtField<P: CubicExtParameters> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
    pub c2: P::BaseField,
}

impl<P: CubicExtParameters> CubicExtField<P> {
    pub const fn new(c0: P::BaseField, c1: P::BaseField, c2: P::BaseField) -> Self {
        CubicExtField { c0, c1, c2 }
    }

    pub fn mul_assign_by_base_field(&mut self, elem: &P::BaseField) {
        self.c0 *= elem;
        self.c1 *= elem;
        self.c2 *= elem;
    }

    /// Multiplies `self` by the sparse element `(c0, c1, 0)`, i.e. one Karatsuba-style
    /// product cheaper than a general `CubicExtField` multiply. Used by Fq12's
    /// `mul_by_034` to multiply its two Fq6 halves by the line function's `(c0,c1)` and
    /// `(c3,c4)` pairs.
    pub fn mul_by_01(&mut self, c0: &P::BaseField, c1: &P::BaseField) {
        let a_a = self.c0 * c0;
        let b_b = self.c1 * c1;

        let tmp = *c1 * &(self.c1 + &self.c2) - &b_b;
        let t1 = P::mul_base_field_by_nonresidue(&tmp) + &a_a;

        let t2 = (*c0 + c1) * &(self.c0 + &self.c1) - &a_a - &b_b;

        let t3 = *c0 * &(self.c0 + &self.c2) - &a_a + &b_b;

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }
}

impl<P: CubicExtParameters> Field for CubicExtField<P> {
    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self.c2.double_in_place();
        self
    }

    /// Chung-Hasan SQR2: `s0=c0^2, ab=c0*c1, s1=2ab, s2=(c0-c1+c2)^2, bc=c1*c2, s3=2bc,
    /// s4=c2^2`; `r0 = s0 + NONRESIDUE*s3`, `r1 = s1 + NONRESIDUE*s4`,
    /// `r2 = s1 + s2 + s3 - s0 - s4`.
    fn square_in_place(&mut self) -> &mut Self {
        let s0 = self.c0.square();
        let ab = self.c0 * &self.c1;
        let s1 = ab.double();
        let s2 = (self.c0 - &self.c1 + &self.c2).square();
        let bc = self.c1 * &self.c2;
        let s3 = bc.double();
        let s4 = self.c2.square();

        self.c0 = s0 + &P::mul_base_field_by_nonresidue(&s3);
        self.c1 = s1 + &P::mul_base_field_by_nonresidue(&s4);
        self.c2 = s1 + &s2 + &s3 - &s0 - &s4;
        self
    }

    /// Devegili-Scott-Dahab inversion (SPEC_FULL.md §4.3).
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = self.c2.square();
        let t3 = self.c0 * &self.c1;
        let t4 = self.c0 * &self.c2;
        let t5 = self.c1 * &self.c2;

        let n5 = P::mul_base_field_by_nonresidue(&t5);

        let s0 = t0 - &n5;
        let s1 = P::mul_base_field_by_nonresidue(&t2) - &t3;
        let s2 = t1 - &t4; // Devegili-Scott-Dahab Algorithm 17, as implemented (not t4-t1)

        let a1 = self.c2 * &s1;
        let a2 = self.c1 * &s2;
        let mut a3 = a1 + &a2;
        a3 = P::mul_base_field_by_nonresidue(&a3);
        let t6 = (self.c0 * &s0 + &a3).inverse()?;

        let c0 = t6 * &s0;
        let c1 = t6 * &s1;
        let c2 = t6 * &s2;
        Some(CubicExtField::new(c0, c1, c2))
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
        self.c2.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut self.c1, &mut self.c2, power);
    }
}

impl<P: CubicExtParameters> Zero for CubicExtField<P> {
    fn zero() -> Self {
        CubicExtField::new(P::BaseField::zero(), P::BaseField::zero(), P::BaseField::zero())
    }
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl<P: CubicExtParameters> One for CubicExtField<P> {
    fn one() -> Self {
        CubicExtField::new(P::BaseField::one(), P::BaseField::zero(), P::BaseField::zero())
    }
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl<P: CubicExtParameters> UniformRand for CubicExtField<P> {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        CubicExtField::new(P::BaseField::rand(rng), P::BaseField::rand(rng), P::BaseField::rand(rng))
    }
}

impl<P: CubicExtParameters> fmt::Debug for CubicExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} + {:?} * v + {:?} * v^2)", self.c0, self.c1, self.c2)
    }
}
impl<P: CubicExtParameters> fmt::Display for CubicExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<P: CubicExtParameters> Neg for CubicExtField<P> {
    type Output = Self;
    fn neg(self) -> Self {
        CubicExtField::new(-self.c0, -self.c1, -self.c2)
    }
}

impl<'a, P: CubicExtParameters> Add<&'a Self> for CubicExtField<P> {
    type Output = Self;
    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}
impl<P: CubicExtParameters> Add<Self> for CubicExtField<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self + &other
    }
}
impl<'a, P: CubicExtParameters> AddAssign<&'a Self> for CubicExtField<P> {
    fn add_assign(&mut self, other: &'a Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
        self.c2 += &other.c2;
    }
}
impl<P: CubicExtParameters> AddAssign<Self> for CubicExtField<P> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<'a, P: CubicExtParameters> Sub<&'a Self> for CubicExtField<P> {
    type Output = Self;
    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}
impl<P: CubicExtParameters> Sub<Self> for CubicExtField<P> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self - &other
    }
}
impl<'a, P: CubicExtParameters> SubAssign<&'a Self> for CubicExtField<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
        self.c2 -= &other.c2;
    }
}
impl<P: CubicExtParameters> SubAssign<Self> for CubicExtField<P> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<'a, P: CubicExtParameters> Mul<&'a Self> for CubicExtField<P> {
    type Output = Self;
    fn mul(mut self, other: &'a Self) -> Self {
        self *= other;
        self
    }
}
impl<P: CubicExtParameters> Mul<Self> for CubicExtField<P> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        self * &other
    }
}
impl<'a, P: CubicExtParameters> MulAssign<&'a Self> for CubicExtField<P> {
    /// Three-term Karatsuba (SPEC_FULL.md §4.3 "use three-term Karatsuba for mul").
    fn mul_assign(&mut self, other: &'a Self) {
        let ad = self.c0 * &other.c0;
        let be = self.c1 * &other.c1;
        let cf = self.c2 * &other.c2;

        let x = (self.c1 + &self.c2) * &(other.c1 + &other.c2) - &be - &cf;
        let y = (self.c0 + &self.c1) * &(other.c0 + &other.c1) - &ad - &be;
        let z = (self.c0 + &self.c2) * &(other.c0 + &other.c2) - &ad + &be - &cf;

        self.c0 = ad + &P::mul_base_field_by_nonresidue(&x);
        self.c1 = y + &P::mul_base_field_by_nonresidue(&cf);
        self.c2 = z;
    }
}
impl<P: CubicExtParameters> MulAssign<Self> for CubicExtField<P> {
    fn mul_assign(&mut self, other: Self) {
        *self *= &other;
    }
}

impl<'a, P: CubicExtParameters> Div<&'a Self> for CubicExtField<P> {
    type Output = Self;
    fn div(mut self, other: &'a Self) -> Self {
        self *= &other.inverse().expect("division by zero");
        self
    }
}
impl<P: CubicExtParameters> Div<Self> for CubicExtField<P> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        self / &other
    }
}
impl<'a, P: CubicExtParameters> DivAssign<&'a Self> for CubicExtField<P> {
    fn div_assign(&mut self, other: &'a Self) {
        *self *= &other.inverse().expect("division by zero");
    }
}
impl<P: CubicExtParameters> DivAssign<Self> for CubicExtField<P> {
    fn div_assign(&mut self, other: Self) {
        *self /= &other;
    }
}
