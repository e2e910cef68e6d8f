//! Jacobian-coordinate short Weierstrass group law (SPEC_FULL.md §4.5).
//!
//! Structured after `algebra-core/src/curves/models/short_weierstrass_projective.rs` (same
//! `GroupAffine`/`GroupProjective` split, same `Zero`/`Neg`/conversion impls), but every
//! arithmetic formula is the Jacobian one: a point `(X, Y, Z)` represents the affine point
//! `(X/Z^2, Y/Z^3)`, rather than `(X/Z, Y/Z)`. Both curves this crate instantiates
//! (`COEFF_A = 0`) use the `a = 0` specializations of doubling and addition, so `mul_by_a`
//! is not consulted here.

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};
use rand::Rng;

use crate::curves::{AffineCurve, ProjectiveCurve, SWModelParameters as Parameters};
use crate::fields::{BitIterator, Field, FpParameters, PrimeField, SquareRootField, UniformRand};

#[derive(derivative::Derivative)]
#[derivative(
    Copy(bound = "P: Parameters"),
    Clone(bound = "P: Parameters"),
    PartialEq(bound = "P: Parameters"),
    Eq(bound = "P: Parameters"),
    Debug(bound = "P: Parameters"),
    Hash(bound = "P: Parameters")
)]
pub struct GroupAffine<P: Parameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub infinity: bool,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: Parameters> GroupAffine<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, infinity: bool) -> Self {
        Self {
            x,
            y,
            infinity,
            _params: PhantomData,
        }
    }

    /// Multiplies `self` by the scalar represented by `bits`, MSB-first.
    pub(crate) fn mul_bits(&self, bits: impl Iterator<Item = bool>) -> GroupProjective<P> {
        let mut res = GroupProjective::zero();
        for i in bits.skip_while(|b| !b) {
            res.double_in_place();
            if i {
                res.add_assign_mixed(self);
            }
        }
        res
    }

    pub fn scale_by_cofactor(&self) -> GroupProjective<P> {
        self.mul_bits(BitIterator::new(P::COFACTOR))
    }

    /// Attempts to construct an affine point given an x-coordinate. Not guaranteed to lie
    /// in the prime order subgroup.
    pub fn get_point_from_x(x: P::BaseField, greatest: bool) -> Option<Self>
    where
        P::BaseField: SquareRootField,
    {
        let x3b = P::add_b(&((x.square() * &x) + &P::mul_by_a(&x)));
        x3b.sqrt().map(|y| {
            let negy = -y;
            let y = if (y < negy) ^ greatest { y } else { negy };
            Self::new(x, y, false)
        })
    }

    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            true
        } else {
            let y2 = self.y.square();
            let x3b = P::add_b(&((self.x.square() * &self.x) + &P::mul_by_a(&self.x)));
            y2 == x3b
        }
    }
}

impl<P: Parameters> Display for GroupAffine<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.infinity {
            write!(f, "GroupAffine(Infinity)")
        } else {
            write!(f, "GroupAffine(x={}, y={})", self.x, self.y)
        }
    }
}

impl<P: Parameters> Zero for GroupAffine<P> {
    fn zero() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::one(), true)
    }
    fn is_zero(&self) -> bool {
        self.infinity
    }
}

impl<P: Parameters> Add<Self> for GroupAffine<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut copy = self;
        copy += &other;
        copy
    }
}

impl<'a, P: Parameters> AddAssign<&'a Self> for GroupAffine<P> {
    fn add_assign(&mut self, other: &'a Self) {
        let mut s_proj = GroupProjective::from(*self);
        s_proj.add_assign_mixed(other);
        *self = s_proj.into();
    }
}

impl<P: Parameters> Neg for GroupAffine<P> {
    type Output = Self;
    fn neg(self) -> Self {
        if !self.infinity {
            Self::new(self.x, -self.y, false)
        } else {
            self
        }
    }
}

impl<P: Parameters> Default for GroupAffine<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: Parameters> AffineCurve for GroupAffine<P> {
    type BaseField = P::BaseField;
    type ScalarField = P::ScalarField;
    type Projective = GroupProjective<P>;

    fn prime_subgroup_generator() -> Self {
        Self::new(
            P::AFFINE_GENERATOR_COEFFS.0,
            P::AFFINE_GENERATOR_COEFFS.1,
            false,
        )
    }

    fn is_on_curve(&self) -> bool {
        GroupAffine::is_on_curve(self)
    }

    /// Multiplying by the scalar field's prime order `r` lands at infinity iff the point
    /// lies in the order-`r` subgroup — correct (if not the fastest possible check) for
    /// both G1 (cofactor 1, always true) and G2 (SPEC_FULL.md §4.6, resolved Open
    /// Question 2: a generic order check in place of the GLV-endomorphism-based fast path).
    fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool {
        self.mul_bits(BitIterator::new(&<P::ScalarField as PrimeField>::Params::MODULUS.0))
            .is_zero()
    }

    fn mul<S: AsRef<[u64]>>(&self, other: S) -> GroupProjective<P> {
        self.mul_bits(BitIterator::new(other.as_ref()))
    }

    fn mul_by_cofactor_to_projective(&self) -> Self::Projective {
        self.scale_by_cofactor()
    }

    fn mul_by_cofactor_inv(&self) -> Self {
        self.mul(P::COFACTOR_INV.into_repr().0).into()
    }
}

#[derive(derivative::Derivative)]
#[derivative(
    Copy(bound = "P: Parameters"),
    Clone(bound = "P: Parameters"),
    Eq(bound = "P: Parameters"),
    Debug(bound = "P: Parameters"),
    Hash(bound = "P: Parameters")
)]
pub struct GroupProjective<P: Parameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    _params: PhantomData<P>,
}

impl<P: Parameters> GroupProjective<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self {
            x,
            y,
            z,
            _params: PhantomData,
        }
    }
}

impl<P: Parameters> Display for GroupProjective<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", GroupAffine::from(*self))
    }
}

impl<P: Parameters> PartialEq for GroupProjective<P> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        if other.is_zero() {
            return false;
        }
        // (X1/Z1^2, Y1/Z1^3) == (X2/Z2^2, Y2/Z2^3)
        //   <=> X1*Z2^2 == X2*Z1^2 and Y1*Z2^3 == Y2*Z1^3
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if self.x * &z2z2 != other.x * &z1z1 {
            return false;
        }
        (self.y * &z2z2 * &other.z) == (other.y * &z1z1 * &self.z)
    }
}

impl<P: Parameters> Default for GroupProjective<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: Parameters> Zero for GroupProjective<P> {
    // The point at infinity is always represented by Z = 0.
    fn zero() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::one(), P::BaseField::zero())
    }
    fn is_zero(&self) -> bool {
        self.z.is_zero()
    }
}

impl<P: Parameters> UniformRand for GroupProjective<P> {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut res = Self::prime_subgroup_generator();
        res.mul_assign(P::ScalarField::rand(rng));
        res
    }
}

impl<P: Parameters> ProjectiveCurve for GroupProjective<P> {
    type BaseField = P::BaseField;
    type ScalarField = P::ScalarField;
    type Affine = GroupAffine<P>;

    fn prime_subgroup_generator() -> Self {
        GroupAffine::prime_subgroup_generator().into()
    }

    fn is_normalized(&self) -> bool {
        self.is_zero() || self.z.is_one()
    }

    /// Montgomery's batch-inversion trick (Genelle, Prouff, Quisquater, Section 3.2) — only
    /// one field inversion for the whole slice instead of one per element.
    fn batch_normalization(v: &mut [Self]) {
        let mut prod = std::vec::Vec::with_capacity(v.len());
        let mut tmp = P::BaseField::one();
        for g in v.iter_mut().filter(|g| !g.is_normalized()) {
            tmp *= &g.z;
            prod.push(tmp);
        }

        tmp = tmp.inverse().unwrap();

        for (g, s) in v
            .iter_mut()
            .rev()
            .filter(|g| !g.is_normalized())
            .zip(prod.into_iter().rev().skip(1).chain(Some(P::BaseField::one())))
        {
            let newtmp = tmp * &g.z;
            g.z = tmp * &s;
            tmp = newtmp;
        }

        for g in v.iter_mut().filter(|g| !g.is_normalized()) {
            let z_inv = g.z;
            let z_inv2 = z_inv.square();
            let z_inv3 = z_inv2 * &z_inv;
            g.x *= &z_inv2;
            g.y *= &z_inv3;
            g.z = P::BaseField::one();
        }
    }

    /// `dbl-2009-l`, specialized to `a = 0` (both BN254 G1 and its G2 twist satisfy this).
    fn double_in_place(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + &b).square() - &a - &c).double();
        let e = a.double() + &a;
        let f = e.square();
        let x3 = f - &d.double();
        let y3 = e * &(d - &x3) - &c.double().double().double();
        let z3 = (self.y * &self.z).double();

        self.x = x3;
        self.y = y3;
        self.z = z3;
        self
    }

    /// `madd-2007-bl`: mixed addition of a Jacobian point with an affine one (`Z2 = 1`).
    fn add_assign_mixed(&mut self, other: &GroupAffine<P>) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            self.x = other.x;
            self.y = other.y;
            self.z = P::BaseField::one();
            return;
        }

        let z1z1 = self.z.square();
        let u2 = other.x * &z1z1;
        let s2 = other.y * &self.z * &z1z1;

        if self.x == u2 && self.y == s2 {
            self.double_in_place();
            return;
        }

        let h = u2 - &self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * &i;
        let r = (s2 - &self.y).double();
        let v = self.x * &i;

        let x3 = r.square() - &j - &v.double();
        let y3 = r * &(v - &x3) - &(self.y * &j).double();
        let z3 = (self.z + &h).square() - &z1z1 - &hh;

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }
}

impl<P: Parameters> Neg for GroupProjective<P> {
    type Output = Self;
    fn neg(self) -> Self {
        if !self.is_zero() {
            Self::new(self.x, -self.y, self.z)
        } else {
            self
        }
    }
}

impl<'a, P: Parameters> Add<&'a Self> for GroupProjective<P> {
    type Output = Self;
    fn add(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy += other;
        copy
    }
}

impl<P: Parameters> Add<Self> for GroupProjective<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self + &other
    }
}

impl<'a, P: Parameters> AddAssign<&'a Self> for GroupProjective<P> {
    /// `add-2007-bl`, the general (non-mixed) Jacobian addition.
    fn add_assign(&mut self, other: &'a Self) {
        if self.is_zero() {
            *self = *other;
            return;
        }
        if other.is_zero() {
            return;
        }
        if self == other {
            self.double_in_place();
            return;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * &z2z2;
        let u2 = other.x * &z1z1;
        let s1 = self.y * &other.z * &z2z2;
        let s2 = other.y * &self.z * &z1z1;

        let h = u2 - &u1;
        let i = h.double().square();
        let j = h * &i;
        let r = (s2 - &s1).double();
        let v = u1 * &i;

        let x3 = r.square() - &j - &v.double();
        let y3 = r * &(v - &x3) - &(s1 * &j).double();
        let z3 = ((self.z + &other.z).square() - &z1z1 - &z2z2) * &h;

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }
}

impl<P: Parameters> AddAssign<Self> for GroupProjective<P> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<'a, P: Parameters> Sub<&'a Self> for GroupProjective<P> {
    type Output = Self;
    fn sub(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy -= other;
        copy
    }
}

impl<P: Parameters> Sub<Self> for GroupProjective<P> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self - &other
    }
}

impl<'a, P: Parameters> SubAssign<&'a Self> for GroupProjective<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        *self += &(-(*other));
    }
}

impl<P: Parameters> SubAssign<Self> for GroupProjective<P> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<P: Parameters> MulAssign<P::ScalarField> for GroupProjective<P> {
    fn mul_assign(&mut self, other: P::ScalarField) {
        *self = self.mul(other.into_repr().0);
    }
}

impl<P: Parameters> From<GroupAffine<P>> for GroupProjective<P> {
    fn from(p: GroupAffine<P>) -> GroupProjective<P> {
        if p.is_zero() {
            Self::zero()
        } else {
            Self::new(p.x, p.y, P::BaseField::one())
        }
    }
}

impl<P: Parameters> From<GroupProjective<P>> for GroupAffine<P> {
    fn from(p: GroupProjective<P>) -> GroupAffine<P> {
        if p.is_zero() {
            GroupAffine::zero()
        } else if p.z.is_one() {
            GroupAffine::new(p.x, p.y, false)
        } else {
            let z_inv = p.z.inverse().unwrap();
            let z_inv2 = z_inv.square();
            let z_inv3 = z_inv2 * &z_inv;
            let x = p.x * &z_inv2;
            let y = p.y * &z_inv3;
            GroupAffine::new(x, y, false)
        }
    }
}
