//! `Fp256<P>`: a prime field stored internally in Montgomery form, generic over its
//! modulus/constant table `P: FpParameters`. Concrete instantiations are `Fq` (the base
//! field) and `Fr` (the scalar field), both defined in `crate::bn254`.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};
use rand::Rng;

use crate::biginteger::{mac_with_carry, BigInteger256};
use crate::fields::{Field, FpParameters, LegendreSymbol, PrimeField, SquareRootField, UniformRand};

#[inline(always)]
fn mac_discard(a: u64, b: u64, c: u64, carry: &mut u64) {
    let tmp = a as u128 + (b as u128 * c as u128) + *carry as u128;
    *carry = (tmp >> 64) as u64;
}

pub struct Fp256<P: FpParameters>(pub BigInteger256, PhantomData<P>);

impl<P: FpParameters> Fp256<P> {
    /// Builds a field element directly from a raw Montgomery representative, i.e. the
    /// caller already supplies `x * R mod p`. This is how every literal constant in
    /// `crate::bn254` is constructed.
    pub const fn new(repr: BigInteger256) -> Self {
        Fp256(repr, PhantomData)
    }

    fn reduce(&mut self) {
        if self.0 >= P::MODULUS {
            self.0.sub_noborrow(&P::MODULUS);
        }
    }

    /// Montgomery reduction (REDC) of `self.0` treated as `T`: CIOS, interleaving the
    /// widening multiply-by-`other` and the reduction pass in a single loop over `other`'s
    /// limbs. See SPEC_FULL.md §4.1.
    fn mont_mul(&mut self, other: &Self) {
        let mut r = [0u64; 4];
        for i in 0..4 {
            let mut carry1 = 0u64;
            r[0] = mac_with_carry(r[0], (self.0).0[0], (other.0).0[i], &mut carry1);
            let k = r[0].wrapping_mul(P::INV);
            let mut carry2 = 0u64;
            mac_discard(r[0], k, P::MODULUS.0[0], &mut carry2);
            for j in 1..4 {
                r[j] = mac_with_carry(r[j], (self.0).0[j], (other.0).0[i], &mut carry1);
                r[j - 1] = mac_with_carry(r[j], k, P::MODULUS.0[j], &mut carry2);
            }
            r[3] = carry1 + carry2;
        }
        (self.0).0 = r;
        self.reduce();
    }
}

impl<P: FpParameters> PrimeField for Fp256<P> {
    type Params = P;

    fn from_repr(repr: BigInteger256) -> Option<Self> {
        if repr >= P::MODULUS {
            None
        } else {
            let mut r = Fp256::new(repr);
            r.mont_mul(&Fp256::new(P::R2));
            Some(r)
        }
    }

    fn into_repr(&self) -> BigInteger256 {
        let mut r = *self;
        r.mont_mul(&Fp256::new(BigInteger256::new([1, 0, 0, 0])));
        r.0
    }
}

impl<P: FpParameters> From<BigInteger256> for Fp256<P> {
    fn from(repr: BigInteger256) -> Self {
        Self::from_repr(repr).expect("value must be less than the field modulus")
    }
}

impl<P: FpParameters> From<Fp256<P>> for BigInteger256 {
    fn from(f: Fp256<P>) -> Self {
        f.into_repr()
    }
}

impl<P: FpParameters> Field for Fp256<P> {
    fn double_in_place(&mut self) -> &mut Self {
        self.0.mul2();
        self.reduce();
        self
    }

    fn square_in_place(&mut self) -> &mut Self {
        let other = *self;
        self.mont_mul(&other);
        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // Extended binary GCD (GKPP) on the raw Montgomery representative `xR`, per
        // SPEC_FULL.md §4.1: `inv(x) = invmod(xR) * R^2`, which works out to `x^-1 * R`,
        // the correct Montgomery form of `x^-1`.
        let one = BigInteger256::new([1, 0, 0, 0]);
        let mut u = self.0;
        let mut v = P::MODULUS;
        let mut b = Fp256::new(P::R2); // Montgomery form of 1 scaled by R, acts as running numerator
        let mut c = Fp256::new(BigInteger256::new([0, 0, 0, 0]));

        while u != one && v != one {
            while u.is_even() {
                u.div2();
                if b.0.is_even() {
                    b.0.div2();
                } else {
                    b.0.add_nocarry(&P::MODULUS);
                    b.0.div2();
                }
            }
            while v.is_even() {
                v.div2();
                if c.0.is_even() {
                    c.0.div2();
                } else {
                    c.0.add_nocarry(&P::MODULUS);
                    c.0.div2();
                }
            }
            if u >= v {
                u.sub_noborrow(&v);
                b -= &c;
            } else {
                v.sub_noborrow(&u);
                c -= &b;
            }
        }
        if u == one {
            Some(b)
        } else {
            Some(c)
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

    fn frobenius_map(&mut self, _power: usize) {
        // The prime field is fixed by every power of Frobenius.
    }
}

impl<P: FpParameters> SquareRootField for Fp256<P> {
    fn legendre(&self) -> LegendreSymbol {
        if self.is_zero() {
            return LegendreSymbol::Zero;
        }
        let s = self.pow(P::MODULUS_MINUS_ONE_DIV_TWO.0);
        if s.is_one() {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        }
    }

    /// Tonelli-Shanks. BN254's Fq has two-adicity 1, so this degenerates to the classic
    /// `p ≡ 3 (mod 4)` shortcut after one loop iteration, but the general algorithm is
    /// implemented so it also serves Fr (two-adicity 28).
    fn sqrt(&self) -> Option<Self> {
        match self.legendre() {
            LegendreSymbol::Zero => Some(*self),
            LegendreSymbol::QuadraticNonResidue => None,
            LegendreSymbol::QuadraticResidue => {
                let mut z = Fp256::new(P::ROOT_OF_UNITY);
                let mut w = self.pow(P::T_MINUS_ONE_DIV_TWO.0);
                let mut x = w * self;
                let mut b = x * w;

                let mut v = P::TWO_ADICITY as usize;

                while !b.is_one() {
                    let mut k = 0usize;
                    let mut b2k = b;
                    while !b2k.is_one() {
                        b2k.square_in_place();
                        k += 1;
                    }
                    let j = v - k - 1;
                    w = z;
                    for _ in 0..j {
                        w.square_in_place();
                    }

                    z = w.square();
                    b *= &z;
                    x *= &w;
                    v = k;
                }
                Some(x)
            },
        }
    }

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        if let Some(sqrt) = self.sqrt() {
            *self = sqrt;
            Some(self)
        } else {
            None
        }
    }
}

impl<P: FpParameters> Zero for Fp256<P> {
    fn zero() -> Self {
        Fp256::new(BigInteger256::new([0, 0, 0, 0]))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<P: FpParameters> One for Fp256<P> {
    fn one() -> Self {
        Fp256::new(P::R)
    }

    fn is_one(&self) -> bool {
        self.0 == P::R
    }
}

impl<P: FpParameters> UniformRand for Fp256<P> {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut limbs = [0u64; 4];
            for limb in limbs.iter_mut() {
                *limb = rng.gen();
            }
            // Shave the bits above the modulus so the rejection rate stays low.
            limbs[3] &= core::u64::MAX >> P::REPR_SHAVE_BITS;
            let repr = BigInteger256::new(limbs);
            if let Some(f) = Fp256::from_repr(repr) {
                return f;
            }
        }
    }
}

impl<P: FpParameters> Copy for Fp256<P> {}
impl<P: FpParameters> Clone for Fp256<P> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P: FpParameters> PartialEq for Fp256<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<P: FpParameters> Eq for Fp256<P> {}
impl<P: FpParameters> core::hash::Hash for Fp256<P> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<P: FpParameters> Ord for Fp256<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_repr().cmp(&other.into_repr())
    }
}
impl<P: FpParameters> PartialOrd for Fp256<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FpParameters> Default for Fp256<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FpParameters> fmt::Debug for Fp256<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.into_repr())
    }
}

impl<P: FpParameters> fmt::Display for Fp256<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.into_repr())
    }
}

impl<P: FpParameters> Neg for Fp256<P> {
    type Output = Self;
    fn neg(self) -> Self {
        if self.is_zero() {
            self
        } else {
            let mut tmp = P::MODULUS;
            tmp.sub_noborrow(&self.0);
            Fp256::new(tmp)
        }
    }
}

impl<'a, P: FpParameters> Add<&'a Fp256<P>> for Fp256<P> {
    type Output = Self;
    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}
impl<P: FpParameters> Add<Self> for Fp256<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self + &other
    }
}
impl<'a, P: FpParameters> AddAssign<&'a Fp256<P>> for Fp256<P> {
    fn add_assign(&mut self, other: &'a Self) {
        self.0.add_nocarry(&other.0);
        self.reduce();
    }
}
impl<P: FpParameters> AddAssign<Self> for Fp256<P> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<'a, P: FpParameters> Sub<&'a Fp256<P>> for Fp256<P> {
    type Output = Self;
    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}
impl<P: FpParameters> Sub<Self> for Fp256<P> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self - &other
    }
}
impl<'a, P: FpParameters> SubAssign<&'a Fp256<P>> for Fp256<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        if other.0 > self.0 {
            self.0.add_nocarry(&P::MODULUS);
        }
        self.0.sub_noborrow(&other.0);
    }
}
impl<P: FpParameters> SubAssign<Self> for Fp256<P> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<'a, P: FpParameters> Mul<&'a Fp256<P>> for Fp256<P> {
    type Output = Self;
    fn mul(mut self, other: &'a Self) -> Self {
        self *= other;
        self
    }
}
impl<P: FpParameters> Mul<Self> for Fp256<P> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        self * &other
    }
}
impl<'a, P: FpParameters> MulAssign<&'a Fp256<P>> for Fp256<P> {
    fn mul_assign(&mut self, other: &'a Self) {
        self.mont_mul(other);
    }
}
impl<P: FpParameters> MulAssign<Self> for Fp256<P> {
    fn mul_assign(&mut self, other: Self) {
        self.mont_mul(&other);
    }
}

impl<'a, P: FpParameters> Div<&'a Fp256<P>> for Fp256<P> {
    type Output = Self;
    fn div(mut self, other: &'a Self) -> Self {
        self *= &other.inverse().expect("division by zero");
        self
    }
}
impl<P: FpParameters> Div<Self> for Fp256<P> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        self / &other
    }
}
impl<'a, P: FpParameters> DivAssign<&'a Fp256<P>> for Fp256<P> {
    fn div_assign(&mut self, other: &'a Self) {
        *self *= &other.inverse().expect("division by zero");
    }
}
impl<P: FpParameters> DivAssign<Self> for Fp256<P> {
    fn div_assign(&mut self, other: Self) {
        *self /= &other;
    }
}
