//! The field trait vocabulary shared by every level of the tower (Fq, Fr, Fq2, Fq6, Fq12).

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};
use rand::Rng;

use crate::biginteger::BigInteger256;

pub mod fp;
pub mod fq12;
pub mod fq2;
pub mod fq6;

pub use fp::*;

/// Iterates over the bits of a `&[u64]` limb slice from most significant to least
/// significant. Used by `pow`/scalar multiplication loops throughout the tower and the
/// group law.
pub struct BitIterator<'a> {
    limbs: &'a [u64],
    n: usize,
}

impl<'a> BitIterator<'a> {
    pub fn new(limbs: &'a [u64]) -> Self {
        let n = limbs.len() * 64;
        BitIterator { limbs, n }
    }
}

impl<'a> Iterator for BitIterator<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            let part = self.n / 64;
            let bit = self.n - (64 * part);
            Some((self.limbs[part] & (1 << bit)) != 0)
        }
    }
}

/// Sample a uniformly random value of `Self`.
pub trait UniformRand: Sized {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// A value that can draw random samples from an `Fp`'s residue class, used to implement
/// `UniformRand` for every extension built on top of it.
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + Zero
    + One
    + Neg<Output = Self>
    + UniformRand
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
{
    fn double(&self) -> Self {
        let mut t = *self;
        t.double_in_place();
        t
    }

    fn double_in_place(&mut self) -> &mut Self;

    fn square(&self) -> Self {
        let mut t = *self;
        t.square_in_place();
        t
    }

    fn square_in_place(&mut self) -> &mut Self;

    /// Returns `None` if `self` is zero, else `Some(self^-1)`. Never panics: a
    /// precondition violation (§7 of SPEC_FULL.md) surfaces as `None`, not an abort.
    fn inverse(&self) -> Option<Self>;

    fn inverse_in_place(&mut self) -> Option<&mut Self>;

    /// The `k`-th power of the Frobenius automorphism `x -> x^p`, applied in place.
    fn frobenius_map(&mut self, power: usize);

    /// `self^exponent`, MSB-first square-and-multiply (iterative, per SPEC_FULL.md §9's
    /// "Recursion" design note — the source's recursive `pow` is rewritten iteratively).
    fn pow<S: AsRef<[u64]>>(&self, exponent: S) -> Self {
        let mut res = Self::one();
        for i in BitIterator::new(exponent.as_ref()) {
            res.square_in_place();
            if i {
                res *= self;
            }
        }
        res
    }
}

/// Either "this value is a nonzero square", "this value is a nonzero non-square", or
/// "this value is zero" — the result of the Legendre symbol / quadratic residue test.
#[derive(Debug, PartialEq, Eq)]
pub enum LegendreSymbol {
    Zero,
    QuadraticResidue,
    QuadraticNonResidue,
}

impl LegendreSymbol {
    pub fn is_zero(&self) -> bool {
        matches!(self, LegendreSymbol::Zero)
    }

    pub fn is_qr(&self) -> bool {
        matches!(self, LegendreSymbol::QuadraticResidue)
    }

    pub fn is_qnr(&self) -> bool {
        matches!(self, LegendreSymbol::QuadraticNonResidue)
    }
}

/// A field supporting a square-root operation (Tonelli-Shanks or a specialization of it).
pub trait SquareRootField: Field {
    fn legendre(&self) -> LegendreSymbol;

    fn sqrt(&self) -> Option<Self>;

    fn sqrt_in_place(&mut self) -> Option<&mut Self>;
}

/// A field that is itself the "bottom" prime field of the tower (as opposed to an
/// extension built on top of one), with a canonical big-integer representation.
pub trait PrimeField: Field + From<BigInteger256> + Into<BigInteger256> + Ord {
    type Params: FpParameters;

    fn from_repr(repr: BigInteger256) -> Option<Self>;

    fn into_repr(&self) -> BigInteger256;

    fn from_bytes_be(bytes: &[u8; 32]) -> Option<Self> {
        let repr = BigInteger256::from_bytes_be(bytes);
        Self::from_repr(repr)
    }

    fn to_bytes_be(&self) -> [u8; 32] {
        self.into_repr().to_bytes_be()
    }
}

/// The constants that parameterize a Montgomery-form prime field: the modulus, the
/// Montgomery radix and its powers, and the constant used by REDC.
pub trait FpParameters: 'static + Send + Sync + Sized {
    const MODULUS: BigInteger256;
    const MODULUS_BITS: u32;
    const CAPACITY: u32;
    const REPR_SHAVE_BITS: u32;

    /// R = 2^256 mod MODULUS, i.e. the Montgomery encoding of 1.
    const R: BigInteger256;
    /// R^2 mod MODULUS, used to Montgomery-encode a value via one `mul` + REDC.
    const R2: BigInteger256;
    /// -MODULUS^-1 mod 2^64, the single-limb constant used by REDC/CIOS.
    const INV: u64;

    const GENERATOR: BigInteger256;

    const TWO_ADICITY: u32;
    const ROOT_OF_UNITY: BigInteger256;

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256;
    const T: BigInteger256;
    const T_MINUS_ONE_DIV_TWO: BigInteger256;
}
