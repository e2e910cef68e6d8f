//! The base prime field Fq (SPEC_FULL.md §3's `p`), Montgomery-encoded. Literal constants
//! are lifted verbatim from `algebra/src/bn254/fields/fq.rs`.

use crate::biginteger::BigInteger256;
use crate::fields::{FpParameters, Fp256};

pub type Fq = Fp256<FqParameters>;

pub struct FqParameters;

impl FpParameters for FqParameters {
    /// MODULUS = 21888242871839275222246405745257275088696311157297823662689037894645226208583
    #[rustfmt::skip]
    const MODULUS: BigInteger256 = BigInteger256::new([
        0x3c208c16d87cfd47,
        0x97816a916871ca8d,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ]);

    const MODULUS_BITS: u32 = 254;
    const CAPACITY: u32 = Self::MODULUS_BITS - 1;
    const REPR_SHAVE_BITS: u32 = 2;

    #[rustfmt::skip]
    const R: BigInteger256 = BigInteger256::new([
        0xd35d438dc58f0d9d,
        0x0a78eb28f5c70b3d,
        0x666ea36f7879462c,
        0x0e0a77c19a07df2f,
    ]);

    #[rustfmt::skip]
    const R2: BigInteger256 = BigInteger256::new([
        0xf32cfc5b538afa89,
        0xb5e71911d44501fb,
        0x47ab1eff0a417ff6,
        0x06d89f71cab8351f,
    ]);

    const INV: u64 = 9786893198990664585u64;

    // GENERATOR = 3
    #[rustfmt::skip]
    const GENERATOR: BigInteger256 = BigInteger256::new([
        0x7a17caa950ad28d7,
        0x1f6ac17ae15521b9,
        0x334bea4e696bd284,
        0x2a1f6744ce179d8e,
    ]);

    const TWO_ADICITY: u32 = 1;

    #[rustfmt::skip]
    const ROOT_OF_UNITY: BigInteger256 = BigInteger256::new([
        0x68c3488912edefaa,
        0x8d087f6872aabf4f,
        0x51e1a24709081231,
        0x2259d6b14729c0fa,
    ]);

    #[rustfmt::skip]
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0x9e10460b6c3e7ea3,
        0xcbc0b548b438e546,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]);

    // T = (MODULUS - 1) / 2^TWO_ADICITY
    #[rustfmt::skip]
    const T: BigInteger256 = BigInteger256::new([
        0x9e10460b6c3e7ea3,
        0xcbc0b548b438e546,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]);

    #[rustfmt::skip]
    const T_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0x4f082305b61f3f51,
        0x65e05aa45a1c72a3,
        0x6e14116da0605617,
        0x0c19139cb84c680a,
    ]);
}

pub const FQ_ZERO: Fq = Fp256::new(BigInteger256::new([0, 0, 0, 0]));
pub const FQ_ONE: Fq = Fp256::new(FqParameters::R);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::fields::{Field, PrimeField, SquareRootField, UniformRand};

    fn test_rng() -> XorShiftRng {
        XorShiftRng::from_seed([
            0x5d, 0xbe, 0x62, 0x59, 0x8d, 0x31, 0x3d, 0x76, 0x32, 0x37, 0xdb, 0x17, 0xe5, 0xbc,
            0x06, 0x54,
        ])
    }

    #[test]
    fn test_field_laws() {
        let mut rng = test_rng();
        for _ in 0..32 {
            let a = Fq::rand(&mut rng);
            let b = Fq::rand(&mut rng);

            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!(a + (-a), Fq::zero());
            if !a.is_zero() {
                assert_eq!(a * a.inverse().unwrap(), Fq::one());
            }

            let mut squared = a;
            squared.square_in_place();
            assert_eq!(squared, a * a);
        }
    }

    #[test]
    fn test_repr_roundtrip() {
        let mut rng = test_rng();
        for _ in 0..32 {
            let a = Fq::rand(&mut rng);
            let repr = a.into_repr();
            assert_eq!(Fq::from_repr(repr), Some(a));
        }
    }

    #[test]
    fn test_sqrt() {
        let mut rng = test_rng();
        for _ in 0..32 {
            let a = Fq::rand(&mut rng);
            let squared = a * a;
            let root = squared.sqrt().expect("a square must have a square root");
            assert_eq!(root * root, squared);
        }
    }

    #[test]
    fn test_constants_are_consistent() {
        assert_eq!(FQ_ZERO, Fq::zero());
        assert_eq!(FQ_ONE, Fq::one());
    }
}
