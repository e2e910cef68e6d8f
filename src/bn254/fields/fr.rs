//! The scalar field Fr (SPEC_FULL.md §3's `r`, the curve order), Montgomery-encoded.
//! Literal constants are lifted verbatim from `algebra/src/bn254/fields/fr.rs`.

use crate::biginteger::BigInteger256;
use crate::fields::{FpParameters, Fp256};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl FpParameters for FrParameters {
    /// MODULUS = 21888242871839275222246405745257275088548364400416034343698204186575808495617
    #[rustfmt::skip]
    const MODULUS: BigInteger256 = BigInteger256::new([
        4891460686036598785u64,
        2896914383306846353u64,
        13281191951274694749u64,
        3486998266802970665u64,
    ]);

    const MODULUS_BITS: u32 = 254;
    const CAPACITY: u32 = Self::MODULUS_BITS - 1;
    const REPR_SHAVE_BITS: u32 = 2;

    #[rustfmt::skip]
    const R: BigInteger256 = BigInteger256::new([
        12436184717236109307u64,
        3962172157175319849u64,
        7381016538464732718u64,
        1011752739694698287u64,
    ]);

    #[rustfmt::skip]
    const R2: BigInteger256 = BigInteger256::new([
        1997599621687373223u64,
        6052339484930628067u64,
        10108755138030829701u64,
        150537098327114917u64,
    ]);

    const INV: u64 = 14042775128853446655u64;

    // GENERATOR = 5
    #[rustfmt::skip]
    const GENERATOR: BigInteger256 = BigInteger256::new([
        1949230679015292902u64,
        16913946402569752895u64,
        5177146667339417225u64,
        1571765431670520771u64,
    ]);

    const TWO_ADICITY: u32 = 28;

    #[rustfmt::skip]
    const ROOT_OF_UNITY: BigInteger256 = BigInteger256::new([
        7164790868263648668u64,
        11685701338293206998u64,
        6216421865291908056u64,
        1756667274303109607u64,
    ]);

    #[rustfmt::skip]
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0xa1f0fac9f8000000,
        0x9419f4243cdcb848,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]);

    // T = (MODULUS - 1) / 2^TWO_ADICITY
    #[rustfmt::skip]
    const T: BigInteger256 = BigInteger256::new([
        0x9b9709143e1f593f,
        0x181585d2833e8487,
        0x131a029b85045b68,
        0x30644e72e,
    ]);

    #[rustfmt::skip]
    const T_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0xcdcb848a1f0fac9f,
        0x0c0ac2e9419f4243,
        0x098d014dc2822db4,
        0x183227397,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::fields::{Field, PrimeField, UniformRand};

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
            let a = Fr::rand(&mut rng);
            let b = Fr::rand(&mut rng);

            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!(a + (-a), Fr::zero());
            if !a.is_zero() {
                assert_eq!(a * a.inverse().unwrap(), Fr::one());
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
            let a = Fr::rand(&mut rng);
            let repr = a.into_repr();
            assert_eq!(Fr::from_repr(repr), Some(a));
        }
    }

    #[test]
    fn test_two_adicity() {
        // ROOT_OF_UNITY^(2^TWO_ADICITY) == 1, and it is a primitive 2^TWO_ADICITY-th root.
        let root = Fr::from_repr(FrParameters::ROOT_OF_UNITY).unwrap();
        let mut power = root;
        for _ in 0..FrParameters::TWO_ADICITY {
            power.square_in_place();
        }
        assert_eq!(power, Fr::one());
    }
}
