//! Fq6 = Fq2[v]/(v^3 - NONRESIDUE), NONRESIDUE = 9 + u (SPEC_FULL.md §4.3). Literal
//! constants lifted from `algebra/src/bn254/fields/fq6.rs`.

use crate::biginteger::BigInteger256;
use crate::bn254::fields::fq::Fq;
use crate::bn254::fields::fq2::{Fq2, Fq2Parameters};
use crate::fields::fp::Fp256;
use crate::fields::fq2::{QuadExtField, QuadExtParameters};
use crate::fields::fq6::{CubicExtField, CubicExtParameters};
use crate::fields::Field;

pub type Fq6 = CubicExtField<Fq6Parameters>;

pub struct Fq6Parameters;

impl CubicExtParameters for Fq6Parameters {
    type BaseField = Fq2;
    type FrobCoeff = Fq2;

    /// NONRESIDUE = u + 9
    #[rustfmt::skip]
    const NONRESIDUE: Fq2 = QuadExtField::new(
        Fp256::new(BigInteger256::new([
            0xf60647ce410d7ff7,
            0x2f3d6f4dd31bd011,
            0x2943337e3940c6d1,
            0x1d9598e8a7e39857,
        ])),
        Fp256::new(BigInteger256::new([
            202099033278250856u64,
            8885205928937022213u64,
            5545221690922665192u64,
            39800542322357402u64,
        ])),
    );

    #[rustfmt::skip]
    const FROBENIUS_COEFF_C1: &'static [Fq2] = &[
        // NONRESIDUE^((q^0 - 1) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0xe0a77c19a07df2f,
            ])),
            Fp256::new(BigInteger256::new([0x0, 0x0, 0x0, 0x0])),
        ),
        // NONRESIDUE^((q^1 - 1) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec,
            ])),
            Fp256::new(BigInteger256::new([
                0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3,
            ])),
        ),
        // NONRESIDUE^((q^2 - 1) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0,
            ])),
            Fp256::new(BigInteger256::new([0x0, 0x0, 0x0, 0x0])),
        ),
        // NONRESIDUE^((q^3 - 1) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xc9af22f716ad6bad, 0xb311782a4aa662b2, 0x19eeaf64e248c7f4, 0x20273e77e3439f82,
            ])),
            Fp256::new(BigInteger256::new([
                0xacc02860f7ce93ac, 0x3933d5817ba76b4c, 0x69e6188b446c8467, 0xa46036d4417cc55,
            ])),
        ),
        // NONRESIDUE^((q^4 - 1) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943,
            ])),
            Fp256::new(BigInteger256::new([0x0, 0x0, 0x0, 0x0])),
        ),
        // NONRESIDUE^((q^5 - 1) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xf91aba2654e8e3b1, 0x4771cb2fdc92ce12, 0xdcb16ae0fc8bdf35, 0x274aa195cd9d8be4,
            ])),
            Fp256::new(BigInteger256::new([
                0x5cfc50ae18811f8b, 0x4bb28433cb43988c, 0x4fd35f13c3b56219, 0x301949bd2fc8883a,
            ])),
        ),
    ];

    #[rustfmt::skip]
    const FROBENIUS_COEFF_C2: &'static [Fq2] = &[
        // NONRESIDUE^((2*q^0 - 2) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0xe0a77c19a07df2f,
            ])),
            Fp256::new(BigInteger256::new([0x0, 0x0, 0x0, 0x0])),
        ),
        // NONRESIDUE^((2*q^1 - 2) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x7361d77f843abe92, 0xa5bb2bd3273411fb, 0x9c941f314b3e2399, 0x15df9cddbb9fd3ec,
            ])),
            Fp256::new(BigInteger256::new([
                0x5dddfd154bd8c949, 0x62cb29a5a4445b60, 0x37bc870a0c7dd2b9, 0x24830a9d3171f0fd,
            ])),
        ),
        // NONRESIDUE^((2*q^2 - 2) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943,
            ])),
            Fp256::new(BigInteger256::new([0x0, 0x0, 0x0, 0x0])),
        ),
        // NONRESIDUE^((2*q^3 - 2) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x448a93a57b6762df, 0xbfd62df528fdeadf, 0xd858f5d00e9bd47a, 0x6b03d4d3476ec58,
            ])),
            Fp256::new(BigInteger256::new([
                0x2b19daf4bcc936d1, 0xa1a54e7a56f4299f, 0xb533eee05adeaef1, 0x170c812b84dda0b2,
            ])),
        ),
        // NONRESIDUE^((2*q^4 - 2) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0,
            ])),
            Fp256::new(BigInteger256::new([0x0, 0x0, 0x0, 0x0])),
        ),
        // NONRESIDUE^((2*q^5 - 2) / 3)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x843420f1d8dadbd6, 0x31f010c9183fcdb2, 0x436330b527a76049, 0x13d47447f11adfe4,
            ])),
            Fp256::new(BigInteger256::new([
                0xef494023a857fa74, 0x2a925d02d5ab101a, 0x83b015829ba62f10, 0x2539111d0c13aea3,
            ])),
        ),
    ];

    /// (c0+u*c1)*(9+u) = (9*c0-c1) + u*(9*c1+c0)
    fn mul_base_field_by_nonresidue(fe: &Fq2) -> Fq2 {
        let mut f = *fe;
        f.double_in_place().double_in_place().double_in_place();
        let c0 = f.c0 + fe.c0 + Fq2Parameters::mul_base_field_by_nonresidue(&fe.c1);
        let c1 = f.c1 + fe.c1 + fe.c0;
        QuadExtField::new(c0, c1)
    }

    fn mul_base_field_by_frob_coeff(c1: &mut Fq2, c2: &mut Fq2, power: usize) {
        *c1 *= &Self::FROBENIUS_COEFF_C1[power % Self::FROBENIUS_COEFF_C1.len()];
        *c2 *= &Self::FROBENIUS_COEFF_C2[power % Self::FROBENIUS_COEFF_C2.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::fields::{Field, UniformRand};

    fn test_rng() -> XorShiftRng {
        XorShiftRng::from_seed([
            0x5d, 0xbe, 0x62, 0x59, 0x8d, 0x31, 0x3d, 0x76, 0x32, 0x37, 0xdb, 0x17, 0xe5, 0xbc,
            0x06, 0x54,
        ])
    }

    #[test]
    fn test_field_laws() {
        let mut rng = test_rng();
        for _ in 0..16 {
            let a = Fq6::rand(&mut rng);
            let b = Fq6::rand(&mut rng);

            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!(a + (-a), Fq6::zero());
            if !a.is_zero() {
                assert_eq!(a * a.inverse().unwrap(), Fq6::one());
            }

            let mut squared = a;
            squared.square_in_place();
            assert_eq!(squared, a * a);
        }
    }
}
