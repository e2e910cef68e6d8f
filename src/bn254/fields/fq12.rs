//! Fq12 = Fq6[w]/(w^2 - v), SPEC_FULL.md §4.4. Literal constants lifted from
//! `algebra/src/bn254/fields/fq12.rs`.

use crate::biginteger::BigInteger256;
use crate::bn254::fields::fq::FQ_ZERO;
use crate::bn254::fields::fq2::{Fq2, Fq2Parameters, FQ2_ONE, FQ2_ZERO};
use crate::bn254::fields::fq6::Fq6Parameters;
use crate::fields::fp::Fp256;
use crate::fields::fq2::QuadExtField;
use crate::fields::fq6::CubicExtField;
use crate::fields::fq12::{Fq12Parameters as Fq12ParametersTrait, Fq12ParamsWrapper};

pub type Fq12 = crate::fields::fq12::Fq12<Fq12Parameters>;

pub struct Fq12Parameters;

impl Fq12ParametersTrait for Fq12Parameters {
    type Fp6Params = Fq6Parameters;

    const NONRESIDUE: CubicExtField<Fq6Parameters> = CubicExtField::new(FQ2_ZERO, FQ2_ONE, FQ2_ZERO);

    #[rustfmt::skip]
    const FROBENIUS_COEFF_FP12_C1: &'static [Fq2] = &[
        // NONRESIDUE^((q^0 - 1) / 6)
        FQ2_ONE,
        // NONRESIDUE^((q^1 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xaf9ba69633144907, 0xca6b1d7387afb78a, 0x11bded5ef08a2087, 0x02f34d751a1f3a7c,
            ])),
            Fp256::new(BigInteger256::new([
                0xa222ae234c492d72, 0xd00f02a4565de15b, 0xdc2ff3a253dfc926, 0x10a75716b3899551,
            ])),
        ),
        // NONRESIDUE^((q^2 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xca8d800500fa1bf2, 0xf0c5d61468b39769, 0x0e201271ad0d4418, 0x04290f65bad856e6,
            ])),
            FQ_ZERO,
        ),
        // NONRESIDUE^((q^3 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x365316184e46d97d, 0x0af7129ed4c96d9f, 0x659da72fca1009b5, 0x08116d8983a20d23,
            ])),
            Fp256::new(BigInteger256::new([
                0xb1df4af7c39c1939, 0x3d9f02878a73bf7f, 0x9b2220928caf0ae0, 0x26684515eff054a6,
            ])),
        ),
        // NONRESIDUE^((q^4 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0,
            ])),
            FQ_ZERO,
        ),
        // NONRESIDUE^((q^5 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x86b76f821b329076, 0x408bf52b4d19b614, 0x53dfb9d0d985e92d, 0x051e20146982d2a7,
            ])),
            Fp256::new(BigInteger256::new([
                0x0fbc9cd47752ebc7, 0x6d8fffe33415de24, 0xbef22cf038cf41b9, 0x15c0edff3c66bf54,
            ])),
        ),
        // NONRESIDUE^((q^6 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa,
            ])),
            FQ_ZERO,
        ),
        // NONRESIDUE^((q^7 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x8c84e580a568b440, 0xcd164d1de0c21302, 0xa692585790f737d5, 0x2d7100fdc71265ad,
            ])),
            Fp256::new(BigInteger256::new([
                0x99fdddf38c33cfd5, 0xc77267ed1213e931, 0xdc2052142da18f36, 0x1fbcf75c2da80ad7,
            ])),
        ),
        // NONRESIDUE^((q^8 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943,
            ])),
            FQ_ZERO,
        ),
        // NONRESIDUE^((q^9 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x05cd75fe8a3623ca, 0x8c8a57f293a85cee, 0x52b29e86b7714ea8, 0x2852e0e95d8f9306,
            ])),
            Fp256::new(BigInteger256::new([
                0x8a41411f14e0e40e, 0x59e26809ddfe0b0d, 0x1d2e2523f4d24d7d, 0x09fc095cf1414b83,
            ])),
        ),
        // NONRESIDUE^((q^10 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0x08cfc388c494f1ab, 0x19b315148d1373d4, 0x584e90fdcb6c0213, 0x09e1685bdf2f8849,
            ])),
            FQ_ZERO,
        ),
        // NONRESIDUE^((q^11 - 1) / 6)
        QuadExtField::new(
            Fp256::new(BigInteger256::new([
                0xb5691c94bd4a6cd1, 0x56f575661b581478, 0x64708be5a7fb6f30, 0x2b462e5e77aecd82,
            ])),
            Fp256::new(BigInteger256::new([
                0x2c63ef42612a1180, 0x29f16aae345bec69, 0xf95e18c648b216a4, 0x1aa36073a4cae0d4,
            ])),
        ),
    ];
}

pub type Fq12Wrapper = Fq12ParamsWrapper<Fq12Parameters>;

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::bn254::fields::fq6::Fq6;
    use crate::fields::fq2::QuadExtField as Fq2Field;
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
            let a = Fq12::rand(&mut rng);
            let b = Fq12::rand(&mut rng);

            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!(a + (-a), Fq12::zero());
            if !a.is_zero() {
                assert_eq!(a * a.inverse().unwrap(), Fq12::one());
            }

            let mut squared = a;
            squared.square_in_place();
            assert_eq!(squared, a * a);
        }
    }

    #[test]
    fn test_conjugate_is_p6_power() {
        let mut rng = test_rng();
        let a = Fq12::rand(&mut rng);
        let mut conj = a;
        conj.conjugate();

        let mut by_frobenius = a;
        by_frobenius.frobenius_map(6);
        assert_eq!(conj, by_frobenius);
    }

    #[test]
    fn test_mul_by_034_matches_dense_multiply() {
        let mut rng = test_rng();
        let a = Fq12::rand(&mut rng);

        let c0 = crate::bn254::fields::fq2::Fq2::rand(&mut rng);
        let c3 = crate::bn254::fields::fq2::Fq2::rand(&mut rng);
        let c4 = crate::bn254::fields::fq2::Fq2::rand(&mut rng);

        let d0: Fq6 = Fq6Field::new(c0, Fq2Field::zero(), Fq2Field::zero());
        let d1: Fq6 = Fq6Field::new(c3, c4, Fq2Field::zero());
        let dense_rhs: Fq12 = QuadExtField::new(d0, d1);

        let mut via_mul_by_034 = a;
        via_mul_by_034.mul_by_034(&c0, &c3, &c4);

        assert_eq!(via_mul_by_034, a * dense_rhs);
    }
}

type Fq6Field = crate::fields::fq6::CubicExtField<Fq6Parameters>;
