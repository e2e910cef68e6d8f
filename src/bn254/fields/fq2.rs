//! Fq2 = Fq[i]/(i^2 - NONRESIDUE), NONRESIDUE = -1 (SPEC_FULL.md §4.2). Literal constants
//! lifted from `algebra/src/bn254/fields/fq2.rs`.

use crate::biginteger::BigInteger256;
use crate::bn254::fields::fq::{Fq, FqParameters};
use crate::fields::fp::Fp256;
use crate::fields::fq2::{QuadExtField, QuadExtParameters};
use crate::fields::FpParameters;

pub type Fq2 = QuadExtField<Fq2Parameters>;

pub struct Fq2Parameters;

impl QuadExtParameters for Fq2Parameters {
    type BaseField = Fq;
    type FrobCoeff = Fq;

    /// NONRESIDUE = -1
    #[rustfmt::skip]
    const NONRESIDUE: Fq = Fp256::new(BigInteger256::new([
        0x68c3488912edefaa,
        0x8d087f6872aabf4f,
        0x51e1a24709081231,
        0x2259d6b14729c0fa,
    ]));

    #[rustfmt::skip]
    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        // NONRESIDUE^((q^0 - 1) / 2)
        Fp256::new(FqParameters::R),
        // NONRESIDUE^((q^1 - 1) / 2)
        Fp256::new(BigInteger256::new([
            0x68c3488912edefaa,
            0x8d087f6872aabf4f,
            0x51e1a24709081231,
            0x2259d6b14729c0fa,
        ])),
    ];

    fn mul_base_field_by_nonresidue(fe: &Fq) -> Fq {
        -(*fe)
    }

    fn mul_base_field_by_frob_coeff(c1: &mut Fq, power: usize) {
        *c1 *= &Self::FROBENIUS_COEFF_C1[power % Self::FROBENIUS_COEFF_C1.len()];
    }
}

pub const FQ2_ZERO: Fq2 = QuadExtField::new(crate::bn254::fields::fq::FQ_ZERO, crate::bn254::fields::fq::FQ_ZERO);
pub const FQ2_ONE: Fq2 = QuadExtField::new(crate::bn254::fields::fq::FQ_ONE, crate::bn254::fields::fq::FQ_ZERO);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::fields::{Field, FpParameters, UniformRand};

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
            let a = Fq2::rand(&mut rng);
            let b = Fq2::rand(&mut rng);

            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!(a + (-a), Fq2::zero());
            if !a.is_zero() {
                assert_eq!(a * a.inverse().unwrap(), Fq2::one());
            }

            let mut squared = a;
            squared.square_in_place();
            assert_eq!(squared, a * a);
        }
    }

    #[test]
    fn test_frobenius() {
        let mut rng = test_rng();
        let a = Fq2::rand(&mut rng);
        let mut ap = a;
        ap.frobenius_map(1);
        assert_eq!(ap, a.pow(FqParameters::MODULUS.0));
    }
}
