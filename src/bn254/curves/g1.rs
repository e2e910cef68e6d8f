//! Concrete G1 short Weierstrass parameters, SPEC_FULL.md §3/§4.1. Literal constants
//! lifted from `algebra/src/bn254/curves/g1.rs`.

use num_traits::Zero;

use crate::biginteger::BigInteger256;
use crate::bn254::fields::{Fq, Fr};
use crate::curves::{ModelParameters, SWModelParameters};
use crate::fields::fp::Fp256;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters;

impl ModelParameters for Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Parameters {
    /// COEFF_A = 0
    const COEFF_A: Fq = Fp256::new(BigInteger256::new([0x0, 0x0, 0x0, 0x0]));

    /// COEFF_B = 3
    #[rustfmt::skip]
    const COEFF_B: Fq = Fp256::new(BigInteger256::new([
        0x7a17caa950ad28d7,
        0x1f6ac17ae15521b9,
        0x334bea4e696bd284,
        0x2a1f6744ce179d8e,
    ]));

    /// COFACTOR = 1
    const COFACTOR: &'static [u64] = &[0x1];

    /// COFACTOR_INV = 1
    #[rustfmt::skip]
    const COFACTOR_INV: Fr = Fp256::new(BigInteger256::new([
        0xac96341c4ffffffb,
        0x36fc76959f60cd29,
        0x666ea36f7879462e,
        0xe0a77c19a07df2f,
    ]));

    const AFFINE_GENERATOR_COEFFS: (Fq, Fq) = (G1_GENERATOR_X, G1_GENERATOR_Y);

    fn mul_by_a(_: &Fq) -> Fq {
        Fq::zero()
    }
}

/// G1_GENERATOR_X = 1
#[rustfmt::skip]
pub const G1_GENERATOR_X: Fq = Fp256::new(BigInteger256::new([
    0xd35d438dc58f0d9d,
    0x0a78eb28f5c70b3d,
    0x666ea36f7879462c,
    0x0e0a77c19a07df2f,
]));

/// G1_GENERATOR_Y = 2
#[rustfmt::skip]
pub const G1_GENERATOR_Y: Fq = Fp256::new(BigInteger256::new([
    0xa6ba871b8b1e1b3a,
    0x14f1d651eb8e167b,
    0xccdd46def0f28c58,
    0x1c14ef83340fbe5e,
]));
