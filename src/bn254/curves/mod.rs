//! Wires the bn254 field tower and group parameters into the generic `Bn` pairing engine
//! (SPEC_FULL.md §4.6). `SIX_U_PLUS_2_NAF` and `CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2` are
//! the `algebra-core`-named constants `curves::bn` expects; their literal values are lifted
//! from `algebra/src/bn254/curves/mod.rs`'s `ATE_LOOP_COUNT` and `TWIST_MUL_BY_Q_Y` (see
//! DESIGN.md for the numeric equivalence check between the two upstream snapshots).

pub mod g1;
pub mod g2;

use crate::bn254::fields::{Fq, Fq12Parameters, Fq2, Fq2Parameters, Fq6Parameters};
use crate::curves::bn::Bn;
use crate::curves::bn;
use crate::biginteger::BigInteger256;
use crate::fields::fp::Fp256;
use crate::fields::fq2::QuadExtField;

pub struct Parameters;

impl bn::BnParameters for Parameters {
    /// NAF recoding of `6*X + 2` for `X = 4965661367192848881`.
    #[rustfmt::skip]
    const SIX_U_PLUS_2_NAF: &'static [i8] = &[
        0, 0, 0, 1, 0, 1, 0, -1, 0, 0, 1, -1, 0, 0, 1, 0, 0, 1, 1, 0, -1, 0, 0, 1, 0, -1, 0, 0, 0,
        0, 1, 1, 1, 0, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, 0, 0, 1, 1, 0,
        -1, 0, 0, 1, 0, 1, 1,
    ];

    const U: &'static [u64] = &[4965661367192848881];

    type Fp = Fq;
    type Fp2Params = Fq2Parameters;
    type Fp6Params = Fq6Parameters;
    type Fp12Params = Fq12Parameters;
    type G1Parameters = g1::Parameters;
    type G2Parameters = g2::Parameters;

    #[rustfmt::skip]
    const CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2: Fq2 = QuadExtField::new(
        Fp256::new(BigInteger256::new([
            0xe4bbdd0c2936b629,
            0xbb30f162e133bacb,
            0x31a9d1b6f9645366,
            0x253570bea500f8dd,
        ])),
        Fp256::new(BigInteger256::new([
            0xa1d77ce45ffe77c7,
            0x07affd117826d1db,
            0x6d16bd27bb7edc6b,
            0x2c87200285defecc,
        ])),
    );
}

pub type Bn254 = Bn<Parameters>;

pub type G1Affine = bn::G1Affine<Parameters>;
pub type G1Projective = bn::G1Projective<Parameters>;
pub type G2Affine = bn::G2Affine<Parameters>;
pub type G2Projective = bn::G2Projective<Parameters>;
pub type G1Prepared = bn::G1Prepared<Parameters>;
pub type G2Prepared = bn::G2Prepared<Parameters>;

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    use crate::bn254::fields::Fq12;
    use crate::curves::{AffineCurve, PairingEngine, ProjectiveCurve};
    use crate::fields::{Field, PrimeField};

    #[test]
    fn test_g1_generator_on_curve_and_in_subgroup() {
        let g = G1Affine::prime_subgroup_generator();
        assert!(g.is_on_curve());
        assert!(g.is_in_correct_subgroup_assuming_on_curve());
    }

    #[test]
    fn test_g2_generator_on_curve_and_in_subgroup() {
        let g = G2Affine::prime_subgroup_generator();
        assert!(g.is_on_curve());
        assert!(g.is_in_correct_subgroup_assuming_on_curve());
    }

    /// `2 * (1, 2)` on the base curve, the worked example from SPEC_FULL.md §8.
    #[test]
    fn test_g1_generator_doubling_matches_known_vector() {
        let g = G1Affine::prime_subgroup_generator();
        let doubled = g.mul([2u64]).into_affine();

        let expected_x = Fq::from_bytes_be(&[
            0x03, 0x06, 0x44, 0xe7, 0x2e, 0x13, 0x1a, 0x02, 0x9b, 0x85, 0x04, 0x5b, 0x68, 0x18,
            0x15, 0x85, 0xd9, 0x78, 0x16, 0xa9, 0x16, 0x87, 0x1c, 0xa8, 0xd3, 0xc2, 0x08, 0xc1,
            0x6d, 0x87, 0xcf, 0xd3,
        ])
        .unwrap();
        let expected_y = Fq::from_bytes_be(&[
            0x15, 0xed, 0x73, 0x8c, 0x0e, 0x0a, 0x7c, 0x92, 0xe7, 0x84, 0x5f, 0x96, 0xb2, 0xae,
            0x9c, 0x0a, 0x68, 0xa6, 0xa4, 0x49, 0xe3, 0x53, 0x8f, 0xc7, 0xff, 0x3e, 0xbf, 0x7a,
            0x5a, 0x18, 0xa2, 0xc4,
        ])
        .unwrap();

        assert_eq!(doubled.x, expected_x);
        assert_eq!(doubled.y, expected_y);
    }

    #[test]
    fn test_pairing_identity_with_infinity() {
        let g1 = G1Affine::prime_subgroup_generator();
        let g2 = G2Affine::prime_subgroup_generator();

        let lhs = Bn254::pairing(G1Affine::zero(), g2);
        assert_eq!(lhs, Fq12::one());

        let rhs = Bn254::pairing(g1, G2Affine::zero());
        assert_eq!(rhs, Fq12::one());
    }

    #[test]
    fn test_pairing_is_non_degenerate() {
        let g1 = G1Affine::prime_subgroup_generator();
        let g2 = G2Affine::prime_subgroup_generator();
        assert_ne!(Bn254::pairing(g1, g2), Fq12::one());
    }

    /// `e(aP, bQ) == e(P, Q)^(ab)`, checked via `e(aP, bQ) == e(P, bQ)^a`.
    #[test]
    fn test_pairing_bilinearity() {
        let g1 = G1Affine::prime_subgroup_generator();
        let g2 = G2Affine::prime_subgroup_generator();

        let a = [5u64];
        let b = [7u64];

        let ap = g1.mul(a).into_affine();
        let bq = g2.mul(b).into_affine();

        let lhs = Bn254::pairing(ap, bq);

        let base = Bn254::pairing(g1, bq);
        let rhs = base.pow(a);

        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_prepared_from_infinity_is_zero() {
        let g1p = G1Prepared::from(G1Affine::zero());
        assert!(g1p.is_zero());

        let g2p = G2Prepared::from(G2Affine::zero());
        assert!(g2p.is_zero());
    }
}
