//! `alt_bn128_add`/`alt_bn128_mul`/`alt_bn128_pairing` (SPEC_FULL.md §4.7/§6): the
//! big-endian 32-byte-chunked wire codec sitting at the VM precompile boundary, distinct
//! from the tower's internal little-endian limb layout. Grounded on the `PrimeField`
//! `to_bytes_be`/`from_bytes_be` helpers in `fields/mod.rs` and the `GroupAffine`
//! constructors in `curves/short_weierstrass_jacobian.rs`.

use num_traits::{One, Zero};

use crate::bn254::curves::{g1, g2};
use crate::bn254::{Bn254, Fq, Fq2, G1Prepared, G2Prepared};
use crate::curves::short_weierstrass_jacobian::GroupAffine;
use crate::curves::{AffineCurve, PairingEngine};
use crate::error::PrecompileError;
use crate::fields::PrimeField;

pub type G1Affine = GroupAffine<g1::Parameters>;
pub type G2Affine = GroupAffine<g2::Parameters>;

fn decode_fq(bytes: &[u8]) -> Result<Fq, PrecompileError> {
    let arr: [u8; 32] = bytes.try_into().map_err(|_| PrecompileError::InvalidInputLength)?;
    Fq::from_bytes_be(&arr).ok_or(PrecompileError::CoordinateOutOfRange)
}

fn encode_fq(f: &Fq) -> [u8; 32] {
    f.to_bytes_be()
}

/// Decodes a G1 point from `x‖y` (64 bytes). An all-zero pair is the point at infinity.
fn decode_g1(bytes: &[u8]) -> Result<G1Affine, PrecompileError> {
    if bytes.len() != 64 {
        return Err(PrecompileError::InvalidInputLength);
    }
    let x = decode_fq(&bytes[0..32])?;
    let y = decode_fq(&bytes[32..64])?;
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::zero());
    }
    let p = G1Affine::new(x, y, false);
    if !p.is_on_curve() {
        return Err(PrecompileError::NotOnCurve);
    }
    Ok(p)
}

fn encode_g1(p: &G1Affine) -> [u8; 64] {
    let mut out = [0u8; 64];
    if p.is_zero() {
        return out;
    }
    out[0..32].copy_from_slice(&encode_fq(&p.x));
    out[32..64].copy_from_slice(&encode_fq(&p.y));
    out
}

/// Decodes an Fq2 value from a 64-byte chunk, imaginary component first, matching the
/// Ethereum precompile convention (SPEC_FULL.md §6).
fn decode_fq2(bytes: &[u8]) -> Result<Fq2, PrecompileError> {
    let c1 = decode_fq(&bytes[0..32])?;
    let c0 = decode_fq(&bytes[32..64])?;
    Ok(Fq2::new(c0, c1))
}

fn encode_fq2(f: &Fq2) -> [u8; 64] {
    let mut out = [0u8; 64];
    out[0..32].copy_from_slice(&encode_fq(&f.c1));
    out[32..64].copy_from_slice(&encode_fq(&f.c0));
    out
}

/// Decodes a G2 point from `x_imag‖x_real‖y_imag‖y_real` (128 bytes), checking both the
/// curve equation and the order-r subgroup membership (SPEC_FULL.md §4.5/§4.6).
fn decode_g2(bytes: &[u8]) -> Result<G2Affine, PrecompileError> {
    if bytes.len() != 128 {
        return Err(PrecompileError::InvalidInputLength);
    }
    let x = decode_fq2(&bytes[0..64])?;
    let y = decode_fq2(&bytes[64..128])?;
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::zero());
    }
    let q = G2Affine::new(x, y, false);
    if !q.is_on_curve() {
        return Err(PrecompileError::NotOnCurve);
    }
    if !q.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PrecompileError::NotInSubgroup);
    }
    Ok(q)
}

/// Precompile 0x06: point addition on G1. Input is `x1‖y1‖x2‖y2` (128 bytes), output is
/// `x‖y` (64 bytes).
pub fn alt_bn128_add(input: &[u8]) -> Result<[u8; 64], PrecompileError> {
    if input.len() != 128 {
        return Err(PrecompileError::InvalidInputLength);
    }
    let a = decode_g1(&input[0..64])?;
    let b = decode_g1(&input[64..128])?;
    let sum = a + b;
    Ok(encode_g1(&sum))
}

/// Precompile 0x07: scalar multiplication on G1. Input is `x‖y‖k` (96 bytes, `k` a 32-byte
/// big-endian scalar), output is `x‖y` (64 bytes).
pub fn alt_bn128_mul(input: &[u8]) -> Result<[u8; 64], PrecompileError> {
    if input.len() != 96 {
        return Err(PrecompileError::InvalidInputLength);
    }
    let p = decode_g1(&input[0..64])?;
    let k_bytes: [u8; 32] = input[64..96].try_into().map_err(|_| PrecompileError::InvalidInputLength)?;
    let k = crate::biginteger::BigInteger256::from_bytes_be(&k_bytes);
    let result = p.mul(k.0).into_affine();
    Ok(encode_g1(&result))
}

/// Precompile 0x08: pairing check. Input is `k` chunks of `x_P‖y_P‖x_Q_imag‖x_Q_real‖
/// y_Q_imag‖y_Q_real` (192 bytes each), output is `0x…01` if the pairing product equals
/// one, else `0x…00`. Empty input returns true (SPEC_FULL.md §6).
pub fn alt_bn128_pairing(input: &[u8]) -> Result<bool, PrecompileError> {
    if input.len() % 192 != 0 {
        return Err(PrecompileError::InvalidInputLength);
    }
    if input.is_empty() {
        return Ok(true);
    }

    let mut pairs = Vec::with_capacity(input.len() / 192);
    for chunk in input.chunks_exact(192) {
        let p = decode_g1(&chunk[0..64])?;
        let q = decode_g2(&chunk[64..192])?;
        pairs.push((G1Prepared::from(p), G2Prepared::from(q)));
    }

    let result = Bn254::product_of_pairings(pairs.iter());
    Ok(result.is_one())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g1_generator_bytes() -> [u8; 64] {
        encode_g1(&G1Affine::prime_subgroup_generator())
    }

    fn encode_g2(p: &G2Affine) -> [u8; 128] {
        let mut out = [0u8; 128];
        if p.is_zero() {
            return out;
        }
        out[0..64].copy_from_slice(&encode_fq2(&p.x));
        out[64..128].copy_from_slice(&encode_fq2(&p.y));
        out
    }

    #[test]
    fn test_add_rejects_wrong_length() {
        assert_eq!(alt_bn128_add(&[0u8; 127]), Err(PrecompileError::InvalidInputLength));
    }

    #[test]
    fn test_add_with_infinity_is_identity() {
        let g = g1_generator_bytes();
        let mut input = [0u8; 128];
        input[0..64].copy_from_slice(&g);
        // second point left as all-zero bytes, i.e. the point at infinity.
        let sum = alt_bn128_add(&input).unwrap();
        assert_eq!(sum, g);
    }

    #[test]
    fn test_add_generator_to_itself_matches_mul_by_two() {
        let g = g1_generator_bytes();
        let mut add_input = [0u8; 128];
        add_input[0..64].copy_from_slice(&g);
        add_input[64..128].copy_from_slice(&g);
        let doubled_via_add = alt_bn128_add(&add_input).unwrap();

        let mut mul_input = [0u8; 96];
        mul_input[0..64].copy_from_slice(&g);
        mul_input[95] = 2;
        let doubled_via_mul = alt_bn128_mul(&mul_input).unwrap();

        assert_eq!(doubled_via_add, doubled_via_mul);
    }

    #[test]
    fn test_mul_by_zero_is_infinity() {
        let g = g1_generator_bytes();
        let mut input = [0u8; 96];
        input[0..64].copy_from_slice(&g);
        let result = alt_bn128_mul(&input).unwrap();
        assert_eq!(result, [0u8; 64]);
    }

    #[test]
    fn test_add_rejects_point_not_on_curve() {
        let mut input = [0u8; 128];
        input[31] = 1;
        input[63] = 1;
        input[95] = 1;
        input[127] = 1;
        assert_eq!(alt_bn128_add(&input), Err(PrecompileError::NotOnCurve));
    }

    #[test]
    fn test_pairing_empty_input_is_true() {
        assert_eq!(alt_bn128_pairing(&[]).unwrap(), true);
    }

    #[test]
    fn test_pairing_rejects_wrong_length() {
        assert_eq!(
            alt_bn128_pairing(&[0u8; 191]),
            Err(PrecompileError::InvalidInputLength)
        );
    }

    /// `e(P, Q) * e(P, -Q) == e(P, Q + (-Q)) == e(P, O) == 1`.
    #[test]
    fn test_pairing_of_point_and_its_negation_is_true() {
        let g1 = g1_generator_bytes();
        let g2 = G2Affine::prime_subgroup_generator();
        let neg_g2 = -g2;

        let mut input = Vec::with_capacity(384);
        input.extend_from_slice(&g1);
        input.extend_from_slice(&encode_g2(&g2));
        input.extend_from_slice(&g1);
        input.extend_from_slice(&encode_g2(&neg_g2));

        assert_eq!(alt_bn128_pairing(&input).unwrap(), true);
    }

    #[test]
    fn test_pairing_of_single_nonzero_pair_is_false() {
        let g1 = g1_generator_bytes();
        let g2 = G2Affine::prime_subgroup_generator();

        let mut input = Vec::with_capacity(192);
        input.extend_from_slice(&g1);
        input.extend_from_slice(&encode_g2(&g2));

        assert_eq!(alt_bn128_pairing(&input).unwrap(), false);
    }
}
