//! The concrete BN254 (alt_bn128) instantiation (SPEC_FULL.md §3): field tower constants,
//! group parameters, and the pairing engine they assemble into.

pub mod curves;
pub mod fields;

pub use curves::{Bn254, G1Affine, G1Prepared, G1Projective, G2Affine, G2Prepared, G2Projective, Parameters};
pub use fields::{Fq, Fq12, Fq2, Fq6, Fr};
