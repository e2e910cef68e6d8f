//! Fq/Fq2/Fq6/Fq12 tower arithmetic, Jacobian G1/G2 group law, and the optimal ate pairing
//! for the alt_bn128 (BN254) curve, plus adapters for the 0x06/0x07/0x08 precompiles.
//!
//! Curve information:
//! * Base field: q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
//! * Scalar field: r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//! * G1 curve equation: y^2 = x^3 + 3
//! * G2 curve equation: y^2 = x^3 + b', b' = 3/(u+9)

#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts, variant_size_differences)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_imports)]
#![deny(unused_extern_crates, renamed_and_removed_lints, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![deny(unused_mut, unused_unsafe)]
#![forbid(unsafe_code)]

pub mod biginteger;
pub mod bn254;
pub mod curves;
pub mod error;
pub mod fields;
pub mod precompile;

pub use error::{GroupError, PrecompileError};
pub use precompile::{alt_bn128_add, alt_bn128_mul, alt_bn128_pairing};
