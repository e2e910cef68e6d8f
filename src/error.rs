//! Hand-rolled error enums for curve-membership checks and the precompile adapters
//! (SPEC_FULL.md §6a/§7). Modeled on `algebra-core/src/serialize/error.rs`'s manual
//! `Display` + `std::error::Error` pattern rather than a derive-macro crate.

use core::fmt;

/// Returned by curve-membership and subgroup checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    NotOnCurve,
    NotInSubgroup,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::NotOnCurve => write!(f, "point does not satisfy the curve equation"),
            GroupError::NotInSubgroup => write!(f, "point is not in the order-r subgroup"),
        }
    }
}

impl std::error::Error for GroupError {}

/// Returned by the three precompile entry points (`alt_bn128_add`, `alt_bn128_mul`,
/// `alt_bn128_pairing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecompileError {
    InvalidInputLength,
    CoordinateOutOfRange,
    NotOnCurve,
    NotInSubgroup,
}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecompileError::InvalidInputLength => write!(f, "input is not a multiple of the expected chunk length"),
            PrecompileError::CoordinateOutOfRange => write!(f, "coordinate is not less than the field modulus"),
            PrecompileError::NotOnCurve => write!(f, "point does not satisfy the curve equation"),
            PrecompileError::NotInSubgroup => write!(f, "point is not in the order-r subgroup"),
        }
    }
}

impl std::error::Error for PrecompileError {}

impl From<GroupError> for PrecompileError {
    fn from(e: GroupError) -> Self {
        match e {
            GroupError::NotOnCurve => PrecompileError::NotOnCurve,
            GroupError::NotInSubgroup => PrecompileError::NotInSubgroup,
        }
    }
}
