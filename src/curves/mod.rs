//! Curve-level trait vocabulary: the short Weierstrass model, affine/projective group
//! laws, and the pairing engine contract. Grounded on
//! `algebra-core/src/curves/mod.rs` and `algebra-core/src/curves/models/mod.rs`, trimmed
//! of everything this crate has no use for — GPU/CUDA batch arithmetic, GLV scalar
//! decomposition, the Montgomery/twisted-Edwards models, and the generic
//! `CanonicalSerialize` framework (the 0x06/0x07/0x08 precompiles only ever need the
//! fixed big-endian codec in `precompile.rs`, not a generic serializer).

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{Add, AddAssign, MulAssign, Neg, Sub, SubAssign};
use num_traits::Zero;

use crate::fields::{Field, PrimeField, SquareRootField, UniformRand};

pub mod bn;
pub mod short_weierstrass_jacobian;

/// The base field and scalar field shared by an affine/projective curve pair.
pub trait ModelParameters: Send + Sync + 'static {
    type BaseField: Field + SquareRootField;
    type ScalarField: PrimeField + SquareRootField;
}

/// The coefficients of a short Weierstrass curve `y^2 = x^3 + A*x + B`, plus its
/// generator and cofactor.
pub trait SWModelParameters: ModelParameters {
    const COEFF_A: Self::BaseField;
    const COEFF_B: Self::BaseField;
    const COFACTOR: &'static [u64];
    const COFACTOR_INV: Self::ScalarField;
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField);

    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy *= &Self::COEFF_A;
        copy
    }

    fn add_b(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy += &Self::COEFF_B;
        copy
    }
}

/// Affine representation of an elliptic curve point.
pub trait AffineCurve:
    Eq
    + 'static
    + Sized
    + Copy
    + Clone
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + Zero
    + Neg<Output = Self>
    + From<<Self as AffineCurve>::Projective>
{
    type BaseField: Field;
    type ScalarField: PrimeField + SquareRootField;
    type Projective: ProjectiveCurve<Affine = Self, ScalarField = Self::ScalarField, BaseField = Self::BaseField>
        + From<Self>
        + Into<Self>;

    fn prime_subgroup_generator() -> Self;

    fn into_projective(&self) -> Self::Projective {
        (*self).into()
    }

    /// Checks that the point satisfies the curve equation.
    fn is_on_curve(&self) -> bool;

    /// Checks that the point lies in the prime-order subgroup, assuming it is already
    /// known to satisfy the curve equation. For G1 this is always true (cofactor 1); for
    /// G2 this runs the scalar-field-order check (SPEC_FULL.md §4.6's Open Question 2).
    fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool;

    fn mul<S: AsRef<[u64]>>(&self, other: S) -> Self::Projective;

    fn mul_by_cofactor_to_projective(&self) -> Self::Projective;

    fn mul_by_cofactor(&self) -> Self {
        self.mul_by_cofactor_to_projective().into()
    }

    fn mul_by_cofactor_inv(&self) -> Self;
}

/// Projective (Jacobian) representation of an elliptic curve point.
pub trait ProjectiveCurve:
    Eq
    + 'static
    + Sized
    + Copy
    + Clone
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + UniformRand
    + Zero
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<<Self as ProjectiveCurve>::ScalarField>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + From<<Self as ProjectiveCurve>::Affine>
{
    type ScalarField: PrimeField + SquareRootField;
    type BaseField: Field;
    type Affine: AffineCurve<Projective = Self, ScalarField = Self::ScalarField, BaseField = Self::BaseField>
        + From<Self>
        + Into<Self>;

    fn prime_subgroup_generator() -> Self;

    fn batch_normalization(v: &mut [Self]);

    fn is_normalized(&self) -> bool;

    fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    fn double_in_place(&mut self) -> &mut Self;

    fn into_affine(&self) -> Self::Affine {
        (*self).into()
    }

    fn add_mixed(mut self, other: &Self::Affine) -> Self {
        self.add_assign_mixed(other);
        self
    }

    fn add_assign_mixed(&mut self, other: &Self::Affine);

    /// Scalar multiplication by MSB-first square-and-multiply.
    fn mul<S: AsRef<[u64]>>(mut self, other: S) -> Self {
        let mut res = Self::zero();
        let mut found_one = false;
        for i in crate::fields::BitIterator::new(other.as_ref()) {
            if found_one {
                res.double_in_place();
            } else {
                found_one = i;
            }
            if i {
                res += self;
            }
        }
        self = res;
        self
    }
}

/// The optimal ate pairing engine contract: a Miller loop followed by a final
/// exponentiation, composed into `pairing`.
pub trait PairingEngine: Sized + 'static + Copy + Debug + Sync + Send {
    type Fr: PrimeField + SquareRootField;

    type G1Projective: ProjectiveCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Affine = Self::G1Affine>
        + From<Self::G1Affine>
        + Into<Self::G1Affine>;
    type G1Affine: AffineCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Projective = Self::G1Projective>
        + From<Self::G1Projective>
        + Into<Self::G1Projective>
        + Into<Self::G1Prepared>;
    type G1Prepared: Clone + Send + Sync + Debug + From<Self::G1Affine>;

    type G2Projective: ProjectiveCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Affine = Self::G2Affine>
        + From<Self::G2Affine>
        + Into<Self::G2Affine>;
    type G2Affine: AffineCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Projective = Self::G2Projective>
        + From<Self::G2Projective>
        + Into<Self::G2Projective>
        + Into<Self::G2Prepared>;
    type G2Prepared: Clone + Send + Sync + Debug + From<Self::G2Affine>;

    type Fq: PrimeField + SquareRootField;
    type Fqe: SquareRootField;
    type Fqk: Field;

    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>;

    fn final_exponentiation(r: &Self::Fqk) -> Option<Self::Fqk>;

    fn product_of_pairings<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        Self::final_exponentiation(&Self::miller_loop(i)).unwrap()
    }

    fn pairing<G1, G2>(p: G1, q: G2) -> Self::Fqk
    where
        G1: Into<Self::G1Affine>,
        G2: Into<Self::G2Affine>,
    {
        let g1_prep: Self::G1Prepared = p.into().into();
        let g2_prep: Self::G2Prepared = q.into().into();
        Self::product_of_pairings(core::iter::once(&(g1_prep, g2_prep)))
    }
}
