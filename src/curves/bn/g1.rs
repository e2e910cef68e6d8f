//! `G1Prepared`: the pairing-ready wrapper around a G1 affine point. Unlike G2, G1 needs no
//! precomputation — the line function is evaluated directly at its affine coordinates
//! inside `Bn::ell` — so this is a thin newtype. Grounded on
//! `algebra/src/curves/models/bn/g1.rs`.

use num_traits::Zero;

use crate::curves::bn::BnParameters;
use crate::curves::short_weierstrass_jacobian::{GroupAffine, GroupProjective};
use crate::curves::AffineCurve;

pub type G1Affine<P> = GroupAffine<<P as BnParameters>::G1Parameters>;
pub type G1Projective<P> = GroupProjective<<P as BnParameters>::G1Parameters>;

#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters"),
    PartialEq(bound = "P: BnParameters"),
    Eq(bound = "P: BnParameters")
)]
pub struct G1Prepared<P: BnParameters>(pub G1Affine<P>);

impl<P: BnParameters> G1Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_affine(p: G1Affine<P>) -> Self {
        G1Prepared(p)
    }
}

impl<P: BnParameters> Default for G1Prepared<P> {
    fn default() -> Self {
        G1Prepared(G1Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: BnParameters> From<G1Affine<P>> for G1Prepared<P> {
    fn from(p: G1Affine<P>) -> Self {
        G1Prepared::from_affine(p)
    }
}
