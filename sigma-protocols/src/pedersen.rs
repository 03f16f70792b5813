//! Pedersen commitments \[1\] to a single scalar over the prime-order groups from BLS12-381.
//!
//! A commitment to `x` with blinding factor `r` is `c = h^x g^r`, written additively as
//! `x·h + r·g`. Commitments may be formed using [`PedersenParameters::commit`] and verified with
//! [`Commitment::verify_opening`]. Knowledge of an opening is proven with
//! [`PedersenOpeningKnowledge`](crate::proofs::PedersenOpeningKnowledge).
//! ```
//! # use sigma_protocols::{BlindingFactor, pedersen::PedersenParameters};
//! # use bls12_381::{G1Projective, Scalar};
//! # use ff::Field;
//! # let mut rng = rand::thread_rng();
//! let params = PedersenParameters::<G1Projective>::new(&mut rng);
//! let x = Scalar::random(&mut rng);
//! let bf = BlindingFactor::new(&mut rng);
//! let commitment = params.commit(&x, bf);
//! assert!(commitment.verify_opening(&params, &x, bf));
//! ```
//!
//! ## References
//!
//! 1. Torben Pyrds Pedersen. "Non-interactive and information-theoretic secure verifiable secret
//!    sharing". 1992. URL: <https://www.cs.cornell.edu/courses/cs754/2001fa/129.PDF>

use crate::{common::*, serde::SerializeElement};
use serde::{Deserialize, Serialize};

/// A Pedersen commitment to a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "G: SerializeElement")]
pub struct Commitment<G>(#[serde(with = "SerializeElement")] pub(crate) G)
where
    G: Group<Scalar = Scalar>;

impl<G: Group<Scalar = Scalar>> Commitment<G> {
    /// Verify a provided opening of the commitment.
    pub fn verify_opening(
        &self,
        pedersen_params: &PedersenParameters<G>,
        x: &Scalar,
        bf: BlindingFactor,
    ) -> bool {
        pedersen_params.commit(x, bf) == *self
    }

    /// Wrap a group element received as a commitment.
    pub fn from_element(element: G) -> Self {
        Self(element)
    }

    /// Get the inner group element representing the commitment.
    pub fn to_element(self) -> G {
        self.0
    }
}

/// Parameters for Pedersen commitments: the group generator `g` and a second generator `h` whose
/// discrete logarithm with respect to `g` is unknown.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(bound = "G: SerializeElement")]
pub struct PedersenParameters<G>
where
    G: Group<Scalar = Scalar>,
{
    #[serde(with = "SerializeElement")]
    g: G,
    #[serde(with = "SerializeElement")]
    h: G,
}

impl<G: Group<Scalar = Scalar>> PedersenParameters<G> {
    /// Generate a new set of Pedersen parameters over the fixed group generator.
    ///
    /// `h` is chosen uniformly at random, such that no discrete logarithm relationship with `g`
    /// is known.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            g: G::generator(),
            h: random_non_identity(rng),
        }
    }

    /// Produce Pedersen parameters from a pair of known generators.
    pub fn from_generators(g: G, h: G) -> Self {
        Self { g, h }
    }

    /// Form a commitment `h^x g^r` to `x` with blinding factor `r`.
    pub fn commit(&self, x: &Scalar, bf: BlindingFactor) -> Commitment<G> {
        Commitment(self.h * x + self.g * bf.as_scalar())
    }

    /// The generator raised to the blinding factor.
    pub fn g(&self) -> &G {
        &self.g
    }

    /// The generator raised to the committed value.
    pub fn h(&self) -> &G {
        &self.h
    }
}

impl BlindingFactor {
    pub(crate) fn as_scalar(&self) -> &Scalar {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ff::Field;

    fn commit_open<G: Group<Scalar = Scalar>>() {
        let mut rng = crate::test::rng();
        let params = PedersenParameters::<G>::new(&mut rng);
        let x = Scalar::random(&mut rng);
        let bf = BlindingFactor::new(&mut rng);

        let com = params.commit(&x, bf);
        assert!(com.verify_opening(&params, &x, bf));
    }

    #[test]
    fn commit_open_g1() {
        commit_open::<G1Projective>()
    }

    #[test]
    fn commit_open_g2() {
        commit_open::<G2Projective>()
    }

    fn commit_does_not_open_on_wrong_value<G: Group<Scalar = Scalar>>() {
        let mut rng = crate::test::rng();
        let params = PedersenParameters::<G>::new(&mut rng);
        let x = Scalar::random(&mut rng);
        let bf = BlindingFactor::new(&mut rng);
        let bad_x = Scalar::random(&mut rng);

        assert_ne!(x, bad_x, "unfortunate RNG seed: bad_x should be different");

        let com = params.commit(&x, bf);
        assert!(!com.verify_opening(&params, &bad_x, bf));
    }

    #[test]
    fn commit_does_not_open_on_wrong_value_g1() {
        commit_does_not_open_on_wrong_value::<G1Projective>()
    }

    #[test]
    fn commit_does_not_open_on_wrong_value_g2() {
        commit_does_not_open_on_wrong_value::<G2Projective>()
    }

    fn commit_does_not_open_on_wrong_bf<G: Group<Scalar = Scalar>>() {
        let mut rng = crate::test::rng();
        let params = PedersenParameters::<G>::new(&mut rng);
        let x = Scalar::random(&mut rng);
        let bf = BlindingFactor::new(&mut rng);
        let bad_bf = BlindingFactor::new(&mut rng);

        assert_ne!(
            bf.0, bad_bf.0,
            "unfortunate RNG seed: bad_bf should be different"
        );

        let com = params.commit(&x, bf);
        assert!(!com.verify_opening(&params, &x, bad_bf));
    }

    #[test]
    fn commit_does_not_open_on_wrong_bf_g1() {
        commit_does_not_open_on_wrong_bf::<G1Projective>()
    }

    #[test]
    fn commit_does_not_open_on_wrong_bf_g2() {
        commit_does_not_open_on_wrong_bf::<G2Projective>()
    }

    #[test]
    fn commitment_survives_serialization() {
        let mut rng = crate::test::rng();
        let params = PedersenParameters::<G1Projective>::new(&mut rng);
        let com = params.commit(&Scalar::random(&mut rng), BlindingFactor::new(&mut rng));

        let bytes = bincode::serialize(&(params, com)).unwrap();
        let (params2, com2): (PedersenParameters<G1Projective>, Commitment<G1Projective>) =
            bincode::deserialize(&bytes).unwrap();
        assert_eq!(params, params2);
        assert_eq!(com, com2);
    }
}
