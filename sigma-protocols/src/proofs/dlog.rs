//! Proof of knowledge of a discrete logarithm, as in Schnorr's identification scheme \[1\].
//!
//! The prover knows `w` such that `h = g^w`. It sends `a = g^r` for random `r`, receives a
//! challenge `e` and responds with `z = r + e·w mod q`. The verifier checks `g^z == a·h^e`.
//!
//! ## References
//!
//! 1. C. P. Schnorr. "Efficient signature generation by smart cards". Journal of Cryptology, 1991.

use super::Announcement;
use crate::{
    challenge::{Challenge, ChallengeBuilder, ChallengeDigest},
    common::*,
    secret::SecretScalar,
    serde::SerializeElement,
    CheatAttempt, ConfigurationError, InputError, SigmaProtocol, SoundnessParameter,
};
use ff::Field;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Knowledge of the discrete logarithm of a group element to the base of the group generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DlogKnowledge<G> {
    generator: G,
    soundness: SoundnessParameter,
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> DlogKnowledge<G> {
    /// Construct the protocol over the group `G`.
    ///
    /// Fails unless `2^t` is less than the group order.
    pub fn new(soundness: SoundnessParameter) -> Result<Self, ConfigurationError> {
        let soundness = soundness.check_group_order::<Scalar>()?;
        debug!(bits = soundness.bits(), "constructed discrete logarithm protocol");
        Ok(Self {
            generator: G::generator(),
            soundness,
        })
    }

    /// The generator `g`.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> ChallengeDigest for DlogKnowledge<G> {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(b"dlog");
        builder.digest_bytes(self.soundness.bits().to_be_bytes());
        builder.digest_bytes(self.generator.to_bytes());
    }
}

/// The statement `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "G: SerializeElement")]
pub struct DlogStatement<G>
where
    G: Group<Scalar = Scalar>,
{
    #[serde(with = "SerializeElement")]
    h: G,
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> DlogStatement<G> {
    /// Construct the statement that the prover knows the discrete logarithm of `h`.
    pub fn new(h: G) -> Self {
        Self { h }
    }

    /// The element whose discrete logarithm is known to the prover.
    pub fn h(&self) -> &G {
        &self.h
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> ChallengeDigest for DlogStatement<G> {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.h.to_bytes());
    }
}

/// The witness `w`.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct DlogWitness {
    w: SecretScalar,
}

impl DlogWitness {
    /// Wrap the discrete logarithm `w` as a witness.
    pub fn new(w: Scalar) -> Self {
        Self {
            w: SecretScalar::new(w),
        }
    }
}

/// The prover's randomness `r`.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Clone))]
pub struct DlogRandomness {
    r: SecretScalar,
}

/// The response `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlogResponse(#[serde(with = "SerializeElement")] Scalar);

impl DlogResponse {
    /// The response scalar.
    pub fn to_scalar(self) -> Scalar {
        self.0
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> SigmaProtocol for DlogKnowledge<G> {
    type Witness = DlogWitness;
    type PublicInput = DlogStatement<G>;
    type Randomness = DlogRandomness;
    type FirstMessage = Announcement<G>;
    type SecondMessage = DlogResponse;
    type ChallengeValue = Scalar;

    fn soundness(&self) -> SoundnessParameter {
        self.soundness
    }

    fn challenge_value(&self, challenge: &Challenge) -> Scalar {
        challenge.to_scalar()
    }

    fn check_witness(
        &self,
        witness: &DlogWitness,
        public_input: &DlogStatement<G>,
    ) -> Result<(), InputError> {
        if self.generator * *witness.w == public_input.h {
            Ok(())
        } else {
            Err(InputError::WitnessMismatch)
        }
    }

    fn sample_randomness(&self, rng: &mut impl Rng) -> DlogRandomness {
        DlogRandomness {
            r: SecretScalar::new(Scalar::random(&mut *rng)),
        }
    }

    fn first_message(&self, _: &DlogStatement<G>, randomness: &DlogRandomness) -> Announcement<G> {
        Announcement::from_element(self.generator * *randomness.r)
    }

    fn second_message(
        &self,
        witness: &DlogWitness,
        randomness: DlogRandomness,
        challenge: &Scalar,
    ) -> DlogResponse {
        DlogResponse(*randomness.r + challenge * *witness.w)
    }

    fn check_received(
        &self,
        _: &DlogStatement<G>,
        _: &Announcement<G>,
        _: &DlogResponse,
    ) -> Result<(), CheatAttempt> {
        // Elements and scalars are checked when they are decoded.
        Ok(())
    }

    fn verification_holds(
        &self,
        public_input: &DlogStatement<G>,
        first_message: &Announcement<G>,
        challenge: &Scalar,
        second_message: &DlogResponse,
    ) -> bool {
        self.generator * second_message.0 == first_message.to_element() + public_input.h * challenge
    }

    fn simulate_response(&self, rng: &mut impl Rng) -> DlogResponse {
        DlogResponse(Scalar::random(&mut *rng))
    }

    fn solve_first_message(
        &self,
        public_input: &DlogStatement<G>,
        challenge: &Scalar,
        second_message: &DlogResponse,
    ) -> Result<Announcement<G>, InputError> {
        Ok(Announcement::from_element(
            self.generator * second_message.0 - public_input.h * challenge,
        ))
    }

    fn encode_first_message(&self, first_message: &Announcement<G>) -> Vec<u8> {
        first_message.to_bytes()
    }

    fn decode_first_message(&self, bytes: &[u8]) -> Result<Announcement<G>, CheatAttempt> {
        Announcement::from_bytes(bytes)
    }

    fn encode_second_message(&self, second_message: &DlogResponse) -> Vec<u8> {
        second_message.0.to_bytes().to_vec()
    }

    fn decode_second_message(&self, bytes: &[u8]) -> Result<DlogResponse, CheatAttempt> {
        decode_scalar(bytes).map(DlogResponse)
    }
}
