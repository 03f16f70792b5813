//! Proof of knowledge of the opening of a Pedersen commitment.
//!
//! The prover knows `(x, r)` such that `c = h^x g^r`. It sends `a = h^α g^β` for random `α, β`,
//! receives a challenge `e` and responds with `z1 = α + e·x` and `z2 = β + e·r`, both modulo `q`.
//! The verifier checks `h^z1 g^z2 == a·c^e`.

use super::Announcement;
use crate::{
    challenge::{Challenge, ChallengeBuilder, ChallengeDigest},
    common::*,
    pedersen::{Commitment, PedersenParameters},
    secret::SecretScalar,
    serde::SerializeElement,
    CheatAttempt, ConfigurationError, InputError, SigmaProtocol, SoundnessParameter,
};
use ff::Field;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Knowledge of the opening of a Pedersen commitment.
///
/// The commitment parameters are part of the statement, so one instance serves commitments under
/// any parameters over the group `G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedersenOpeningKnowledge<G> {
    soundness: SoundnessParameter,
    _group: PhantomData<G>,
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> PedersenOpeningKnowledge<G> {
    /// Construct the protocol over the group `G`.
    ///
    /// Fails unless `2^t` is less than the group order.
    pub fn new(soundness: SoundnessParameter) -> Result<Self, ConfigurationError> {
        let soundness = soundness.check_group_order::<Scalar>()?;
        debug!(bits = soundness.bits(), "constructed Pedersen opening protocol");
        Ok(Self {
            soundness,
            _group: PhantomData,
        })
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> ChallengeDigest for PedersenOpeningKnowledge<G> {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(b"pedersen-opening");
        builder.digest_bytes(self.soundness.bits().to_be_bytes());
    }
}

/// The statement: commitment parameters `(g, h)` and a commitment `c` under them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "G: SerializeElement")]
pub struct PedersenStatement<G>
where
    G: Group<Scalar = Scalar>,
{
    params: PedersenParameters<G>,
    commitment: Commitment<G>,
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> PedersenStatement<G> {
    /// Construct the statement that the prover can open `commitment` under `params`.
    pub fn new(params: PedersenParameters<G>, commitment: Commitment<G>) -> Self {
        Self { params, commitment }
    }

    /// The commitment parameters.
    pub fn params(&self) -> &PedersenParameters<G> {
        &self.params
    }

    /// The commitment.
    pub fn commitment(&self) -> &Commitment<G> {
        &self.commitment
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> ChallengeDigest for PedersenStatement<G> {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(&self.params);
        builder.digest(&self.commitment);
    }
}

/// The witness: the committed value `x` and the blinding factor `r`.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct PedersenWitness {
    value: SecretScalar,
    blinding_factor: SecretScalar,
}

impl PedersenWitness {
    /// Wrap an opening of a commitment as a witness.
    pub fn new(value: Scalar, blinding_factor: BlindingFactor) -> Self {
        Self {
            value: SecretScalar::new(value),
            blinding_factor: SecretScalar::new(blinding_factor.to_scalar()),
        }
    }
}

/// The prover's randomness `(α, β)`.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Clone))]
pub struct PedersenRandomness {
    alpha: SecretScalar,
    beta: SecretScalar,
}

/// The response `(z1, z2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedersenResponse {
    #[serde(with = "SerializeElement")]
    z1: Scalar,
    #[serde(with = "SerializeElement")]
    z2: Scalar,
}

impl PedersenResponse {
    /// The response for the committed value.
    pub fn value_response(&self) -> Scalar {
        self.z1
    }

    /// The response for the blinding factor.
    pub fn blinding_factor_response(&self) -> Scalar {
        self.z2
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> SigmaProtocol for PedersenOpeningKnowledge<G> {
    type Witness = PedersenWitness;
    type PublicInput = PedersenStatement<G>;
    type Randomness = PedersenRandomness;
    type FirstMessage = Announcement<G>;
    type SecondMessage = PedersenResponse;
    type ChallengeValue = Scalar;

    fn soundness(&self) -> SoundnessParameter {
        self.soundness
    }

    fn challenge_value(&self, challenge: &Challenge) -> Scalar {
        challenge.to_scalar()
    }

    fn check_witness(
        &self,
        witness: &PedersenWitness,
        public_input: &PedersenStatement<G>,
    ) -> Result<(), InputError> {
        let opens = public_input.commitment.verify_opening(
            &public_input.params,
            &witness.value,
            BlindingFactor::from_scalar(*witness.blinding_factor),
        );
        if opens {
            Ok(())
        } else {
            Err(InputError::WitnessMismatch)
        }
    }

    fn sample_randomness(&self, rng: &mut impl Rng) -> PedersenRandomness {
        PedersenRandomness {
            alpha: SecretScalar::new(Scalar::random(&mut *rng)),
            beta: SecretScalar::new(Scalar::random(&mut *rng)),
        }
    }

    fn first_message(
        &self,
        public_input: &PedersenStatement<G>,
        randomness: &PedersenRandomness,
    ) -> Announcement<G> {
        let params = &public_input.params;
        Announcement::from_element(*params.h() * *randomness.alpha + *params.g() * *randomness.beta)
    }

    fn second_message(
        &self,
        witness: &PedersenWitness,
        randomness: PedersenRandomness,
        challenge: &Scalar,
    ) -> PedersenResponse {
        PedersenResponse {
            z1: *randomness.alpha + challenge * *witness.value,
            z2: *randomness.beta + challenge * *witness.blinding_factor,
        }
    }

    fn check_received(
        &self,
        _: &PedersenStatement<G>,
        _: &Announcement<G>,
        _: &PedersenResponse,
    ) -> Result<(), CheatAttempt> {
        Ok(())
    }

    fn verification_holds(
        &self,
        public_input: &PedersenStatement<G>,
        first_message: &Announcement<G>,
        challenge: &Scalar,
        second_message: &PedersenResponse,
    ) -> bool {
        let params = &public_input.params;
        let lhs = *params.h() * second_message.z1 + *params.g() * second_message.z2;
        let rhs = first_message.to_element() + public_input.commitment.to_element() * challenge;
        lhs == rhs
    }

    fn simulate_response(&self, rng: &mut impl Rng) -> PedersenResponse {
        PedersenResponse {
            z1: Scalar::random(&mut *rng),
            z2: Scalar::random(&mut *rng),
        }
    }

    fn solve_first_message(
        &self,
        public_input: &PedersenStatement<G>,
        challenge: &Scalar,
        second_message: &PedersenResponse,
    ) -> Result<Announcement<G>, InputError> {
        let params = &public_input.params;
        Ok(Announcement::from_element(
            *params.h() * second_message.z1 + *params.g() * second_message.z2
                - public_input.commitment.to_element() * challenge,
        ))
    }

    fn encode_first_message(&self, first_message: &Announcement<G>) -> Vec<u8> {
        first_message.to_bytes()
    }

    fn decode_first_message(&self, bytes: &[u8]) -> Result<Announcement<G>, CheatAttempt> {
        Announcement::from_bytes(bytes)
    }

    fn encode_second_message(&self, second_message: &PedersenResponse) -> Vec<u8> {
        let mut bytes = second_message.z1.to_bytes().to_vec();
        bytes.extend_from_slice(&second_message.z2.to_bytes());
        bytes
    }

    fn decode_second_message(&self, bytes: &[u8]) -> Result<PedersenResponse, CheatAttempt> {
        if bytes.len() != 64 {
            return Err(CheatAttempt::InvalidScalar);
        }
        let (z1, z2) = bytes.split_at(32);
        Ok(PedersenResponse {
            z1: decode_scalar(z1)?,
            z2: decode_scalar(z2)?,
        })
    }
}
