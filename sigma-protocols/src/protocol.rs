//! The contract shared by every Sigma protocol, and the transcript of one execution.
//!
//! A [`SigmaProtocol`] fixes a relation and its algebra: how randomness is sampled, how each
//! message is computed and checked, and how a simulator solves for a first message. It does not
//! enforce the order of the moves; the [`Prover`](crate::Prover), [`Verifier`](crate::Verifier)
//! and [`Simulator`](crate::Simulator) engines do that, and validate every challenge before
//! calling in here.

use crate::{
    challenge::{Challenge, ChallengeDigest},
    common::Rng,
    CheatAttempt, InputError, SoundnessParameter,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use zeroize::ZeroizeOnDrop;

/// A three-move proof of knowledge of a witness for a public relation.
///
/// Implementations are immutable once constructed and hold the structure the relation is stated
/// over, along with a validated [`SoundnessParameter`].
pub trait SigmaProtocol: ChallengeDigest + Debug + Clone + PartialEq {
    /// The prover's secret. Wiped when dropped.
    type Witness: Debug + ZeroizeOnDrop;
    /// The public input, known to both parties.
    type PublicInput: ChallengeDigest + Debug + Clone + PartialEq;
    /// The prover's ephemeral randomness for one execution. Wiped when dropped.
    type Randomness: Debug + ZeroizeOnDrop;
    /// The message sent by the prover in the first move.
    type FirstMessage: ChallengeDigest + Debug + Clone + PartialEq;
    /// The message sent by the prover in the third move.
    type SecondMessage: Debug + Clone + PartialEq;
    /// The challenge as the protocol's arithmetic consumes it.
    type ChallengeValue;

    /// The soundness parameter the protocol was constructed with.
    fn soundness(&self) -> SoundnessParameter;

    /// Interpret a challenge of the correct length.
    fn challenge_value(&self, challenge: &Challenge) -> Self::ChallengeValue;

    /// Check that `witness` satisfies the relation for `public_input`.
    fn check_witness(
        &self,
        witness: &Self::Witness,
        public_input: &Self::PublicInput,
    ) -> Result<(), InputError>;

    /// Sample fresh randomness for one execution.
    fn sample_randomness(&self, rng: &mut impl Rng) -> Self::Randomness;

    /// Compute the first message from the randomness.
    fn first_message(
        &self,
        public_input: &Self::PublicInput,
        randomness: &Self::Randomness,
    ) -> Self::FirstMessage;

    /// Compute the second message, consuming the randomness.
    fn second_message(
        &self,
        witness: &Self::Witness,
        randomness: Self::Randomness,
        challenge: &Self::ChallengeValue,
    ) -> Self::SecondMessage;

    /// Check that every element received from the prover, and the public input, lies in the
    /// structure the relation is stated over.
    fn check_received(
        &self,
        public_input: &Self::PublicInput,
        first_message: &Self::FirstMessage,
        second_message: &Self::SecondMessage,
    ) -> Result<(), CheatAttempt>;

    /// Evaluate the verification equation on members of the structure.
    fn verification_holds(
        &self,
        public_input: &Self::PublicInput,
        first_message: &Self::FirstMessage,
        challenge: &Self::ChallengeValue,
        second_message: &Self::SecondMessage,
    ) -> bool;

    /// Sample a second message from the distribution of honest responses.
    fn simulate_response(&self, rng: &mut impl Rng) -> Self::SecondMessage;

    /// Solve the verification equation for the first message.
    ///
    /// Fails if `public_input` does not lie in the structure this instance is stated over, in
    /// which case no first message can satisfy the equation.
    fn solve_first_message(
        &self,
        public_input: &Self::PublicInput,
        challenge: &Self::ChallengeValue,
        second_message: &Self::SecondMessage,
    ) -> Result<Self::FirstMessage, InputError>;

    /// Encode a first message for transport.
    fn encode_first_message(&self, first_message: &Self::FirstMessage) -> Vec<u8>;

    /// Decode a first message received from the prover, checking membership.
    fn decode_first_message(&self, bytes: &[u8]) -> Result<Self::FirstMessage, CheatAttempt>;

    /// Encode a second message for transport.
    fn encode_second_message(&self, second_message: &Self::SecondMessage) -> Vec<u8>;

    /// Decode a second message received from the prover, checking membership.
    fn decode_second_message(&self, bytes: &[u8]) -> Result<Self::SecondMessage, CheatAttempt>;
}

/// The messages exchanged in one execution of a Sigma protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P::FirstMessage: Serialize, P::SecondMessage: Serialize",
    deserialize = "P::FirstMessage: Deserialize<'de>, P::SecondMessage: Deserialize<'de>"
))]
pub struct Transcript<P: SigmaProtocol> {
    /// The prover's first message.
    pub first_message: P::FirstMessage,
    /// The verifier's challenge.
    pub challenge: Challenge,
    /// The prover's second message.
    pub second_message: P::SecondMessage,
}
