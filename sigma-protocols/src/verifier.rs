//! The verifier's side of a Sigma protocol.
//!
//! The verifier holds no state between moves: it samples a challenge, and later checks the
//! prover's messages against the public input and that challenge. Every rejection is a
//! [`CheatAttempt`]: the prover sent something an honest prover never would.

use crate::{
    challenge::{Challenge, ChallengeBuilder},
    common::Rng,
    CheatAttempt, SigmaProtocol, Transcript,
};
use tracing::warn;

/// Verifies executions of one Sigma protocol.
#[derive(Debug)]
pub struct Verifier<'a, P: SigmaProtocol> {
    protocol: &'a P,
}

impl<P: SigmaProtocol> Clone for Verifier<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: SigmaProtocol> Copy for Verifier<'_, P> {}

impl<'a, P: SigmaProtocol> Verifier<'a, P> {
    /// Construct a verifier for `protocol`.
    pub fn new(protocol: &'a P) -> Self {
        Self { protocol }
    }

    /// Sample a challenge of exactly `t` random bits.
    pub fn sample_challenge(&self, rng: &mut impl Rng) -> Challenge {
        Challenge::random(self.protocol.soundness(), rng)
    }

    /// Decode a first message received from the prover.
    pub fn decode_first_message(&self, bytes: &[u8]) -> Result<P::FirstMessage, CheatAttempt> {
        self.protocol.decode_first_message(bytes).map_err(reject)
    }

    /// Decode a second message received from the prover.
    pub fn decode_second_message(&self, bytes: &[u8]) -> Result<P::SecondMessage, CheatAttempt> {
        self.protocol.decode_second_message(bytes).map_err(reject)
    }

    /// Check the prover's messages against the public input and the challenge.
    ///
    /// Checks, in order, that the challenge has exactly `t/8` bytes, that every received element
    /// is a member of the structure the relation is stated over, and that the verification
    /// equation holds.
    pub fn verify(
        &self,
        public_input: &P::PublicInput,
        first_message: &P::FirstMessage,
        challenge: &Challenge,
        second_message: &P::SecondMessage,
    ) -> Result<(), CheatAttempt> {
        challenge
            .check_length(self.protocol.soundness())
            .map_err(reject)?;
        self.protocol
            .check_received(public_input, first_message, second_message)
            .map_err(reject)?;
        let challenge = self.protocol.challenge_value(challenge);
        if self
            .protocol
            .verification_holds(public_input, first_message, &challenge, second_message)
        {
            Ok(())
        } else {
            Err(reject(CheatAttempt::VerificationFailed))
        }
    }

    /// Check a complete transcript against the public input.
    pub fn verify_transcript(
        &self,
        public_input: &P::PublicInput,
        transcript: &Transcript<P>,
    ) -> Result<(), CheatAttempt> {
        self.verify(
            public_input,
            &transcript.first_message,
            &transcript.challenge,
            &transcript.second_message,
        )
    }

    /// Check a transcript produced by
    /// [`Prover::prove_non_interactive`](crate::Prover::prove_non_interactive) under the same
    /// `context`.
    ///
    /// The challenge is recomputed from the context, the protocol, the public input and the first
    /// message; a transcript carrying any other challenge is rejected.
    pub fn verify_non_interactive(
        &self,
        public_input: &P::PublicInput,
        transcript: &Transcript<P>,
        context: &[u8],
    ) -> Result<(), CheatAttempt> {
        let expected = ChallengeBuilder::new()
            .with_bytes(context)
            .with(self.protocol)
            .with(public_input)
            .with(&transcript.first_message)
            .finish(self.protocol.soundness());
        if expected != transcript.challenge {
            return Err(reject(CheatAttempt::VerificationFailed));
        }
        self.verify_transcript(public_input, transcript)
    }
}

fn reject(cheat: CheatAttempt) -> CheatAttempt {
    warn!(%cheat, "verifier rejected the prover's messages");
    cheat
}
