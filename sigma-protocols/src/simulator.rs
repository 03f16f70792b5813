//! Simulation of accepting transcripts without a witness.
//!
//! Given the challenge in advance, the simulator samples a second message from the distribution
//! of honest responses and solves the verification equation for the first message. The resulting
//! transcripts are distributed identically to honest ones, which is what makes the protocols
//! honest-verifier zero-knowledge.

use crate::{challenge::Challenge, common::Rng, Error, InputError, SigmaProtocol, Transcript};
use tracing::warn;

/// Simulates transcripts of one Sigma protocol.
#[derive(Debug)]
pub struct Simulator<'a, P: SigmaProtocol> {
    protocol: &'a P,
}

impl<'a, P: SigmaProtocol> Simulator<'a, P> {
    /// Construct a simulator for `protocol`.
    pub fn new(protocol: &'a P) -> Self {
        Self { protocol }
    }

    /// Simulate a transcript for `public_input` under the given challenge.
    ///
    /// Fails with a [`CheatAttempt`](crate::CheatAttempt) if the challenge is not exactly `t/8`
    /// bytes long, and with an [`InputError`] if `public_input` is not a statement this protocol
    /// can be stated over.
    pub fn simulate(
        &self,
        rng: &mut impl Rng,
        public_input: &P::PublicInput,
        challenge: &[u8],
    ) -> Result<Transcript<P>, Error> {
        let challenge =
            Challenge::decode(challenge, self.protocol.soundness()).map_err(|cheat| {
                warn!(%cheat, "simulator received a malformed challenge");
                cheat
            })?;
        Ok(self.simulate_with(rng, public_input, challenge)?)
    }

    /// Simulate a transcript for `public_input` under a uniformly random challenge.
    ///
    /// The challenge is always well formed; the only failure is a `public_input` outside of the
    /// structure this protocol is stated over.
    pub fn simulate_random(
        &self,
        rng: &mut impl Rng,
        public_input: &P::PublicInput,
    ) -> Result<Transcript<P>, InputError> {
        let challenge = Challenge::random(self.protocol.soundness(), rng);
        self.simulate_with(rng, public_input, challenge)
    }

    fn simulate_with(
        &self,
        rng: &mut impl Rng,
        public_input: &P::PublicInput,
        challenge: Challenge,
    ) -> Result<Transcript<P>, InputError> {
        let second_message = self.protocol.simulate_response(rng);
        let first_message = self
            .protocol
            .solve_first_message(
                public_input,
                &self.protocol.challenge_value(&challenge),
                &second_message,
            )
            .map_err(|error| {
                warn!(%error, "simulator received an unusable statement");
                error
            })?;
        Ok(Transcript {
            first_message,
            challenge,
            second_message,
        })
    }
}
