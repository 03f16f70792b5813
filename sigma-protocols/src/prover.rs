//! The prover's side of a Sigma protocol.
//!
//! An execution moves through three states, each represented by a type:
//! 1. [`Prover`] binds a witness to a public input, once it has checked that they satisfy the
//!    relation;
//! 2. [`PendingResponse`] owns the randomness behind a first message that has been sent;
//! 3. the second message, computed by consuming the pending state.
//!
//! The randomness moves into the second-message computation and is wiped there, or when the
//! pending state is dropped on abort. Responding twice to one first message is therefore
//! unrepresentable. A [`Prover`] may run any number of executions, each with fresh randomness.

use crate::{
    challenge::{Challenge, ChallengeBuilder},
    common::Rng,
    CheatAttempt, InputError, SigmaProtocol, Transcript,
};
use tracing::warn;

/// A witness bound to the public input it satisfies.
#[derive(Debug)]
pub struct Prover<'a, P: SigmaProtocol> {
    protocol: &'a P,
    witness: P::Witness,
    public_input: P::PublicInput,
}

impl<'a, P: SigmaProtocol> Prover<'a, P> {
    /// Bind a witness to a public input.
    ///
    /// Fails if the witness does not satisfy the relation for the public input.
    pub fn new(
        protocol: &'a P,
        witness: P::Witness,
        public_input: P::PublicInput,
    ) -> Result<Self, InputError> {
        protocol.check_witness(&witness, &public_input)?;
        Ok(Self {
            protocol,
            witness,
            public_input,
        })
    }

    /// The public input this prover proves a statement about.
    pub fn public_input(&self) -> &P::PublicInput {
        &self.public_input
    }

    /// Sample fresh randomness for one execution.
    pub fn sample_random_values(&self, rng: &mut impl Rng) -> P::Randomness {
        self.protocol.sample_randomness(rng)
    }

    /// Compute the first message, taking ownership of the randomness it was computed from.
    ///
    /// Randomness cannot back two first messages:
    ///
    /// ```compile_fail
    /// # use sigma_protocols::{proofs::*, Prover, SoundnessParameter};
    /// # use bls12_381::{G1Projective, Scalar};
    /// # use group::Group;
    /// # let mut rng = rand::thread_rng();
    /// # let protocol = DlogKnowledge::<G1Projective>::new(SoundnessParameter::new(80)?)?;
    /// # let statement = DlogStatement::new(G1Projective::generator() * Scalar::one());
    /// # let prover = Prover::new(&protocol, DlogWitness::new(Scalar::one()), statement)?;
    /// let randomness = prover.sample_random_values(&mut rng);
    /// let first = prover.compute_first_message(randomness);
    /// let second = prover.compute_first_message(randomness);
    /// # Ok::<(), sigma_protocols::Error>(())
    /// ```
    pub fn compute_first_message(&self, randomness: P::Randomness) -> PendingResponse<'_, P> {
        let first_message = self.protocol.first_message(&self.public_input, &randomness);
        PendingResponse {
            prover: self,
            randomness,
            first_message,
        }
    }

    /// Run a complete execution non-interactively, replacing the verifier's challenge by a hash of
    /// `context`, the protocol, the public input and the first message.
    ///
    /// The `context` should bind the proof to the surrounding session.
    pub fn prove_non_interactive(&self, rng: &mut impl Rng, context: &[u8]) -> Transcript<P> {
        let pending = self.compute_first_message(self.sample_random_values(rng));
        let challenge = ChallengeBuilder::new()
            .with_bytes(context)
            .with(self.protocol)
            .with(&self.public_input)
            .with(&pending.first_message)
            .finish(self.protocol.soundness());
        let first_message = pending.first_message.clone();
        let second_message = pending.respond(&challenge);
        Transcript {
            first_message,
            challenge,
            second_message,
        }
    }
}

/// The state of a prover that has sent its first message and awaits a challenge.
#[derive(Debug)]
pub struct PendingResponse<'p, P: SigmaProtocol> {
    prover: &'p Prover<'p, P>,
    randomness: P::Randomness,
    first_message: P::FirstMessage,
}

impl<'p, P: SigmaProtocol> PendingResponse<'p, P> {
    /// The first message to send to the verifier.
    pub fn first_message(&self) -> &P::FirstMessage {
        &self.first_message
    }

    /// Compute the second message in response to the challenge received from the verifier.
    ///
    /// Fails if the challenge is not exactly `t/8` bytes long. The randomness is wiped whether or
    /// not this succeeds, and a pending response answers at most one challenge:
    ///
    /// ```compile_fail
    /// # use sigma_protocols::{proofs::*, Prover, SoundnessParameter};
    /// # use bls12_381::{G1Projective, Scalar};
    /// # use group::Group;
    /// # let mut rng = rand::thread_rng();
    /// # let protocol = DlogKnowledge::<G1Projective>::new(SoundnessParameter::new(80)?)?;
    /// # let statement = DlogStatement::new(G1Projective::generator() * Scalar::one());
    /// # let prover = Prover::new(&protocol, DlogWitness::new(Scalar::one()), statement)?;
    /// let pending = prover.compute_first_message(prover.sample_random_values(&mut rng));
    /// let first = pending.compute_second_message(&[1; 10])?;
    /// let second = pending.compute_second_message(&[2; 10])?;
    /// # Ok::<(), sigma_protocols::Error>(())
    /// ```
    ///
    /// Answering once compiles:
    ///
    /// ```
    /// # use sigma_protocols::{proofs::*, Prover, SoundnessParameter};
    /// # use bls12_381::{G1Projective, Scalar};
    /// # use group::Group;
    /// # let mut rng = rand::thread_rng();
    /// # let protocol = DlogKnowledge::<G1Projective>::new(SoundnessParameter::new(80)?)?;
    /// # let statement = DlogStatement::new(G1Projective::generator() * Scalar::one());
    /// # let prover = Prover::new(&protocol, DlogWitness::new(Scalar::one()), statement)?;
    /// let pending = prover.compute_first_message(prover.sample_random_values(&mut rng));
    /// let response = pending.compute_second_message(&[1; 10])?;
    /// # Ok::<(), sigma_protocols::Error>(())
    /// ```
    pub fn compute_second_message(
        self,
        challenge: &[u8],
    ) -> Result<P::SecondMessage, CheatAttempt> {
        let challenge = Challenge::decode(challenge, self.prover.protocol.soundness())
            .map_err(|cheat| {
                warn!(%cheat, "prover received a malformed challenge");
                cheat
            })?;
        Ok(self.respond(&challenge))
    }

    fn respond(self, challenge: &Challenge) -> P::SecondMessage {
        let protocol = self.prover.protocol;
        protocol.second_message(
            &self.prover.witness,
            self.randomness,
            &protocol.challenge_value(challenge),
        )
    }
}
