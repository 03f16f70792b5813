//! Dispatch over the closed set of supported protocols, for callers that only learn which relation
//! is being proven at runtime.
//!
//! The generic engines rule out pairing a statement with the wrong protocol at compile time. Here
//! that check happens on every call instead, and a mismatch is an [`InputError::VariantMismatch`].

use crate::{
    common::*,
    proofs::{
        DamgardJurikKnowledge, DamgardJurikStatement, DlogKnowledge, DlogStatement,
        PedersenOpeningKnowledge, PedersenStatement,
    },
    Error, InputError, SigmaProtocol, Simulator, SoundnessParameter, Transcript,
    Verifier,
};
use std::fmt;

/// The supported relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Knowledge of a discrete logarithm.
    Dlog,
    /// Knowledge of the opening of a Pedersen commitment.
    PedersenOpening,
    /// Knowledge of the plaintext and randomness of a Damgård–Jurik ciphertext.
    DamgardJurik,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Dlog => "discrete logarithm",
            Variant::PedersenOpening => "Pedersen opening",
            Variant::DamgardJurik => "Damgård–Jurik",
        })
    }
}

/// One of the supported protocols.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySigmaProtocol<G: Group<Scalar = Scalar> + GroupEncoding> {
    /// Knowledge of a discrete logarithm.
    Dlog(DlogKnowledge<G>),
    /// Knowledge of the opening of a Pedersen commitment.
    PedersenOpening(PedersenOpeningKnowledge<G>),
    /// Knowledge of the plaintext and randomness of a Damgård–Jurik ciphertext.
    DamgardJurik(DamgardJurikKnowledge),
}

/// A statement for one of the supported protocols.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyStatement<G: Group<Scalar = Scalar> + GroupEncoding> {
    /// A statement for [`AnySigmaProtocol::Dlog`].
    Dlog(DlogStatement<G>),
    /// A statement for [`AnySigmaProtocol::PedersenOpening`].
    PedersenOpening(PedersenStatement<G>),
    /// A statement for [`AnySigmaProtocol::DamgardJurik`].
    DamgardJurik(DamgardJurikStatement),
}

/// A transcript of one of the supported protocols.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyTranscript<G: Group<Scalar = Scalar> + GroupEncoding> {
    /// A transcript of [`AnySigmaProtocol::Dlog`].
    Dlog(Transcript<DlogKnowledge<G>>),
    /// A transcript of [`AnySigmaProtocol::PedersenOpening`].
    PedersenOpening(Transcript<PedersenOpeningKnowledge<G>>),
    /// A transcript of [`AnySigmaProtocol::DamgardJurik`].
    DamgardJurik(Transcript<DamgardJurikKnowledge>),
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> AnyStatement<G> {
    /// The relation this statement belongs to.
    pub fn variant(&self) -> Variant {
        match self {
            AnyStatement::Dlog(_) => Variant::Dlog,
            AnyStatement::PedersenOpening(_) => Variant::PedersenOpening,
            AnyStatement::DamgardJurik(_) => Variant::DamgardJurik,
        }
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> AnyTranscript<G> {
    /// The relation this transcript belongs to.
    pub fn variant(&self) -> Variant {
        match self {
            AnyTranscript::Dlog(_) => Variant::Dlog,
            AnyTranscript::PedersenOpening(_) => Variant::PedersenOpening,
            AnyTranscript::DamgardJurik(_) => Variant::DamgardJurik,
        }
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> AnySigmaProtocol<G> {
    /// The relation this protocol proves.
    pub fn variant(&self) -> Variant {
        match self {
            AnySigmaProtocol::Dlog(_) => Variant::Dlog,
            AnySigmaProtocol::PedersenOpening(_) => Variant::PedersenOpening,
            AnySigmaProtocol::DamgardJurik(_) => Variant::DamgardJurik,
        }
    }

    /// The soundness parameter the protocol was constructed with.
    pub fn soundness(&self) -> SoundnessParameter {
        match self {
            AnySigmaProtocol::Dlog(protocol) => protocol.soundness(),
            AnySigmaProtocol::PedersenOpening(protocol) => protocol.soundness(),
            AnySigmaProtocol::DamgardJurik(protocol) => protocol.soundness(),
        }
    }

    /// Check a transcript against a statement.
    ///
    /// Fails with [`InputError::VariantMismatch`] if either belongs to another protocol, and with
    /// a [`CheatAttempt`](crate::CheatAttempt) if the transcript does not verify.
    pub fn verify(
        &self,
        statement: &AnyStatement<G>,
        transcript: &AnyTranscript<G>,
    ) -> Result<(), Error> {
        let verified = match (self, statement, transcript) {
            (
                AnySigmaProtocol::Dlog(protocol),
                AnyStatement::Dlog(statement),
                AnyTranscript::Dlog(transcript),
            ) => Verifier::new(protocol).verify_transcript(statement, transcript),
            (
                AnySigmaProtocol::PedersenOpening(protocol),
                AnyStatement::PedersenOpening(statement),
                AnyTranscript::PedersenOpening(transcript),
            ) => Verifier::new(protocol).verify_transcript(statement, transcript),
            (
                AnySigmaProtocol::DamgardJurik(protocol),
                AnyStatement::DamgardJurik(statement),
                AnyTranscript::DamgardJurik(transcript),
            ) => Verifier::new(protocol).verify_transcript(statement, transcript),
            _ => {
                self.check_variant(statement.variant())?;
                return Err(self.mismatch(transcript.variant()).into());
            }
        };
        Ok(verified?)
    }

    /// Simulate a transcript for `statement` under the given challenge.
    pub fn simulate(
        &self,
        rng: &mut impl Rng,
        statement: &AnyStatement<G>,
        challenge: &[u8],
    ) -> Result<AnyTranscript<G>, Error> {
        let transcript = match (self, statement) {
            (AnySigmaProtocol::Dlog(protocol), AnyStatement::Dlog(statement)) => {
                AnyTranscript::Dlog(Simulator::new(protocol).simulate(rng, statement, challenge)?)
            }
            (
                AnySigmaProtocol::PedersenOpening(protocol),
                AnyStatement::PedersenOpening(statement),
            ) => AnyTranscript::PedersenOpening(
                Simulator::new(protocol).simulate(rng, statement, challenge)?,
            ),
            (AnySigmaProtocol::DamgardJurik(protocol), AnyStatement::DamgardJurik(statement)) => {
                AnyTranscript::DamgardJurik(
                    Simulator::new(protocol).simulate(rng, statement, challenge)?,
                )
            }
            _ => return Err(self.mismatch(statement.variant()).into()),
        };
        Ok(transcript)
    }

    /// Simulate a transcript for `statement` under a uniformly random challenge.
    ///
    /// Fails if the statement belongs to another protocol, or is not a statement this protocol can
    /// be stated over.
    pub fn simulate_random(
        &self,
        rng: &mut impl Rng,
        statement: &AnyStatement<G>,
    ) -> Result<AnyTranscript<G>, InputError> {
        let transcript = match (self, statement) {
            (AnySigmaProtocol::Dlog(protocol), AnyStatement::Dlog(statement)) => {
                AnyTranscript::Dlog(Simulator::new(protocol).simulate_random(rng, statement)?)
            }
            (
                AnySigmaProtocol::PedersenOpening(protocol),
                AnyStatement::PedersenOpening(statement),
            ) => AnyTranscript::PedersenOpening(
                Simulator::new(protocol).simulate_random(rng, statement)?,
            ),
            (AnySigmaProtocol::DamgardJurik(protocol), AnyStatement::DamgardJurik(statement)) => {
                AnyTranscript::DamgardJurik(
                    Simulator::new(protocol).simulate_random(rng, statement)?,
                )
            }
            _ => return Err(self.mismatch(statement.variant())),
        };
        Ok(transcript)
    }

    fn check_variant(&self, got: Variant) -> Result<(), InputError> {
        if got == self.variant() {
            Ok(())
        } else {
            Err(self.mismatch(got))
        }
    }

    fn mismatch(&self, got: Variant) -> InputError {
        InputError::VariantMismatch {
            expected: self.variant(),
            got,
        }
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> From<DlogKnowledge<G>> for AnySigmaProtocol<G> {
    fn from(protocol: DlogKnowledge<G>) -> Self {
        AnySigmaProtocol::Dlog(protocol)
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> From<PedersenOpeningKnowledge<G>>
    for AnySigmaProtocol<G>
{
    fn from(protocol: PedersenOpeningKnowledge<G>) -> Self {
        AnySigmaProtocol::PedersenOpening(protocol)
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> From<DamgardJurikKnowledge>
    for AnySigmaProtocol<G>
{
    fn from(protocol: DamgardJurikKnowledge) -> Self {
        AnySigmaProtocol::DamgardJurik(protocol)
    }
}
