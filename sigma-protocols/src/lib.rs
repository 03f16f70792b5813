//! This crate implements Sigma protocols: three-move interactive zero-knowledge proofs of
//! knowledge. A prover convinces a verifier that it knows a witness for a public relation without
//! revealing the witness. Three relations are supported:
//! - knowledge of a discrete logarithm `h = g^w` over a prime-order group,
//! - knowledge of the opening `(x, r)` of a Pedersen commitment `c = h^x g^r`,
//! - knowledge of the plaintext and randomness behind a Damgård–Jurik ciphertext.
//!
//! The prime-order groups are G1 and G2 of the pairing-friendly curve BLS12-381.
//!
//! Each relation implements [`SigmaProtocol`]. The [`Prover`], [`Verifier`] and [`Simulator`]
//! engines are generic over one protocol, so a witness for one relation can never be bound to a
//! statement of another. Where the relation is only known at runtime, [`AnySigmaProtocol`]
//! dispatches over the closed set of variants.
//!
//! ```
//! # use sigma_protocols::{proofs::*, Prover, SoundnessParameter, Verifier};
//! # use bls12_381::{G1Projective, Scalar};
//! # use ff::Field;
//! # use group::Group;
//! # let mut rng = rand::thread_rng();
//! let protocol = DlogKnowledge::<G1Projective>::new(SoundnessParameter::new(80)?)?;
//! let w = Scalar::random(&mut rng);
//! let statement = DlogStatement::new(G1Projective::generator() * w);
//!
//! let prover = Prover::new(&protocol, DlogWitness::new(w), statement)?;
//! let pending = prover.compute_first_message(prover.sample_random_values(&mut rng));
//!
//! let verifier = Verifier::new(&protocol);
//! let challenge = verifier.sample_challenge(&mut rng);
//! let first_message = *pending.first_message();
//! let response = pending.compute_second_message(challenge.as_bytes())?;
//!
//! verifier.verify(&statement, &first_message, &challenge, &response)?;
//! # Ok::<(), sigma_protocols::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(broken_intra_doc_links)]

pub mod challenge;
pub mod config;
pub mod damgard_jurik;
pub mod pedersen;
pub mod proofs;
pub mod rng;
pub mod soundness;

mod protocol;
mod prover;
mod secret;
mod serde;
mod simulator;
mod variant;
mod verifier;

pub use crate::{
    challenge::Challenge,
    config::SigmaConfig,
    protocol::{SigmaProtocol, Transcript},
    prover::{PendingResponse, Prover},
    serde::SerializeElement,
    simulator::Simulator,
    soundness::SoundnessParameter,
    variant::{AnySigmaProtocol, AnyStatement, AnyTranscript, Variant},
    verifier::Verifier,
};
pub use common::Rng;

use ::serde::*;
use ff::Field;
use thiserror::*;

/// Errors raised while configuring a protocol. These are the caller's own mistakes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The soundness parameter is zero or does not fill a whole number of challenge bytes.
    #[error("soundness parameter must be a positive multiple of 8 bits, got {0}")]
    UnalignedSoundness(u32),
    /// The soundness parameter does not satisfy `2^t < q`.
    #[error("soundness parameter of {bits} bits does not satisfy 2^t < q for a {order_bits}-bit group order")]
    SoundnessExceedsGroupOrder {
        /// The rejected soundness parameter.
        bits: u32,
        /// The bit length of the group order.
        order_bits: u32,
    },
    /// The soundness parameter is not less than a third of the modulus length.
    #[error("soundness parameter of {bits} bits must be less than a third of the {modulus_bits}-bit modulus")]
    SoundnessExceedsModulus {
        /// The rejected soundness parameter.
        bits: u32,
        /// The bit length of the modulus.
        modulus_bits: u64,
    },
    /// The Damgård–Jurik length parameter must be at least 1.
    #[error("length parameter must be at least 1, got {0}")]
    InvalidLengthParameter(u32),
    /// The Damgård–Jurik modulus must be odd and greater than 1.
    #[error("modulus must be an odd integer greater than 1")]
    InvalidModulus,
}

/// Errors raised when binding a witness and statement. These are the caller's own mistakes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The witness does not satisfy the relation for the given statement.
    #[error("the witness does not satisfy the relation for this statement")]
    WitnessMismatch,
    /// A witness component lies outside of its domain.
    #[error("the {0} lies outside of its domain")]
    OutOfRange(&'static str),
    /// A statement or transcript of one protocol variant was paired with a different variant.
    #[error("expected input for the {expected} protocol, got {got}")]
    VariantMismatch {
        /// The variant of the protocol instance.
        expected: Variant,
        /// The variant of the offending input.
        got: Variant,
    },
}

/// A protocol-level violation by the remote party.
///
/// These are distinct from [`ConfigurationError`] and [`InputError`]: they indicate that the peer
/// may be malicious, and the surrounding protocol should be aborted rather than retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheatAttempt {
    /// The challenge does not have exactly `t/8` bytes.
    #[error("expected a challenge of {expected} bytes, got {got}")]
    ChallengeLength {
        /// The length fixed by the soundness parameter.
        expected: usize,
        /// The length received.
        got: usize,
    },
    /// Bytes received for a group element do not encode a member of the group.
    #[error("received bytes do not encode a group element")]
    InvalidGroupElement,
    /// Bytes received for a scalar do not encode a canonical scalar.
    #[error("received bytes do not encode a scalar")]
    InvalidScalar,
    /// A received integer is not in the ring the protocol runs over.
    #[error("the received {0} is not in the expected ring")]
    NotInRing(&'static str),
    /// The verification equation does not hold.
    #[error("the verification equation does not hold")]
    VerificationFailed,
}

/// Error types that may arise from running a Sigma protocol.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The protocol could not be configured.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The prover's input was malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The remote party deviated from the protocol.
    #[error(transparent)]
    Cheat(#[from] CheatAttempt),
}

/// Blinding factor for a Pedersen commitment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlindingFactor(#[serde(with = "SerializeElement")] pub(crate) Scalar);

impl BlindingFactor {
    /// Generate a new blinding factor uniformly at random from the set of possible [`Scalar`]s.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self(Scalar::random(rng))
    }

    /// Construct a blinding factor from the scalar representing it.
    pub fn from_scalar(scalar: Scalar) -> Self {
        Self(scalar)
    }

    /// Convert to the inner scalar representing this blinding factor.
    pub fn to_scalar(&self) -> Scalar {
        self.0
    }
}

mod common {
    //! Common types used internally.

    pub use crate::BlindingFactor;
    pub use bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
    pub use group::{Group, GroupEncoding};

    /// A trait synonym for a cryptographically secure random number generator. This trait is
    /// blanket-implemented for all valid types and will never need to be implemented by-hand.
    pub trait Rng: rand::CryptoRng + rand::RngCore {}
    impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}

    /// Select a non-identity element from the group uniformly at random.
    pub fn random_non_identity<G>(rng: &mut impl Rng) -> G
    where
        G: Group<Scalar = Scalar>,
    {
        loop {
            let g = G::random(&mut *rng);
            if !bool::from(g.is_identity()) {
                return g;
            }
        }
    }

    /// Decode a group element received from the remote party.
    ///
    /// Decoding checks curve and subgroup membership; bytes that fail it are a cheat attempt.
    pub fn decode_element<G: GroupEncoding>(bytes: &[u8]) -> Result<G, crate::CheatAttempt> {
        let mut repr = G::Repr::default();
        if repr.as_ref().len() != bytes.len() {
            return Err(crate::CheatAttempt::InvalidGroupElement);
        }
        repr.as_mut().copy_from_slice(bytes);
        Option::from(G::from_bytes(&repr)).ok_or(crate::CheatAttempt::InvalidGroupElement)
    }

    /// Decode a scalar received from the remote party from its canonical little-endian encoding.
    pub fn decode_scalar(bytes: &[u8]) -> Result<Scalar, crate::CheatAttempt> {
        let mut repr = [0u8; 32];
        if bytes.len() != repr.len() {
            return Err(crate::CheatAttempt::InvalidScalar);
        }
        repr.copy_from_slice(bytes);
        Option::from(Scalar::from_bytes(&repr)).ok_or(crate::CheatAttempt::InvalidScalar)
    }
}

use common::Scalar;
