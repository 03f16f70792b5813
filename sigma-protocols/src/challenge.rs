//! Challenges, and functionality for deriving them non-interactively.
//!
//! A [`Challenge`] is exactly `t/8` bytes, where `t` is the [`SoundnessParameter`], and is read as
//! an unsigned big-endian integer. Every component that consumes a challenge from outside the
//! crate decodes it with [`Challenge::decode`], which rejects any other length as a
//! [`CheatAttempt`].
//!
//! In an interactive execution the verifier samples the challenge with [`Challenge::random`].
//! The Fiat-Shamir heuristic replaces the verifier with a hash of the public data; a
//! [`ChallengeBuilder`] accumulates that data and squeezes a challenge of the right length.

use crate::{
    common::*,
    damgard_jurik::{Ciphertext, DamgardJurikPublicKey},
    pedersen::{Commitment, PedersenParameters},
    CheatAttempt, SoundnessParameter,
};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// A challenge of exactly `t/8` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Challenge(Vec<u8>);

impl Challenge {
    /// Decode a challenge received from the remote party.
    ///
    /// Fails unless `bytes` is exactly `t/8` bytes long.
    pub fn decode(bytes: &[u8], soundness: SoundnessParameter) -> Result<Self, CheatAttempt> {
        let challenge = Self(bytes.to_vec());
        challenge.check_length(soundness)?;
        Ok(challenge)
    }

    /// Sample a challenge uniformly at random.
    pub fn random(soundness: SoundnessParameter, rng: &mut impl Rng) -> Self {
        let mut bytes = vec![0; soundness.challenge_length()];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Check that this challenge has exactly the length required by `soundness`.
    pub fn check_length(&self, soundness: SoundnessParameter) -> Result<(), CheatAttempt> {
        if self.0.len() != soundness.challenge_length() {
            return Err(CheatAttempt::ChallengeLength {
                expected: soundness.challenge_length(),
                got: self.0.len(),
            });
        }
        Ok(())
    }

    /// The raw challenge bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The challenge as an unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// The challenge as an integer modulo the scalar field order `q`.
    ///
    /// Under a valid soundness parameter `2^t < q`, so the reduction never changes the value.
    pub fn to_scalar(&self) -> Scalar {
        let mut wide = [0u8; 64];
        for (dst, src) in wide.iter_mut().zip(self.0.iter().rev()) {
            *dst = *src;
        }
        Scalar::from_bytes_wide(&wide)
    }
}

/// A trait implemented by types which can feed their public components into a [`ChallengeBuilder`].
pub trait ChallengeDigest {
    /// Incorporate public components of this type into a [`ChallengeBuilder`].
    fn digest(&self, builder: &mut ChallengeBuilder);
}

impl<'a, T: ChallengeDigest> ChallengeDigest for &'a T {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        (**self).digest(builder);
    }
}

impl ChallengeDigest for Scalar {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_bytes());
    }
}

impl ChallengeDigest for G1Affine {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_compressed());
    }
}

impl ChallengeDigest for G2Affine {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_compressed());
    }
}

impl ChallengeDigest for G1Projective {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_bytes());
    }
}

impl ChallengeDigest for G2Projective {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_bytes());
    }
}

impl ChallengeDigest for BigUint {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        // Length-prefix integers so that adjacent values cannot be re-split.
        let bytes = self.to_bytes_be();
        builder.digest_bytes((bytes.len() as u64).to_be_bytes());
        builder.digest_bytes(bytes);
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> ChallengeDigest for PedersenParameters<G> {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.g().to_bytes());
        builder.digest_bytes(self.h().to_bytes());
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> ChallengeDigest for Commitment<G> {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_element().to_bytes());
    }
}

impl ChallengeDigest for DamgardJurikPublicKey {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(self.modulus());
        builder.digest_bytes(self.length().to_be_bytes());
    }
}

impl ChallengeDigest for Ciphertext {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(self.as_biguint());
    }
}

/// Holds state used when building a [`Challenge`] using the Fiat-Shamir heuristic, as in a
/// non-interactive Sigma protocol.
#[derive(Clone)]
pub struct ChallengeBuilder {
    hasher: Shake256,
}

impl std::fmt::Debug for ChallengeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChallengeBuilder")
    }
}

impl Default for ChallengeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeBuilder {
    /// Initialize a new, empty challenge.
    pub fn new() -> Self {
        Self {
            hasher: Shake256::default(),
        }
    }

    /// Incorporate public data from some given type into the challenge.
    pub fn digest<T: ChallengeDigest>(&mut self, object: &T) {
        object.digest(self);
    }

    /// A conveniently chainable variant of [`ChallengeBuilder::digest`].
    pub fn with<T: ChallengeDigest>(mut self, object: &T) -> Self {
        object.digest(&mut self);
        self
    }

    /// Incorporate arbitrary bytes into the challenge.
    pub fn digest_bytes(&mut self, bytes: impl AsRef<[u8]>) {
        self.hasher.update(bytes);
    }

    /// A conveniently chainable variant of [`ChallengeBuilder::digest_bytes`].
    pub fn with_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.digest_bytes(bytes);
        self
    }

    /// Consume the builder and squeeze a [`Challenge`] of `t/8` bytes from the accumulated data.
    pub fn finish(self, soundness: SoundnessParameter) -> Challenge {
        let mut bytes = vec![0; soundness.challenge_length()];
        self.hasher.finalize_xof().read(&mut bytes);
        Challenge(bytes)
    }
}
