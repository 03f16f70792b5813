//! The soundness parameter `t` and the policy it must satisfy.
//!
//! A cheating prover that does not know the witness convinces an honest verifier with probability
//! at most `2^-t`. The challenge is exactly `t/8` bytes, so `t` must be a positive multiple of 8.
//! Each protocol also bounds `t` by the structure it runs over:
//! - over a prime-order group, `2^t < q`, so that distinct challenges stay distinct modulo `q`;
//! - over a Damgård–Jurik ring, `t` is less than a third of the bit length of the modulus `n`.
//!
//! The policy is checked once, when a protocol is constructed.

use crate::ConfigurationError;
use ff::PrimeField;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use tracing::debug;

/// A validated soundness parameter, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SoundnessParameter(u32);

impl SoundnessParameter {
    /// Construct a soundness parameter of `bits` bits.
    ///
    /// Fails unless `bits` is a positive multiple of 8.
    pub fn new(bits: u32) -> Result<Self, ConfigurationError> {
        if bits == 0 || bits % 8 != 0 {
            debug!(bits, "rejected unaligned soundness parameter");
            return Err(ConfigurationError::UnalignedSoundness(bits));
        }
        Ok(Self(bits))
    }

    /// The soundness parameter, in bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// The exact length of a challenge, in bytes.
    pub fn challenge_length(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Check that `2^t < q`, where `q` is the order of the scalar field `F`.
    ///
    /// `q` is an odd prime of `F::NUM_BITS` bits, so `2^t < q` exactly when `t < F::NUM_BITS`.
    pub fn check_group_order<F: PrimeField>(self) -> Result<Self, ConfigurationError> {
        if self.0 >= F::NUM_BITS {
            debug!(bits = self.0, order_bits = F::NUM_BITS, "soundness exceeds group order");
            return Err(ConfigurationError::SoundnessExceedsGroupOrder {
                bits: self.0,
                order_bits: F::NUM_BITS,
            });
        }
        Ok(self)
    }

    /// Check that `t` is less than a third of the bit length of `modulus`.
    pub fn check_modulus(self, modulus: &BigUint) -> Result<Self, ConfigurationError> {
        let modulus_bits = modulus.bits();
        if u64::from(self.0) >= modulus_bits / 3 {
            debug!(bits = self.0, modulus_bits, "soundness exceeds modulus");
            return Err(ConfigurationError::SoundnessExceedsModulus {
                bits: self.0,
                modulus_bits,
            });
        }
        Ok(self)
    }
}

impl Default for SoundnessParameter {
    /// 80 bits, which every supported group and any modulus of at least 243 bits admits.
    fn default() -> Self {
        Self(80)
    }
}

impl TryFrom<u32> for SoundnessParameter {
    type Error = ConfigurationError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<SoundnessParameter> for u32 {
    fn from(soundness: SoundnessParameter) -> Self {
        soundness.0
    }
}
