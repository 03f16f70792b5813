//! Configuration for constructing protocols.
//!
//! A [`SigmaConfig`] is typically deserialized as part of a larger application configuration.
//! Absent fields take their defaults; a soundness parameter that is not a positive multiple of 8
//! is rejected during deserialization.
//!
//! ```
//! # use sigma_protocols::SigmaConfig;
//! # use bls12_381::G1Projective;
//! let config: SigmaConfig = serde_json::from_str(r#"{ "soundness_bits": 128 }"#)?;
//! assert_eq!(config.soundness_bits.bits(), 128);
//! assert_eq!(config.damgard_jurik_length, 1);
//! let protocol = config.dlog::<G1Projective>()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    common::*,
    damgard_jurik::DamgardJurikPublicKey,
    proofs::{DamgardJurikKnowledge, DlogKnowledge, PedersenOpeningKnowledge},
    ConfigurationError, SoundnessParameter,
};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Parameters shared by the protocols an application constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigmaConfig {
    /// The soundness parameter `t`, in bits. Defaults to 80.
    pub soundness_bits: SoundnessParameter,
    /// The Damgård–Jurik length parameter `s`. Defaults to 1, which is Paillier encryption.
    pub damgard_jurik_length: u32,
}

impl Default for SigmaConfig {
    fn default() -> Self {
        Self {
            soundness_bits: SoundnessParameter::default(),
            damgard_jurik_length: 1,
        }
    }
}

impl SigmaConfig {
    /// Construct the discrete logarithm protocol over the group `G`.
    pub fn dlog<G: Group<Scalar = Scalar> + GroupEncoding>(
        &self,
    ) -> Result<DlogKnowledge<G>, ConfigurationError> {
        DlogKnowledge::new(self.soundness_bits)
    }

    /// Construct the Pedersen opening protocol over the group `G`.
    pub fn pedersen_opening<G: Group<Scalar = Scalar> + GroupEncoding>(
        &self,
    ) -> Result<PedersenOpeningKnowledge<G>, ConfigurationError> {
        PedersenOpeningKnowledge::new(self.soundness_bits)
    }

    /// Construct the Damgård–Jurik protocol for the public key with modulus `modulus` and the
    /// configured length parameter.
    pub fn damgard_jurik(
        &self,
        modulus: BigUint,
    ) -> Result<DamgardJurikKnowledge, ConfigurationError> {
        let key = DamgardJurikPublicKey::new(modulus, self.damgard_jurik_length)?;
        DamgardJurikKnowledge::new(key, self.soundness_bits)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::damgard_jurik::test::{large_modulus, small_modulus};

    #[test]
    fn defaults() {
        let config: SigmaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SigmaConfig::default());
        assert_eq!(config.soundness_bits.bits(), 80);
        assert_eq!(config.damgard_jurik_length, 1);
    }

    #[test]
    fn rejects_bad_soundness() {
        assert!(serde_json::from_str::<SigmaConfig>(r#"{ "soundness_bits": 81 }"#).is_err());
        assert!(serde_json::from_str::<SigmaConfig>(r#"{ "soundness_bits": 0 }"#).is_err());
        assert!(serde_json::from_str::<SigmaConfig>(r#"{ "soundnes_bits": 80 }"#).is_err());
    }

    #[test]
    fn constructs_protocols() {
        let config: SigmaConfig =
            serde_json::from_str(r#"{ "soundness_bits": 64, "damgard_jurik_length": 2 }"#)
                .unwrap();
        assert!(config.dlog::<G1Projective>().is_ok());
        assert!(config.pedersen_opening::<G2Projective>().is_ok());
        let protocol = config.damgard_jurik(small_modulus()).unwrap();
        assert_eq!(protocol.key().length(), 2);

        let config = SigmaConfig {
            damgard_jurik_length: 0,
            ..SigmaConfig::default()
        };
        assert_eq!(
            config.damgard_jurik(large_modulus()),
            Err(ConfigurationError::InvalidLengthParameter(0))
        );
        let config = SigmaConfig::default();
        assert_eq!(
            config.damgard_jurik(small_modulus()),
            Err(ConfigurationError::SoundnessExceedsModulus {
                bits: 80,
                modulus_bits: 234
            })
        );
    }
}
