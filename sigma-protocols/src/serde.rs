//! Utilities for serializing and deserializing `bls12_381` types using Serde.
//!
//! [`SerializeElement`] looks to Serde like a "module" which can be used with the
//! `#[serde(with = "SerializeElement")]` syntax, adding serialization to the group elements and
//! scalars that make up statements, messages and witnesses. Deserialization applies the same
//! membership checks as decoding a message from the wire: a point must lie in the prime-order
//! subgroup and a scalar must be canonical.

use crate::common::*;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Serialization/deserialization functionality for external `bls12_381` types.
///
/// Group elements use the `bls12_381` crate's compressed encoding; scalars use their canonical
/// 32-byte little-endian encoding.
pub trait SerializeElement: Sized {
    /// Proxy serialization function telling serde how to serialize the implementing type.
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;

    /// Proxy deserialization function telling serde how to deserialize the implementing type.
    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

impl SerializeElement for G1Affine {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_big_array::BigArray::serialize(&this.to_compressed(), serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let maybe_g1: Option<G1Affine> =
            G1Affine::from_compressed(&serde_big_array::BigArray::deserialize(deserializer)?)
                .into();
        maybe_g1.ok_or_else(|| de::Error::custom("invalid G1 element encoding"))
    }
}

impl SerializeElement for G1Projective {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        G1Affine::serialize(&this.into(), serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        G1Affine::deserialize(deserializer).map(Into::into)
    }
}

impl SerializeElement for G2Affine {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_big_array::BigArray::serialize(&this.to_compressed(), serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let maybe_g2: Option<G2Affine> =
            G2Affine::from_compressed(&serde_big_array::BigArray::deserialize(deserializer)?)
                .into();
        maybe_g2.ok_or_else(|| de::Error::custom("invalid G2 element encoding"))
    }
}

impl SerializeElement for G2Projective {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        G2Affine::serialize(&this.into(), serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        G2Affine::deserialize(deserializer).map(Into::into)
    }
}

impl SerializeElement for Scalar {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        this.to_bytes().serialize(serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        let maybe_scalar: Option<Scalar> = Scalar::from_bytes(&bytes).into();
        maybe_scalar.ok_or_else(|| de::Error::custom("invalid scalar encoding"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ff::Field;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Elements {
        #[serde(with = "SerializeElement")]
        g1: G1Projective,
        #[serde(with = "SerializeElement")]
        g2: G2Affine,
        #[serde(with = "SerializeElement")]
        scalar: Scalar,
    }

    #[test]
    fn elements_survive_serialization() {
        let mut rng = crate::test::rng();
        let elements = Elements {
            g1: G1Projective::random(&mut rng),
            g2: G2Projective::random(&mut rng).into(),
            scalar: Scalar::random(&mut rng),
        };
        let bytes = bincode::serialize(&elements).unwrap();
        assert_eq!(elements, bincode::deserialize(&bytes).unwrap());
    }

    #[test]
    fn non_canonical_scalar_is_rejected() {
        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "SerializeElement")] Scalar);

        let bytes = bincode::serialize(&Scalar::one().to_bytes()).unwrap();
        let Wrapped(scalar) = bincode::deserialize(&bytes).unwrap();
        assert_eq!(scalar, Scalar::one());

        let bytes = bincode::serialize(&[0xffu8; 32]).unwrap();
        assert!(bincode::deserialize::<Wrapped>(&bytes).is_err());
    }
}
