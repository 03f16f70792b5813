//! The relations this crate proves knowledge of a witness for.
//!
//! Each relation is a [`SigmaProtocol`](crate::SigmaProtocol), together with its statement,
//! witness and message types:
//!
//! | Protocol | Statement | Witness | Verification |
//! |---|---|---|---|
//! | [`DlogKnowledge`] | `h` | `w` with `h = g^w` | `g^z == a·h^e` |
//! | [`PedersenOpeningKnowledge`] | `(g, h)`, `c` | `(x, r)` with `c = h^x g^r` | `h^z1 g^z2 == a·c^e` |
//! | [`DamgardJurikKnowledge`] | `Y` | `(x, r)` with `Y = (1+n)^x r^N` | `(1+n)^d e^N == a·Y^c mod N'` |
//!
//! The group protocols run over G1 or G2 of BLS12-381 and share the first message type
//! [`Announcement`].

mod damgard_jurik;
mod dlog;
mod pedersen;

pub use self::{damgard_jurik::*, dlog::*, pedersen::*};
use crate::{
    challenge::{ChallengeBuilder, ChallengeDigest},
    common::*,
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};

/// The first message of a protocol over a prime-order group: a single group element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "G: SerializeElement")]
pub struct Announcement<G>(#[serde(with = "SerializeElement")] G)
where
    G: Group<Scalar = Scalar>;

impl<G: Group<Scalar = Scalar> + GroupEncoding> Announcement<G> {
    /// Wrap a group element as a first message.
    pub fn from_element(element: G) -> Self {
        Self(element)
    }

    /// The group element this message consists of.
    pub fn to_element(self) -> G {
        self.0
    }

    /// Encode the message as the compressed encoding of its element.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().as_ref().to_vec()
    }

    /// Decode a message received from the prover.
    ///
    /// Fails if the bytes do not encode a member of the group.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, crate::CheatAttempt> {
        decode_element(bytes).map(Self)
    }
}

impl<G: Group<Scalar = Scalar> + GroupEncoding> ChallengeDigest for Announcement<G> {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.0.to_bytes());
    }
}
