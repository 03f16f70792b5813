//! Proof of knowledge of the plaintext and randomness behind a Damgård–Jurik ciphertext.
//!
//! Write `N = n^s` and `N' = n^(s+1)`. The prover knows `(x, r)` with `x ∈ Z_N`, `r ∈ Z*_n` such
//! that `Y = (1+n)^x r^N mod N'`. It samples `a ∈ Z_N`, `u ∈ Z*_n` and sends
//! `B = (1+n)^a u^N mod N'`. On challenge `c` it splits `a + c·x = f·N + d` with `d < N` and
//! responds with `d` and `e = u · r^c · (1+n)^f mod N'`. The verifier checks
//! `(1+n)^d e^N == B·Y^c mod N'`.
//!
//! The challenge is used as an integer, without reduction: soundness requires `t` to be less than
//! a third of the bit length of `n`, so `c < 2^t` is far below `N`.

use crate::{
    challenge::{Challenge, ChallengeBuilder, ChallengeDigest},
    common::Rng,
    damgard_jurik::{Ciphertext, DamgardJurikPublicKey},
    secret::SecretNumber,
    CheatAttempt, ConfigurationError, InputError, SigmaProtocol, SoundnessParameter,
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Knowledge of the plaintext and randomness of a ciphertext under a Damgård–Jurik public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamgardJurikKnowledge {
    key: DamgardJurikPublicKey,
    soundness: SoundnessParameter,
}

impl DamgardJurikKnowledge {
    /// Construct the protocol for ciphertexts under `key`.
    ///
    /// Fails unless `t` is less than a third of the bit length of the modulus.
    pub fn new(
        key: DamgardJurikPublicKey,
        soundness: SoundnessParameter,
    ) -> Result<Self, ConfigurationError> {
        let soundness = soundness.check_modulus(key.modulus())?;
        debug!(
            bits = soundness.bits(),
            modulus_bits = key.modulus().bits(),
            length = key.length(),
            "constructed Damgård–Jurik protocol"
        );
        Ok(Self { key, soundness })
    }

    /// The public key ciphertexts are encrypted under.
    pub fn key(&self) -> &DamgardJurikPublicKey {
        &self.key
    }

    /// Construct the statement that the prover knows the plaintext and randomness of
    /// `ciphertext`.
    ///
    /// Fails if the ciphertext is not a unit modulo `N'`.
    pub fn statement(&self, ciphertext: Ciphertext) -> Result<DamgardJurikStatement, CheatAttempt> {
        self.key.check_unit(ciphertext.as_biguint(), "ciphertext")?;
        Ok(DamgardJurikStatement { ciphertext })
    }
}

impl ChallengeDigest for DamgardJurikKnowledge {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(b"damgard-jurik");
        builder.digest_bytes(self.soundness.bits().to_be_bytes());
        builder.digest(&self.key);
    }
}

/// The statement: a ciphertext `Y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DamgardJurikStatement {
    ciphertext: Ciphertext,
}

impl DamgardJurikStatement {
    /// The ciphertext.
    pub fn ciphertext(&self) -> &Ciphertext {
        &self.ciphertext
    }
}

impl ChallengeDigest for DamgardJurikStatement {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(&self.ciphertext);
    }
}

/// The witness: the plaintext `x` and the encryption randomness `r`.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct DamgardJurikWitness {
    plaintext: SecretNumber,
    randomness: SecretNumber,
}

impl DamgardJurikWitness {
    /// Wrap the plaintext and randomness of a ciphertext as a witness.
    pub fn new(plaintext: BigUint, randomness: BigUint) -> Self {
        Self {
            plaintext: SecretNumber::new(plaintext),
            randomness: SecretNumber::new(randomness),
        }
    }
}

/// The prover's randomness `(a, u)`.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Clone))]
pub struct DamgardJurikRandomness {
    a: SecretNumber,
    u: SecretNumber,
}

/// The first message `B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamgardJurikAnnouncement(BigUint);

impl DamgardJurikAnnouncement {
    /// The message as an integer modulo `N'`.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl ChallengeDigest for DamgardJurikAnnouncement {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(&self.0);
    }
}

/// The response `(d, e)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamgardJurikResponse {
    d: BigUint,
    e: BigUint,
}

impl DamgardJurikResponse {
    /// The response exponent `d`, in `Z_N`.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// The response unit `e`, in `Z*_{N'}`.
    pub fn e(&self) -> &BigUint {
        &self.e
    }
}

impl SigmaProtocol for DamgardJurikKnowledge {
    type Witness = DamgardJurikWitness;
    type PublicInput = DamgardJurikStatement;
    type Randomness = DamgardJurikRandomness;
    type FirstMessage = DamgardJurikAnnouncement;
    type SecondMessage = DamgardJurikResponse;
    type ChallengeValue = BigUint;

    fn soundness(&self) -> SoundnessParameter {
        self.soundness
    }

    fn challenge_value(&self, challenge: &Challenge) -> BigUint {
        challenge.to_biguint()
    }

    fn check_witness(
        &self,
        witness: &DamgardJurikWitness,
        public_input: &DamgardJurikStatement,
    ) -> Result<(), InputError> {
        let key = &self.key;
        if &*witness.plaintext >= key.plaintext_modulus() {
            return Err(InputError::OutOfRange("plaintext"));
        }
        let r: &BigUint = &witness.randomness;
        if r.is_zero() || r >= key.modulus() || !r.gcd(key.modulus()).is_one() {
            return Err(InputError::OutOfRange("randomness"));
        }
        if key.encrypt_with(&witness.plaintext, r) != public_input.ciphertext {
            return Err(InputError::WitnessMismatch);
        }
        Ok(())
    }

    fn sample_randomness(&self, rng: &mut impl Rng) -> DamgardJurikRandomness {
        DamgardJurikRandomness {
            a: SecretNumber::new(self.key.random_plaintext(rng)),
            u: SecretNumber::new(self.key.random_unit(rng)),
        }
    }

    fn first_message(
        &self,
        _: &DamgardJurikStatement,
        randomness: &DamgardJurikRandomness,
    ) -> DamgardJurikAnnouncement {
        let key = &self.key;
        DamgardJurikAnnouncement(key.mul(
            &key.generator_pow(&randomness.a),
            &key.pow(&randomness.u, key.plaintext_modulus()),
        ))
    }

    fn second_message(
        &self,
        witness: &DamgardJurikWitness,
        randomness: DamgardJurikRandomness,
        challenge: &BigUint,
    ) -> DamgardJurikResponse {
        let key = &self.key;
        let sum = SecretNumber::new(&*randomness.a + challenge * &*witness.plaintext);
        let (quotient, d) = sum.div_rem(key.plaintext_modulus());
        let e = key.mul(
            &key.mul(&randomness.u, &key.pow(&witness.randomness, challenge)),
            &key.generator_pow(&quotient),
        );
        DamgardJurikResponse { d, e }
    }

    fn check_received(
        &self,
        public_input: &DamgardJurikStatement,
        first_message: &DamgardJurikAnnouncement,
        second_message: &DamgardJurikResponse,
    ) -> Result<(), CheatAttempt> {
        let key = &self.key;
        key.check_unit(public_input.ciphertext.as_biguint(), "ciphertext")?;
        key.check_unit(&first_message.0, "first message")?;
        key.check_unit(&second_message.e, "response")?;
        if &second_message.d >= key.plaintext_modulus() {
            return Err(CheatAttempt::NotInRing("response exponent"));
        }
        Ok(())
    }

    fn verification_holds(
        &self,
        public_input: &DamgardJurikStatement,
        first_message: &DamgardJurikAnnouncement,
        challenge: &BigUint,
        second_message: &DamgardJurikResponse,
    ) -> bool {
        let key = &self.key;
        let lhs = key.mul(
            &key.generator_pow(&second_message.d),
            &key.pow(&second_message.e, key.plaintext_modulus()),
        );
        let rhs = key.mul(
            &first_message.0,
            &key.pow(public_input.ciphertext.as_biguint(), challenge),
        );
        lhs == rhs
    }

    fn simulate_response(&self, rng: &mut impl Rng) -> DamgardJurikResponse {
        DamgardJurikResponse {
            d: self.key.random_plaintext(rng),
            e: self.key.random_ciphertext_unit(rng),
        }
    }

    fn solve_first_message(
        &self,
        public_input: &DamgardJurikStatement,
        challenge: &BigUint,
        second_message: &DamgardJurikResponse,
    ) -> Result<DamgardJurikAnnouncement, InputError> {
        let key = &self.key;
        let ciphertext = public_input.ciphertext.as_biguint();
        // A statement checked under another key need not be a unit here.
        let inverse = Some(ciphertext)
            .filter(|ciphertext| key.is_unit(ciphertext))
            .and_then(|ciphertext| key.invert(ciphertext))
            .ok_or(InputError::OutOfRange("ciphertext"))?;
        let solved = key.mul(
            &key.mul(
                &key.generator_pow(&second_message.d),
                &key.pow(&second_message.e, key.plaintext_modulus()),
            ),
            &key.pow(&inverse, challenge),
        );
        Ok(DamgardJurikAnnouncement(solved))
    }

    fn encode_first_message(&self, first_message: &DamgardJurikAnnouncement) -> Vec<u8> {
        first_message.0.to_bytes_be()
    }

    fn decode_first_message(&self, bytes: &[u8]) -> Result<DamgardJurikAnnouncement, CheatAttempt> {
        let value = BigUint::from_bytes_be(bytes);
        self.key.check_unit(&value, "first message")?;
        Ok(DamgardJurikAnnouncement(value))
    }

    /// Encodes `d` prefixed by its 4-byte big-endian length, followed by `e`.
    fn encode_second_message(&self, second_message: &DamgardJurikResponse) -> Vec<u8> {
        let d = second_message.d.to_bytes_be();
        let mut bytes = (d.len() as u32).to_be_bytes().to_vec();
        bytes.extend_from_slice(&d);
        bytes.extend_from_slice(&second_message.e.to_bytes_be());
        bytes
    }

    fn decode_second_message(&self, bytes: &[u8]) -> Result<DamgardJurikResponse, CheatAttempt> {
        let malformed = CheatAttempt::NotInRing("response");
        if bytes.len() < 4 {
            return Err(malformed);
        }
        let (prefix, rest) = bytes.split_at(4);
        let d_length = <[u8; 4]>::try_from(prefix)
            .map(u32::from_be_bytes)
            .map_err(|_| malformed)? as usize;
        if d_length > rest.len() {
            return Err(malformed);
        }
        let (d, e) = rest.split_at(d_length);
        let (d, e) = (BigUint::from_bytes_be(d), BigUint::from_bytes_be(e));
        if &d >= self.key.plaintext_modulus() {
            return Err(CheatAttempt::NotInRing("response exponent"));
        }
        self.key.check_unit(&e, "response")?;
        Ok(DamgardJurikResponse { d, e })
    }
}
