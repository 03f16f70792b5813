//! The Damgård–Jurik public-key encryption scheme \[1\], to the extent needed to state and prove
//! knowledge of an encrypted plaintext.
//!
//! A public key is an RSA modulus `n` together with a length parameter `s ≥ 1`. Plaintexts live in
//! `Z_N` for `N = n^s`; ciphertexts live in `Z*_{N'}` for `N' = n^(s+1)`. A plaintext `x` is
//! encrypted under randomness `r ∈ Z*_n` as
//!
//! ```text
//!     Y = (1+n)^x · r^N  mod N'
//! ```
//!
//! With `s = 1` this is Paillier encryption. Key generation and decryption belong to the owner of
//! the factorization of `n` and are not provided here.
//!
//! ## References
//!
//! 1. Ivan Damgård and Mads Jurik. "A Generalisation, a Simplification and Some Applications of
//!    Paillier's Probabilistic Public-Key System". PKC 2001.

use crate::{common::Rng, CheatAttempt, ConfigurationError};
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// A Damgård–Jurik public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyParts", into = "KeyParts")]
pub struct DamgardJurikPublicKey {
    modulus: BigUint,
    length: u32,
    /// `N = n^s`.
    plaintext_modulus: BigUint,
    /// `N' = n^(s+1)`.
    ciphertext_modulus: BigUint,
    /// `1 + n`.
    generator: BigUint,
}

#[derive(Serialize, Deserialize)]
struct KeyParts {
    modulus: BigUint,
    length: u32,
}

impl std::convert::TryFrom<KeyParts> for DamgardJurikPublicKey {
    type Error = ConfigurationError;

    fn try_from(parts: KeyParts) -> Result<Self, Self::Error> {
        Self::new(parts.modulus, parts.length)
    }
}

impl From<DamgardJurikPublicKey> for KeyParts {
    fn from(key: DamgardJurikPublicKey) -> Self {
        KeyParts {
            modulus: key.modulus,
            length: key.length,
        }
    }
}

impl DamgardJurikPublicKey {
    /// Construct a public key from the modulus `n` and the length parameter `s`.
    pub fn new(modulus: BigUint, length: u32) -> Result<Self, ConfigurationError> {
        if length == 0 {
            return Err(ConfigurationError::InvalidLengthParameter(length));
        }
        if modulus <= BigUint::one() || modulus.is_even() {
            return Err(ConfigurationError::InvalidModulus);
        }
        let plaintext_modulus = modulus.pow(length);
        let ciphertext_modulus = &plaintext_modulus * &modulus;
        let generator = &modulus + 1u32;
        Ok(Self {
            modulus,
            length,
            plaintext_modulus,
            ciphertext_modulus,
            generator,
        })
    }

    /// The modulus `n`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The length parameter `s`.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The plaintext modulus `N = n^s`.
    pub fn plaintext_modulus(&self) -> &BigUint {
        &self.plaintext_modulus
    }

    /// The ciphertext modulus `N' = n^(s+1)`.
    pub fn ciphertext_modulus(&self) -> &BigUint {
        &self.ciphertext_modulus
    }

    /// Encrypt `plaintext` under fresh randomness. Returns the ciphertext and the randomness.
    ///
    /// The plaintext is reduced modulo `N`.
    pub fn encrypt(&self, plaintext: &BigUint, rng: &mut impl Rng) -> (Ciphertext, BigUint) {
        let randomness = self.random_unit(rng);
        (self.encrypt_with(plaintext, &randomness), randomness)
    }

    /// Encrypt `plaintext` under the given randomness `r`: `(1+n)^x · r^N mod N'`.
    pub fn encrypt_with(&self, plaintext: &BigUint, randomness: &BigUint) -> Ciphertext {
        Ciphertext(self.mul(
            &self.generator_pow(plaintext),
            &self.pow(randomness, &self.plaintext_modulus),
        ))
    }

    /// Check that `value` is a unit of `Z_{N'}`, that is `0 < value < N'` and `gcd(value, n) = 1`.
    pub fn is_unit(&self, value: &BigUint) -> bool {
        !value.is_zero() && value < &self.ciphertext_modulus && value.gcd(&self.modulus).is_one()
    }

    /// Check that `value` is a unit of `Z_{N'}`, attributing a failure to the remote party.
    pub(crate) fn check_unit(
        &self,
        value: &BigUint,
        name: &'static str,
    ) -> Result<(), CheatAttempt> {
        if self.is_unit(value) {
            Ok(())
        } else {
            Err(CheatAttempt::NotInRing(name))
        }
    }

    /// `(1+n)^exponent mod N'`.
    pub(crate) fn generator_pow(&self, exponent: &BigUint) -> BigUint {
        self.generator.modpow(exponent, &self.ciphertext_modulus)
    }

    /// `base^exponent mod N'`.
    pub(crate) fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.ciphertext_modulus)
    }

    /// `a · b mod N'`.
    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.ciphertext_modulus
    }

    /// The inverse of a unit of `Z_{N'}`.
    pub(crate) fn invert(&self, value: &BigUint) -> Option<BigUint> {
        value.modinv(&self.ciphertext_modulus)
    }

    /// Sample uniformly from `Z_N`.
    pub(crate) fn random_plaintext(&self, rng: &mut impl Rng) -> BigUint {
        rng.gen_biguint_below(&self.plaintext_modulus)
    }

    /// Sample uniformly from `Z*_n`.
    pub(crate) fn random_unit(&self, rng: &mut impl Rng) -> BigUint {
        loop {
            let candidate = rng.gen_biguint_range(&BigUint::one(), &self.modulus);
            if candidate.gcd(&self.modulus).is_one() {
                return candidate;
            }
        }
    }

    /// Sample uniformly from `Z*_{N'}`.
    pub(crate) fn random_ciphertext_unit(&self, rng: &mut impl Rng) -> BigUint {
        loop {
            let candidate = rng.gen_biguint_range(&BigUint::one(), &self.ciphertext_modulus);
            if self.is_unit(&candidate) {
                return candidate;
            }
        }
    }
}

/// A Damgård–Jurik ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext(BigUint);

impl Ciphertext {
    /// Wrap an integer received as a ciphertext. Membership is checked when it is used.
    pub fn from_biguint(value: BigUint) -> Self {
        Self(value)
    }

    /// The ciphertext as an integer modulo `N'`.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// A 234-bit modulus: the product of the Mersenne primes `2^107 - 1` and `2^127 - 1`.
    pub(crate) fn small_modulus() -> BigUint {
        mersenne(107) * mersenne(127)
    }

    /// A 1128-bit modulus: the product of the Mersenne primes `2^521 - 1` and `2^607 - 1`.
    pub(crate) fn large_modulus() -> BigUint {
        mersenne(521) * mersenne(607)
    }

    fn mersenne(exponent: usize) -> BigUint {
        (BigUint::one() << exponent) - 1u32
    }

    #[test]
    fn key_rejects_bad_parameters() {
        assert_eq!(
            DamgardJurikPublicKey::new(small_modulus(), 0),
            Err(ConfigurationError::InvalidLengthParameter(0))
        );
        assert_eq!(
            DamgardJurikPublicKey::new(BigUint::from(100u32), 1),
            Err(ConfigurationError::InvalidModulus)
        );
        assert_eq!(
            DamgardJurikPublicKey::new(BigUint::one(), 1),
            Err(ConfigurationError::InvalidModulus)
        );
    }

    #[test]
    fn derived_moduli() {
        let n = small_modulus();
        let key = DamgardJurikPublicKey::new(n.clone(), 2).unwrap();
        assert_eq!(key.plaintext_modulus(), &(&n * &n));
        assert_eq!(key.ciphertext_modulus(), &(&n * &n * &n));
    }

    #[test]
    fn encryption_is_homomorphic() {
        let mut rng = crate::test::rng();
        for length in 1..=3 {
            let key = DamgardJurikPublicKey::new(small_modulus(), length).unwrap();
            let x1 = key.random_plaintext(&mut rng);
            let x2 = key.random_plaintext(&mut rng);
            let (c1, r1) = key.encrypt(&x1, &mut rng);
            let (c2, r2) = key.encrypt(&x2, &mut rng);

            let sum = (&x1 + &x2) % key.plaintext_modulus();
            let product = key.encrypt_with(&sum, &((&r1 * &r2) % key.modulus()));
            assert_eq!(key.mul(c1.as_biguint(), c2.as_biguint()), *product.as_biguint());
            assert!(key.is_unit(c1.as_biguint()));
        }
    }

    #[test]
    fn units_and_inverses() {
        let key = DamgardJurikPublicKey::new(small_modulus(), 1).unwrap();
        assert!(!key.is_unit(&BigUint::zero()));
        assert!(!key.is_unit(key.modulus()));
        assert!(!key.is_unit(key.ciphertext_modulus()));
        assert!(key.is_unit(&BigUint::one()));

        let mut rng = crate::test::rng();
        let unit = key.random_ciphertext_unit(&mut rng);
        let inverse = key.invert(&unit).unwrap();
        assert!(key.mul(&unit, &inverse).is_one());
        assert_eq!(key.invert(key.modulus()), None);
        assert_eq!(key.invert(&BigUint::zero()), None);
        assert_eq!(key.invert(&BigUint::one()), Some(BigUint::one()));
    }

    #[test]
    fn key_serialization_checks_parameters() {
        let key = DamgardJurikPublicKey::new(small_modulus(), 2).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        let decoded: DamgardJurikPublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, decoded);

        let bad = serde_json::to_string(&KeyParts {
            modulus: small_modulus(),
            length: 0,
        })
        .unwrap();
        assert!(serde_json::from_str::<DamgardJurikPublicKey>(&bad).is_err());
    }
}
