//! Wrappers marking scalars and integers as secret, so that they are wiped from memory when they
//! are dropped. Witnesses and ephemeral randomness are built from these.

use crate::common::Scalar;
use num_bigint::BigUint;
use std::ops::Deref;
use zeroize::{DefaultIsZeroes, Zeroize};

/// A secret scalar. Wipes itself when zeroized; owners derive `ZeroizeOnDrop`.
#[derive(Clone, Copy)]
pub(crate) struct SecretScalar(Scalar);

impl SecretScalar {
    pub(crate) fn new(scalar: Scalar) -> Self {
        Self(scalar)
    }
}

impl Default for SecretScalar {
    fn default() -> Self {
        Self(Scalar::zero())
    }
}

impl DefaultIsZeroes for SecretScalar {}

impl Deref for SecretScalar {
    type Target = Scalar;

    fn deref(&self) -> &Scalar {
        &self.0
    }
}

impl std::fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretScalar(..)")
    }
}

/// A secret arbitrary-precision integer.
#[cfg_attr(test, derive(Clone))]
pub(crate) struct SecretNumber(BigUint);

impl SecretNumber {
    pub(crate) fn new(number: BigUint) -> Self {
        Self(number)
    }
}

impl Zeroize for SecretNumber {
    fn zeroize(&mut self) {
        // Clear from the lowest bit up. The integer keeps its length, and so its allocation,
        // until every limb is already zero.
        for bit in 0..self.0.bits() {
            self.0.set_bit(bit, false);
        }
    }
}

impl Deref for SecretNumber {
    type Target = BigUint;

    fn deref(&self) -> &BigUint {
        &self.0
    }
}

impl std::fmt::Debug for SecretNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretNumber(..)")
    }
}
