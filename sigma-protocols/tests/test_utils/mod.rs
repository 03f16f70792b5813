#![allow(dead_code)]
use num_bigint::BigUint;
use rand::SeedableRng;

// Seeded rng for replicable tests.
pub fn seeded_rng() -> (impl rand::CryptoRng + rand::RngCore) {
    const TEST_RNG_SEED: [u8; 32] = *b"NEVER USE THIS FOR ANYTHING REAL";
    rand::rngs::StdRng::from_seed(TEST_RNG_SEED)
}

// A 1128-bit Damgård–Jurik modulus, the product of the Mersenne primes 2^521 - 1 and 2^607 - 1.
// Admits soundness parameters below 376 bits.
pub fn modulus() -> BigUint {
    let one = BigUint::from(1u32);
    ((&one << 521usize) - &one) * ((&one << 607usize) - &one)
}
