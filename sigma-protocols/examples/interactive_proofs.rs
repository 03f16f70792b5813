//! Runs one interactive execution of each protocol, passing every message as bytes, and checks
//! that a simulated transcript is accepted just the same.

use bls12_381::{G1Projective, Scalar};
use ff::Field;
use group::Group;
use num_bigint::BigUint;
use sigma_protocols::{
    pedersen::PedersenParameters, proofs::*, BlindingFactor, Error, Prover, Rng, SigmaConfig,
    SigmaProtocol, Simulator, Verifier,
};

fn execute<P: SigmaProtocol>(
    name: &str,
    protocol: &P,
    prover: &Prover<P>,
    rng: &mut impl Rng,
) -> Result<(), Error> {
    let verifier = Verifier::new(protocol);

    let pending = prover.compute_first_message(prover.sample_random_values(rng));
    let first = protocol.encode_first_message(pending.first_message());
    let challenge = verifier.sample_challenge(rng);
    let response = pending.compute_second_message(challenge.as_bytes())?;
    let second = protocol.encode_second_message(&response);
    println!(
        "{}: {} byte first message, {} byte challenge, {} byte second message",
        name,
        first.len(),
        challenge.as_bytes().len(),
        second.len()
    );

    let public_input = prover.public_input();
    verifier.verify(
        public_input,
        &verifier.decode_first_message(&first)?,
        &challenge,
        &verifier.decode_second_message(&second)?,
    )?;

    let simulated = Simulator::new(protocol).simulate_random(rng, public_input)?;
    verifier.verify_transcript(public_input, &simulated)?;
    Ok(())
}

fn main() -> Result<(), Error> {
    let mut rng = rand::thread_rng();
    let config = SigmaConfig::default();

    let dlog = config.dlog::<G1Projective>()?;
    let w = Scalar::random(&mut rng);
    let statement = DlogStatement::new(G1Projective::generator() * w);
    let prover = Prover::new(&dlog, DlogWitness::new(w), statement)?;
    execute("discrete logarithm", &dlog, &prover, &mut rng)?;

    let pedersen = config.pedersen_opening::<G1Projective>()?;
    let params = PedersenParameters::new(&mut rng);
    let x = Scalar::random(&mut rng);
    let bf = BlindingFactor::new(&mut rng);
    let statement = PedersenStatement::new(params, params.commit(&x, bf));
    let prover = Prover::new(&pedersen, PedersenWitness::new(x, bf), statement)?;
    execute("Pedersen opening", &pedersen, &prover, &mut rng)?;

    // The product of the Mersenne primes 2^521 - 1 and 2^607 - 1. Its factorization is public, so
    // it is only fit for demonstration.
    let one = BigUint::from(1u32);
    let modulus = ((&one << 521usize) - &one) * ((&one << 607usize) - &one);
    let damgard_jurik = config.damgard_jurik(modulus)?;
    let plaintext = BigUint::from(2021u32);
    let (ciphertext, randomness) = damgard_jurik.key().encrypt(&plaintext, &mut rng);
    let statement = damgard_jurik.statement(ciphertext)?;
    let prover = Prover::new(
        &damgard_jurik,
        DamgardJurikWitness::new(plaintext, randomness),
        statement,
    )?;
    execute("Damgård–Jurik", &damgard_jurik, &prover, &mut rng)?;

    Ok(())
}
