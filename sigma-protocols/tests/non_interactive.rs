mod test_utils;

use bls12_381::{G2Projective, Scalar};
use ff::Field;
use group::Group;
use sigma_protocols::{
    challenge::ChallengeBuilder, pedersen::PedersenParameters, proofs::*, BlindingFactor,
    CheatAttempt, Prover, SigmaConfig, SigmaProtocol, Verifier,
};
use test_utils::{modulus, seeded_rng};

#[test]
fn dlog_proof_is_bound_to_statement_and_context() {
    let mut rng = seeded_rng();
    let protocol = SigmaConfig::default().dlog::<G2Projective>().unwrap();
    let w = Scalar::random(&mut rng);
    let statement = DlogStatement::new(G2Projective::generator() * w);
    let other = DlogStatement::new(G2Projective::generator() * (w + Scalar::one()));

    let prover = Prover::new(&protocol, DlogWitness::new(w), statement).unwrap();
    let transcript = prover.prove_non_interactive(&mut rng, b"session 1");
    let verifier = Verifier::new(&protocol);

    assert!(verifier
        .verify_non_interactive(&statement, &transcript, b"session 1")
        .is_ok());
    assert_eq!(
        verifier.verify_non_interactive(&statement, &transcript, b"session 2"),
        Err(CheatAttempt::VerificationFailed)
    );
    assert_eq!(
        verifier.verify_non_interactive(&other, &transcript, b"session 1"),
        Err(CheatAttempt::VerificationFailed)
    );
}

#[test]
fn challenge_is_derived_from_public_data() {
    let mut rng = seeded_rng();
    let protocol = SigmaConfig::default()
        .pedersen_opening::<G2Projective>()
        .unwrap();
    let params = PedersenParameters::new(&mut rng);
    let x = Scalar::random(&mut rng);
    let bf = BlindingFactor::new(&mut rng);
    let statement = PedersenStatement::new(params, params.commit(&x, bf));

    let prover = Prover::new(&protocol, PedersenWitness::new(x, bf), statement).unwrap();
    let transcript = prover.prove_non_interactive(&mut rng, b"context");
    let expected = ChallengeBuilder::new()
        .with_bytes(b"context")
        .with(&protocol)
        .with(&statement)
        .with(&transcript.first_message)
        .finish(protocol.soundness());
    assert_eq!(transcript.challenge, expected);
    assert_eq!(transcript.challenge.as_bytes().len(), 10);
}

#[test]
fn replaced_challenge_is_rejected() {
    let mut rng = seeded_rng();
    let protocol = SigmaConfig::default().damgard_jurik(modulus()).unwrap();
    let x = num_bigint::BigUint::from(7u32);
    let (ciphertext, r) = protocol.key().encrypt(&x, &mut rng);
    let statement = protocol.statement(ciphertext).unwrap();
    let prover =
        Prover::new(&protocol, DamgardJurikWitness::new(x, r), statement.clone()).unwrap();

    let mut transcript = prover.prove_non_interactive(&mut rng, b"");
    let verifier = Verifier::new(&protocol);
    assert!(verifier
        .verify_non_interactive(&statement, &transcript, b"")
        .is_ok());

    // A simulated transcript verifies interactively, but its challenge is not the hash.
    transcript = sigma_protocols::Simulator::new(&protocol)
        .simulate_random(&mut rng, &statement)
        .unwrap();
    assert!(verifier.verify_transcript(&statement, &transcript).is_ok());
    assert_eq!(
        verifier.verify_non_interactive(&statement, &transcript, b""),
        Err(CheatAttempt::VerificationFailed)
    );
}
