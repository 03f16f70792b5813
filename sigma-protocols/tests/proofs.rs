mod test_utils;

use bls12_381::{G1Projective, G2Projective, Scalar};
use ff::Field;
use group::{Group, GroupEncoding};
use sigma_protocols::{
    damgard_jurik::DamgardJurikPublicKey,
    pedersen::PedersenParameters,
    proofs::*,
    BlindingFactor, CheatAttempt, Challenge, ConfigurationError, Error, Prover, Rng,
    SigmaProtocol, Simulator, SoundnessParameter, Verifier,
};
use test_utils::{modulus, seeded_rng};

fn soundness(bits: u32) -> SoundnessParameter {
    SoundnessParameter::new(bits).unwrap()
}

/// Run one execution with every message passing through its byte encoding.
fn run_over_the_wire<P: SigmaProtocol>(
    protocol: &P,
    prover: &Prover<P>,
    public_input: &P::PublicInput,
    rng: &mut impl Rng,
) -> Result<(), CheatAttempt> {
    let verifier = Verifier::new(protocol);

    let pending = prover.compute_first_message(prover.sample_random_values(rng));
    let first_bytes = protocol.encode_first_message(pending.first_message());

    let first_message = verifier.decode_first_message(&first_bytes)?;
    let challenge = verifier.sample_challenge(rng);

    let second_message = pending.compute_second_message(challenge.as_bytes())?;
    let second_bytes = protocol.encode_second_message(&second_message);

    let second_message = verifier.decode_second_message(&second_bytes)?;
    verifier.verify(public_input, &first_message, &challenge, &second_message)
}

fn dlog_over_the_wire<G: Group<Scalar = Scalar> + GroupEncoding>() {
    let mut rng = seeded_rng();
    let protocol = DlogKnowledge::<G>::new(soundness(80)).unwrap();
    let w = Scalar::random(&mut rng);
    let statement = DlogStatement::new(G::generator() * w);
    let prover = Prover::new(&protocol, DlogWitness::new(w), statement).unwrap();

    for _ in 0..5 {
        run_over_the_wire(&protocol, &prover, &statement, &mut rng).unwrap();
    }
}

#[test]
fn dlog_over_the_wire_g1() {
    dlog_over_the_wire::<G1Projective>()
}

#[test]
fn dlog_over_the_wire_g2() {
    dlog_over_the_wire::<G2Projective>()
}

fn pedersen_over_the_wire<G: Group<Scalar = Scalar> + GroupEncoding>() {
    let mut rng = seeded_rng();
    let protocol = PedersenOpeningKnowledge::<G>::new(soundness(128)).unwrap();
    let params = PedersenParameters::<G>::new(&mut rng);
    let x = Scalar::random(&mut rng);
    let bf = BlindingFactor::new(&mut rng);
    let statement = PedersenStatement::new(params, params.commit(&x, bf));
    let prover = Prover::new(&protocol, PedersenWitness::new(x, bf), statement).unwrap();

    for _ in 0..5 {
        run_over_the_wire(&protocol, &prover, &statement, &mut rng).unwrap();
    }
}

#[test]
fn pedersen_over_the_wire_g1() {
    pedersen_over_the_wire::<G1Projective>()
}

#[test]
fn pedersen_over_the_wire_g2() {
    pedersen_over_the_wire::<G2Projective>()
}

#[test]
fn damgard_jurik_over_the_wire() {
    let mut rng = seeded_rng();
    for length in 1..=2 {
        let key = DamgardJurikPublicKey::new(modulus(), length).unwrap();
        let protocol = DamgardJurikKnowledge::new(key.clone(), soundness(80)).unwrap();
        let x = num_bigint::BigUint::from(123_456_789u64);
        let (ciphertext, r) = key.encrypt(&x, &mut rng);
        let statement = protocol.statement(ciphertext).unwrap();
        let prover =
            Prover::new(&protocol, DamgardJurikWitness::new(x, r), statement.clone()).unwrap();

        for _ in 0..2 {
            run_over_the_wire(&protocol, &prover, &statement, &mut rng).unwrap();
        }
    }
}

#[test]
fn dlog_with_unit_challenge() {
    let mut rng = seeded_rng();
    let protocol = DlogKnowledge::<G1Projective>::new(soundness(80)).unwrap();
    let w = Scalar::random(&mut rng);
    let statement = DlogStatement::new(G1Projective::generator() * w);
    let prover = Prover::new(&protocol, DlogWitness::new(w), statement).unwrap();

    let pending = prover.compute_first_message(prover.sample_random_values(&mut rng));
    let first_message = *pending.first_message();
    let mut one = vec![0u8; 10];
    one[9] = 1;
    let response = pending.compute_second_message(&one).unwrap();

    // z = r + w, so g^z = a·h.
    assert_eq!(
        G1Projective::generator() * response.to_scalar(),
        first_message.to_element() + statement.h()
    );
    let challenge = Challenge::decode(&one, protocol.soundness()).unwrap();
    assert!(Verifier::new(&protocol)
        .verify(&statement, &first_message, &challenge, &response)
        .is_ok());
}

#[test]
fn challenges_of_wrong_length_are_rejected() {
    let mut rng = seeded_rng();
    let protocol = DlogKnowledge::<G1Projective>::new(soundness(80)).unwrap();
    let w = Scalar::random(&mut rng);
    let statement = DlogStatement::new(G1Projective::generator() * w);
    let prover = Prover::new(&protocol, DlogWitness::new(w), statement).unwrap();
    let wrong_length = CheatAttempt::ChallengeLength {
        expected: 10,
        got: 9,
    };

    // Prover: the pending state is consumed even though no response is produced.
    let pending = prover.compute_first_message(prover.sample_random_values(&mut rng));
    assert_eq!(
        pending.compute_second_message(&[0; 9]).unwrap_err(),
        wrong_length
    );

    // Simulator.
    let simulator = Simulator::new(&protocol);
    assert_eq!(
        simulator.simulate(&mut rng, &statement, &[0; 9]).unwrap_err(),
        Error::Cheat(wrong_length)
    );

    // Verifier, given a transcript whose challenge has a different length.
    let transcript = simulator.simulate_random(&mut rng, &statement).unwrap();
    let short = Challenge::decode(&[0; 9], soundness(72)).unwrap();
    assert_eq!(
        Verifier::new(&protocol).verify(
            &statement,
            &transcript.first_message,
            &short,
            &transcript.second_message
        ),
        Err(wrong_length)
    );
}

#[test]
fn invalid_group_elements_are_cheat_attempts() {
    let protocol = DlogKnowledge::<G1Projective>::new(soundness(80)).unwrap();
    let verifier = Verifier::new(&protocol);
    // The all-ones string is not the compressed encoding of any point.
    assert_eq!(
        verifier.decode_first_message(&[0xff; 48]),
        Err(CheatAttempt::InvalidGroupElement)
    );
    assert_eq!(
        verifier.decode_first_message(&[0; 3]),
        Err(CheatAttempt::InvalidGroupElement)
    );
    assert_eq!(
        verifier.decode_second_message(&[0xff; 32]),
        Err(CheatAttempt::InvalidScalar)
    );
}

#[test]
fn soundness_is_checked_at_construction() {
    assert_eq!(
        SoundnessParameter::new(12),
        Err(ConfigurationError::UnalignedSoundness(12))
    );
    assert!(DlogKnowledge::<G2Projective>::new(soundness(248)).is_ok());
    assert!(matches!(
        PedersenOpeningKnowledge::<G1Projective>::new(soundness(256)),
        Err(ConfigurationError::SoundnessExceedsGroupOrder { .. })
    ));

    let key = DamgardJurikPublicKey::new(modulus(), 1).unwrap();
    assert!(DamgardJurikKnowledge::new(key.clone(), soundness(368)).is_ok());
    assert_eq!(
        DamgardJurikKnowledge::new(key, soundness(376)),
        Err(ConfigurationError::SoundnessExceedsModulus {
            bits: 376,
            modulus_bits: 1128
        })
    );
}

#[test]
fn transcripts_survive_serialization() {
    let mut rng = seeded_rng();
    let protocol = PedersenOpeningKnowledge::<G1Projective>::new(soundness(80)).unwrap();
    let params = PedersenParameters::new(&mut rng);
    let statement = PedersenStatement::new(
        params,
        params.commit(&Scalar::random(&mut rng), BlindingFactor::new(&mut rng)),
    );
    let transcript = Simulator::new(&protocol).simulate_random(&mut rng, &statement).unwrap();

    let bytes = bincode::serialize(&transcript).unwrap();
    let decoded: sigma_protocols::Transcript<PedersenOpeningKnowledge<G1Projective>> =
        bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, transcript);
    assert!(Verifier::new(&protocol)
        .verify_transcript(&statement, &decoded)
        .is_ok());
}
