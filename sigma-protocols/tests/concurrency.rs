use bls12_381::{G1Projective, Scalar};
use ff::Field;
use group::Group;
use rand::rngs::StdRng;
use sigma_protocols::{
    pedersen::PedersenParameters, proofs::*, rng::SharedRng, BlindingFactor, Prover, SigmaConfig,
    Simulator, Verifier,
};

#[test]
fn concurrent_executions_share_one_protocol_and_rng() {
    let rng = SharedRng::<StdRng>::from_entropy();
    let config = SigmaConfig::default();
    let dlog = config.dlog::<G1Projective>().unwrap();
    let pedersen = config.pedersen_opening::<G1Projective>().unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let mut rng = rng.clone();
            let dlog = &dlog;
            let _ = scope.spawn(move || {
                let w = Scalar::random(&mut rng);
                let statement = DlogStatement::new(G1Projective::generator() * w);
                let prover = Prover::new(dlog, DlogWitness::new(w), statement).unwrap();
                let verifier = Verifier::new(dlog);
                for _ in 0..4 {
                    let pending =
                        prover.compute_first_message(prover.sample_random_values(&mut rng));
                    let first_message = *pending.first_message();
                    let challenge = verifier.sample_challenge(&mut rng);
                    let response = pending
                        .compute_second_message(challenge.as_bytes())
                        .unwrap();
                    verifier
                        .verify(&statement, &first_message, &challenge, &response)
                        .unwrap();
                }
            });
        }

        for _ in 0..4 {
            let mut rng = rng.clone();
            let pedersen = &pedersen;
            let _ = scope.spawn(move || {
                let params = PedersenParameters::new(&mut rng);
                let statement = PedersenStatement::new(
                    params,
                    params.commit(&Scalar::random(&mut rng), BlindingFactor::new(&mut rng)),
                );
                let transcript = Simulator::new(pedersen)
                    .simulate_random(&mut rng, &statement)
                    .unwrap();
                Verifier::new(pedersen)
                    .verify_transcript(&statement, &transcript)
                    .unwrap();
            });
        }
    });
}
