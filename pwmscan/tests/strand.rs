extern crate pwmscan;
extern crate rand;

use pwmscan::Dna;
use pwmscan::EncodedSequence;
use pwmscan::Scanner;
use pwmscan::ScoringMatrix;
use pwmscan::Strand;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

fn random_sequence<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| b"acgt"[rng.gen_range(0..4)] as char)
        .collect()
}

#[test]
fn reverse_strand_matches_reverse_complement() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let length = rng.gen_range(10..200);
        let n = rng.gen_range(1..10);
        let weights = (0..n * 4)
            .map(|_| rng.gen_range(-8..=8) as f64)
            .collect::<Vec<f64>>();
        let sequence = random_sequence(&mut rng, length);
        let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();

        let mut scanner = Scanner::new(&pssm);
        scanner.strand(Strand::Reverse);
        let reverse = scanner.score(&sequence).unwrap();

        let rc = EncodedSequence::<Dna>::encode(&sequence)
            .unwrap()
            .reverse_complement()
            .to_string();
        let mut expected: Vec<f64> = Scanner::new(&pssm).score(&rc).unwrap().into();
        expected.reverse();

        assert_eq!(reverse.as_slice(), expected.as_slice());
    }
}

#[test]
fn strand_roundtrip() {
    let weights = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
    let mut scanner = Scanner::new(&pssm);
    scanner.strand(Strand::Reverse).strand(Strand::Direct);
    let scores = scanner.score("acgtt").unwrap();
    let direct = Scanner::new(&pssm).score("acgtt").unwrap();
    assert_eq!(scores, direct);
}

#[test]
fn reverse_strand_example() {
    // "ac" on the reverse strand reads "gt"
    let weights = [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
    let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
    let mut scanner = Scanner::new(&pssm);
    scanner.strand(Strand::Reverse);
    let scores = scanner.score("acgt").unwrap();
    assert_eq!(scores.as_slice(), &[2.0, 0.0, 0.0]);
}
