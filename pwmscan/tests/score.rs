extern crate pwmscan;
extern crate rand;

use pwmscan::err::BufferSize;
use pwmscan::err::InvalidWindowLength;
use pwmscan::Dna;
use pwmscan::Error;
use pwmscan::InvalidSymbol;
use pwmscan::Scanner;
use pwmscan::ScoringMatrix;
use pwmscan::UnknownSymbol;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

const BASES: &[u8] = b"acgt";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_sequence<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| BASES[rng.gen_range(0..4)] as char)
        .collect()
}

fn code(c: u8) -> usize {
    BASES.iter().position(|&b| b == c).unwrap()
}

/// Naive double loop over the flat weights.
fn reference(sequence: &str, weights: &[f64], n: usize) -> Vec<f64> {
    let seq = sequence.as_bytes();
    let mut result = vec![0.0; seq.len() - n + 1];
    for i in 0..result.len() {
        let mut r = 0.0;
        for j in 0..n {
            r += weights[j * 4 + code(seq[i + j])];
        }
        result[i] = r;
    }
    result
}

#[test]
fn score_example() {
    init_logger();
    let weights = [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut result = [0.0; 3];
    pwmscan::score("acgt", &weights, 2, &mut result).unwrap();
    assert_eq!(result, [2.0, 0.0, 0.0]);
}

#[test]
fn score_matches_reference_integer_weights() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let length = rng.gen_range(1..200);
        let n = rng.gen_range(1..=length.min(20));
        let weights = (0..n * 4)
            .map(|_| rng.gen_range(-10..=10) as f64)
            .collect::<Vec<f64>>();
        let sequence = random_sequence(&mut rng, length);

        let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
        let scores = Scanner::new(&pssm).score(&sequence).unwrap();
        assert_eq!(scores.len(), length - n + 1);
        assert_eq!(scores.as_slice(), reference(&sequence, &weights, n).as_slice());
    }
}

#[test]
fn score_matches_reference_real_weights() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..50 {
        let length = rng.gen_range(1..500);
        let n = rng.gen_range(1..=length.min(30));
        let weights = (0..n * 4)
            .map(|_| rng.gen_range(-4.0..4.0))
            .collect::<Vec<f64>>();
        let sequence = random_sequence(&mut rng, length);

        let mut result = vec![0.0; length - n + 1];
        pwmscan::score(&sequence, &weights, n, &mut result).unwrap();
        let expected = reference(&sequence, &weights, n);
        for (i, (x, y)) in result.iter().zip(expected.iter()).enumerate() {
            assert!((x - y).abs() < 1e-9, "{} != {} at position {}", x, y, i);
        }
    }
}

#[test]
fn score_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let sequence = random_sequence(&mut rng, 300);
    let weights = (0..12 * 4)
        .map(|_| rng.gen_range(-1.0..1.0))
        .collect::<Vec<f64>>();
    let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
    let scanner = Scanner::new(&pssm);
    let first = scanner.score(&sequence).unwrap();
    let second = scanner.score(&sequence).unwrap();
    assert_eq!(first, second);
}

#[test]
fn score_full_length_window() {
    let sequence = "gattaca";
    let weights = (0..sequence.len() * 4)
        .map(|i| i as f64)
        .collect::<Vec<f64>>();
    let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
    let scores = Scanner::new(&pssm).score(sequence).unwrap();
    let total: f64 = sequence
        .bytes()
        .enumerate()
        .map(|(j, c)| weights[j * 4 + code(c)])
        .sum();
    assert_eq!(scores.as_slice(), &[total]);
}

#[test]
fn score_single_position_window() {
    let sequence = "gattaca";
    let weights = [0.5, -1.5, 2.25, 3.0];
    let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
    let scores = Scanner::new(&pssm).score(sequence).unwrap();
    assert_eq!(scores.len(), sequence.len());
    for (score, c) in scores.iter().zip(sequence.bytes()) {
        assert_eq!(*score, weights[code(c)]);
    }
}

#[test]
fn score_invalid_symbol() {
    init_logger();
    let weights = [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut result = [0.0; 3];
    let err = pwmscan::score("acNt", &weights, 2, &mut result).unwrap_err();
    assert_eq!(err, Error::InvalidSymbol(InvalidSymbol::new(2, 'N')));

    let err = pwmscan::score("ACGT", &weights, 2, &mut result).unwrap_err();
    assert_eq!(err, Error::InvalidSymbol(InvalidSymbol::new(0, 'A')));
}

#[test]
fn score_invalid_symbol_non_ascii() {
    let weights = [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
    let err = Scanner::new(&pssm).score("acét").unwrap_err();
    assert_eq!(err, Error::InvalidSymbol(InvalidSymbol::new(2, 'é')));
    assert_eq!(err.to_string(), "invalid symbol 'é' at position 2");

    // "é" is two bytes long, so the buffer holds four windows
    let mut result = [0.0; 4];
    let err = pwmscan::score("gaét", &weights, 2, &mut result).unwrap_err();
    assert_eq!(err, Error::InvalidSymbol(InvalidSymbol::new(2, 'é')));
    assert_eq!(result, [0.0; 4]);
}

#[test]
fn score_unknown_as_zero() {
    init_logger();
    let weights = [1.0, 2.0, 3.0, 4.0, 10.0, 20.0, 30.0, 40.0];
    let pssm = ScoringMatrix::<Dna>::from_flat(&weights).unwrap();
    let mut scanner = Scanner::new(&pssm);
    scanner.unknown(UnknownSymbol::Zero);
    let scores = scanner.score("cnRg").unwrap();
    assert_eq!(scores.as_slice(), &[2.0, 0.0, 30.0]);
}

#[test]
fn score_invalid_window_length() {
    let weights = [0.0; 5 * 4];
    let mut result = [0.0; 1];
    let err = pwmscan::score("acgt", &weights, 5, &mut result).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidWindowLength(InvalidWindowLength {
            length: 5,
            sequence_length: 4
        })
    );

    let pssm = ScoringMatrix::<Dna>::from_flat(&[]).unwrap();
    let err = Scanner::new(&pssm).score("acgt").unwrap_err();
    assert!(matches!(err, Error::InvalidWindowLength(_)));

    let pssm = ScoringMatrix::<Dna>::from_flat(&[0.0; 4]).unwrap();
    let err = Scanner::new(&pssm).score("").unwrap_err();
    assert!(matches!(err, Error::InvalidWindowLength(_)));
}

#[test]
fn score_buffer_size() {
    let weights = [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    for size in [0, 2, 4, 10] {
        let mut result = vec![0.0; size];
        let err = pwmscan::score("acgt", &weights, 2, &mut result).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize(BufferSize {
                expected: 3,
                actual: size
            })
        );
    }
}

#[test]
fn score_does_not_touch_inputs() {
    let sequence = String::from("acgtacgt");
    let weights = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let (seq_copy, weights_copy) = (sequence.clone(), weights.clone());
    let mut result = vec![0.0; 7];
    pwmscan::score(&sequence, &weights, 2, &mut result).unwrap();
    assert_eq!(sequence, seq_copy);
    assert_eq!(weights, weights_copy);
}
