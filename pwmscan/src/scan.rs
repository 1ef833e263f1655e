//! Sliding-window scanner scoring every window of a sequence.

use std::borrow::Cow;

use super::abc::Alphabet;
use super::abc::ComplementableSymbol;
use super::abc::Dna;
use super::abc::Symbol;
use super::dense::DenseMatrix;
use super::err::BufferSize;
use super::err::Error;
use super::err::InvalidData;
use super::err::InvalidWindowLength;
use super::num::StrictlyPositive;
use super::pwm::ScoringMatrix;
use super::scores::Scores;
use super::seq::EncodedSequence;

// --- Kernel ------------------------------------------------------------------

/// Get the number of windows of length `length` in a sequence.
pub(crate) fn window_count(
    length: usize,
    sequence_length: usize,
) -> Result<usize, InvalidWindowLength> {
    if length == 0 || length > sequence_length {
        Err(InvalidWindowLength {
            length,
            sequence_length,
        })
    } else {
        Ok(sequence_length - length + 1)
    }
}

/// Sum the weights of each window of `symbols` into `result`.
///
/// `result` must hold exactly one slot per window, and `weights` must have
/// at least one row. Each window is accumulated from `0.0` in increasing
/// position order.
pub(crate) fn score_windows<T, C, F>(
    weights: &DenseMatrix<f64, C>,
    symbols: &[T],
    result: &mut [f64],
    lookup: F,
) where
    C: StrictlyPositive,
    F: Fn(&[f64], &T) -> f64,
{
    debug_assert_eq!(result.len() + weights.rows(), symbols.len() + 1);
    for (window, dst) in symbols.windows(weights.rows()).zip(result.iter_mut()) {
        let mut score = 0.0;
        for (row, symbol) in weights.iter().zip(window) {
            score += lookup(row, symbol);
        }
        *dst = score;
    }
}

// --- Configuration -----------------------------------------------------------

/// The policy for sequence characters outside of the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSymbol {
    /// Fail with an [`InvalidSymbol`](crate::err::InvalidSymbol) error.
    #[default]
    Reject,
    /// Count the position as a zero weight in every window containing it.
    ///
    /// Positions are bytes, so a multi-byte character zeroes several
    /// positions.
    Zero,
}

/// The strand of the sequence being scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strand {
    /// Score the sequence as given.
    #[default]
    Direct,
    /// Score the reverse complement of each window.
    Reverse,
}

// --- Hit ---------------------------------------------------------------------

/// A hit describing a scored position somewhere in the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    position: usize,
    score: f64,
}

impl Hit {
    /// Create a new hit.
    pub fn new(position: usize, score: f64) -> Self {
        Self { position, score }
    }

    /// The start of the window, as a zero-based index in the sequence.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The score of the window.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }
}

// --- Scanner -----------------------------------------------------------------

/// A scanner computing the score of every window of a textual sequence.
#[derive(Debug, Clone)]
pub struct Scanner<'a, A: Alphabet> {
    pssm: Cow<'a, ScoringMatrix<A>>,
    unknown: UnknownSymbol,
    strand: Strand,
    threshold: f64,
}

impl<'a, A: Alphabet> Scanner<'a, A> {
    /// Create a new scanner for the given matrix.
    pub fn new(pssm: &'a ScoringMatrix<A>) -> Self {
        Self {
            pssm: Cow::Borrowed(pssm),
            unknown: UnknownSymbol::default(),
            strand: Strand::default(),
            threshold: 0.0,
        }
    }

    /// Change the policy for characters outside of the alphabet.
    pub fn unknown(&mut self, unknown: UnknownSymbol) -> &mut Self {
        self.unknown = unknown;
        self
    }

    /// Change the threshold used to report hits.
    pub fn threshold(&mut self, threshold: f64) -> &mut Self {
        self.threshold = threshold;
        self
    }

    /// Compute the score of every window of `sequence` into `result`.
    ///
    /// `result` must have exactly one slot per window, i.e. `L - n + 1`
    /// where `L` is the sequence length and `n` the motif length. It is
    /// left untouched when an error is returned.
    pub fn score_into<S>(&self, sequence: S, result: &mut [f64]) -> Result<(), Error>
    where
        S: AsRef<[u8]>,
    {
        let sequence = sequence.as_ref();
        let windows = window_count(self.pssm.len(), sequence.len())?;
        if result.len() != windows {
            return Err(Error::from(BufferSize {
                expected: windows,
                actual: result.len(),
            }));
        }

        log::debug!(
            "scoring {} windows of length {} on {:?} strand",
            windows,
            self.pssm.len(),
            self.strand
        );
        match self.unknown {
            UnknownSymbol::Reject => {
                let encoded = EncodedSequence::<A>::encode(sequence)?;
                score_windows(self.pssm.weights(), encoded.as_slice(), result, |row, s| {
                    row[s.as_index()]
                });
            }
            UnknownSymbol::Zero => {
                let symbols = sequence
                    .iter()
                    .map(|&c| A::Symbol::from_ascii(c))
                    .collect::<Vec<_>>();
                let unknown = symbols.iter().filter(|s| s.is_none()).count();
                if unknown > 0 {
                    log::trace!("scoring {} unknown symbols as zero", unknown);
                }
                score_windows(self.pssm.weights(), &symbols, result, |row, s| match s {
                    Some(x) => row[x.as_index()],
                    None => 0.0,
                });
            }
        }

        Ok(())
    }

    /// Compute the score of every window of `sequence`.
    pub fn score<S>(&self, sequence: S) -> Result<Scores, Error>
    where
        S: AsRef<[u8]>,
    {
        let sequence = sequence.as_ref();
        let windows = window_count(self.pssm.len(), sequence.len())?;
        let mut data = vec![0.0; windows];
        self.score_into(sequence, &mut data)?;
        Ok(Scores::new(data))
    }

    /// Find all windows scoring at or above the scanner threshold.
    ///
    /// Hits are returned in order of position.
    pub fn hits<S>(&self, sequence: S) -> Result<Vec<Hit>, Error>
    where
        S: AsRef<[u8]>,
    {
        let scores = self.score(sequence)?;
        Ok(scores
            .threshold(self.threshold)
            .into_iter()
            .map(|i| Hit::new(i, scores[i]))
            .collect())
    }

    /// Find the best scoring window.
    pub fn best<S>(&self, sequence: S) -> Result<Option<Hit>, Error>
    where
        S: AsRef<[u8]>,
    {
        let scores = self.score(sequence)?;
        Ok(scores.argmax().map(|i| Hit::new(i, scores[i])))
    }
}

impl<A: Alphabet> Scanner<'_, A>
where
    A::Symbol: ComplementableSymbol,
{
    /// Change the strand being scored.
    ///
    /// On the reverse strand, the score reported at position `i` is the
    /// score of the reverse complement of the window starting at `i`.
    pub fn strand(&mut self, strand: Strand) -> &mut Self {
        if strand != self.strand {
            self.pssm = Cow::Owned(self.pssm.reverse_complement());
            self.strand = strand;
        }
        self
    }
}

// --- score -------------------------------------------------------------------

/// Score every window of a DNA sequence with flat row-major weights.
///
/// `weights` holds `n * 4` values, the weight of base `k` at motif
/// position `j` being `weights[j * 4 + k]` with `a=0, c=1, g=2, t=3`.
/// `result` must have exactly one slot per window.
///
/// # Example
/// ```
/// let weights = [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
/// let mut result = [0.0; 3];
/// pwmscan::score("acgt", &weights, 2, &mut result).unwrap();
/// assert_eq!(result, [2.0, 0.0, 0.0]);
/// ```
pub fn score<S>(sequence: S, weights: &[f64], n: usize, result: &mut [f64]) -> Result<(), Error>
where
    S: AsRef<[u8]>,
{
    let pssm = ScoringMatrix::<Dna>::from_flat(weights)?;
    if pssm.len() != n {
        return Err(Error::from(InvalidData));
    }
    Scanner::new(&pssm).score_into(sequence, result)
}
