//! Count, frequency and scoring matrices for a motif.

use super::abc::Alphabet;
use super::abc::Background;
use super::abc::ComplementableSymbol;
use super::abc::Pseudocounts;
use super::abc::Symbol;
use super::dense::DenseMatrix;
use super::err::BufferSize;
use super::err::Error;
use super::err::InvalidData;
use super::err::InvalidWindowLength;
use super::scan::score_windows;
use super::scan::window_count;
use super::scores::Scores;
use super::seq::EncodedSequence;

// --- CountMatrix -------------------------------------------------------------

/// A matrix storing symbol occurences at each position.
#[derive(Clone, Debug)]
pub struct CountMatrix<A: Alphabet> {
    /// The alphabet of the count matrix.
    alphabet: std::marker::PhantomData<A>,
    /// The actual counts for each position of the motif.
    data: DenseMatrix<u32, A::K>,
    /// The number of sequences from which this count matrix was obtained.
    n: u32,
}

impl<A: Alphabet> CountMatrix<A> {
    /// Create a new count matrix without checking the contents.
    fn new_unchecked(data: DenseMatrix<u32, A::K>, n: u32) -> Self {
        Self {
            alphabet: std::marker::PhantomData,
            n,
            data,
        }
    }

    /// Create a new count matrix from the given data.
    ///
    /// The matrix must contain count data, for sequences of the same
    /// length, i.e. rows should all sum to the same non-zero value.
    pub fn new(data: DenseMatrix<u32, A::K>) -> Result<Self, InvalidData> {
        let sums = data
            .iter()
            .map(|row| row.iter().sum::<u32>())
            .collect::<Vec<_>>();
        let n = match sums.first() {
            // Empty matrices contain valid data.
            None => 0,
            Some(0) => return Err(InvalidData),
            Some(&n) => n,
        };
        if sums.iter().any(|&s| s != n) {
            return Err(InvalidData);
        }
        Ok(Self::new_unchecked(data, n))
    }

    /// Create a new count matrix from the given aligned sites.
    ///
    /// All sites must have the same length.
    pub fn from_sequences<I>(sequences: I) -> Result<Self, InvalidData>
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: AsRef<EncodedSequence<A>>,
    {
        let mut n = 0;
        let mut data: Option<DenseMatrix<u32, A::K>> = None;
        for seq in sequences {
            let seq = seq.as_ref();
            let d = data.get_or_insert_with(|| DenseMatrix::new(seq.len()));
            if seq.len() != d.rows() {
                return Err(InvalidData);
            }
            for (i, x) in seq.iter().enumerate() {
                d[i][x.as_index()] += 1;
            }
            n += 1;
        }
        match data {
            None => Ok(Self::new_unchecked(DenseMatrix::new(0), n)),
            Some(matrix) => Ok(Self::new_unchecked(matrix, n)),
        }
    }

    /// The length of the motif encoded in this count matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.rows()
    }

    /// Whether the count matrix has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }

    /// The number of sites counted in each position.
    #[inline]
    pub fn sequences(&self) -> u32 {
        self.n
    }

    /// The raw counts from the count matrix.
    #[inline]
    pub fn counts(&self) -> &DenseMatrix<u32, A::K> {
        &self.data
    }

    /// Build a probability matrix from this count matrix using pseudo-counts.
    pub fn to_freq<P>(&self, pseudo: P) -> FrequencyMatrix<A>
    where
        P: Into<Pseudocounts<A>>,
    {
        let p = pseudo.into();
        let mut probas = DenseMatrix::new(self.data.rows());
        for (src, dst) in self.data.iter().zip(probas.iter_mut()) {
            for (j, &x) in src.iter().enumerate() {
                dst[j] = x as f64 + p.counts()[j];
            }
            let s: f64 = dst.iter().sum();
            for x in dst.iter_mut() {
                *x /= s;
            }
        }
        FrequencyMatrix {
            alphabet: std::marker::PhantomData,
            data: probas,
        }
    }

    /// Build a scoring matrix from this count matrix.
    ///
    /// Each weight is the log-odds `log2(f / b)` of the observed frequency
    /// `f` against the background frequency `b`. A symbol never observed
    /// at a position is given half a count, i.e. a frequency of `0.5 / S`
    /// where `S` is the number of counted sites. Since [`Background`] only
    /// holds non-zero frequencies, no weight is infinite. With the uniform
    /// DNA background this is `2 + log2(f)`.
    pub fn to_scoring<B>(&self, background: B) -> ScoringMatrix<A>
    where
        B: Into<Option<Background<A>>>,
    {
        let bg = background.into().unwrap_or_default();
        let mut weights = DenseMatrix::new(self.data.rows());
        for (src, dst) in self.data.iter().zip(weights.iter_mut()) {
            let s = src.iter().sum::<u32>() as f64;
            for (j, (&x, &b)) in src.iter().zip(bg.frequencies()).enumerate() {
                let f = if x == 0 { 0.5 / s } else { x as f64 / s };
                dst[j] = (f / b).log2();
            }
        }
        ScoringMatrix::new(bg, weights)
    }
}

impl<A: Alphabet> AsRef<DenseMatrix<u32, A::K>> for CountMatrix<A> {
    fn as_ref(&self) -> &DenseMatrix<u32, A::K> {
        &self.data
    }
}

impl<A: Alphabet> FromIterator<EncodedSequence<A>> for Result<CountMatrix<A>, InvalidData> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = EncodedSequence<A>>,
    {
        CountMatrix::from_sequences(iter)
    }
}

// --- FrequencyMatrix ---------------------------------------------------------

/// A matrix storing symbol frequencies at each position.
#[derive(Clone, Debug)]
pub struct FrequencyMatrix<A: Alphabet> {
    alphabet: std::marker::PhantomData<A>,
    data: DenseMatrix<f64, A::K>,
}

impl<A: Alphabet> FrequencyMatrix<A> {
    /// Create a new frequency matrix from the given data.
    ///
    /// Every row must contain frequencies summing to one.
    pub fn new(data: DenseMatrix<f64, A::K>) -> Result<Self, InvalidData> {
        for row in data.iter() {
            if row.iter().any(|f| !(0.0..=1.0).contains(f)) {
                return Err(InvalidData);
            }
            if (row.iter().sum::<f64>() - 1.0).abs() > 1e-6 {
                return Err(InvalidData);
            }
        }
        Ok(Self {
            alphabet: std::marker::PhantomData,
            data,
        })
    }

    /// The length of the motif encoded in this frequency matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.rows()
    }

    /// Whether the frequency matrix has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }

    /// The raw frequencies of the matrix.
    #[inline]
    pub fn frequencies(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }

    /// Convert to a scoring matrix using the given background frequencies.
    ///
    /// A zero frequency yields a weight of negative infinity.
    pub fn to_scoring<B>(&self, background: B) -> ScoringMatrix<A>
    where
        B: Into<Option<Background<A>>>,
    {
        let bg = background.into().unwrap_or_default();
        let mut weights = DenseMatrix::new(self.data.rows());
        for (src, dst) in self.data.iter().zip(weights.iter_mut()) {
            for (j, (&x, &f)) in src.iter().zip(bg.frequencies()).enumerate() {
                dst[j] = (x / f).log2();
            }
        }
        ScoringMatrix::new(bg, weights)
    }
}

impl<A: Alphabet> AsRef<DenseMatrix<f64, A::K>> for FrequencyMatrix<A> {
    fn as_ref(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }
}

// --- ScoringMatrix -----------------------------------------------------------

/// A position weight matrix storing one weight per position and symbol.
///
/// Rows are motif positions, columns are symbol indices of the alphabet.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringMatrix<A: Alphabet> {
    background: Background<A>,
    data: DenseMatrix<f64, A::K>,
}

impl<A: Alphabet> ScoringMatrix<A> {
    /// Create a new scoring matrix from the given weights.
    pub fn new(background: Background<A>, data: DenseMatrix<f64, A::K>) -> Self {
        Self { background, data }
    }

    /// Create a new scoring matrix from flat row-major weights.
    ///
    /// The weight of symbol `k` at position `j` is read from
    /// `weights[j * K + k]`, where `K` is the alphabet size.
    ///
    /// # Example
    /// ```
    /// # use pwmscan::abc::Dna;
    /// # use pwmscan::pwm::ScoringMatrix;
    /// let pssm = ScoringMatrix::<Dna>::from_flat(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(pssm.len(), 2);
    /// assert_eq!(pssm.weights()[1][1], 1.0);
    /// ```
    pub fn from_flat(weights: &[f64]) -> Result<Self, InvalidData> {
        DenseMatrix::from_flat(weights).map(|data| Self::new(Background::default(), data))
    }

    /// The length of the motif encoded in this scoring matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.rows()
    }

    /// Whether the scoring matrix has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }

    /// The weights of the position weight matrix.
    #[inline]
    pub fn weights(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }

    /// The background frequencies of the position weight matrix.
    #[inline]
    pub fn background(&self) -> &Background<A> {
        &self.background
    }

    /// The lowest score any window can obtain with this matrix.
    pub fn min_score(&self) -> f64 {
        self.data
            .iter()
            .map(|row| row.iter().cloned().min_by(f64::total_cmp).unwrap_or(0.0))
            .sum()
    }

    /// The highest score any window can obtain with this matrix.
    pub fn max_score(&self) -> f64 {
        self.data
            .iter()
            .map(|row| row.iter().cloned().max_by(f64::total_cmp).unwrap_or(0.0))
            .sum()
    }

    /// Compute the score of every window of an encoded sequence.
    pub fn score(&self, seq: &EncodedSequence<A>) -> Result<Scores, InvalidWindowLength> {
        let windows = window_count(self.len(), seq.len())?;
        let mut data = vec![0.0; windows];
        score_windows(&self.data, seq.as_slice(), &mut data, |row, s| row[s.as_index()]);
        Ok(Scores::new(data))
    }

    /// Compute the score of every window of an encoded sequence into a buffer.
    ///
    /// The buffer must have exactly one slot per window.
    pub fn score_into(&self, seq: &EncodedSequence<A>, result: &mut [f64]) -> Result<(), Error> {
        let windows = window_count(self.len(), seq.len())?;
        if result.len() != windows {
            return Err(Error::from(BufferSize {
                expected: windows,
                actual: result.len(),
            }));
        }
        score_windows(&self.data, seq.as_slice(), result, |row, s| row[s.as_index()]);
        Ok(())
    }
}

impl<A: Alphabet> ScoringMatrix<A>
where
    A::Symbol: ComplementableSymbol,
{
    /// Get the scoring matrix of the motif on the opposite strand.
    ///
    /// Scoring a window with the reverse complement matrix gives the same
    /// result as scoring the reverse complement of the window with the
    /// original matrix.
    pub fn reverse_complement(&self) -> Self {
        let mut data = DenseMatrix::new(self.len());
        for (src, dst) in self.data.iter().rev().zip(data.iter_mut()) {
            for s in A::symbols() {
                dst[s.complement().as_index()] = src[s.as_index()];
            }
        }
        Self {
            background: self.background.complement(),
            data,
        }
    }
}

impl<A: Alphabet> AsRef<ScoringMatrix<A>> for ScoringMatrix<A> {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl<A: Alphabet> AsRef<DenseMatrix<f64, A::K>> for ScoringMatrix<A> {
    fn as_ref(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }
}
