//! Owned results of a sliding-window scan.

use std::ops::Deref;

// --- Scores ------------------------------------------------------------------

/// The scores of a sequence, indexed by window start.
///
/// A sequence of length `L` scanned with a motif of length `n` yields
/// `L - n + 1` scores.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scores {
    data: Vec<f64>,
}

impl Scores {
    /// Wrap the scores of consecutive windows.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// The start of the best scoring window, if any.
    ///
    /// When several windows share the best score, the last one wins.
    pub fn argmax(&self) -> Option<usize> {
        self.data
            .iter()
            .enumerate()
            .max_by(|x, y| x.1.total_cmp(y.1))
            .map(|(i, _)| i)
    }

    /// The best window score, or `None` when no window was scored.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().max_by(|x, y| x.total_cmp(y)).cloned()
    }

    /// The starts of all windows scoring at least `threshold`, ascending.
    pub fn threshold(&self, threshold: f64) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &x)| x >= threshold)
            .map(|(i, _)| i)
            .collect()
    }
}

impl AsRef<[f64]> for Scores {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl Deref for Scores {
    type Target = Vec<f64>;
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<f64>> for Scores {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<Scores> for Vec<f64> {
    fn from(scores: Scores) -> Self {
        scores.data
    }
}
