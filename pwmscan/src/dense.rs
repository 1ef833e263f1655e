//! Dense row-major matrix storage with a constant number of columns.

use std::fmt::Debug;
use std::fmt::Error as FmtError;
use std::fmt::Formatter;
use std::ops::Index;
use std::ops::IndexMut;

use super::err::InvalidData;
use super::num::StrictlyPositive;

/// An iterator over the rows of a dense matrix.
pub type Iter<'a, T> = std::slice::ChunksExact<'a, T>;

/// An iterator over the mutable rows of a dense matrix.
pub type IterMut<'a, T> = std::slice::ChunksExactMut<'a, T>;

// --- DenseMatrix -------------------------------------------------------------

/// A dense matrix with a constant number of columns.
///
/// Rows are stored contiguously, so that element `(i, j)` of the matrix is
/// found at offset `i * C + j` of the flat storage.
#[derive(Clone)]
pub struct DenseMatrix<T: Default + Copy, C: StrictlyPositive> {
    data: Vec<T>,
    rows: usize,
    _columns: std::marker::PhantomData<C>,
}

impl<T: Default + Copy, C: StrictlyPositive> DenseMatrix<T, C> {
    /// Create a new matrix with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self {
            data: vec![T::default(); rows * C::USIZE],
            rows,
            _columns: std::marker::PhantomData,
        }
    }

    /// Create a new dense matrix from an iterable of rows.
    ///
    /// # Panics
    ///
    /// Panics if any of the rows does not have the number of elements
    /// corresponding to the dense matrix columns.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: AsRef<[T]>,
        <I as IntoIterator>::IntoIter: ExactSizeIterator,
    {
        let it = rows.into_iter();
        let mut dense = Self::new(it.len());
        for (i, row) in it.enumerate() {
            dense[i].copy_from_slice(row.as_ref());
        }
        dense
    }

    /// Create a new dense matrix from its flat row-major representation.
    ///
    /// The input length must be a multiple of the number of columns.
    ///
    /// # Example
    /// ```rust
    /// # use pwmscan::num::U4;
    /// # use pwmscan::dense::DenseMatrix;
    /// let d = DenseMatrix::<u32, U4>::from_flat(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(d.rows(), 2);
    /// assert_eq!(d[1][2], 6);
    /// ```
    pub fn from_flat(data: &[T]) -> Result<Self, InvalidData> {
        if data.len() % C::USIZE != 0 {
            return Err(InvalidData);
        }
        Ok(Self {
            rows: data.len() / C::USIZE,
            data: data.to_vec(),
            _columns: std::marker::PhantomData,
        })
    }

    /// The number of columns of the matrix.
    #[inline]
    pub const fn columns(&self) -> usize {
        C::USIZE
    }

    /// The number of rows of the matrix.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// View the matrix as its flat row-major representation.
    #[inline]
    pub fn as_flat(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the rows of the matrix.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.chunks_exact(C::USIZE)
    }

    /// Returns an iterator that allows modifying each row.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.chunks_exact_mut(C::USIZE)
    }
}

impl<T: Default + Copy + Debug, C: StrictlyPositive> Debug for DenseMatrix<T, C> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Default + Copy + PartialEq, C: StrictlyPositive> PartialEq for DenseMatrix<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.data == other.data
    }
}

impl<T: Default + Copy, C: StrictlyPositive> Index<usize> for DenseMatrix<T, C> {
    type Output = [T];
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        let row = C::USIZE * index;
        &self.data[row..row + C::USIZE]
    }
}

impl<T: Default + Copy, C: StrictlyPositive> IndexMut<usize> for DenseMatrix<T, C> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let row = C::USIZE * index;
        &mut self.data[row..row + C::USIZE]
    }
}

impl<'a, T: Default + Copy, C: StrictlyPositive> IntoIterator for &'a DenseMatrix<T, C> {
    type Item = &'a [T];
    type IntoIter = Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Default + Copy, C: StrictlyPositive> IntoIterator for &'a mut DenseMatrix<T, C> {
    type Item = &'a mut [T];
    type IntoIter = IterMut<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
