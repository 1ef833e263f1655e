//! Error types for matrix construction and sequence scoring.

use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

// --- InvalidSymbol -----------------------------------------------------------

/// The given character is not a valid symbol of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    /// The byte offset of the symbol in the sequence.
    pub position: usize,
    /// The offending character, decoded from UTF-8 at `position`.
    ///
    /// Bytes that do not start a valid UTF-8 character are reported as
    /// [`char::REPLACEMENT_CHARACTER`].
    pub symbol: char,
}

impl InvalidSymbol {
    pub fn new(position: usize, symbol: char) -> Self {
        Self { position, symbol }
    }
}

impl Display for InvalidSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "invalid symbol {:?} at position {}",
            self.symbol, self.position
        )
    }
}

impl StdError for InvalidSymbol {}

// --- InvalidWindowLength -----------------------------------------------------

/// The motif length is zero or larger than the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWindowLength {
    /// The length of the window, i.e. the number of matrix rows.
    pub length: usize,
    /// The length of the sequence being scored.
    pub sequence_length: usize,
}

impl Display for InvalidWindowLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.length == 0 {
            f.write_str("window length must be strictly positive")
        } else {
            write!(
                f,
                "window length {} exceeds sequence length {}",
                self.length, self.sequence_length
            )
        }
    }
}

impl StdError for InvalidWindowLength {}

// --- BufferSize --------------------------------------------------------------

/// The output buffer does not hold exactly one slot per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSize {
    pub expected: usize,
    pub actual: usize,
}

impl Display for BufferSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "score buffer has length {}, expected {}",
            self.actual, self.expected
        )
    }
}

impl StdError for BufferSize {}

// --- InvalidData -------------------------------------------------------------

/// Invalid data was passed to initialize a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidData;

impl Display for InvalidData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("invalid data")
    }
}

impl StdError for InvalidData {}

// --- Error -------------------------------------------------------------------

/// Any error that can occur while scoring a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidSymbol(InvalidSymbol),
    InvalidWindowLength(InvalidWindowLength),
    BufferSize(BufferSize),
    InvalidData(InvalidData),
}

impl From<InvalidSymbol> for Error {
    fn from(error: InvalidSymbol) -> Self {
        Error::InvalidSymbol(error)
    }
}

impl From<InvalidWindowLength> for Error {
    fn from(error: InvalidWindowLength) -> Self {
        Error::InvalidWindowLength(error)
    }
}

impl From<BufferSize> for Error {
    fn from(error: BufferSize) -> Self {
        Error::BufferSize(error)
    }
}

impl From<InvalidData> for Error {
    fn from(error: InvalidData) -> Self {
        Error::InvalidData(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::InvalidSymbol(e) => e.fmt(f),
            Error::InvalidWindowLength(e) => e.fmt(f),
            Error::BufferSize(e) => e.fmt(f),
            Error::InvalidData(e) => e.fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidSymbol(e) => Some(e),
            Error::InvalidWindowLength(e) => Some(e),
            Error::BufferSize(e) => Some(e),
            Error::InvalidData(e) => Some(e),
        }
    }
}
