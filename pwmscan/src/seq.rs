//! Linear storage for alphabet-encoded sequences.

use std::cmp::PartialEq;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::ops::Index;
use std::str::FromStr;

use super::abc::Alphabet;
use super::abc::ComplementableSymbol;
use super::abc::Symbol;
use super::err::InvalidSymbol;

/// Decode the character starting at byte offset `i`.
fn char_at(bytes: &[u8], i: usize) -> char {
    (1..=4)
        .filter_map(|n| bytes.get(i..i + n))
        .find_map(|b| std::str::from_utf8(b).ok())
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

// --- EncodedSequence ---------------------------------------------------------

/// A biological sequence encoded with an alphabet.
#[derive(Clone, Debug)]
pub struct EncodedSequence<A: Alphabet> {
    alphabet: std::marker::PhantomData<A>,
    data: Vec<A::Symbol>,
}

impl<A: Alphabet> EncodedSequence<A> {
    /// Create a new encoded sequence.
    pub fn new(data: Vec<A::Symbol>) -> Self {
        Self {
            data,
            alphabet: std::marker::PhantomData,
        }
    }

    /// Create a new encoded sequence from a textual representation.
    ///
    /// The first byte that is not part of the alphabet is reported along
    /// with its byte offset in the input. The reported symbol is the UTF-8
    /// character starting at that offset, or `U+FFFD` if the bytes there
    /// are not valid UTF-8.
    pub fn encode<S: AsRef<[u8]>>(sequence: S) -> Result<Self, InvalidSymbol> {
        let bytes = sequence.as_ref();
        bytes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                A::Symbol::from_ascii(c).ok_or_else(|| InvalidSymbol::new(i, char_at(bytes, i)))
            })
            .collect::<Result<_, _>>()
            .map(Self::new)
    }

    /// Return the number of symbols in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return whether the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the encoded symbols as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A::Symbol] {
        self.data.as_slice()
    }

    /// Iterate over the symbols in the sequence.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, A::Symbol> {
        self.data.iter()
    }
}

impl<A: Alphabet> EncodedSequence<A>
where
    A::Symbol: ComplementableSymbol,
{
    /// Get the reverse complement of this sequence.
    ///
    /// # Example
    /// ```
    /// # use pwmscan::abc::Dna;
    /// # use pwmscan::seq::EncodedSequence;
    /// let seq = EncodedSequence::<Dna>::encode("aacg").unwrap();
    /// assert_eq!(seq.reverse_complement().to_string(), "cgtt");
    /// ```
    pub fn reverse_complement(&self) -> Self {
        self.data.iter().rev().map(|s| s.complement()).collect()
    }
}

impl<A: Alphabet> AsRef<EncodedSequence<A>> for EncodedSequence<A> {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl<A: Alphabet> AsRef<[<A as Alphabet>::Symbol]> for EncodedSequence<A> {
    fn as_ref(&self) -> &[<A as Alphabet>::Symbol] {
        self.data.as_slice()
    }
}

impl<A: Alphabet> Default for EncodedSequence<A> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<A: Alphabet> Display for EncodedSequence<A> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for c in self.data.iter() {
            write!(f, "{}", c.as_char())?;
        }
        Ok(())
    }
}

impl<A: Alphabet> FromStr for EncodedSequence<A> {
    type Err = InvalidSymbol;
    fn from_str(seq: &str) -> Result<Self, Self::Err> {
        Self::encode(seq)
    }
}

impl<A: Alphabet> From<Vec<A::Symbol>> for EncodedSequence<A> {
    fn from(data: Vec<A::Symbol>) -> Self {
        Self::new(data)
    }
}

impl<A: Alphabet> FromIterator<A::Symbol> for EncodedSequence<A> {
    fn from_iter<I: IntoIterator<Item = A::Symbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<A: Alphabet> Index<usize> for EncodedSequence<A> {
    type Output = A::Symbol;
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a EncodedSequence<A> {
    type Item = &'a A::Symbol;
    type IntoIter = std::slice::Iter<'a, A::Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<A, S> PartialEq<S> for EncodedSequence<A>
where
    A: Alphabet,
    S: AsRef<[<A as Alphabet>::Symbol]>,
{
    fn eq(&self, other: &S) -> bool {
        self.data.as_slice() == other.as_ref()
    }
}
