#![doc = include_str!("../README.md")]

extern crate generic_array;
extern crate log;
extern crate typenum;

pub mod abc;
pub mod dense;
pub mod err;
pub mod num;
pub mod pwm;
pub mod scan;
pub mod scores;
pub mod seq;

pub use abc::Alphabet;
pub use abc::Background;
pub use abc::ComplementableSymbol;
pub use abc::Dna;
pub use abc::Nucleotide;
pub use abc::Pseudocounts;
pub use abc::Symbol;
pub use dense::DenseMatrix;
pub use err::Error;
pub use err::InvalidSymbol;
pub use pwm::CountMatrix;
pub use pwm::FrequencyMatrix;
pub use pwm::ScoringMatrix;
pub use scan::score;
pub use scan::Hit;
pub use scan::Scanner;
pub use scan::Strand;
pub use scan::UnknownSymbol;
pub use scores::Scores;
pub use seq::EncodedSequence;
