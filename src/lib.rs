pub mod alphabet;
pub mod counter;

use std::error::Error;
use std::fmt::Display;

pub use alphabet::{Alphabet, CustomAlphabet, SequenceKind};
pub use counter::{sequence_length, sequence_value, SequenceCounter};

/// An error raised when a sequence is configured with invalid input.
///
/// All variants are fatal: they are raised at the point of detection
/// (construction or query time) and a counter is never partially created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The given tag is neither the name nor the index of a [SequenceKind].
    UnknownSequenceKind(String),
    /// A custom alphabet was required but not supplied.
    MissingCustomAlphabet,
    /// The alphabet has fewer than two symbols.
    AlphabetTooSmall(usize),
    /// A custom alphabet token does not normalize to a single character.
    NonAtomicToken(String),
    /// The same symbol occurs more than once in the alphabet source.
    DuplicateSymbol(char),
    /// A character of a sequence value is not a symbol of the alphabet.
    SymbolNotFound(char),
    /// Start and end values have different widths.
    WidthMismatch { start: usize, end: usize },
    /// The start value is positioned after the end value in the alphabet's ordering.
    StartAfterEnd { start: String, end: String },
    /// The length of a sequence without an end value was requested.
    Unbounded,
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::UnknownSequenceKind(tag) => {
                write!(f, "unknown sequence kind: {}", tag)
            }
            ConfigurationError::MissingCustomAlphabet => {
                write!(f, "sequence kind \"custom\" requires a custom alphabet")
            }
            ConfigurationError::AlphabetTooSmall(n) => {
                write!(f, "alphabet must contain at least 2 symbols, got {}", n)
            }
            ConfigurationError::NonAtomicToken(token) => {
                write!(f, "alphabet token is not a single character: {:?}", token)
            }
            ConfigurationError::DuplicateSymbol(c) => {
                write!(f, "duplicate symbol in alphabet: {:?}", c)
            }
            ConfigurationError::SymbolNotFound(c) => {
                write!(f, "symbol not in alphabet: {:?}", c)
            }
            ConfigurationError::WidthMismatch { start, end } => {
                write!(
                    f,
                    "start and end must have equal width, got {} and {}",
                    start, end
                )
            }
            ConfigurationError::StartAfterEnd { start, end } => {
                write!(f, "start value {:?} is after end value {:?}", start, end)
            }
            ConfigurationError::Unbounded => {
                write!(f, "sequence has no end value, its length is unbounded")
            }
        }
    }
}

impl Error for ConfigurationError {}
