//! An alphabet is an ordered, duplicate-free list of symbols.
//! The order of the symbols is significant: it assigns every symbol a digit
//! index and thereby defines both the successor of a sequence value and the
//! numeric distance between two values.
//! This module resolves a [SequenceKind] (or a caller-supplied custom source)
//! into the [Alphabet] that a [counter](crate::counter) runs over.

use std::fmt::Display;
use std::str::FromStr;

use indexmap::IndexSet;
use itertools::Itertools;
use quickcheck::Arbitrary;

use crate::ConfigurationError;

/// The fixed 62-symbol base list: `a`-`z`, `A`-`Z`, `0`-`9`, in that
/// concatenation order. Every non-custom [SequenceKind] is an inclusive
/// slice of this list, optionally a concatenation of two slices.
const BASE_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Inclusive slice of [BASE_SYMBOLS] between two boundary symbols.
fn base_span(lo: char, hi: char) -> impl Iterator<Item = char> {
    // The boundaries are fixed members of BASE_SYMBOLS, always safe to unwrap
    let start = BASE_SYMBOLS.chars().position(|c| c == lo).unwrap();
    let end = BASE_SYMBOLS.chars().position(|c| c == hi).unwrap();
    BASE_SYMBOLS.chars().skip(start).take(end - start + 1)
}

/// The kind of a sequence, selecting which alphabet the sequence counts over.
///
/// The eight kinds form a closed set. All kinds except [SequenceKind::Custom]
/// denote a deterministic sublist of the 62-symbol base list; `Custom` takes
/// its symbols from a caller-supplied [CustomAlphabet].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// `a`-`z`, `A`-`Z`, `0`-`9`; the full base list, radix 62.
    AlphanumericBothCase,
    /// `a`-`z`, `0`-`9`; radix 36.
    AlphanumericLowerCase,
    /// `A`-`Z`, `0`-`9`; radix 36.
    AlphanumericUpperCase,
    /// `a`-`z`; radix 26.
    AlphaLowerCase,
    /// `A`-`Z`; radix 26.
    AlphaUpperCase,
    /// `0`-`9`; radix 10.
    Numeric,
    /// `0`-`9`, `A`-`F`; radix 16.
    Hex,
    /// A caller-supplied alphabet, see [CustomAlphabet].
    Custom,
}

impl SequenceKind {
    /// All sequence kinds, in their canonical order.
    /// The position of a kind in this list is the index accepted by
    /// [FromStr](#impl-FromStr-for-SequenceKind).
    pub const ALL: [SequenceKind; 8] = [
        SequenceKind::AlphanumericBothCase,
        SequenceKind::AlphanumericLowerCase,
        SequenceKind::AlphanumericUpperCase,
        SequenceKind::AlphaLowerCase,
        SequenceKind::AlphaUpperCase,
        SequenceKind::Numeric,
        SequenceKind::Hex,
        SequenceKind::Custom,
    ];

    /// The tag name of this kind.
    ///
    /// # Example
    /// ```
    /// use radix_str::SequenceKind;
    /// assert_eq!(SequenceKind::Numeric.name(), "numerical");
    /// assert_eq!(SequenceKind::AlphanumericBothCase.name(), "alpha_numerical_both_case");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            SequenceKind::AlphanumericBothCase => "alpha_numerical_both_case",
            SequenceKind::AlphanumericLowerCase => "alpha_numerical_lower_case",
            SequenceKind::AlphanumericUpperCase => "alpha_numerical_upper_case",
            SequenceKind::AlphaLowerCase => "alpha_lower_case",
            SequenceKind::AlphaUpperCase => "alpha_upper_case",
            SequenceKind::Numeric => "numerical",
            SequenceKind::Hex => "hex",
            SequenceKind::Custom => "custom",
        }
    }
}

impl Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a sequence kind from its tag name or its decimal index in
/// [SequenceKind::ALL]. Surrounding whitespace is ignored.
///
/// # Example
/// ```
/// use radix_str::SequenceKind;
///
/// assert_eq!("numerical".parse(), Ok(SequenceKind::Numeric));
/// assert_eq!("5".parse(), Ok(SequenceKind::Numeric));
/// assert_eq!(" hex ".parse(), Ok(SequenceKind::Hex));
/// assert!("octal".parse::<SequenceKind>().is_err());
/// assert!("8".parse::<SequenceKind>().is_err());
/// ```
impl FromStr for SequenceKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if let Ok(index) = tag.parse::<usize>() {
            return SequenceKind::ALL
                .get(index)
                .copied()
                .ok_or_else(|| ConfigurationError::UnknownSequenceKind(tag.to_string()));
        }
        SequenceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == tag)
            .ok_or_else(|| ConfigurationError::UnknownSequenceKind(tag.to_string()))
    }
}

impl Arbitrary for SequenceKind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&SequenceKind::ALL).unwrap()
    }
}

/// The source of a custom alphabet.
///
/// Callers may supply either a list of tokens or a string whose characters
/// are taken as individual tokens. Both shapes are normalized into one
/// canonical ordered symbol list when the alphabet is resolved; nothing
/// downstream branches on the shape. A token must normalize to exactly one
/// character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomAlphabet {
    /// A list of single-character tokens.
    Tokens(Vec<String>),
    /// A string, each character of which is one token.
    Text(String),
}

impl CustomAlphabet {
    /// Creates a token-list source.
    ///
    /// # Example
    /// ```
    /// use radix_str::CustomAlphabet;
    /// let source = CustomAlphabet::tokens(["x", "y", "z"]);
    /// assert_eq!(source, CustomAlphabet::Tokens(vec!["x".to_string(), "y".to_string(), "z".to_string()]));
    /// ```
    pub fn tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        CustomAlphabet::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    /// Normalizes the source into the canonical ordered symbol list.
    fn normalize(&self) -> Result<Vec<char>, ConfigurationError> {
        match self {
            CustomAlphabet::Text(s) => Ok(s.chars().collect()),
            CustomAlphabet::Tokens(tokens) => tokens
                .iter()
                .map(|token| {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Ok(c),
                        _ => Err(ConfigurationError::NonAtomicToken(token.clone())),
                    }
                })
                .collect(),
        }
    }
}

impl From<&str> for CustomAlphabet {
    fn from(s: &str) -> Self {
        CustomAlphabet::Text(s.to_string())
    }
}

impl From<String> for CustomAlphabet {
    fn from(s: String) -> Self {
        CustomAlphabet::Text(s)
    }
}

/// An ordered, duplicate-free list of symbols with at least two members.
///
/// The position of a symbol is its digit index: the first symbol has value 0,
/// the last has value `radix() - 1`. The order is fixed for the lifetime of
/// the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: IndexSet<char>,
}

impl Alphabet {
    /// Resolves a sequence kind into its alphabet.
    ///
    /// `custom` is required for [SequenceKind::Custom] and ignored for every
    /// other kind.
    ///
    /// # Example
    /// ```
    /// use radix_str::{Alphabet, SequenceKind};
    ///
    /// let hex = Alphabet::resolve(SequenceKind::Hex, None).unwrap();
    /// assert_eq!(hex.radix(), 16);
    /// assert_eq!(hex.symbol(0), Some('0'));
    /// assert_eq!(hex.symbol(15), Some('F'));
    ///
    /// let custom = Alphabet::resolve(SequenceKind::Custom, Some("xyz".into())).unwrap();
    /// assert_eq!(custom.radix(), 3);
    /// assert!(Alphabet::resolve(SequenceKind::Custom, None).is_err());
    /// ```
    pub fn resolve(
        kind: SequenceKind,
        custom: Option<CustomAlphabet>,
    ) -> Result<Self, ConfigurationError> {
        let symbols: Vec<char> = match kind {
            SequenceKind::AlphanumericBothCase => BASE_SYMBOLS.chars().collect(),
            SequenceKind::AlphanumericLowerCase => {
                base_span('a', 'z').chain(base_span('0', '9')).collect()
            }
            SequenceKind::AlphanumericUpperCase => {
                base_span('A', 'Z').chain(base_span('0', '9')).collect()
            }
            SequenceKind::AlphaLowerCase => base_span('a', 'z').collect(),
            SequenceKind::AlphaUpperCase => base_span('A', 'Z').collect(),
            SequenceKind::Numeric => base_span('0', '9').collect(),
            SequenceKind::Hex => base_span('0', '9').chain(base_span('A', 'F')).collect(),
            SequenceKind::Custom => match custom {
                Some(source) => source.normalize()?,
                None => return Err(ConfigurationError::MissingCustomAlphabet),
            },
        };
        Self::from_symbols(symbols)
    }

    /// Resolves a custom alphabet directly.
    /// Equivalent to `resolve(SequenceKind::Custom, Some(source))`.
    ///
    /// # Example
    /// ```
    /// use radix_str::{Alphabet, CustomAlphabet};
    ///
    /// let a = Alphabet::custom("xyz").unwrap();
    /// assert_eq!(a.radix(), 3);
    /// assert_eq!(a.digit('z'), Some(2));
    ///
    /// // A single symbol does not define a radix.
    /// assert!(Alphabet::custom("x").is_err());
    /// ```
    pub fn custom(source: impl Into<CustomAlphabet>) -> Result<Self, ConfigurationError> {
        Self::resolve(SequenceKind::Custom, Some(source.into()))
    }

    /// Builds the alphabet from a normalized symbol list, enforcing the
    /// minimum size and no-duplicates invariants.
    fn from_symbols(symbols: Vec<char>) -> Result<Self, ConfigurationError> {
        if symbols.len() < 2 {
            return Err(ConfigurationError::AlphabetTooSmall(symbols.len()));
        }
        if let Some(dup) = symbols.iter().duplicates().next() {
            return Err(ConfigurationError::DuplicateSymbol(*dup));
        }
        Ok(Alphabet {
            symbols: symbols.into_iter().collect(),
        })
    }

    /// The number of symbols in the alphabet; the base of the counter.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// The digit index of a symbol, or `None` if the symbol is not in the
    /// alphabet.
    ///
    /// # Example
    /// ```
    /// use radix_str::{Alphabet, SequenceKind};
    ///
    /// let numeric = Alphabet::resolve(SequenceKind::Numeric, None).unwrap();
    /// assert_eq!(numeric.digit('0'), Some(0));
    /// assert_eq!(numeric.digit('9'), Some(9));
    /// assert_eq!(numeric.digit('a'), None);
    /// ```
    pub fn digit(&self, symbol: char) -> Option<usize> {
        self.symbols.get_index_of(&symbol)
    }

    /// The symbol with the given digit index, or `None` if the index is out
    /// of range.
    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.symbols.get_index(digit).copied()
    }

    /// Checks if a symbol is in the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Returns an iterator over the symbols in digit order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn resolve_both_case_is_full_base_list() {
        let a = Alphabet::resolve(SequenceKind::AlphanumericBothCase, None).unwrap();
        assert_eq!(a.radix(), 62);
        assert_eq!(a.to_string(), BASE_SYMBOLS);
    }

    #[test]
    fn resolve_lower_alphanumeric() {
        let a = Alphabet::resolve(SequenceKind::AlphanumericLowerCase, None).unwrap();
        assert_eq!(a.radix(), 36);
        assert_eq!(a.to_string(), "abcdefghijklmnopqrstuvwxyz0123456789");
    }

    #[test]
    fn resolve_upper_alphanumeric() {
        let a = Alphabet::resolve(SequenceKind::AlphanumericUpperCase, None).unwrap();
        assert_eq!(a.radix(), 36);
        assert_eq!(a.to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    }

    #[test]
    fn resolve_alpha_kinds() {
        let lower = Alphabet::resolve(SequenceKind::AlphaLowerCase, None).unwrap();
        assert_eq!(lower.to_string(), "abcdefghijklmnopqrstuvwxyz");
        let upper = Alphabet::resolve(SequenceKind::AlphaUpperCase, None).unwrap();
        assert_eq!(upper.to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn resolve_numeric() {
        let a = Alphabet::resolve(SequenceKind::Numeric, None).unwrap();
        assert_eq!(a.to_string(), "0123456789");
    }

    #[test]
    fn resolve_hex_concatenates_digits_and_upper_letters() {
        let a = Alphabet::resolve(SequenceKind::Hex, None).unwrap();
        assert_eq!(a.to_string(), "0123456789ABCDEF");
        assert_eq!(a.digit('A'), Some(10));
        assert_eq!(a.digit('a'), None);
    }

    #[test]
    fn resolve_ignores_custom_source_for_named_kinds() {
        let a = Alphabet::resolve(SequenceKind::Numeric, Some("xyz".into())).unwrap();
        assert_eq!(a.to_string(), "0123456789");
    }

    #[test]
    fn custom_from_text() {
        let a = Alphabet::custom("xyz").unwrap();
        assert_eq!(a.radix(), 3);
        assert_eq!(a.digit('x'), Some(0));
        assert_eq!(a.digit('y'), Some(1));
        assert_eq!(a.digit('z'), Some(2));
    }

    #[test]
    fn custom_from_tokens() {
        let a = Alphabet::custom(CustomAlphabet::tokens(["x", "y", "z"])).unwrap();
        assert_eq!(a.to_string(), "xyz");
    }

    #[test]
    fn custom_too_small() {
        assert_eq!(
            Alphabet::custom(CustomAlphabet::tokens(["x"])),
            Err(ConfigurationError::AlphabetTooSmall(1))
        );
        assert_eq!(
            Alphabet::custom(""),
            Err(ConfigurationError::AlphabetTooSmall(0))
        );
    }

    #[test]
    fn custom_missing() {
        assert_eq!(
            Alphabet::resolve(SequenceKind::Custom, None),
            Err(ConfigurationError::MissingCustomAlphabet)
        );
    }

    #[test]
    fn custom_non_atomic_token() {
        assert_eq!(
            Alphabet::custom(CustomAlphabet::tokens(["x", "yz"])),
            Err(ConfigurationError::NonAtomicToken("yz".to_string()))
        );
        assert_eq!(
            Alphabet::custom(CustomAlphabet::tokens(["x", ""])),
            Err(ConfigurationError::NonAtomicToken(String::new()))
        );
    }

    #[test]
    fn custom_duplicate_symbol() {
        assert_eq!(
            Alphabet::custom("abca"),
            Err(ConfigurationError::DuplicateSymbol('a'))
        );
    }

    #[test]
    fn parse_kind_by_name() {
        assert_eq!(
            "alpha_numerical_both_case".parse(),
            Ok(SequenceKind::AlphanumericBothCase)
        );
        assert_eq!("custom".parse(), Ok(SequenceKind::Custom));
        assert_eq!(
            "octal".parse::<SequenceKind>(),
            Err(ConfigurationError::UnknownSequenceKind("octal".to_string()))
        );
    }

    #[test]
    fn parse_kind_by_index() {
        assert_eq!("0".parse(), Ok(SequenceKind::AlphanumericBothCase));
        assert_eq!("7".parse(), Ok(SequenceKind::Custom));
        assert_eq!(
            "8".parse::<SequenceKind>(),
            Err(ConfigurationError::UnknownSequenceKind("8".to_string()))
        );
    }

    #[quickcheck]
    fn kind_name_parse_round_trip(kind: SequenceKind) {
        assert_eq!(kind.name().parse(), Ok(kind));
    }

    #[quickcheck]
    fn kind_index_parse_round_trip(kind: SequenceKind) {
        let index = SequenceKind::ALL.iter().position(|k| *k == kind).unwrap();
        assert_eq!(index.to_string().parse(), Ok(kind));
    }

    #[quickcheck]
    fn named_kinds_resolve_to_unique_symbols(kind: SequenceKind) {
        if kind == SequenceKind::Custom {
            return;
        }
        let a = Alphabet::resolve(kind, None).unwrap();
        assert!(a.radix() >= 2);
        for (digit, symbol) in a.iter().enumerate() {
            assert_eq!(a.digit(symbol), Some(digit));
            assert_eq!(a.symbol(digit), Some(symbol));
        }
    }
}
