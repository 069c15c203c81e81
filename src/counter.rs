//! Fixed-width counting over an [Alphabet].
//!
//! A [SequenceCounter] treats a string as a fixed-width number in base
//! `R = radix()`, most-significant character first, and advances it one
//! position at a time with carry propagation, like an odometer. The width of
//! the value never changes: the counter permutes digit positions but never
//! grows an overflow digit.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::alphabet::{Alphabet, CustomAlphabet, SequenceKind};
use crate::ConfigurationError;

/// The numeric value of a string under an alphabet's ordering.
///
/// The string is read as a base-`R` numeral, most-significant character
/// first: `value = Σ digit(char_i) · R^(width−1−i)`. Fails with
/// [ConfigurationError::SymbolNotFound] if any character is not a symbol of
/// the alphabet.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use radix_str::{sequence_value, Alphabet, SequenceKind};
///
/// let numeric = Alphabet::resolve(SequenceKind::Numeric, None).unwrap();
/// assert_eq!(sequence_value(&numeric, "12"), Ok(BigUint::from(12u32)));
///
/// let hex = Alphabet::resolve(SequenceKind::Hex, None).unwrap();
/// assert_eq!(sequence_value(&hex, "FF"), Ok(BigUint::from(255u32)));
/// ```
pub fn sequence_value(alphabet: &Alphabet, value: &str) -> Result<BigUint, ConfigurationError> {
    let radix = BigUint::from(alphabet.radix());
    let mut acc = BigUint::zero();
    for c in value.chars() {
        let digit = alphabet
            .digit(c)
            .ok_or(ConfigurationError::SymbolNotFound(c))?;
        acc = acc * &radix + BigUint::from(digit);
    }
    Ok(acc)
}

/// The number of distinct values from `start` to `end`, both inclusive.
///
/// Both strings are converted with [sequence_value] and the length is
/// `end − start + 1`. This is a pure function of the three arguments; it does
/// not depend on any counter state.
///
/// Fails with [ConfigurationError::WidthMismatch] if the strings have
/// different widths, [ConfigurationError::SymbolNotFound] if a character is
/// outside the alphabet, and [ConfigurationError::StartAfterEnd] if `start`
/// is positioned after `end`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use radix_str::{sequence_length, Alphabet, SequenceKind};
///
/// let numeric = Alphabet::resolve(SequenceKind::Numeric, None).unwrap();
/// assert_eq!(sequence_length(&numeric, "08", "12"), Ok(BigUint::from(5u32)));
/// assert_eq!(sequence_length(&numeric, "7", "7"), Ok(BigUint::from(1u32)));
/// assert!(sequence_length(&numeric, "5", "3").is_err());
/// ```
pub fn sequence_length(
    alphabet: &Alphabet,
    start: &str,
    end: &str,
) -> Result<BigUint, ConfigurationError> {
    let start_width = start.chars().count();
    let end_width = end.chars().count();
    if start_width != end_width {
        return Err(ConfigurationError::WidthMismatch {
            start: start_width,
            end: end_width,
        });
    }
    let start_value = sequence_value(alphabet, start)?;
    let end_value = sequence_value(alphabet, end)?;
    if end_value < start_value {
        return Err(ConfigurationError::StartAfterEnd {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(end_value - start_value + BigUint::one())
}

/// A stateful odometer over an [Alphabet].
///
/// The counter holds a current value and advances it to its successor under
/// the alphabet's ordering. Iteration yields the successor of the start value
/// first; the start value itself is observed through [current](Self::current)
/// before advancing. With an end value configured, [advance](Self::advance)
/// returns `None` once the current value equals it; without one, iteration is
/// unbounded and stops when the caller stops calling.
///
/// # Example
/// ```
/// use radix_str::{Alphabet, SequenceCounter, SequenceKind};
///
/// let numeric = Alphabet::resolve(SequenceKind::Numeric, None).unwrap();
/// let mut counter = SequenceCounter::new("08", Some("12"), numeric).unwrap();
///
/// assert_eq!(counter.current(), "08");
/// assert_eq!(counter.advance(), Some("09"));
/// assert_eq!(counter.advance(), Some("10"));
/// assert_eq!(counter.advance(), Some("11"));
/// assert_eq!(counter.advance(), Some("12"));
/// assert_eq!(counter.advance(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCounter {
    alphabet: Alphabet,
    start: String,
    end: Option<String>,
    /// Digit indices of the current value, most-significant first.
    digits: Vec<usize>,
    /// The current value, kept in sync with `digits`.
    current: String,
}

impl SequenceCounter {
    /// Creates a counter over a resolved alphabet.
    ///
    /// Every character of `start` and `end` must be a symbol of the alphabet
    /// and, if `end` is given, it must have the same width as `start` and
    /// must not be positioned before it. Violations fail with the matching
    /// [ConfigurationError]; a counter is never partially constructed.
    pub fn new(
        start: impl Into<String>,
        end: Option<&str>,
        alphabet: Alphabet,
    ) -> Result<Self, ConfigurationError> {
        let start = start.into();
        let digits = to_digits(&alphabet, &start)?;
        let end = match end {
            Some(end) => {
                // Validates the end symbols, the width, and start <= end.
                sequence_length(&alphabet, &start, end)?;
                Some(end.to_string())
            }
            None => None,
        };
        Ok(SequenceCounter {
            alphabet,
            current: start.clone(),
            start,
            end,
            digits,
        })
    }

    /// Creates a counter from a sequence kind, resolving the alphabet first.
    ///
    /// This is the all-in-one construction entry point: `custom` is required
    /// for [SequenceKind::Custom] and ignored otherwise.
    ///
    /// # Example
    /// ```
    /// use radix_str::{CustomAlphabet, SequenceCounter, SequenceKind};
    ///
    /// let mut counter = SequenceCounter::with_kind(
    ///     "x",
    ///     Some("z"),
    ///     SequenceKind::Custom,
    ///     Some(CustomAlphabet::tokens(["x", "y", "z"])),
    /// )
    /// .unwrap();
    /// assert_eq!(counter.advance(), Some("y"));
    /// assert_eq!(counter.advance(), Some("z"));
    /// assert_eq!(counter.advance(), None);
    /// ```
    pub fn with_kind(
        start: impl Into<String>,
        end: Option<&str>,
        kind: SequenceKind,
        custom: Option<CustomAlphabet>,
    ) -> Result<Self, ConfigurationError> {
        let alphabet = Alphabet::resolve(kind, custom)?;
        Self::new(start, end, alphabet)
    }

    /// The current value of the counter.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The start value the counter was created with.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The end value, or `None` if the counter is unbounded.
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// The alphabet the counter runs over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Advances the current value to its successor and returns it.
    ///
    /// Returns `None` exactly when the current value equals the configured
    /// end value; the check happens before advancing, so the end value itself
    /// is the last value produced. Without an end value the counter never
    /// returns `None`.
    ///
    /// The successor is computed by incrementing the rightmost digit modulo
    /// the radix and propagating the carry leftward until a position does not
    /// carry out. If every position carries (the value was the all-max value),
    /// the value is left unchanged and yielded again; the caller observes no
    /// progress.
    ///
    /// # Example
    /// ```
    /// use radix_str::{Alphabet, SequenceCounter, SequenceKind};
    ///
    /// let lower = Alphabet::resolve(SequenceKind::AlphaLowerCase, None).unwrap();
    /// let mut counter = SequenceCounter::new("az", None, lower).unwrap();
    /// // The carry propagates through both positions.
    /// assert_eq!(counter.advance(), Some("ba"));
    ///
    /// // "zz" is the all-max value; advancing leaves it unchanged.
    /// let lower = Alphabet::resolve(SequenceKind::AlphaLowerCase, None).unwrap();
    /// let mut counter = SequenceCounter::new("zz", None, lower).unwrap();
    /// assert_eq!(counter.advance(), Some("zz"));
    /// ```
    pub fn advance(&mut self) -> Option<&str> {
        if self.end.as_deref() == Some(self.current.as_str()) {
            return None;
        }
        let radix = self.alphabet.radix();
        for i in (0..self.digits.len()).rev() {
            self.digits[i] = (self.digits[i] + 1) % radix;
            if self.digits[i] != 0 {
                self.render();
                return Some(&self.current);
            }
        }
        // Full wraparound: every position carried back to zero. The value is
        // left unchanged, so all digits were at maximum and are restored.
        for digit in &mut self.digits {
            *digit = radix - 1;
        }
        Some(&self.current)
    }

    /// The number of distinct values from the start value to the end value,
    /// both inclusive. Fails with [ConfigurationError::Unbounded] if no end
    /// value was configured.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use radix_str::{Alphabet, SequenceCounter, SequenceKind};
    ///
    /// let hex = Alphabet::resolve(SequenceKind::Hex, None).unwrap();
    /// let counter = SequenceCounter::new("0", Some("F"), hex).unwrap();
    /// assert_eq!(counter.length(), Ok(BigUint::from(16u32)));
    ///
    /// let hex = Alphabet::resolve(SequenceKind::Hex, None).unwrap();
    /// let unbounded = SequenceCounter::new("0", None, hex).unwrap();
    /// assert!(unbounded.length().is_err());
    /// ```
    pub fn length(&self) -> Result<BigUint, ConfigurationError> {
        match &self.end {
            Some(end) => sequence_length(&self.alphabet, &self.start, end),
            None => Err(ConfigurationError::Unbounded),
        }
    }

    /// Rebuilds the current value from the digit indices.
    fn render(&mut self) {
        self.current = self
            .digits
            .iter()
            // digit indices never leave [0, radix), always safe to unwrap
            .map(|&digit| self.alphabet.symbol(digit).unwrap())
            .collect();
    }
}

/// Maps every character of a value to its digit index in the alphabet.
fn to_digits(alphabet: &Alphabet, value: &str) -> Result<Vec<usize>, ConfigurationError> {
    value
        .chars()
        .map(|c| {
            alphabet
                .digit(c)
                .ok_or(ConfigurationError::SymbolNotFound(c))
        })
        .collect()
}

impl Iterator for SequenceCounter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(str::to_string)
    }
}
