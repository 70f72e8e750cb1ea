//! Decimal numeral <-> little-endian digit vector.
//!
//! Parsing keeps leading zeros exactly as given. Rendering strips them.

use std::fmt;
use std::str::FromStr;

use crate::multiplier::MulError;

/// Decimal digits, least significant first. Every entry is in `0..=9`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitVector {
    digits: Vec<u8>,
}

impl DigitVector {
    /// Parse an ASCII numeral. One trailing `\n` (or `\r\n`) is ignored.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(numeral: &str) -> Result<Self, MulError> {
        let body = numeral
            .strip_suffix('\n')
            .map_or(numeral, |s| s.strip_suffix('\r').unwrap_or(s));
        if body.is_empty() {
            return Err(MulError::EmptyNumeral);
        }

        let mut digits = Vec::with_capacity(body.len());
        for (position, ch) in body.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(MulError::InvalidDigit { position, found: ch }),
            }
        }
        digits.reverse();
        Ok(Self { digits })
    }

    /// Wrap digits already in least-significant-first order.
    ///
    /// Callers must guarantee every entry is `<= 9`.
    pub(crate) fn from_le_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// Build from a `u64` (no leading zeros).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u64(mut value: u64) -> Self {
        let mut digits = Vec::new();
        loop {
            digits.push((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { digits }
    }

    /// Number of stored digits, leading zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if no digits are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits, least significant first.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits once leading zeros are removed (0 for a zero value).
    #[must_use]
    pub fn significant_len(&self) -> usize {
        self.digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1)
    }

    /// True if every digit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.significant_len() == 0
    }

    /// Render most significant first without leading zeros; `"0"` for zero.
    ///
    /// No line terminator is appended. The output line is written by
    /// `nttmul_cli::output::write_product`, which adds the newline.
    #[must_use]
    pub fn render(&self) -> String {
        let len = self.significant_len();
        if len == 0 {
            return "0".to_string();
        }
        self.digits[..len]
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect()
    }
}

impl FromStr for DigitVector {
    type Err = MulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DigitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parse a numeral into a digit vector.
pub fn parse(numeral: &str) -> Result<DigitVector, MulError> {
    DigitVector::parse(numeral)
}

/// Render a digit vector as a decimal string.
#[must_use]
pub fn render(digits: &DigitVector) -> String {
    digits.render()
}
