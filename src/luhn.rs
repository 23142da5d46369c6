//! Luhn checksum and payment card numbers.
//!
//! Only the digit count and checksum are checked; issuer ranges are not.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CardError;
use crate::macros::impl_validated_str;

const DOUBLED: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true if `digits` passes the Luhn mod-10 checksum.
///
/// Every second digit counting from the right (excluding the check digit)
/// is doubled and its digits summed. Any non-digit fails the check.
///
/// # Examples
///
/// ```
/// assert!(netsyntax::luhn("79927398713"));
/// assert!(!netsyntax::luhn("79927398710"));
/// ```
#[must_use]
pub fn luhn(digits: &str) -> bool {
    let mut sum = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { d } else { DOUBLED[d as usize] };
    }
    sum % 10 == 0
}

fn check_digits(input: &str) -> Result<(), CardError> {
    if let Some((position, char)) = input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(CardError::InvalidDigit { char, position });
    }
    Ok(())
}

/// A digit string of any length passing the Luhn checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LuhnNumber(String);

impl LuhnNumber {
    /// Parses a Luhn-checked number.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if the input is empty, holds a non-digit, or fails
    /// the checksum.
    pub fn parse(input: &str) -> Result<Self, CardError> {
        if input.is_empty() {
            return Err(CardError::Empty);
        }
        check_digits(input)?;
        if !luhn(input) {
            return Err(CardError::Checksum);
        }
        Ok(Self(input.to_string()))
    }

    /// Returns the number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validated_str!(LuhnNumber, CardError);

/// A card number with `MIN..=MAX` digits passing the Luhn checksum.
///
/// # Examples
///
/// ```
/// use netsyntax::{Amex, Visa};
///
/// assert!(Visa::parse("4111111111111111").is_ok());
/// assert!(Amex::parse("4111111111111111").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber<const MIN: usize, const MAX: usize>(String);

/// Visa: 13 to 16 digits.
pub type Visa = CardNumber<13, 16>;
/// Visa Electron: 16 digits.
pub type VisaElectron = CardNumber<16, 16>;
/// American Express: 15 digits.
pub type Amex = CardNumber<15, 15>;

impl<const MIN: usize, const MAX: usize> CardNumber<MIN, MAX> {
    /// Parses a card number.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if the input is empty, the digit count is outside
    /// the window, a non-digit is present, or the checksum fails.
    pub fn parse(input: &str) -> Result<Self, CardError> {
        if input.is_empty() {
            return Err(CardError::Empty);
        }
        let actual = input.chars().count();
        if !(MIN..=MAX).contains(&actual) {
            return Err(CardError::InvalidLength { min: MIN, max: MAX, actual });
        }
        check_digits(input)?;
        if !luhn(input) {
            return Err(CardError::Checksum);
        }
        Ok(Self(input.to_string()))
    }

    /// Returns the number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const MIN: usize, const MAX: usize> fmt::Display for CardNumber<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MIN: usize, const MAX: usize> FromStr for CardNumber<MIN, MAX> {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const MIN: usize, const MAX: usize> AsRef<str> for CardNumber<MIN, MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const MIN: usize, const MAX: usize> TryFrom<&str> for CardNumber<MIN, MAX> {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl<const MIN: usize, const MAX: usize> PartialOrd for CardNumber<MIN, MAX> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const MIN: usize, const MAX: usize> Ord for CardNumber<MIN, MAX> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl<const MIN: usize, const MAX: usize> serde::Serialize for CardNumber<MIN, MAX> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de, const MIN: usize, const MAX: usize> serde::Deserialize<'de> for CardNumber<MIN, MAX> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_known_values() {
        assert!(luhn("79927398713"));
        assert!(luhn("0"));
        assert!(luhn("4111111111111111"));
        assert!(!luhn("4111111111111112"));
        assert!(!luhn("12a"));
    }

    #[test]
    fn luhn_number() {
        assert!(LuhnNumber::parse("79927398713").is_ok());
        assert!(matches!(LuhnNumber::parse(""), Err(CardError::Empty)));
        assert!(matches!(LuhnNumber::parse("79927398710"), Err(CardError::Checksum)));
        assert!(matches!(
            LuhnNumber::parse("7992 7398 713"),
            Err(CardError::InvalidDigit { char: ' ', position: 4 })
        ));
    }

    #[test]
    fn visa_lengths() {
        assert!(Visa::parse("4222222222222").is_ok());
        assert!(Visa::parse("4012888888881881").is_ok());
        assert!(matches!(
            Visa::parse("40128888888818810"),
            Err(CardError::InvalidLength { min: 13, max: 16, actual: 17 })
        ));
    }

    #[test]
    fn amex_and_electron() {
        assert!(Amex::parse("378282246310005").is_ok());
        assert!(Amex::parse("371449635398431").is_ok());
        assert!(matches!(Amex::parse("378282246310006"), Err(CardError::Checksum)));
        assert!(VisaElectron::parse("4917300800000000").is_ok());
        assert!(matches!(
            VisaElectron::parse("378282246310005"),
            Err(CardError::InvalidLength { .. })
        ));
    }
}
