//! Domain names (RFC 1035) and bracketed address literals.

use crate::chars::is_space;
use crate::constants::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error::DomainError;
use crate::ip::{IpLiteral, IpLiteralOptions};
use crate::macros::impl_validated_str;

/// A validated domain name.
///
/// Accepts dot-separated labels of letters, digits, hyphens and spaces, with
/// any byte at or above `0x80` passed through unchecked. A value enclosed in
/// `[` `]` is validated as an IP literal instead.
///
/// No DNS lookup is performed and the value is not normalized.
///
/// # Examples
///
/// ```
/// use netsyntax::Domain;
///
/// let domain = Domain::parse("mail.example.com").unwrap();
/// assert_eq!(domain.labels().collect::<Vec<_>>(), ["mail", "example", "com"]);
///
/// let literal = Domain::parse("[IPv6:2001:db8::1]").unwrap();
/// assert!(literal.is_literal());
///
/// assert!(Domain::parse("example..com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    value: String,
    literal: Option<IpLiteral>,
}

impl Domain {
    /// Parses a domain name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` for the first rule the input violates, checked
    /// in this order: empty, too long, whitespace padding, leading or
    /// trailing dot, leading or trailing hyphen, then either the literal
    /// rules or the character, all-numeric, label length and adjacency rules.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Self::check_edges(input)?;

        if input.starts_with('[') && input.ends_with(']') {
            let literal = IpLiteral::parse_with(input, IpLiteralOptions::new())?;
            return Ok(Self {
                value: input.to_string(),
                literal: Some(literal),
            });
        }

        Self::check_chars(input)?;
        Self::check_labels(input)?;

        Ok(Self {
            value: input.to_string(),
            literal: None,
        })
    }

    fn check_edges(input: &str) -> Result<(), DomainError> {
        let bytes = input.as_bytes();
        let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
            return Err(DomainError::Empty);
        };
        if bytes.len() > MAX_DOMAIN_LENGTH {
            return Err(DomainError::TooLong {
                max: MAX_DOMAIN_LENGTH,
                actual: bytes.len(),
            });
        }
        if is_space(first) {
            return Err(DomainError::LeadingWhitespace);
        }
        if is_space(last) {
            return Err(DomainError::TrailingWhitespace);
        }
        if first == b'.' {
            return Err(DomainError::LeadingDot);
        }
        if last == b'.' {
            return Err(DomainError::TrailingDot);
        }
        if first == b'-' {
            return Err(DomainError::LeadingHyphen);
        }
        if last == b'-' {
            return Err(DomainError::TrailingHyphen);
        }
        Ok(())
    }

    fn check_chars(input: &str) -> Result<(), DomainError> {
        let mut digits = 0;
        for (i, &b) in input.as_bytes().iter().enumerate() {
            match b {
                b'0'..=b'9' => digits += 1,
                b'a'..=b'z' | b'A'..=b'Z' | b'.' | b'-' | b' ' | 0x80..=0xFF => {}
                _ => {
                    return Err(DomainError::InvalidChar {
                        char: char::from(b),
                        position: i,
                    });
                }
            }
        }
        if digits == input.len() {
            return Err(DomainError::AllNumeric);
        }
        Ok(())
    }

    fn check_labels(input: &str) -> Result<(), DomainError> {
        let mut previous = 0u8;
        let mut label_len = 0;
        for (i, &b) in input.as_bytes().iter().enumerate() {
            if label_len > MAX_LABEL_LENGTH {
                return Err(DomainError::LabelTooLong {
                    position: i,
                    max: MAX_LABEL_LENGTH,
                });
            }
            let bad_pair = matches!((previous, b), (b'.', b'-' | b'.') | (b'-', b'.'));
            if bad_pair {
                return Err(DomainError::InvalidSequence { position: i });
            }
            previous = b;
            label_len = if b == b'.' { 0 } else { label_len + 1 };
        }
        if label_len > MAX_LABEL_LENGTH {
            return Err(DomainError::LabelTooLong {
                position: input.len(),
                max: MAX_LABEL_LENGTH,
            });
        }
        Ok(())
    }

    /// Returns the domain as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true if the domain is a bracketed IP literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.literal.is_some()
    }

    /// Returns the IP literal, if the domain is one.
    #[must_use]
    pub const fn literal(&self) -> Option<&IpLiteral> {
        self.literal.as_ref()
    }

    /// Returns the dot-delimited labels. Literals have no labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        let labels = if self.is_literal() { "" } else { self.value.as_str() };
        labels.split('.').filter(|l| !l.is_empty())
    }
}

impl_validated_str!(Domain, DomainError);
