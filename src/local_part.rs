//! Email local-part grammar.
//!
//! The accepted language is a practical subset of RFC 5321/5322:
//!
//! - dotted atoms: `john.doe`
//! - dot-separated quoted strings: `john."common".doe`, `"much.more unusual"`
//! - one comment at the start or the end: `(comment)john`, `john(comment)`
//! - UTF-8 characters above U+007F (RFC 6531)
//!
//! Comments toggle rather than nest and quoted strings are only legal after
//! a dot or at the very start. Values are kept as written; quotes and
//! comments are not stripped.

use crate::chars::{
    char_at, is_local_delim, is_local_part_char, is_local_restricted, is_space, utf8_sequence_len,
};
use crate::constants::{MAX_LOCAL_PART_LENGTH, POSTMASTER};
use crate::error::LocalPartError;
use crate::macros::impl_validated_str;

/// A validated email local part.
///
/// # Examples
///
/// ```
/// use netsyntax::LocalPart;
///
/// assert!(LocalPart::parse("very.common").is_ok());
/// assert!(LocalPart::parse("\"much.more unusual\"").unwrap().has_quotes());
/// assert!(LocalPart::parse("john..doe").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalPart {
    value: String,
    quoted: bool,
    commented: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Unquoted,
    Quoted { start: usize },
    LeftComment { start: usize },
    RightComment { start: usize },
}

#[derive(Debug, Default, Clone, Copy)]
struct Shape {
    quoted: bool,
    commented: bool,
}

impl LocalPart {
    /// Parses a local part.
    ///
    /// # Errors
    ///
    /// Returns `LocalPartError` for the first violation, with the 0-based
    /// byte position where one applies.
    pub fn parse(input: &str) -> Result<Self, LocalPartError> {
        Self::check_edges(input)?;

        if input.eq_ignore_ascii_case(POSTMASTER) {
            return Ok(Self::new(input, Shape::default()));
        }

        let shape = if input.bytes().any(is_local_delim) {
            Self::scan(input)?
        } else {
            Self::scan_simple(input)?;
            Shape::default()
        };

        Ok(Self::new(input, shape))
    }

    fn new(input: &str, shape: Shape) -> Self {
        Self {
            value: input.to_string(),
            quoted: shape.quoted,
            commented: shape.commented,
        }
    }

    fn check_edges(input: &str) -> Result<(), LocalPartError> {
        let bytes = input.as_bytes();
        let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
            return Err(LocalPartError::Empty);
        };
        if bytes.len() > MAX_LOCAL_PART_LENGTH {
            return Err(LocalPartError::TooLong {
                max: MAX_LOCAL_PART_LENGTH,
                actual: bytes.len(),
            });
        }
        if is_space(first) {
            return Err(LocalPartError::LeadingWhitespace);
        }
        if is_space(last) {
            return Err(LocalPartError::TrailingWhitespace);
        }
        if first == b'.' {
            return Err(LocalPartError::LeadingDot);
        }
        if last == b'.' {
            return Err(LocalPartError::TrailingDot);
        }
        Ok(())
    }

    /// Width of the simple character at `i`.
    fn simple_width(input: &str, i: usize) -> Result<usize, LocalPartError> {
        let bytes = input.as_bytes();
        match bytes.get(i) {
            Some(&b) if is_local_part_char(b) => Ok(1),
            _ => utf8_sequence_len(bytes, i).ok_or_else(|| LocalPartError::InvalidChar {
                char: char_at(input, i),
                position: i,
            }),
        }
    }

    /// Width of the character at `i` inside quotes or a comment.
    fn quoted_width(input: &str, i: usize) -> Result<usize, LocalPartError> {
        match input.as_bytes().get(i) {
            Some(&b) if is_local_restricted(b) => Ok(1),
            _ => Self::simple_width(input, i),
        }
    }

    fn scan_simple(input: &str) -> Result<(), LocalPartError> {
        let mut i = 0;
        while i < input.len() {
            i += Self::simple_width(input, i)?;
        }
        Ok(())
    }

    fn scan(input: &str) -> Result<Shape, LocalPartError> {
        let bytes = input.as_bytes();
        if bytes.first() == Some(&b'"') && bytes.len() < 3 {
            return Err(LocalPartError::QuotedTooShort);
        }

        let last = bytes.len() - 1;
        let mut shape = Shape::default();
        let mut ctx = Context::Unquoted;
        let mut prev = 0u8;
        let mut escaped = false;
        let mut i = 0;

        while let Some(&c) = bytes.get(i) {
            let mut width = 1;
            match ctx {
                Context::Quoted { start } => {
                    if escaped {
                        escaped = false;
                        width = Self::quoted_width(input, i)?;
                    } else if c == b'\\' {
                        escaped = true;
                    } else if c == b'"' {
                        if start + 1 == i {
                            return Err(LocalPartError::EmptyQuotedAtom { position: i });
                        }
                        ctx = Context::Unquoted;
                    } else {
                        width = Self::quoted_width(input, i)?;
                    }
                }
                Context::LeftComment { .. } | Context::RightComment { .. } => {
                    if escaped {
                        escaped = false;
                        width = Self::quoted_width(input, i)?;
                    } else if c == b'\\' {
                        escaped = true;
                    } else if c == b')' {
                        // a right comment stays open past an inner ')', so the
                        // input could only end as an unterminated comment
                        if matches!(ctx, Context::RightComment { .. }) && i != last {
                            return Err(LocalPartError::CommentNotAtEnd { position: i });
                        }
                        ctx = Context::Unquoted;
                    } else {
                        width = Self::quoted_width(input, i)?;
                    }
                }
                Context::Unquoted if i == 0 => match c {
                    b'(' => {
                        ctx = Context::LeftComment { start: 0 };
                        shape.commented = true;
                    }
                    b'"' => {
                        ctx = Context::Quoted { start: 0 };
                        shape.quoted = true;
                    }
                    _ if is_local_restricted(c) => {
                        return Err(LocalPartError::LeadingRestricted {
                            char: char::from(c),
                            position: 0,
                        });
                    }
                    _ => width = Self::simple_width(input, 0)?,
                },
                Context::Unquoted => match c {
                    b'"' => {
                        if prev != b'.' {
                            return Err(LocalPartError::QuoteNotDotSeparated { position: i });
                        }
                        ctx = Context::Quoted { start: i };
                        shape.quoted = true;
                    }
                    b'(' => {
                        ctx = Context::RightComment { start: i };
                        shape.commented = true;
                    }
                    b'.' if prev == b'.' => {
                        return Err(LocalPartError::ConsecutiveDots { position: i });
                    }
                    _ if is_local_restricted(c) => {
                        return Err(LocalPartError::UnquotedRestricted {
                            char: char::from(c),
                            position: i,
                        });
                    }
                    _ => width = Self::simple_width(input, i)?,
                },
            }
            prev = c;
            i += width;
        }

        match ctx {
            Context::Unquoted => Ok(shape),
            Context::Quoted { start } => Err(LocalPartError::UnterminatedQuote { position: start }),
            Context::LeftComment { start } => {
                Err(LocalPartError::UnterminatedLeftComment { position: start })
            }
            Context::RightComment { start } => {
                Err(LocalPartError::UnterminatedRightComment { position: start })
            }
        }
    }

    /// Returns the local part as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true if the local part holds a quoted string.
    #[must_use]
    pub const fn has_quotes(&self) -> bool {
        self.quoted
    }

    /// Returns true if the local part holds a comment.
    #[must_use]
    pub const fn has_comment(&self) -> bool {
        self.commented
    }

    /// Returns true for the special `postmaster` local part.
    #[must_use]
    pub fn is_postmaster(&self) -> bool {
        self.value.eq_ignore_ascii_case(POSTMASTER)
    }
}

impl_validated_str!(LocalPart, LocalPartError);
