//! Character-class predicates shared by every grammar.
//!
//! All predicates work on bytes. Multi-byte UTF-8 sequences are recognized by
//! [`utf8_sequence_len`] and are never matched by the ASCII classes.

use crate::error::ComponentError;

/// ASCII whitespace including vertical tab.
#[must_use]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// `ALPHA / DIGIT / "-" / "." / "_" / "~"`
#[must_use]
pub const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// `"!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
#[must_use]
pub const fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Media type reg-name characters: `ALPHA DIGIT ! # $ & . + - ^ _`.
#[must_use]
pub const fn is_reg_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'!' | b'#' | b'$' | b'&' | b'.' | b'+' | b'-' | b'^' | b'_')
}

/// MIME tspecials: `( ) < > @ , ; : \ " / [ ] ? =`.
#[must_use]
pub const fn is_tspecial(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')'
            | b'<'
            | b'>'
            | b'@'
            | b','
            | b';'
            | b':'
            | b'\\'
            | b'"'
            | b'/'
            | b'['
            | b']'
            | b'?'
            | b'='
    )
}

/// RFC 2231 attribute-char. Tspecials are allowed only inside a quoted value.
#[must_use]
pub const fn is_attribute_char(b: u8, quoted: bool) -> bool {
    if b <= 32 || b >= 127 {
        return false;
    }
    if matches!(b, b'*' | b'\'' | b'%') {
        return false;
    }
    quoted || !is_tspecial(b)
}

/// Simple (unquoted) local-part characters.
#[must_use]
pub const fn is_local_part_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'.' | b'&'
                | b'_'
                | b'-'
                | b'='
                | b'/'
                | b'+'
                | b'$'
                | b'\''
                | b'*'
                | b'#'
                | b'!'
                | b'?'
                | b'`'
                | b'{'
                | b'}'
                | b'|'
                | b'~'
                | b'^'
                | b'%'
        )
}

/// Local-part characters that may only appear quoted:
/// space and `" ( ) , : ; < > @ [ \ ]`.
#[must_use]
pub const fn is_local_restricted(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'"' | b'(' | b')' | b',' | b':' | b';' | b'<' | b'>' | b'@' | b'[' | b'\\' | b']'
    )
}

/// Local-part delimiters that force the full state machine.
#[must_use]
pub const fn is_local_delim(b: u8) -> bool {
    matches!(b, b'.' | b'"' | b'(')
}

/// Returns the byte length of the well-formed UTF-8 sequence starting at
/// `pos`, or `None` if the bytes there are not one.
///
/// Overlong encodings and surrogates are rejected.
#[must_use]
pub fn utf8_sequence_len(bytes: &[u8], pos: usize) -> Option<usize> {
    let cont = |i: usize, lo: u8, hi: u8| bytes.get(pos + i).is_some_and(|&b| (lo..=hi).contains(&b));
    let lead = *bytes.get(pos)?;
    match lead {
        0xC2..=0xDF if cont(1, 0x80, 0xBF) => Some(2),
        0xE0 if cont(1, 0xA0, 0xBF) && cont(2, 0x80, 0xBF) => Some(3),
        0xE1..=0xEC | 0xEE | 0xEF if cont(1, 0x80, 0xBF) && cont(2, 0x80, 0xBF) => Some(3),
        0xED if cont(1, 0x80, 0x9F) && cont(2, 0x80, 0xBF) => Some(3),
        0xF0 if cont(1, 0x90, 0xBF) && cont(2, 0x80, 0xBF) && cont(3, 0x80, 0xBF) => Some(4),
        0xF1..=0xF3 if cont(1, 0x80, 0xBF) && cont(2, 0x80, 0xBF) && cont(3, 0x80, 0xBF) => {
            Some(4)
        }
        0xF4 if cont(1, 0x80, 0x8F) && cont(2, 0x80, 0xBF) && cont(3, 0x80, 0xBF) => Some(4),
        _ => None,
    }
}

/// Userinfo characters apart from percent-encoding.
#[must_use]
pub const fn is_userinfo_char(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':'
}

/// Path segment characters (`pchar`) apart from percent-encoding.
#[must_use]
pub const fn is_pchar(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || matches!(b, b':' | b'@')
}

/// Query and fragment characters apart from percent-encoding.
#[must_use]
pub const fn is_query_char(b: u8) -> bool {
    is_pchar(b) || matches!(b, b'/' | b'?')
}

/// Lowercase or uppercase hexadecimal digit.
#[must_use]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// The digit `0`.
#[must_use]
pub const fn is_zero(b: u8) -> bool {
    b == b'0'
}

/// Checks the percent-encoding that starts at `pos` (which holds `%`).
///
/// # Errors
///
/// Returns `ComponentError::PercentTooLate` when fewer than two bytes follow
/// and `ComponentError::BadPercent` when they are not both hex digits.
pub fn check_percent(bytes: &[u8], pos: usize) -> Result<(), ComponentError> {
    match (bytes.get(pos + 1), bytes.get(pos + 2)) {
        (Some(&hi), Some(&lo)) if is_hex_digit(hi) && is_hex_digit(lo) => Ok(()),
        (Some(_), Some(_)) => Err(ComponentError::BadPercent { position: pos }),
        _ => Err(ComponentError::PercentTooLate { position: pos }),
    }
}

/// Scans a URI component, accepting bytes in `class` and percent-encodings.
///
/// Positions in errors are relative to `input`.
///
/// # Errors
///
/// Returns the first `ComponentError` found.
pub fn scan_component(input: &str, class: fn(u8) -> bool) -> Result<(), ComponentError> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while let Some(&b) = bytes.get(pos) {
        if b == b'%' {
            check_percent(bytes, pos)?;
            pos += 3;
            continue;
        }
        if !class(b) {
            return Err(ComponentError::InvalidChar {
                char: char_at(input, pos),
                position: pos,
            });
        }
        pos += 1;
    }
    Ok(())
}

/// Returns the character that starts at byte `pos`, or U+FFFD when `pos`
/// is not a character boundary.
#[must_use]
pub fn char_at(input: &str, pos: usize) -> char {
    input
        .get(pos..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_and_sub_delims_are_disjoint() {
        for b in 0..=u8::MAX {
            assert!(!(is_unreserved(b) && is_sub_delim(b)), "byte {b}");
        }
    }

    #[test]
    fn attribute_char_quoting() {
        assert!(is_attribute_char(b'a', false));
        assert!(!is_attribute_char(b'/', false));
        assert!(is_attribute_char(b'/', true));
        assert!(!is_attribute_char(b'*', true));
        assert!(!is_attribute_char(b' ', true));
        assert!(!is_attribute_char(0x7f, true));
    }

    #[test]
    fn utf8_sequences() {
        assert_eq!(utf8_sequence_len("\u{e9}".as_bytes(), 0), Some(2));
        assert_eq!(utf8_sequence_len("\u{20ac}".as_bytes(), 0), Some(3));
        assert_eq!(utf8_sequence_len("\u{1f600}".as_bytes(), 0), Some(4));
        assert_eq!(utf8_sequence_len(b"a", 0), None);
        // overlong
        assert_eq!(utf8_sequence_len(&[0xC0, 0x80], 0), None);
        // surrogate
        assert_eq!(utf8_sequence_len(&[0xED, 0xA0, 0x80], 0), None);
        // truncated
        assert_eq!(utf8_sequence_len(&[0xE2, 0x82], 0), None);
    }

    #[test]
    fn percent_encoding() {
        assert!(check_percent(b"%20", 0).is_ok());
        assert!(matches!(check_percent(b"%2", 0), Err(ComponentError::PercentTooLate { position: 0 })));
        assert!(matches!(check_percent(b"a%", 1), Err(ComponentError::PercentTooLate { position: 1 })));
        assert!(matches!(check_percent(b"%zz", 0), Err(ComponentError::BadPercent { position: 0 })));
    }

    #[test]
    fn scan_reports_position() {
        assert!(scan_component("a%20b", is_pchar).is_ok());
        assert!(matches!(
            scan_component("ab/c", is_pchar),
            Err(ComponentError::InvalidChar { char: '/', position: 2 })
        ));
        assert!(matches!(
            scan_component("x\u{e9}", is_pchar),
            Err(ComponentError::InvalidChar { char: '\u{e9}', position: 1 })
        ));
    }

    #[test]
    fn space_includes_vertical_tab() {
        assert!(is_space(0x0B));
        assert!(is_space(b'\t'));
        assert!(!is_space(b'a'));
    }

    #[test]
    fn local_classes() {
        assert!(is_local_part_char(b'{'));
        assert!(!is_local_part_char(b'@'));
        assert!(is_local_restricted(b'@'));
        assert!(is_local_restricted(b' '));
        assert!(!is_local_restricted(b'.'));
    }
}
