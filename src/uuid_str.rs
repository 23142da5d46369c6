//! UUID string representation (RFC 4122).
//!
//! ```text
//! 12345678-1234-1234-1234-123456789012
//! ```
//!
//! General and nil UUIDs share one group scanner parameterized by the digit
//! predicate.

use crate::chars::{is_hex_digit, is_zero};
use crate::constants::UUID_LENGTH;
use crate::error::UuidError;
use crate::macros::impl_validated_str;

const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Scans the `8-4-4-4-12` layout, checking each group with `digit` and
/// decoding the hex value.
fn scan_groups(input: &str, digit: fn(u8) -> bool, expected: &'static str) -> Result<u128, UuidError> {
    if input.is_empty() {
        return Err(UuidError::Empty);
    }
    if input.len() != UUID_LENGTH {
        return Err(UuidError::InvalidLength {
            expected: UUID_LENGTH,
            actual: input.len(),
        });
    }

    let bytes = input.as_bytes();
    let mut value: u128 = 0;
    let mut pos = 0;
    for (i, &width) in GROUPS.iter().enumerate() {
        if i > 0 {
            if bytes.get(pos) != Some(&b'-') {
                return Err(UuidError::MissingDash { position: pos });
            }
            pos += 1;
        }
        let group = bytes.get(pos..pos + width).unwrap_or_default();
        if group.len() != width || !group.iter().all(|&b| digit(b)) {
            return Err(UuidError::InvalidGroup { group: i + 1, expected });
        }
        for &b in group {
            let nibble = char::from(b).to_digit(16).unwrap_or(0);
            value = (value << 4) | u128::from(nibble);
        }
        pos += width;
    }
    Ok(value)
}

/// A validated UUID string with hex digit groups.
///
/// The nil UUID is rejected; use [`NilUuid`] for it.
///
/// # Examples
///
/// ```
/// use netsyntax::Uuid;
///
/// let id = Uuid::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
/// assert_eq!(id.version(), 4);
/// assert!(Uuid::parse("00000000-0000-0000-0000-000000000000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uuid {
    value: String,
    uuid: ::uuid::Uuid,
}

impl Uuid {
    /// Parses a hyphenated UUID.
    ///
    /// # Errors
    ///
    /// Returns `UuidError` if the length, a group or a dash is wrong, or the
    /// value is the nil UUID.
    pub fn parse(input: &str) -> Result<Self, UuidError> {
        let bits = scan_groups(input, is_hex_digit, "non hex digits")?;
        if bits == 0 {
            return Err(UuidError::NilNotAllowed);
        }
        Ok(Self {
            value: input.to_string(),
            uuid: ::uuid::Uuid::from_u128(bits),
        })
    }

    /// Returns the UUID as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the decoded value.
    #[must_use]
    pub const fn as_uuid(&self) -> ::uuid::Uuid {
        self.uuid
    }

    /// Returns the version nibble.
    #[must_use]
    pub fn version(&self) -> usize {
        self.uuid.get_version_num()
    }
}

impl_validated_str!(Uuid, UuidError);

/// The nil UUID `00000000-0000-0000-0000-000000000000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NilUuid {
    value: String,
}

impl NilUuid {
    /// Parses the nil UUID.
    ///
    /// # Errors
    ///
    /// Returns `UuidError` if the length, a group or a dash is wrong.
    pub fn parse(input: &str) -> Result<Self, UuidError> {
        scan_groups(input, is_zero, "non zero digits")?;
        Ok(Self {
            value: input.to_string(),
        })
    }

    /// Returns the UUID as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the decoded value.
    #[must_use]
    pub const fn as_uuid(&self) -> ::uuid::Uuid {
        ::uuid::Uuid::nil()
    }
}

impl_validated_str!(NilUuid, UuidError);
