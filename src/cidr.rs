//! CIDR blocks (`address/prefix`).

use crate::constants::{MAX_IPV4_PREFIX, MAX_IPV6_PREFIX};
use crate::error::CidrError;
use crate::ip::{Ipv4Address, Ipv6Address};
use crate::macros::impl_validated_str;

/// A validated CIDR block.
///
/// The family is IPv6 when the input contains `:`; the prefix length is
/// bounded by 32 for IPv4 and 128 for IPv6.
///
/// # Examples
///
/// ```
/// use netsyntax::Cidr;
///
/// let block = Cidr::parse("192.168.0.0/24").unwrap();
/// assert_eq!(block.address(), "192.168.0.0");
/// assert_eq!(block.prefix(), 24);
/// assert!(!block.is_ipv6());
///
/// assert!(Cidr::parse("::1/129").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cidr {
    value: String,
    address_len: usize,
    prefix: u8,
    is_ipv6: bool,
}

impl Cidr {
    /// Parses a CIDR block.
    ///
    /// # Errors
    ///
    /// Returns `CidrError` if the separator is missing or repeated, the
    /// prefix is not a number within the family bound, or the address does
    /// not validate under its family.
    pub fn parse(input: &str) -> Result<Self, CidrError> {
        let (address, prefix) = input.split_once('/').ok_or(CidrError::MissingSeparator)?;
        let separators = input.matches('/').count();
        if separators != 1 {
            return Err(CidrError::MultipleSeparators { count: separators });
        }

        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::InvalidPrefix {
                value: prefix.to_string(),
            });
        }

        let is_ipv6 = input.contains(':');
        let (family, max) = if is_ipv6 {
            ("IPv6", MAX_IPV6_PREFIX)
        } else {
            ("IPv4", MAX_IPV4_PREFIX)
        };

        // saturates on overflow
        let actual = prefix.parse::<u32>().unwrap_or(u32::MAX);
        let prefix = u8::try_from(actual)
            .ok()
            .filter(|p| *p <= max)
            .ok_or(CidrError::PrefixOutOfRange {
                family,
                max,
                actual,
            })?;

        if is_ipv6 {
            Ipv6Address::parse(address)?;
        } else {
            Ipv4Address::parse(address)?;
        }

        Ok(Self {
            value: input.to_string(),
            address_len: address.len(),
            prefix,
            is_ipv6,
        })
    }

    /// Returns the block as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the address part.
    #[must_use]
    pub fn address(&self) -> &str {
        self.value.get(..self.address_len).unwrap_or_default()
    }

    /// Returns the routing prefix length.
    #[must_use]
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Returns true for an IPv6 block.
    #[must_use]
    pub const fn is_ipv6(&self) -> bool {
        self.is_ipv6
    }
}

impl_validated_str!(Cidr, CidrError);
