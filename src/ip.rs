//! IPv4, IPv6 and bracketed IP literal addresses.
//!
//! Address text is converted by the standard library parsers; a failed
//! conversion is the only rejection criterion for a bare address.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::constants::IPV6_LITERAL_TAG;
use crate::error::{IpError, IpLiteralError};
use crate::macros::impl_validated_str;

/// A validated dotted-quad IPv4 address.
///
/// # Examples
///
/// ```
/// use netsyntax::Ipv4Address;
///
/// let addr = Ipv4Address::parse("192.168.0.1").unwrap();
/// assert!(addr.addr().is_private());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Address {
    value: String,
    addr: Ipv4Addr,
}

impl Ipv4Address {
    /// Parses an IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns `IpError::InvalidIpv4` if the conversion fails.
    pub fn parse(input: &str) -> Result<Self, IpError> {
        let addr = input.parse::<Ipv4Addr>().map_err(|_| IpError::InvalidIpv4)?;
        Ok(Self {
            value: input.to_string(),
            addr,
        })
    }

    /// Returns the address as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the parsed address.
    #[must_use]
    pub const fn addr(&self) -> Ipv4Addr {
        self.addr
    }
}

impl_validated_str!(Ipv4Address, IpError);

/// A validated IPv6 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv6Address {
    value: String,
    addr: Ipv6Addr,
}

impl Ipv6Address {
    /// Parses an IPv6 address.
    ///
    /// # Errors
    ///
    /// Returns `IpError::InvalidIpv6` if the conversion fails.
    pub fn parse(input: &str) -> Result<Self, IpError> {
        let addr = input.parse::<Ipv6Addr>().map_err(|_| IpError::InvalidIpv6)?;
        Ok(Self {
            value: input.to_string(),
            addr,
        })
    }

    /// Returns the address as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the parsed address.
    #[must_use]
    pub const fn addr(&self) -> Ipv6Addr {
        self.addr
    }
}

impl_validated_str!(Ipv6Address, IpError);

/// An IP address of either family.
///
/// The family is chosen by the presence of `:` in the input.
///
/// # Examples
///
/// ```
/// use netsyntax::IpAddress;
///
/// assert!(IpAddress::parse("::1").unwrap().is_ipv6());
/// assert!(IpAddress::parse("10.0.0.1").unwrap().is_ipv4());
/// assert!(IpAddress::parse("10.0.0.256").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpAddress {
    value: String,
    addr: IpAddr,
}

impl IpAddress {
    /// Parses an IPv4 or IPv6 address.
    ///
    /// # Errors
    ///
    /// Returns `IpError` if the input is empty or does not convert under the
    /// selected family.
    pub fn parse(input: &str) -> Result<Self, IpError> {
        if input.is_empty() {
            return Err(IpError::Empty);
        }
        let addr = if input.contains(':') {
            IpAddr::V6(Ipv6Address::parse(input)?.addr())
        } else {
            IpAddr::V4(Ipv4Address::parse(input)?.addr())
        };
        Ok(Self {
            value: input.to_string(),
            addr,
        })
    }

    /// Returns the address as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the parsed address.
    #[must_use]
    pub const fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Returns true for an IPv4 address.
    #[must_use]
    pub const fn is_ipv4(&self) -> bool {
        self.addr.is_ipv4()
    }

    /// Returns true for an IPv6 address.
    #[must_use]
    pub const fn is_ipv6(&self) -> bool {
        self.addr.is_ipv6()
    }
}

impl_validated_str!(IpAddress, IpError);

/// Options for IP literal parsing.
///
/// # Examples
///
/// ```
/// use netsyntax::{IpLiteral, IpLiteralOptions};
///
/// let opts = IpLiteralOptions::new().with_ipv6_tag(true);
/// assert!(IpLiteral::parse_with("[IPv6:::1]", opts).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpLiteralOptions {
    /// Accept an `IPv6:` tag right after `[`
    pub allow_ipv6_tag: bool,
}

impl Default for IpLiteralOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl IpLiteralOptions {
    /// Creates options with the `IPv6:` tag allowed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_ipv6_tag: true,
        }
    }

    /// Sets whether the `IPv6:` tag is accepted.
    #[must_use]
    pub const fn with_ipv6_tag(mut self, allow: bool) -> Self {
        self.allow_ipv6_tag = allow;
        self
    }
}

/// A bracketed IP literal such as `[192.168.0.1]` or `[IPv6:::1]`.
///
/// Used as a domain (email `[...]` host) and as a URI host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpLiteral {
    value: String,
    addr: IpAddr,
}

impl IpLiteral {
    /// Parses a literal with the `IPv6:` tag allowed.
    ///
    /// # Errors
    ///
    /// Returns `IpLiteralError` if the brackets are malformed or the enclosed
    /// address is invalid.
    pub fn parse(input: &str) -> Result<Self, IpLiteralError> {
        Self::parse_with(input, IpLiteralOptions::new())
    }

    /// Parses a literal with explicit options.
    ///
    /// # Errors
    ///
    /// Returns `IpLiteralError` if the brackets are malformed or the enclosed
    /// address is invalid.
    pub fn parse_with(input: &str, options: IpLiteralOptions) -> Result<Self, IpLiteralError> {
        // [a]
        if input.len() < 3 {
            return Err(IpLiteralError::TooShort);
        }
        if input.matches('[').count() != 1 || input.matches(']').count() != 1 {
            return Err(IpLiteralError::Unbalanced);
        }
        let inner = input
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(IpLiteralError::NotEnclosed)?;

        let tagged = inner
            .strip_prefix(IPV6_LITERAL_TAG)
            .filter(|_| options.allow_ipv6_tag);
        let addr = match tagged {
            Some(addr) => IpAddr::V6(Ipv6Address::parse(addr)?.addr()),
            None if inner.contains(':') => IpAddr::V6(Ipv6Address::parse(inner)?.addr()),
            None => IpAddr::V4(Ipv4Address::parse(inner)?.addr()),
        };

        Ok(Self {
            value: input.to_string(),
            addr,
        })
    }

    /// Returns the literal including brackets.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the enclosed address.
    #[must_use]
    pub const fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Returns true if the enclosed address is IPv6.
    #[must_use]
    pub const fn is_ipv6(&self) -> bool {
        self.addr.is_ipv6()
    }
}

impl_validated_str!(IpLiteral, IpLiteralError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_valid_and_invalid() {
        assert!(Ipv4Address::parse("127.0.0.1").is_ok());
        assert!(matches!(Ipv4Address::parse("256.0.0.1"), Err(IpError::InvalidIpv4)));
        assert!(matches!(Ipv4Address::parse("1.2.3"), Err(IpError::InvalidIpv4)));
        assert!(matches!(Ipv4Address::parse(""), Err(IpError::InvalidIpv4)));
    }

    #[test]
    fn ipv6_valid_and_invalid() {
        assert!(Ipv6Address::parse("2001:db8::1").is_ok());
        assert!(Ipv6Address::parse("::ffff:192.0.2.1").is_ok());
        assert!(matches!(Ipv6Address::parse("2001:db8:::1"), Err(IpError::InvalidIpv6)));
        assert!(matches!(Ipv6Address::parse("12345::"), Err(IpError::InvalidIpv6)));
    }

    #[test]
    fn ip_dispatches_on_colon() {
        assert!(matches!(IpAddress::parse(""), Err(IpError::Empty)));
        assert!(matches!(IpAddress::parse("1.2.3.4:80"), Err(IpError::InvalidIpv6)));
        assert!(matches!(IpAddress::parse("1.2.3.x"), Err(IpError::InvalidIpv4)));
        let addr = IpAddress::parse("fe80::1").unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.as_str(), "fe80::1");
    }

    #[test]
    fn literal_ipv4() {
        let lit = IpLiteral::parse("[192.168.2.1]").unwrap();
        assert!(!lit.is_ipv6());
        assert_eq!(lit.addr(), IpAddr::V4(Ipv4Addr::new(192, 168, 2, 1)));
    }

    #[test]
    fn literal_tagged_ipv6() {
        let lit = IpLiteral::parse("[IPv6:2001:db8::1]").unwrap();
        assert!(lit.is_ipv6());
        let untagged = IpLiteral::parse("[2001:db8::1]").unwrap();
        assert_eq!(lit.addr(), untagged.addr());
    }

    #[test]
    fn literal_tag_disallowed() {
        let opts = IpLiteralOptions::new().with_ipv6_tag(false);
        assert!(matches!(
            IpLiteral::parse_with("[IPv6:::1]", opts),
            Err(IpLiteralError::Address(IpError::InvalidIpv6))
        ));
        assert!(IpLiteral::parse_with("[::1]", opts).is_ok());
    }

    #[test]
    fn literal_structure_errors() {
        assert!(matches!(IpLiteral::parse("[]"), Err(IpLiteralError::TooShort)));
        assert!(matches!(IpLiteral::parse("[[1]"), Err(IpLiteralError::Unbalanced)));
        assert!(matches!(IpLiteral::parse("1.2.3.4"), Err(IpLiteralError::Unbalanced)));
        assert!(matches!(IpLiteral::parse("x[1.2.3.4]"), Err(IpLiteralError::NotEnclosed)));
        assert!(matches!(IpLiteral::parse("]1.2.3.4["), Err(IpLiteralError::NotEnclosed)));
    }

    #[test]
    fn literal_address_error_message() {
        let err = IpLiteral::parse("[1.2.3.400]").unwrap_err();
        assert_eq!(err.to_string(), "literal value error: invalid IPv4 address");
    }
}
