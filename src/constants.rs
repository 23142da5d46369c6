//! Constants for grammar validation.

/// Maximum domain name length in bytes (RFC 1035).
pub const MAX_DOMAIN_LENGTH: usize = 255;

/// Maximum domain label length in bytes (RFC 1035).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum email local-part length in bytes.
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Minimum email address length (`l@d`).
pub const MIN_ADDRESS_LENGTH: usize = 3;

/// Maximum email address length, bounded by the 256-byte forward path.
pub const MAX_ADDRESS_LENGTH: usize = 254;

/// Largest TCP/UDP port number.
pub const MAX_PORT: u32 = 65_535;

/// Largest IPv4 routing prefix length.
pub const MAX_IPV4_PREFIX: u8 = 32;

/// Largest IPv6 routing prefix length.
pub const MAX_IPV6_PREFIX: u8 = 128;

/// Length of the textual UUID form `8-4-4-4-12`.
pub const UUID_LENGTH: usize = 36;

/// Maximum media subtype length (RFC 4288 reg-name).
pub const MAX_SUBTYPE_LENGTH: usize = 127;

/// Tag that may introduce an IPv6 address literal in a domain (RFC 5321).
pub const IPV6_LITERAL_TAG: &str = "IPv6:";

/// The case-insensitive local-part accepted without further checks.
pub const POSTMASTER: &str = "postmaster";
