//! Error types for grammar validation.
//!
//! Each validated entity has its own error enum. The first rule violation
//! encountered is the one reported; composite validators wrap the error of
//! the component that failed instead of re-deriving it.

use std::fmt;

use thiserror::Error;

/// Errors for bounded view construction and movement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The offset does not fall inside the parent string
    #[error("view offset {offset} out of range for input of length {len}")]
    OffsetOutOfRange {
        /// Requested offset
        offset: usize,
        /// Parent length
        len: usize,
    },
    /// The offset plus count reaches or passes the end of the parent string
    #[error("view count error off=[{offset}] count=[{count}] sz=[{len}]")]
    CountOutOfRange {
        /// Requested offset
        offset: usize,
        /// Requested count
        count: usize,
        /// Parent length
        len: usize,
    },
    /// Advancing would move past the end of the parent string
    #[error("cannot advance view past offset {offset} of input of length {len}")]
    AdvanceOutOfRange {
        /// Offset before the failed advance
        offset: usize,
        /// Parent length
        len: usize,
    },
    /// Narrowing asked for more bytes than the view holds
    #[error("cannot narrow view of {len} bytes to {count}")]
    NarrowOutOfRange {
        /// Requested count
        count: usize,
        /// Current view length
        len: usize,
    },
    /// A view boundary would split a multi-byte character
    #[error("view boundary {index} is not on a character boundary")]
    NotCharBoundary {
        /// Byte index of the offending boundary
        index: usize,
    },
}

/// Errors for domain name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Domain name is empty
    #[error("domain name is empty")]
    Empty,
    /// Domain name exceeds the maximum length
    #[error("domain name length {actual} exceeds maximum {max}")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Domain name starts with whitespace
    #[error("domain name with leading whitespace")]
    LeadingWhitespace,
    /// Domain name ends with whitespace
    #[error("domain name with trailing whitespace")]
    TrailingWhitespace,
    /// Domain name starts with a dot
    #[error("domain name begins with the '.' (dot) character")]
    LeadingDot,
    /// Domain name ends with a dot
    #[error("domain name ends with the '.' (dot) character")]
    TrailingDot,
    /// Domain name starts with a hyphen
    #[error("domain name begins with the '-' (hyphen) character")]
    LeadingHyphen,
    /// Domain name ends with a hyphen
    #[error("domain name ends with the '-' (hyphen) character")]
    TrailingHyphen,
    /// Character outside letters, digits, dot, hyphen, space and UTF-8
    #[error("domain name has invalid character '{char}' at position {position}")]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Every character is a digit
    #[error("the domain name is composed only by digit characters")]
    AllNumeric,
    /// A label exceeds the maximum length
    #[error("label size too big for domain at position {position}; max is {max}")]
    LabelTooLong {
        /// Position of the first byte past the limit
        position: usize,
        /// Maximum label length
        max: usize,
    },
    /// Adjacent `-.`, `.-` or `..`
    #[error("invalid sequence of characters for domain at position {position}")]
    InvalidSequence {
        /// Position of the second character of the pair
        position: usize,
    },
    /// Bracketed literal failed address validation
    #[error(transparent)]
    Literal(#[from] IpLiteralError),
}

/// Errors for IPv4/IPv6 address validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpError {
    /// Address string is empty
    #[error("empty IP string")]
    Empty,
    /// Not a valid dotted-quad IPv4 address
    #[error("invalid IPv4 address")]
    InvalidIpv4,
    /// Not a valid IPv6 address
    #[error("invalid IPv6 address")]
    InvalidIpv6,
}

/// Errors for bracketed IP literal validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpLiteralError {
    /// Shorter than `[a]`
    #[error("literal value too small")]
    TooShort,
    /// Not exactly one `[` and one `]`
    #[error("invalid literal value; exactly one '[' and one ']' required")]
    Unbalanced,
    /// Brackets do not enclose the whole value
    #[error("invalid enclosing literal value")]
    NotEnclosed,
    /// The enclosed address is invalid
    #[error("literal value error: {0}")]
    Address(#[from] IpError),
}

/// Errors for TCP/UDP port validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// Port string is empty
    #[error("empty port")]
    Empty,
    /// Non-digit character
    #[error("invalid character '{char}' for port at position {position}")]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Value exceeds the largest port
    #[error("number for port too big; maximum is {max}")]
    TooLarge {
        /// Largest allowed port
        max: u32,
    },
}

/// Errors for CIDR block validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// No `/` separator
    #[error("missing prefix slash separator character")]
    MissingSeparator,
    /// More than one `/` separator
    #[error("expected one prefix slash separator, found {count}")]
    MultipleSeparators {
        /// Number of separators found
        count: usize,
    },
    /// Prefix length is not a non-negative integer
    #[error("prefix length '{value}' is not a non-negative integer")]
    InvalidPrefix {
        /// The text after the separator
        value: String,
    },
    /// Prefix length exceeds the family maximum
    #[error("bad {family} prefix {actual}; maximum is {max}")]
    PrefixOutOfRange {
        /// `IPv4` or `IPv6`
        family: &'static str,
        /// Largest allowed prefix
        max: u8,
        /// Parsed prefix
        actual: u32,
    },
    /// The address part is invalid
    #[error(transparent)]
    Address(#[from] IpError),
}

/// Errors for email local-part validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalPartError {
    /// Local part is empty
    #[error("empty local part")]
    Empty,
    /// Local part exceeds the maximum length
    #[error("local part length {actual} exceeds maximum {max}")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Local part starts with whitespace
    #[error("local part with leading whitespace")]
    LeadingWhitespace,
    /// Local part ends with whitespace
    #[error("local part with trailing whitespace")]
    TrailingWhitespace,
    /// Local part starts with a dot
    #[error("local part begins with the '.' (dot) character")]
    LeadingDot,
    /// Local part ends with a dot
    #[error("local part ends with the '.' (dot) character")]
    TrailingDot,
    /// Quoted local part too short to hold a quoted atom
    #[error("quoted local part too small")]
    QuotedTooShort,
    /// Restricted special character in first position
    #[error("invalid leading restricted special character ({char}) [pos: {position}]")]
    LeadingRestricted {
        /// The restricted character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Restricted special character outside quotes
    #[error("unquoted restricted special character ({char}) [pos: {position}]")]
    UnquotedRestricted {
        /// The restricted character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Two unquoted dots in a row
    #[error("consecutive unquoted dot(.) separator [pos: {position}]")]
    ConsecutiveDots {
        /// Position of the second dot
        position: usize,
    },
    /// Quoted string opened without a preceding dot
    #[error("quoted string not preceded by dot(.) [pos: {position}]")]
    QuoteNotDotSeparated {
        /// Position of the quote
        position: usize,
    },
    /// Quote immediately closing an opening quote
    #[error("consecutive quotes [pos: {position}]")]
    EmptyQuotedAtom {
        /// Position of the second quote
        position: usize,
    },
    /// Comment closed before the end of the local part
    #[error("comment closed before the end of the local part [pos: {position}]")]
    CommentNotAtEnd {
        /// Position of the closing parenthesis
        position: usize,
    },
    /// Character outside every allowed class
    #[error("invalid char ({char}) [pos: {position}]")]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Quote opened and never closed
    #[error("unfinished quote [pos: {position}]")]
    UnterminatedQuote {
        /// Position of the opening quote
        position: usize,
    },
    /// Comment opened at the start and never closed
    #[error("comment not finished at lhs local part begin [pos: {position}]")]
    UnterminatedLeftComment {
        /// Position of the opening parenthesis
        position: usize,
    },
    /// Comment opened after content and never closed
    #[error("comment not finished at rhs local part end [pos: {position}]")]
    UnterminatedRightComment {
        /// Position of the opening parenthesis
        position: usize,
    },
}

/// Errors for email address validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Address is empty
    #[error("address specification cannot be empty")]
    Empty,
    /// Address is shorter than `l@d`
    #[error("address specification is too small; minimum is {min}, got {actual}")]
    TooShort {
        /// Minimum allowed length
        min: usize,
        /// Actual length
        actual: usize,
    },
    /// Address exceeds the maximum length
    #[error("address specification length {actual} exceeds maximum {max}")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// The separating `@` is the first character
    #[error("address cannot begin with the '@' (at-sign) character")]
    LeadingAt,
    /// No `@` at all
    #[error("missing '@' (at-sign) character")]
    MissingAt,
    /// The local part failed validation
    #[error(transparent)]
    LocalPart(#[from] LocalPartError),
    /// The domain failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Errors for UUID string validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UuidError {
    /// UUID string is empty
    #[error("empty UUID string")]
    Empty,
    /// Not exactly 36 bytes
    #[error("invalid UUID string size ({actual}); expected {expected}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },
    /// A group holds a character outside the digit class
    #[error("invalid {expected} characters in group #{group}")]
    InvalidGroup {
        /// 1-based group number
        group: usize,
        /// Description of the digit class
        expected: &'static str,
    },
    /// A `-` separator is missing
    #[error("missing '-' (dash) separator at position {position}")]
    MissingDash {
        /// Position where the dash belongs
        position: usize,
    },
    /// The general validator was given the nil UUID
    #[error("nil UUID is only accepted by the nil UUID validator")]
    NilNotAllowed,
}

/// Errors for Luhn checksum and card number validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Number string is empty
    #[error("empty CC number string")]
    Empty,
    /// Digit count outside the allowed window
    #[error("invalid length {actual} for this type of CC number; expected {min}..={max}")]
    InvalidLength {
        /// Minimum digit count
        min: usize,
        /// Maximum digit count
        max: usize,
        /// Actual digit count
        actual: usize,
    },
    /// Non-digit character
    #[error("invalid non digit character '{char}' at position {position}")]
    InvalidDigit {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// The checksum does not add up
    #[error("invalid luhn checksum")]
    Checksum,
}

/// Errors for RFC 2231 attribute validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// Attribute is empty (or only `""`)
    #[error("empty attribute string")]
    Empty,
    /// Character outside the attribute-char class
    #[error("invalid characters in attribute string at position {position}")]
    InvalidChar {
        /// Position in the original input
        position: usize,
    },
}

/// Errors for media type validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaTypeError {
    /// Media type is empty
    #[error("empty media type string")]
    Empty,
    /// No `/` between type and subtype
    #[error("missing media type '/' (slash) separator")]
    MissingSeparator,
    /// Nothing before the `/`
    #[error("missing top level media type")]
    MissingTopLevel,
    /// Top-level type not registered
    #[error("invalid top level type '{found}'")]
    UnknownTopLevel {
        /// The top-level type found
        found: String,
    },
    /// Nothing after the `/`
    #[error("empty subtype")]
    EmptySubtype,
    /// Subtype exceeds the reg-name limit
    #[error("subtype length {actual} exceeds maximum {max}")]
    SubtypeTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Subtype character outside reg-name
    #[error("invalid character '{char}' in subtype at position {position}")]
    InvalidSubtypeChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Structured syntax suffix not registered
    #[error("invalid suffix '{found}'")]
    UnknownSuffix {
        /// The suffix found
        found: String,
    },
    /// Registration tree not registered
    #[error("invalid subtype tree '{found}'")]
    UnknownTree {
        /// The tree found
        found: String,
    },
    /// Parameter without `=`
    #[error("parameter #{index} has no '=' (equals) separator")]
    MissingParameterValue {
        /// 0-based parameter index
        index: usize,
    },
    /// Parameter name or value failed attribute validation
    #[error("parameter #{index}: {source}")]
    Parameter {
        /// 0-based parameter index
        index: usize,
        /// The attribute failure
        source: AttributeError,
    },
}

/// Errors for a single URI component (userinfo, path, query, fragment).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Character outside the component class
    #[error("invalid character '{char}' at position {position}")]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the component
        position: usize,
    },
    /// A `%` without room for two hex digits
    #[error("percent encoding too late at position {position}")]
    PercentTooLate {
        /// Position of the `%`
        position: usize,
    },
    /// A `%` not followed by two hex digits
    #[error("bad percent encoding at position {position}")]
    BadPercent {
        /// Position of the `%`
        position: usize,
    },
    /// Path does not start with `/`
    #[error("path does not begin with a '/' (slash) character")]
    PathNotAbsolute,
}

/// Errors that can occur when parsing a URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid URI '{input}': {kind}")]
pub struct UriError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: UriErrorKind,
}

/// Specific URI error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriErrorKind {
    /// URI is empty
    #[error("empty URL string")]
    Empty,
    /// No scheme terminator
    #[error("missing ':' (colon) character")]
    MissingColon,
    /// Nothing after the scheme terminator
    #[error("URL too small")]
    TooShort,
    /// Scheme not in the scheme table
    #[error("invalid scheme; scheme type '{found}' not found")]
    UnknownScheme {
        /// The scheme text found
        found: String,
    },
    /// Fixed-scheme input without `:` right after the scheme length
    #[error("invalid scheme separator")]
    InvalidSeparator,
    /// Nothing after the scheme and slashes
    #[error("empty {syntax} syntax")]
    EmptySyntax {
        /// Name of the syntax that was dispatched to
        syntax: &'static str,
    },
    /// No host in the authority
    #[error("empty authority part")]
    EmptyAuthority,
    /// Userinfo failed validation
    #[error("invalid userinfo: {0}")]
    Userinfo(ComponentError),
    /// Host failed domain validation
    #[error("invalid host: {0}")]
    Host(DomainError),
    /// Bracketed host failed literal validation
    #[error("invalid literal host: {0}")]
    LiteralHost(IpLiteralError),
    /// Bracketed host without `]`
    #[error("invalid literal host; missing ']'")]
    UnterminatedLiteral,
    /// Something other than `:port` after a literal host
    #[error("unexpected character '{char}' after literal host")]
    AfterLiteral {
        /// The unexpected character
        char: char,
    },
    /// `:` with nothing after it
    #[error("invalid empty port")]
    EmptyPort,
    /// Port failed validation
    #[error("invalid port: {0}")]
    Port(PortError),
    /// Path failed validation
    #[error("invalid path: {0}")]
    Path(ComponentError),
    /// Query failed validation
    #[error("invalid query: {0}")]
    Query(ComponentError),
    /// Fragment failed validation
    #[error("invalid fragment: {0}")]
    Fragment(ComponentError),
    /// Embedded email address failed validation
    #[error("invalid address: {0}")]
    Address(AddressError),
    /// A component window fell outside the input
    #[error("invalid component bounds: {0}")]
    Bounds(#[from] ViewError),
}

/// The named kind of a rejected input, one per validated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    /// Rejected by the domain name grammar
    InvalidDomain,
    /// Rejected by the local-part grammar
    InvalidLocalPart,
    /// Rejected by the email address grammar
    InvalidEmailAddress,
    /// Rejected by the port grammar
    InvalidPort,
    /// Rejected by the family-dispatching IP grammar
    InvalidIpAddress,
    /// Rejected by the IPv4 grammar
    InvalidIpv4Address,
    /// Rejected by the IPv6 grammar
    InvalidIpv6Address,
    /// Rejected by the bracketed literal grammar
    InvalidIpLiteral,
    /// Rejected by the CIDR grammar
    InvalidCidr,
    /// Rejected by the general UUID grammar
    InvalidUuid,
    /// Rejected by the nil UUID grammar
    InvalidNilUuid,
    /// Rejected by a card number grammar
    InvalidCardNumber,
    /// Rejected by the media type grammar
    InvalidMediaType,
    /// Rejected by the attribute grammar
    InvalidAttribute,
    /// Rejected by the URI grammar
    InvalidUri,
}

impl Rejection {
    /// Returns the snake-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDomain => "invalid_domain",
            Self::InvalidLocalPart => "invalid_local_part",
            Self::InvalidEmailAddress => "invalid_email_address",
            Self::InvalidPort => "invalid_port",
            Self::InvalidIpAddress => "invalid_ip_address",
            Self::InvalidIpv4Address => "invalid_ipv4_address",
            Self::InvalidIpv6Address => "invalid_ipv6_address",
            Self::InvalidIpLiteral => "invalid_ip_literal",
            Self::InvalidCidr => "invalid_cidr",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidNilUuid => "invalid_nil_uuid",
            Self::InvalidCardNumber => "invalid_card_number",
            Self::InvalidMediaType => "invalid_media_type",
            Self::InvalidAttribute => "invalid_attribute",
            Self::InvalidUri => "invalid_uri",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by a [`Validator`](crate::Validator) when an input is rejected.
///
/// Carries the named kind and the diagnostic text of the underlying grammar
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {diagnostic}")]
pub struct InvalidInput {
    /// The kind of entity that rejected the input
    pub kind: Rejection,
    /// The grammar diagnostic
    pub diagnostic: String,
    /// The rejected input
    pub input: String,
}
