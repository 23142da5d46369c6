//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use netsyntax::prelude::*;
//!
//! let domain = Domain::parse("example.com").unwrap();
//! let verdict = Validator::<Uri>::new().check("cid:part1@example.com");
//! assert!(verdict.is_accepted());
//! # let _ = domain;
//! ```

pub use crate::{
    // Entities
    Attribute, Cidr, Domain, EmailAddress, Fragment, Host, IpAddress, IpLiteral, Ipv4Address,
    Ipv6Address, LocalPart, LuhnNumber, MediaType, NilUuid, Path, Port, Query, Scheme, Uri,
    Userinfo, Uuid,
    // Card aliases
    Amex, CardNumber, Visa, VisaElectron,
    // Wrapper path
    InvalidInput, Rejection, Validate, Validator, Verdict,
    // Errors
    AddressError, AttributeError, CardError, CidrError, ComponentError, DomainError, IpError,
    IpLiteralError, LocalPartError, MediaTypeError, PortError, UriError, UriErrorKind, UuidError,
};
