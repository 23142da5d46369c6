//! Wrapper path: entity-agnostic validation with named rejections.
//!
//! Every entity's `parse` is the primary, result-carrying contract. This
//! module layers [`Validator`] on top of it, which turns a grammar error
//! into an [`InvalidInput`] carrying the entity's [`Rejection`] kind and the
//! diagnostic text. A counting validator also tallies outcomes atomically.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, trace};

use crate::cidr::Cidr;
use crate::domain::Domain;
use crate::email::EmailAddress;
use crate::error::{
    AddressError, AttributeError, CardError, CidrError, DomainError, InvalidInput, IpError,
    IpLiteralError, LocalPartError, MediaTypeError, PortError, Rejection, UriError, UuidError,
};
use crate::ip::{IpAddress, IpLiteral, Ipv4Address, Ipv6Address};
use crate::local_part::LocalPart;
use crate::luhn::{CardNumber, LuhnNumber};
use crate::media_type::{Attribute, MediaType};
use crate::port::Port;
use crate::uri::Uri;
use crate::uuid_str::{NilUuid, Uuid};

/// An entity that can be validated from a string.
pub trait Validate: Sized {
    /// The grammar error.
    type Error: std::error::Error;

    /// The kind reported when validation fails.
    const REJECTION: Rejection;

    /// Validates `input`.
    ///
    /// # Errors
    ///
    /// Returns the entity's grammar error.
    fn validate(input: &str) -> Result<Self, Self::Error>;
}

macro_rules! impl_validate {
    ($($ty:ty => $kind:ident, $err:ty;)+) => {
        $(
            impl Validate for $ty {
                type Error = $err;
                const REJECTION: Rejection = Rejection::$kind;

                fn validate(input: &str) -> Result<Self, Self::Error> {
                    <$ty>::parse(input)
                }
            }
        )+
    };
}

impl_validate! {
    Domain => InvalidDomain, DomainError;
    LocalPart => InvalidLocalPart, LocalPartError;
    EmailAddress => InvalidEmailAddress, AddressError;
    Port => InvalidPort, PortError;
    IpAddress => InvalidIpAddress, IpError;
    Ipv4Address => InvalidIpv4Address, IpError;
    Ipv6Address => InvalidIpv6Address, IpError;
    IpLiteral => InvalidIpLiteral, IpLiteralError;
    Cidr => InvalidCidr, CidrError;
    Uuid => InvalidUuid, UuidError;
    NilUuid => InvalidNilUuid, UuidError;
    LuhnNumber => InvalidCardNumber, CardError;
    MediaType => InvalidMediaType, MediaTypeError;
    Attribute => InvalidAttribute, AttributeError;
    Uri => InvalidUri, UriError;
}

impl<const MIN: usize, const MAX: usize> Validate for CardNumber<MIN, MAX> {
    type Error = CardError;
    const REJECTION: Rejection = Rejection::InvalidCardNumber;

    fn validate(input: &str) -> Result<Self, Self::Error> {
        Self::parse(input)
    }
}

/// Records validation outcomes.
pub trait Tally {
    /// Records one outcome.
    fn record(&self, accepted: bool);
}

/// Tally that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncounted;

impl Tally for Uncounted {
    fn record(&self, _accepted: bool) {}
}

/// Tally with atomic good/bad counters.
///
/// The two counters are updated independently; only their final totals are
/// meaningful once all callers have finished.
#[derive(Debug, Default)]
pub struct Counted {
    good: AtomicUsize,
    bad: AtomicUsize,
}

impl Tally for Counted {
    fn record(&self, accepted: bool) {
        let counter = if accepted { &self.good } else { &self.bad };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Validates inputs as `T`, reporting failures as [`InvalidInput`].
///
/// # Examples
///
/// ```
/// use netsyntax::{Domain, Rejection, Validator};
///
/// let validator = Validator::<Domain>::counting();
/// assert!(validator.validate("example.com").is_ok());
///
/// let err = validator.validate("example..com").unwrap_err();
/// assert_eq!(err.kind, Rejection::InvalidDomain);
/// assert_eq!(validator.good(), 1);
/// assert_eq!(validator.bad(), 1);
/// ```
#[derive(Debug)]
pub struct Validator<T, C = Uncounted> {
    tally: C,
    entity: PhantomData<fn() -> T>,
}

impl<T: Validate> Validator<T, Uncounted> {
    /// Creates a validator that does not count outcomes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tally: Uncounted,
            entity: PhantomData,
        }
    }

    /// Creates a validator with zeroed good/bad counters.
    #[must_use]
    pub fn counting() -> Validator<T, Counted> {
        Validator {
            tally: Counted::default(),
            entity: PhantomData,
        }
    }
}

impl<T: Validate> Default for Validator<T, Uncounted> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Validate> Validator<T, Counted> {
    /// Returns the number of accepted inputs.
    #[must_use]
    pub fn good(&self) -> usize {
        self.tally.good.load(Ordering::Relaxed)
    }

    /// Returns the number of rejected inputs.
    #[must_use]
    pub fn bad(&self) -> usize {
        self.tally.bad.load(Ordering::Relaxed)
    }

    /// Zeroes both counters.
    pub fn reset(&self) {
        self.tally.good.store(0, Ordering::Relaxed);
        self.tally.bad.store(0, Ordering::Relaxed);
    }
}

impl<T: Validate, C: Tally> Validator<T, C> {
    /// Validates `input`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` with the entity's rejection kind and the
    /// grammar diagnostic if the input is invalid.
    pub fn validate(&self, input: &str) -> Result<T, InvalidInput> {
        match T::validate(input) {
            Ok(value) => {
                self.tally.record(true);
                trace!(kind = %T::REJECTION, input, "accepted");
                Ok(value)
            }
            Err(err) => {
                self.tally.record(false);
                let diagnostic = err.to_string();
                debug!(kind = %T::REJECTION, input, %diagnostic, "rejected");
                Err(InvalidInput {
                    kind: T::REJECTION,
                    diagnostic,
                    input: input.to_string(),
                })
            }
        }
    }

    /// Validates `input` and renders the outcome.
    #[must_use]
    pub fn check(&self, input: &str) -> Verdict {
        Verdict::of(&self.validate(input))
    }
}

/// Validates `input` as `T` without counting.
///
/// # Errors
///
/// Returns `InvalidInput` if the input is invalid.
///
/// # Examples
///
/// ```
/// use netsyntax::{validate, Port};
///
/// let port: Port = validate("8080").unwrap();
/// assert_eq!(port.value(), 8080);
/// assert_eq!(validate::<Port>("").unwrap_err().to_string(), "invalid_port: empty port");
/// ```
pub fn validate<T: Validate>(input: &str) -> Result<T, InvalidInput> {
    Validator::<T>::new().validate(input)
}

/// The printable outcome of a validation: `OK.` or `ERR: [diagnostic]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The input was accepted
    Accepted,
    /// The input was rejected with this diagnostic
    Rejected(String),
}

impl Verdict {
    /// Builds a verdict from any validation result.
    #[must_use]
    pub fn of<T, E: fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Accepted,
            Err(err) => Self::Rejected(err.to_string()),
        }
    }

    /// Returns true if the input was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("OK."),
            Self::Rejected(diagnostic) => write!(f, "ERR: [{diagnostic}]"),
        }
    }
}
