//! Email addresses (`local-part@domain`).

use std::sync::Arc;

use crate::constants::{MAX_ADDRESS_LENGTH, MIN_ADDRESS_LENGTH};
use crate::domain::Domain;
use crate::error::AddressError;
use crate::local_part::LocalPart;
use crate::macros::impl_validated_str;

/// A validated email address.
///
/// The separator is the last `@` in the input. The local part and domain are
/// validated independently and held behind `Arc`, so clones share them.
///
/// # Examples
///
/// ```
/// use netsyntax::EmailAddress;
///
/// let addr = EmailAddress::parse("very.common@example.com").unwrap();
/// assert_eq!(addr.local_part().as_str(), "very.common");
/// assert_eq!(addr.domain().as_str(), "example.com");
///
/// assert!(EmailAddress::parse("john..doe@example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    value: String,
    local_part: Arc<LocalPart>,
    domain: Arc<Domain>,
}

impl EmailAddress {
    /// Parses an email address.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if the length is out of bounds, the `@` is
    /// missing or leading, or either side fails its own grammar. Sub-grammar
    /// errors are forwarded unchanged.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        if input.is_empty() {
            return Err(AddressError::Empty);
        }
        if input.len() < MIN_ADDRESS_LENGTH {
            return Err(AddressError::TooShort {
                min: MIN_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }
        if input.len() > MAX_ADDRESS_LENGTH {
            return Err(AddressError::TooLong {
                max: MAX_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }

        let (local, domain) = match input.rsplit_once('@') {
            Some(("", _)) => return Err(AddressError::LeadingAt),
            Some(parts) => parts,
            None => return Err(AddressError::MissingAt),
        };

        let local_part = LocalPart::parse(local)?;
        let domain = Domain::parse(domain)?;

        Ok(Self {
            value: input.to_string(),
            local_part: Arc::new(local_part),
            domain: Arc::new(domain),
        })
    }

    /// Returns the address as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the local part.
    #[must_use]
    pub fn local_part(&self) -> &LocalPart {
        &self.local_part
    }

    /// Returns the domain.
    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns a shared handle to the domain.
    #[must_use]
    pub fn domain_arc(&self) -> Arc<Domain> {
        Arc::clone(&self.domain)
    }
}

impl_validated_str!(EmailAddress, AddressError);
