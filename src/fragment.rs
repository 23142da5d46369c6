//! URI fragment component (the text after `#`).

use std::ops::Deref;

use crate::chars::{is_query_char, scan_component};
use crate::error::ComponentError;
use crate::macros::impl_validated_str;

/// A validated URI fragment, without the leading `#`.
///
/// Allows unreserved and sub-delimiter characters, `:`, `@`, `/`, `?` and
/// percent-encodings with two hex digits.
///
/// # Examples
///
/// ```
/// use netsyntax::Fragment;
///
/// let frag = Fragment::parse("section-2/intro").unwrap();
/// assert_eq!(frag.as_str(), "section-2/intro");
///
/// assert!(Fragment::parse("a#b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Parses a fragment (without leading `#`).
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if the fragment contains a character outside
    /// its class or a malformed percent-encoding.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        scan_component(input, is_query_char)?;
        Ok(Self(input.to_string()))
    }

    /// Returns the fragment as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validated_str!(Fragment, ComponentError);

impl Deref for Fragment {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
