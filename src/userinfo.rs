//! URI userinfo component (the text before `@` in an authority).

use crate::chars::{is_userinfo_char, scan_component};
use crate::error::ComponentError;
use crate::macros::impl_validated_str;

/// A validated userinfo, without the trailing `@`.
///
/// # Examples
///
/// ```
/// use netsyntax::Userinfo;
///
/// let info = Userinfo::parse("user:pass").unwrap();
/// assert_eq!(info.user(), "user");
/// assert_eq!(info.password(), Some("pass"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Userinfo(String);

impl Userinfo {
    /// Parses a userinfo.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if the text contains a character other than
    /// unreserved, sub-delimiters, `:` or a valid percent-encoding.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        scan_component(input, is_userinfo_char)?;
        Ok(Self(input.to_string()))
    }

    /// Returns the userinfo as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the text before the first `:`.
    #[must_use]
    pub fn user(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(user, _)| user)
    }

    /// Returns the text after the first `:`, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.0.split_once(':').map(|(_, password)| password)
    }
}

impl_validated_str!(Userinfo, ComponentError);
