//! URI path component.

use crate::chars::{is_pchar, scan_component};
use crate::error::ComponentError;
use crate::macros::impl_validated_str;

/// A validated absolute URI path, including its leading `/`.
///
/// Each `/`-separated segment may contain unreserved and sub-delimiter
/// characters, `:`, `@` and percent-encodings.
///
/// # Examples
///
/// ```
/// use netsyntax::Path;
///
/// let path = Path::parse("/over/there/index.dtb").unwrap();
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["over", "there", "index.dtb"]);
///
/// assert!(Path::parse("relative/path").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(String);

impl Path {
    /// Parses a path, which must begin with `/`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::PathNotAbsolute` if the path does not start
    /// with `/`, or the first segment error otherwise. Positions are relative
    /// to the whole path.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        if !input.starts_with('/') {
            return Err(ComponentError::PathNotAbsolute);
        }
        scan_component(input, |b| b == b'/' || is_pchar(b))?;
        Ok(Self(input.to_string()))
    }

    /// Returns the path as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the segments after the leading `/`.
    ///
    /// The root path `/` yields a single empty segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.strip_prefix('/').unwrap_or_default().split('/')
    }

    /// Returns true if the path is exactly `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl_validated_str!(Path, ComponentError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root() {
        let path = Path::parse("/").unwrap();
        assert!(path.is_root());
        assert_eq!(path.segments().collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn parse_segments() {
        let path = Path::parse("/a/b:c/d@e/%20").unwrap();
        assert_eq!(path.segments().count(), 4);
        assert!(!path.is_root());
    }

    #[test]
    fn must_be_absolute() {
        assert!(matches!(Path::parse(""), Err(ComponentError::PathNotAbsolute)));
        assert!(matches!(Path::parse("a/b"), Err(ComponentError::PathNotAbsolute)));
    }

    #[test]
    fn rejects_query_chars() {
        assert!(matches!(
            Path::parse("/a?b"),
            Err(ComponentError::InvalidChar { char: '?', position: 2 })
        ));
        assert!(matches!(
            Path::parse("/a/b c"),
            Err(ComponentError::InvalidChar { char: ' ', position: 4 })
        ));
    }

    #[test]
    fn percent_in_segment() {
        assert!(matches!(
            Path::parse("/a%2"),
            Err(ComponentError::PercentTooLate { position: 2 })
        ));
        assert!(matches!(
            Path::parse("/%zz/b"),
            Err(ComponentError::BadPercent { position: 1 })
        ));
    }
}
