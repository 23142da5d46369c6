//! URI query component (the text after `?`).

use crate::chars::{is_query_char, scan_component};
use crate::error::ComponentError;
use crate::macros::impl_validated_str;

/// A validated URI query, without the leading `?`.
///
/// Shares its character class with [`Fragment`](crate::Fragment). The query
/// is not split into parameters or decoded; [`Query::pairs`] offers a raw
/// `&`/`=` split for callers that want one.
///
/// # Examples
///
/// ```
/// use netsyntax::Query;
///
/// let query = Query::parse("type=animal&name=narwhal").unwrap();
/// let pairs: Vec<_> = query.pairs().collect();
/// assert_eq!(pairs, [("type", "animal"), ("name", "narwhal")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Parses a query (without leading `?`).
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if the query contains a character outside
    /// its class or a malformed percent-encoding.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        scan_component(input, is_query_char)?;
        Ok(Self(input.to_string()))
    }

    /// Returns the query as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the query on `&`, then each pair on the first `=`.
    ///
    /// Empty pairs are skipped; a pair without `=` yields an empty value.
    /// Values are not percent-decoded.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
    }

    /// Returns the raw value of the first pair named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs().find(|(k, _)| *k == name).map(|(_, v)| v)
    }
}

impl_validated_str!(Query, ComponentError);
