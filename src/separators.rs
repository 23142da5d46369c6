//! First-occurrence index of the generic URI delimiters.

/// A generic URI delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `/`, start of the path
    Path,
    /// `?`, start of the query
    Query,
    /// `#`, start of the fragment
    Fragment,
    /// `:`, start of the port
    Colon,
    /// `@`, end of the userinfo
    At,
}

impl Separator {
    /// Every separator, in index order.
    pub const ALL: [Self; 5] = [Self::Path, Self::Query, Self::Fragment, Self::Colon, Self::At];

    /// Returns the delimiter byte.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Path => b'/',
            Self::Query => b'?',
            Self::Fragment => b'#',
            Self::Colon => b':',
            Self::At => b'@',
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Byte positions of the first occurrence of each [`Separator`].
///
/// When `@` appears after the first `:`, that colon belongs to the userinfo
/// and the recorded colon is the next one after the `@`.
///
/// # Examples
///
/// ```
/// use netsyntax::{Separator, Separators};
///
/// let sep = Separators::scan("user:pass@example.com:8042/over");
/// assert_eq!(sep.position(Separator::At), Some(9));
/// assert_eq!(sep.position(Separator::Colon), Some(21));
/// assert_eq!(sep.position(Separator::Path), Some(26));
/// assert_eq!(sep.first_of(&[Separator::Query, Separator::Fragment]), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separators {
    positions: [Option<usize>; 5],
}

impl Separators {
    /// Records the separators of `input`.
    #[must_use]
    pub fn scan(input: &str) -> Self {
        let bytes = input.as_bytes();
        let find = |sep: Separator| bytes.iter().position(|&b| b == sep.as_byte());

        let mut positions = Separator::ALL.map(find);
        let at = positions[Separator::At.index()];
        let colon = positions[Separator::Colon.index()];
        if let Some(at) = at.filter(|&at| colon.is_some_and(|colon| colon < at)) {
            positions[Separator::Colon.index()] = bytes
                .get(at + 1..)
                .and_then(|rest| rest.iter().position(|&b| b == b':'))
                .map(|i| at + 1 + i);
        }
        Self { positions }
    }

    /// Returns the position of `sep`, if present.
    #[must_use]
    pub const fn position(&self, sep: Separator) -> Option<usize> {
        self.positions[sep.index()]
    }

    /// Returns the earliest position among `seps`.
    #[must_use]
    pub fn first_of(&self, seps: &[Separator]) -> Option<usize> {
        seps.iter().filter_map(|&sep| self.position(sep)).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let sep = Separators::scan("");
        for s in Separator::ALL {
            assert_eq!(sep.position(s), None);
        }
    }

    #[test]
    fn first_occurrences() {
        let sep = Separators::scan("h/a/b?q=1?r#f#g");
        assert_eq!(sep.position(Separator::Path), Some(1));
        assert_eq!(sep.position(Separator::Query), Some(5));
        assert_eq!(sep.position(Separator::Fragment), Some(11));
        assert_eq!(sep.first_of(&[Separator::Query, Separator::Fragment]), Some(5));
    }

    #[test]
    fn userinfo_colon_is_skipped() {
        let sep = Separators::scan("u:p@host:80");
        assert_eq!(sep.position(Separator::At), Some(3));
        assert_eq!(sep.position(Separator::Colon), Some(8));

        let no_port = Separators::scan("u:p@host");
        assert_eq!(no_port.position(Separator::Colon), None);
    }

    #[test]
    fn colon_before_at_without_userinfo_colon() {
        let sep = Separators::scan("host:80");
        assert_eq!(sep.position(Separator::Colon), Some(4));
        assert_eq!(sep.position(Separator::At), None);
    }

    #[test]
    fn first_of_none() {
        let sep = Separators::scan("host");
        assert_eq!(sep.first_of(&[Separator::Path, Separator::Query]), None);
    }
}
