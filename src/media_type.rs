//! Media types (RFC 4288, RFC 6838) and RFC 2231 attributes.

use crate::chars::{is_attribute_char, is_reg_name_char, is_space};
use crate::constants::MAX_SUBTYPE_LENGTH;
use crate::error::{AttributeError, MediaTypeError};
use crate::macros::impl_validated_str;

/// Registered top-level type names.
pub const TOP_LEVEL_TYPES: [&str; 9] = [
    "application",
    "audio",
    "example",
    "image",
    "message",
    "model",
    "multipart",
    "text",
    "video",
];

/// Registration trees (RFC 6838).
pub const REGISTRATION_TREES: [&str; 3] = ["vnd", "prs", "x"];

/// Structured syntax suffixes (RFC 6839, RFC 7049).
pub const SUFFIXES: [&str; 8] = ["xml", "json", "ber", "der", "fastinfoset", "wbxml", "zip", "cbor"];

fn is_space_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_space)
}

fn registered(table: &[&str], name: &str) -> bool {
    table.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// An RFC 2231 attribute or parameter value.
///
/// A value enclosed in `"` is unquoted before the character check and may
/// then contain tspecials.
///
/// # Examples
///
/// ```
/// use netsyntax::Attribute;
///
/// assert_eq!(Attribute::parse("\"a/b\"").unwrap().value(), "a/b");
/// assert!(Attribute::parse("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    value: String,
    quoted: bool,
}

impl Attribute {
    /// Parses an attribute, unquoting it first if enclosed in `"`.
    ///
    /// # Errors
    ///
    /// Returns `AttributeError` if the value is empty or holds a character
    /// outside the attribute-char class.
    pub fn parse(input: &str) -> Result<Self, AttributeError> {
        Self::parse_inner(input, true)
    }

    /// Parses an attribute that may not be quoted, such as a parameter name.
    ///
    /// # Errors
    ///
    /// Returns `AttributeError` if the value is empty or holds a character
    /// outside the unquoted attribute-char class.
    pub fn parse_name(input: &str) -> Result<Self, AttributeError> {
        Self::parse_inner(input, false)
    }

    fn parse_inner(input: &str, allow_quotes: bool) -> Result<Self, AttributeError> {
        if input.is_empty() {
            return Err(AttributeError::Empty);
        }

        let unquoted = input
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .filter(|_| allow_quotes);
        let (content, quoted) = match unquoted {
            Some("") => return Err(AttributeError::Empty),
            Some(inner) => (inner, true),
            None => (input, false),
        };

        let offset = usize::from(quoted);
        let mut previous = 0u8;
        for (i, &c) in content.as_bytes().iter().enumerate() {
            let unescaped_quote = c == b'"' && previous != b'\\';
            if unescaped_quote || !is_attribute_char(c, quoted) {
                return Err(AttributeError::InvalidChar { position: i + offset });
            }
            previous = c;
        }

        Ok(Self {
            value: input.to_string(),
            quoted,
        })
    }

    /// Returns the attribute as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the value without enclosing quotes.
    #[must_use]
    pub fn value(&self) -> &str {
        if self.quoted {
            self.value.get(1..self.value.len() - 1).unwrap_or_default()
        } else {
            &self.value
        }
    }

    /// Returns true if the attribute was quoted.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }
}

impl_validated_str!(Attribute, AttributeError);

/// A `name=value` media type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: Attribute,
    value: Attribute,
}

impl Parameter {
    /// Returns the parameter name.
    #[must_use]
    pub const fn name(&self) -> &Attribute {
        &self.name
    }

    /// Returns the parameter value.
    #[must_use]
    pub const fn value(&self) -> &Attribute {
        &self.value
    }
}

/// A validated media type such as `application/vnd.api+json`.
///
/// # Examples
///
/// ```
/// use netsyntax::MediaType;
///
/// let mt = MediaType::parse("application/vnd.api+json; charset=utf-8").unwrap();
/// assert_eq!(mt.top(), "application");
/// assert_eq!(mt.subtype(), "vnd.api+json");
/// assert_eq!(mt.tree(), Some("vnd"));
/// assert_eq!(mt.suffix(), Some("json"));
/// assert_eq!(mt.parameters()[0].value().value(), "utf-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    value: String,
    top: String,
    subtype: String,
    tree: Option<String>,
    suffix: Option<String>,
    parameters: Vec<Parameter>,
}

impl MediaType {
    /// Parses a media type with optional parameters.
    ///
    /// # Errors
    ///
    /// Returns `MediaTypeError` if the separator or top-level type is missing
    /// or unregistered, the subtype is empty, too long or holds invalid
    /// characters, the suffix or tree is unregistered, or a parameter is
    /// malformed.
    pub fn parse(input: &str) -> Result<Self, MediaTypeError> {
        if input.is_empty() {
            return Err(MediaTypeError::Empty);
        }

        let (top, rest) = input.split_once('/').ok_or(MediaTypeError::MissingSeparator)?;
        if top.is_empty() {
            return Err(MediaTypeError::MissingTopLevel);
        }
        if !registered(&TOP_LEVEL_TYPES, top) {
            return Err(MediaTypeError::UnknownTopLevel {
                found: top.to_string(),
            });
        }

        let mut pieces = split_parameters(rest).into_iter();
        let subtype = pieces.next().unwrap_or_default().trim_end_matches(is_space_char);
        Self::check_subtype(subtype, top.len() + 1)?;

        let suffix = subtype.split_once('+').map(|(_, s)| s);
        if let Some(s) = suffix.filter(|s| !registered(&SUFFIXES, s)) {
            return Err(MediaTypeError::UnknownSuffix { found: s.to_string() });
        }

        let tree = if subtype.contains('.') {
            let end = subtype.find(['.', '+']).unwrap_or(subtype.len());
            let tree = subtype.get(..end).unwrap_or_default();
            if tree.is_empty() || !registered(&REGISTRATION_TREES, tree) {
                return Err(MediaTypeError::UnknownTree {
                    found: tree.to_string(),
                });
            }
            Some(tree)
        } else {
            None
        };

        let parameters = pieces
            .enumerate()
            .map(|(index, piece)| Self::parse_parameter(index, piece))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            value: input.to_string(),
            top: top.to_string(),
            subtype: subtype.to_string(),
            tree: tree.map(str::to_string),
            suffix: suffix.map(str::to_string),
            parameters,
        })
    }

    fn check_subtype(subtype: &str, offset: usize) -> Result<(), MediaTypeError> {
        if subtype.is_empty() {
            return Err(MediaTypeError::EmptySubtype);
        }
        if subtype.len() > MAX_SUBTYPE_LENGTH {
            return Err(MediaTypeError::SubtypeTooLong {
                max: MAX_SUBTYPE_LENGTH,
                actual: subtype.len(),
            });
        }
        if let Some((i, c)) = subtype
            .char_indices()
            .find(|&(_, c)| !u8::try_from(c).is_ok_and(is_reg_name_char))
        {
            return Err(MediaTypeError::InvalidSubtypeChar {
                char: c,
                position: offset + i,
            });
        }
        Ok(())
    }

    fn parse_parameter(index: usize, piece: &str) -> Result<Parameter, MediaTypeError> {
        let piece = piece.trim_matches(is_space_char);
        let (name, value) = piece
            .split_once('=')
            .ok_or(MediaTypeError::MissingParameterValue { index })?;
        let name = Attribute::parse_name(name)
            .map_err(|source| MediaTypeError::Parameter { index, source })?;
        let value =
            Attribute::parse(value).map_err(|source| MediaTypeError::Parameter { index, source })?;
        Ok(Parameter { name, value })
    }

    /// Returns the media type as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the top-level type.
    #[must_use]
    pub fn top(&self) -> &str {
        &self.top
    }

    /// Returns the subtype, without parameters.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Returns the registration tree (`vnd`, `prs`, `x`), if any.
    #[must_use]
    pub fn tree(&self) -> Option<&str> {
        self.tree.as_deref()
    }

    /// Returns the structured syntax suffix, if any.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Returns the parameters in input order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl_validated_str!(MediaType, MediaTypeError);

/// Splits at `;` outside double quotes.
fn split_parameters(input: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    let mut previous = 0u8;
    for (i, &b) in input.as_bytes().iter().enumerate() {
        match b {
            b'"' if previous != b'\\' => in_quote = !in_quote,
            b';' if !in_quote => {
                pieces.push(input.get(start..i).unwrap_or_default());
                start = i + 1;
            }
            _ => {}
        }
        previous = b;
    }
    pieces.push(input.get(start..).unwrap_or_default());
    pieces
}
