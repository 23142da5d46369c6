//! TCP/UDP port numbers.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_PORT;
use crate::error::PortError;

/// A validated TCP/UDP port.
///
/// # Examples
///
/// ```
/// use netsyntax::Port;
///
/// assert_eq!(Port::parse("8042").unwrap().value(), 8042);
/// assert!(Port::parse("65536").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Port(u16);

impl Port {
    /// Parses a decimal port number.
    ///
    /// # Errors
    ///
    /// Returns `PortError` if the input is empty, holds a non-digit, or
    /// exceeds 65535.
    pub fn parse(input: &str) -> Result<Self, PortError> {
        if input.is_empty() {
            return Err(PortError::Empty);
        }

        let mut value: u32 = 0;
        for (i, c) in input.char_indices() {
            let Some(digit) = c.to_digit(10) else {
                return Err(PortError::InvalidChar { char: c, position: i });
            };
            value = value * 10 + digit;
            if value > MAX_PORT {
                return Err(PortError::TooLarge { max: MAX_PORT });
            }
        }

        u16::try_from(value)
            .map(Self)
            .map_err(|_| PortError::TooLarge { max: MAX_PORT })
    }

    /// Creates a port from a number.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the port number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Port {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Port {
    type Error = PortError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
