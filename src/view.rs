//! Non-owning bounded views over a parent string.
//!
//! A [`BoundedView`] re-slices an input without copying it. Only
//! [`BoundedView::to_owned_string`] allocates.

use std::fmt;

use crate::error::ViewError;

/// A read-only window `(parent, offset, len)` over a borrowed string.
///
/// Construction rejects any window whose end would reach the final index of
/// the parent when an explicit count is given; a count of zero selects the
/// rest of the parent from `offset`.
///
/// # Examples
///
/// ```
/// use netsyntax::BoundedView;
///
/// let mut view = BoundedView::new("user@host", 0, 0).unwrap();
/// view.advance_by(5).unwrap();
/// assert_eq!(view.as_str(), "host");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedView<'a> {
    parent: &'a str,
    offset: usize,
    len: usize,
}

impl<'a> BoundedView<'a> {
    /// Creates a view over `parent` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` if:
    /// - `offset` is not inside `parent`
    /// - `count` is non-zero and `offset + count` reaches `parent.len()`
    /// - either boundary splits a multi-byte character
    pub fn new(parent: &'a str, offset: usize, count: usize) -> Result<Self, ViewError> {
        let sz = parent.len();
        if sz == 0 && offset == 0 && count == 0 {
            return Ok(Self::empty(parent));
        }
        if offset >= sz {
            return Err(ViewError::OffsetOutOfRange { offset, len: sz });
        }
        if offset.saturating_add(count) >= sz && count > 0 {
            return Err(ViewError::CountOutOfRange {
                offset,
                count,
                len: sz,
            });
        }
        let len = if count == 0 { sz - offset } else { count };
        Self::check_boundary(parent, offset)?;
        Self::check_boundary(parent, offset + len)?;
        Ok(Self { parent, offset, len })
    }

    /// Creates an empty view anchored at the start of `parent`.
    #[must_use]
    pub const fn empty(parent: &'a str) -> Self {
        Self {
            parent,
            offset: 0,
            len: 0,
        }
    }

    /// Moves the start of the view forward by one byte.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` if the offset would move past the end of the
    /// parent or into the middle of a character.
    pub fn advance(&mut self) -> Result<(), ViewError> {
        let next = self.offset + 1;
        if next > self.parent.len() {
            return Err(ViewError::AdvanceOutOfRange {
                offset: self.offset,
                len: self.parent.len(),
            });
        }
        Self::check_boundary(self.parent, next)?;
        self.offset = next;
        self.len = self.len.saturating_sub(1);
        Ok(())
    }

    /// Moves the start of the view forward by `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` under the same conditions as [`BoundedView::advance`].
    pub fn advance_by(&mut self, n: usize) -> Result<(), ViewError> {
        let next = self.offset.saturating_add(n);
        if next > self.parent.len() {
            return Err(ViewError::AdvanceOutOfRange {
                offset: self.offset,
                len: self.parent.len(),
            });
        }
        Self::check_boundary(self.parent, next)?;
        self.offset = next;
        self.len = self.len.saturating_sub(n);
        Ok(())
    }

    /// Shrinks the view to its first `count` bytes.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` if `count` exceeds the current length or splits a
    /// character.
    pub fn narrow(&mut self, count: usize) -> Result<(), ViewError> {
        if count > self.len {
            return Err(ViewError::NarrowOutOfRange {
                count,
                len: self.len,
            });
        }
        Self::check_boundary(self.parent, self.offset + count)?;
        self.len = count;
        Ok(())
    }

    /// Returns the first byte of the view.
    #[must_use]
    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Returns true when the view holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bytes in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the offset of the view inside the parent.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the parent string.
    #[must_use]
    pub const fn parent(&self) -> &'a str {
        self.parent
    }

    /// Returns the position of the first `byte` in the view, relative to
    /// the view's start.
    #[must_use]
    pub fn find(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == byte)
    }

    /// Returns the viewed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.parent
            .as_bytes()
            .get(self.offset..self.offset + self.len)
            .unwrap_or_default()
    }

    /// Returns the viewed text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.parent
            .get(self.offset..self.offset + self.len)
            .unwrap_or_default()
    }

    /// Copies the viewed text into an owned string.
    #[must_use]
    pub fn to_owned_string(&self) -> String {
        self.as_str().to_string()
    }

    fn check_boundary(parent: &str, index: usize) -> Result<(), ViewError> {
        if parent.is_char_boundary(index) {
            Ok(())
        } else {
            Err(ViewError::NotCharBoundary { index })
        }
    }
}

impl fmt::Display for BoundedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for BoundedView<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
