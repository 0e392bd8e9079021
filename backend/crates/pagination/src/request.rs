//! Validated page coordinates.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of items per page used when no size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Errors raised when constructing page coordinates from raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    /// Page numbers are 1-indexed.
    #[error("page number must be at least 1")]
    ZeroPageNumber,
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Validate a raw page number.
    ///
    /// # Errors
    /// Returns [`PageError::ZeroPageNumber`] when `value` is zero.
    pub fn new(value: usize) -> Result<Self, PageError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(PageError::ZeroPageNumber)
    }

    /// Parse a query-string value, falling back to the first page.
    ///
    /// Absent, non-numeric, zero and negative inputs all resolve to
    /// [`PageNumber::FIRST`].
    ///
    /// # Examples
    /// ```
    /// use pagination::PageNumber;
    ///
    /// assert_eq!(PageNumber::parse_lenient(Some("3")).get(), 3);
    /// assert_eq!(PageNumber::parse_lenient(Some("abc")), PageNumber::FIRST);
    /// assert_eq!(PageNumber::parse_lenient(None), PageNumber::FIRST);
    /// ```
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .and_then(|value| Self::new(value).ok())
            .unwrap_or(Self::FIRST)
    }

    /// Raw page number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Whether this is page 1.
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0.get() == 1
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = PageError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for usize {
    fn from(value: PageNumber) -> Self {
        value.get()
    }
}

/// Maximum number of items on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Validate a raw page size.
    ///
    /// # Errors
    /// Returns [`PageError::ZeroPageSize`] when `value` is zero.
    pub fn new(value: usize) -> Result<Self, PageError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(PageError::ZeroPageSize)
    }

    /// Raw page size.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_PAGE_SIZE) {
            Some(size) => Self(size),
            None => Self(NonZeroUsize::MIN),
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// A page number paired with the page size it is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageRequest {
    number: PageNumber,
    size: PageSize,
}

impl PageRequest {
    /// Combine a page number and size.
    #[must_use]
    pub const fn new(number: PageNumber, size: PageSize) -> Self {
        Self { number, size }
    }

    /// Request the first page of the given size.
    #[must_use]
    pub const fn first(size: PageSize) -> Self {
        Self::new(PageNumber::FIRST, size)
    }

    /// Requested page number.
    #[must_use]
    pub const fn number(&self) -> PageNumber {
        self.number
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> PageSize {
        self.size
    }

    /// Index range `[(page - 1) * size, page * size)`.
    ///
    /// Saturates instead of overflowing for absurd page numbers so the
    /// resulting window is merely empty.
    #[must_use]
    pub fn window(&self) -> Range<usize> {
        let size = self.size.get();
        let start = (self.number.get() - 1).saturating_mul(size);
        start..start.saturating_add(size)
    }

    /// Borrow the part of `items` covered by this request.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.window();
        let len = items.len();
        items.get(start.min(len)..end.min(len)).unwrap_or_default()
    }
}
