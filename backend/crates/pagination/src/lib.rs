//! Page-number pagination primitives for backend list endpoints.
//!
//! Endpoints slice a deterministically ordered collection into fixed-size,
//! 1-indexed windows. Slicing never fails: a window that starts beyond the
//! end of the collection is simply empty. Whether an empty window is an
//! error is a caller policy, captured once by [`Page::is_beyond_end`] so every
//! endpoint applies it the same way.
//!
//! # Examples
//! ```
//! use pagination::{Page, PageNumber, PageRequest, PageSize};
//!
//! let items: Vec<u32> = (1..=19).collect();
//! let request = PageRequest::new(PageNumber::new(2)?, PageSize::new(10)?);
//! let page = Page::from_slice(&items, request);
//! assert_eq!(page.items().len(), 9);
//! assert_eq!(page.total(), 19);
//! # Ok::<(), pagination::PageError>(())
//! ```

mod page;
mod request;

pub use page::{Page, paginate};
pub use request::{DEFAULT_PAGE_SIZE, PageError, PageNumber, PageRequest, PageSize};
