//! Page envelopes produced from ordered collections.

use crate::PageRequest;

/// Slice an ordered collection into the requested page.
///
/// `items` must already be in a deterministic order; otherwise page
/// boundaries are not reproducible between calls. Out-of-range pages yield an
/// empty vector rather than an error.
///
/// # Examples
/// ```
/// use pagination::{PageNumber, PageRequest, PageSize, paginate};
///
/// let items: Vec<u32> = (1..=19).collect();
/// let size = PageSize::new(10)?;
/// assert_eq!(paginate(&items, PageRequest::first(size)), (1..=10).collect::<Vec<_>>());
/// let third = PageRequest::new(PageNumber::new(3)?, size);
/// assert!(paginate(&items, third).is_empty());
/// # Ok::<(), pagination::PageError>(())
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Vec<T> {
    request.slice(items).to_vec()
}

/// One page of items together with the size of the full collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    total: usize,
    request: PageRequest,
}

impl<T: Clone> Page<T> {
    /// Build a page from the full ordered collection.
    #[must_use]
    pub fn from_slice(items: &[T], request: PageRequest) -> Self {
        Self {
            items: paginate(items, request),
            total: items.len(),
            request,
        }
    }
}

impl<T> Page<T> {
    /// Items on this page, in collection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the whole collection.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether a page other than the first came back empty.
    ///
    /// An empty first page describes an empty collection and is a valid
    /// result; an empty later page means the caller asked past the end.
    #[must_use]
    pub fn is_beyond_end(&self) -> bool {
        self.items.is_empty() && !self.request.number().is_first()
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page slicing.

    use super::*;
    use crate::{PageNumber, PageSize};
    use rstest::{fixture, rstest};

    #[fixture]
    fn nineteen() -> Vec<u32> {
        (1..=19).collect()
    }

    fn request(number: usize) -> PageRequest {
        PageRequest::new(
            PageNumber::new(number).expect("valid page"),
            PageSize::new(10).expect("valid size"),
        )
    }

    #[rstest]
    fn first_page_holds_first_ten_in_order(nineteen: Vec<u32>) {
        assert_eq!(paginate(&nineteen, request(1)), (1..=10).collect::<Vec<_>>());
    }

    #[rstest]
    fn second_page_holds_remaining_nine(nineteen: Vec<u32>) {
        assert_eq!(paginate(&nineteen, request(2)), (11..=19).collect::<Vec<_>>());
    }

    #[rstest]
    fn third_page_is_empty(nineteen: Vec<u32>) {
        assert!(paginate(&nineteen, request(3)).is_empty());
    }

    #[rstest]
    #[case(1, false)]
    #[case(2, false)]
    #[case(3, true)]
    fn beyond_end_only_for_empty_later_pages(
        nineteen: Vec<u32>,
        #[case] number: usize,
        #[case] expected: bool,
    ) {
        let page = Page::from_slice(&nineteen, request(number));
        assert_eq!(page.total(), 19);
        assert_eq!(page.is_beyond_end(), expected);
    }

    #[rstest]
    fn empty_first_page_is_not_beyond_end() {
        let page = Page::<u32>::from_slice(&[], request(1));
        assert!(page.items().is_empty());
        assert!(!page.is_beyond_end());
    }
}
