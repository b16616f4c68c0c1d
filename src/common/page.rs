//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a page in a reference string.
///
/// Pages carry no lifecycle of their own: they exist only as elements of a
/// [`ReferenceStream`](crate::common::ReferenceStream) and as the contents
/// of frames. Any integer is a valid page, negative values included.
///
/// # Example
/// ```
/// use pagesim::Page;
///
/// let page = Page::new(42);
/// assert_eq!(page.0, 42);
/// assert_eq!(page.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(pub i64);

impl Page {
    /// Create a new Page.
    #[inline]
    pub fn new(id: i64) -> Self {
        Page(id)
    }
}

impl From<i64> for Page {
    fn from(id: i64) -> Self {
        Page(id)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
