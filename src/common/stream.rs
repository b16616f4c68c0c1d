//! Reference stream: the ordered input of every simulation run.

use std::collections::HashSet;
use std::ops::Index;

use serde::Serialize;

use crate::common::{Error, Page, Result};

/// An ordered, non-empty sequence of page references.
///
/// The stream is immutable once built. Policies only read it; the Optimal
/// policy reads ahead of the current position.
///
/// # Example
/// ```
/// use pagesim::{Page, ReferenceStream};
///
/// let stream = ReferenceStream::from_ids([0, 1, 2, 0]).unwrap();
/// assert_eq!(stream.len(), 4);
/// assert_eq!(stream[3], Page::new(0));
/// assert_eq!(stream.distinct_pages(), 3);
///
/// assert!(ReferenceStream::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceStream {
    pages: Vec<Page>,
}

impl ReferenceStream {
    /// Build a stream from pages.
    ///
    /// # Errors
    /// - `Error::EmptyStream` if `pages` is empty
    pub fn new(pages: Vec<Page>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyStream);
        }
        Ok(Self { pages })
    }

    /// Build a stream from raw integer identifiers.
    ///
    /// # Errors
    /// - `Error::EmptyStream` if no identifiers are given
    pub fn from_ids<I>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        Self::new(ids.into_iter().map(Page::new).collect())
    }

    /// Number of references. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The references as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Page] {
        &self.pages
    }

    /// Iterate over the references in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// References strictly after `index`.
    pub fn after(&self, index: usize) -> &[Page] {
        self.pages.get(index + 1..).unwrap_or(&[])
    }

    /// Number of distinct pages in the stream.
    pub fn distinct_pages(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }
}

impl Index<usize> for ReferenceStream {
    type Output = Page;

    fn index(&self, index: usize) -> &Page {
        &self.pages[index]
    }
}

impl<'a> IntoIterator for &'a ReferenceStream {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl TryFrom<Vec<Page>> for ReferenceStream {
    type Error = Error;

    fn try_from(pages: Vec<Page>) -> Result<Self> {
        Self::new(pages)
    }
}
