//! Input boundary - strict parsing of user-supplied text.
//!
//! Everything here runs before the simulation: a malformed token or a
//! non-positive frame count is rejected with a typed error and the core
//! never sees it.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Error, Page, ReferenceStream, Result};

/// Parse a reference string such as `"0,1,2,3,0,1,4"`.
///
/// Tokens are separated by commas or newlines and trimmed; each must be an
/// integer.
///
/// # Errors
/// - `Error::EmptyStream` if the input is blank
/// - `Error::InvalidPage` for the first token that is not an integer
///
/// # Example
/// ```
/// use pagesim::input::parse_reference_string;
///
/// let stream = parse_reference_string("0, 1, 2").unwrap();
/// assert_eq!(stream.len(), 3);
/// assert!(parse_reference_string("0, x").is_err());
/// ```
pub fn parse_reference_string(input: &str) -> Result<ReferenceStream> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::EmptyStream);
    }

    let pages = input
        .split([',', '\n'])
        .enumerate()
        .map(|(position, token)| parse_page(position, token))
        .collect::<Result<Vec<_>>>()?;

    ReferenceStream::new(pages)
}

/// Read and parse a reference string from a file.
///
/// # Errors
/// - `Error::Io` if the file can't be read
/// - anything [`parse_reference_string`] returns
pub fn read_reference_file(path: impl AsRef<Path>) -> Result<ReferenceStream> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let stream = parse_reference_string(&contents)?;
    debug!(path = %path.display(), references = stream.len(), "read reference string");
    Ok(stream)
}

/// Parse a frame count. Must be a positive integer.
///
/// # Errors
/// - `Error::InvalidFrameCount` if the input is not an integer
/// - `Error::NonPositiveFrames` if it is zero or negative
pub fn parse_frame_count(input: &str) -> Result<usize> {
    let token = input.trim();
    let count: i64 = token
        .parse()
        .map_err(|_| Error::InvalidFrameCount(token.to_string()))?;

    if count <= 0 {
        return Err(Error::NonPositiveFrames(count));
    }
    usize::try_from(count).map_err(|_| Error::InvalidFrameCount(token.to_string()))
}

fn parse_page(position: usize, token: &str) -> Result<Page> {
    let token = token.trim();
    token.parse().map(Page::new).map_err(|_| Error::InvalidPage {
        position,
        token: token.to_string(),
    })
}
