//! Header decoding error types

use thiserror::Error;

pub type HeaderResult<T> = Result<T, HeaderError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The supplied buffer does not match the size the version's layout
    /// requires. The report is aborted, never emitted partially.
    #[error("boot header v{version} is {expected} bytes, got {actual}")]
    TruncatedInput {
        version: u32,
        expected: usize,
        actual: usize,
    },

    /// Version selector outside the supported range, rejected before any
    /// parse attempt.
    #[error("invalid boot header version {0}: 0 <= header_version <= 2")]
    InvalidVersion(u32),
}
