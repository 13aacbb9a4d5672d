use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while parsing a release name.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Segmentation produced no chunks (empty or whitespace-only name).
    #[error("could not parse name: {name:?}")]
    CouldNotParseName {
        /// The name after extension stripping.
        name: String,
    },

    /// A free-text chunk could not be reduced to a title.
    #[error("could not parse chunk {chunk:?}")]
    ParseChunkFailed {
        /// The offending chunk text.
        chunk: String,
        /// The underlying failure.
        #[source]
        source: Box<ParseError>,
    },

    /// A token matched the year pattern but did not convert to an integer.
    #[error("invalid year: {value:?}")]
    InvalidYear {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A token matched an episode or batch pattern but did not convert to an integer.
    #[error("invalid episode: {value:?}")]
    InvalidEpisode {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A token matched a season pattern but did not convert to an integer.
    #[error("invalid season: {value:?}")]
    InvalidSeason {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A token matched the volume pattern but did not convert to an integer.
    #[error("invalid volume: {value:?}")]
    InvalidVolume {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// An alternate keyword table could not be decoded.
    #[error("invalid keyword configuration: {0}")]
    KeywordConfig(#[from] serde_json::Error),
}

impl ParseError {
    /// Wraps `self` as the cause of a failure on `chunk`.
    pub(crate) fn in_chunk(self, chunk: impl Into<String>) -> Self {
        Self::ParseChunkFailed {
            chunk: chunk.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
