use thiserror::Error;

/// Top-level error type for floor plan parsing.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A segment on the given line could not be parsed.
    #[error("[line {line}] [segment: '{content}'] error parsing segment: {source}")]
    Segment {
        line: usize,
        content: String,
        #[source]
        source: ContentError,
    },

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading the text inside one segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("room title did not close. It starts with '{title}'")]
    MalformedTitle { title: String },

    #[error("strange character encountered: {symbol} (offset {offset})")]
    UnknownSymbol { symbol: char, offset: usize },
}

/// Errors related to building an [`Alphabet`](crate::alphabet::Alphabet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("symbol '{symbol}' cannot be used: {reason}")]
    Conflict { symbol: char, reason: &'static str },
}

/// Convenience type alias for results using [`PlanError`].
pub type Result<T> = std::result::Result<T, PlanError>;
