use thiserror::Error;

/// Error produced when parsing a single move token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Empty move token
    #[error("empty move")]
    Empty,
    /// Move token is longer than a family letter and a modifier
    #[error("move is too long")]
    TooLong,
    /// No move family uses this letter
    #[error("unknown move family {0:?}")]
    UnknownFamily(char),
    /// Modifier is not `'` or `2`
    #[error("bad move modifier {0:?}")]
    BadModifier(char),
}

/// Error produced when parsing a whitespace-separated sequence of moves.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("error in move {token:?} at index {index}: {source}")]
pub struct ParseSequenceError {
    /// Index of the offending move within the sequence.
    pub index: usize,
    /// Offending move token.
    pub token: String,
    /// Underlying parse error.
    pub source: ParseMoveError,
}
