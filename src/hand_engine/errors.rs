use thiserror::Error;

/// Errors raised while parsing card and hand notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Rank token is not one of `2`-`9`, `T`/`10`, `J`, `Q`, `K`, `A`.
    #[error("unknown rank symbol: {0:?}")]
    UnknownRank(String),

    /// Suit character is not one of `C`, `D`, `H`, `S`.
    #[error("unknown suit symbol: {0:?}")]
    UnknownSuit(char),

    /// Card token must be two or three characters long.
    #[error("malformed card token: {0:?}")]
    MalformedCard(String),

    #[error("a hand holds exactly 5 cards, got {0}")]
    CardCount(usize),
}

pub type Result<T> = std::result::Result<T, ParseError>;
