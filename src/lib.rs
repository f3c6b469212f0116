//! # hand_kind
//!
//! Classifies a five-card poker hand into its category (high card through
//! straight flush) and orders hands by that category.
//!
//! ## How it works
//!
//! 1. Parse a hand from compact notation such as `"5C TD AH QS 2D"`: each
//!    token is a rank (`2`-`9`, `T`, `J`, `Q`, `K`, `A`) followed by a suit
//!    (`C`, `D`, `H`, `S`). Cards are sorted by rank on construction.
//! 2. Query the predicates — [`Hand::has_n_kind`], [`Hand::is_straight`],
//!    [`Hand::is_flush`], [`Hand::is_two_pair`] — or go straight to
//!    [`Hand::kind`].
//! 3. Compare two hands with [`Hand::compare`] (or `<`, `==`): only the
//!    category matters, there is no kicker tiebreak.
//!
//! ## Quick start
//!
//! ```rust
//! use hand_kind::{Hand, Kind};
//!
//! let flush: Hand = "2D 3D 5D 4D 6D".parse()?;
//! let boat: Hand = "2S 2D 2H 4D 4C".parse()?;
//!
//! assert_eq!(flush.kind(), Kind::StraightFlush);
//! assert!(boat < flush);
//! # Ok::<(), hand_kind::ParseError>(())
//! ```

pub mod hand_engine;

pub use hand_engine::{Card, Hand, HandReport, Kind, ParseError, Rank, Result, Suit, HAND_SIZE};
