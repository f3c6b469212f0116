//! Core hand engine — card parsing, hand predicates, and category ordering.
//!
//! ## Module overview
//!
//! | Module   | Purpose |
//! |----------|---------|
//! | `models` | Card primitives: `Rank`, `Suit`, `Card` and their notation |
//! | `errors` | `ParseError` for bad card or hand notation |
//! | `kind`   | `Kind` hand categories and their explicit strength table |
//! | `hand`   | `Hand` with its predicates, `kind()` and `compare()` |
//! | `report` | Serializable `HandReport` snapshot of every predicate |

pub mod errors;
pub mod hand;
pub mod kind;
pub mod models;
pub mod report;

pub use errors::{ParseError, Result};
pub use hand::{Hand, HAND_SIZE};
pub use kind::Kind;
pub use models::{Card, Rank, Suit};
pub use report::HandReport;
