//! Tournament storage
//!
//! Players, match results and byes live in SQLite. Standings are derived
//! through SQL views; the rematch and self-match rules are checked in the
//! same transaction as the write, before anything is inserted.

mod error;
mod sqlite;
mod store;

pub use error::*;
pub use sqlite::*;
pub use store::*;
