//! Swiss tournament director
//!
//! This crate provides:
//! - Registering players and reporting results against a tournament store
//! - Pairing the next round without rematches
//! - Standings and round reports, as text or JSON
//! - Seeded simulations of whole tournaments
//!
//! # Usage
//!
//! ```bash
//! # Register players and pair the first round
//! cargo run -p tournament -- register "Twilight Sparkle" "Fluttershy" "Applejack" "Rarity"
//! cargo run -p tournament -- pairings
//!
//! # Record a result and look at the standings
//! cargo run -p tournament -- report 1 2
//! cargo run -p tournament -- standings
//!
//! # Play out a 16-player tournament in memory
//! cargo run -p tournament -- simulate --players 16 --seed 7
//! ```

mod config;
mod director;
mod error;
mod report;
mod simulate;

pub use config::*;
pub use director::*;
pub use error::*;
pub use report::*;
pub use simulate::*;
