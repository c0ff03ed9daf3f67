#![forbid(unsafe_code)]
//! nsdice-core library.
//!
//! Dice, their enumeration, and the pairwise "which die wins more often"
//! comparison that every later stage builds on.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums with stable [`error::ErrorCode`]s.
//! - **Logging**: `tracing` macros; enumeration start is logged at `debug!`.

pub mod compare;
pub mod config;
pub mod die;
pub mod error;
pub mod generate;
pub mod timing;

pub use compare::{FaceTally, Matchup, Outcome, beats, compare, tally};
pub use config::DiceConfig;
pub use die::{Die, Face};
pub use error::{CompareError, ConfigError, DieParseError, ErrorCode};
pub use generate::DieGenerator;
