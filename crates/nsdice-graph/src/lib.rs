#![forbid(unsafe_code)]
//! nsdice-graph library.
//!
//! Builds the win/lose relation over a dice family, prunes it to the dice
//! that both win and lose, and analyses what is left.
//!
//! # Conventions
//!
//! - **Errors**: the pipeline is total over a validated
//!   [`nsdice_core::DiceConfig`]; nothing here returns `Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod analysis;
pub mod cycles;
pub mod relation;
pub mod report;
pub mod stats;

pub use analysis::Analysis;
pub use cycles::{RelationDigraph, Triangle, find_components, find_triangles};
pub use relation::{BuildSummary, Reduction, RelationGraph, Relations, reduce};
pub use report::{Edge, edges};
pub use stats::GraphStats;
