//! The win/lose relation between dice.
//!
//! # Overview
//!
//! [`RelationGraph`] maps each die to the dice it beats and the dice that
//! beat it. It is built once from the full cross product of a die family,
//! then pruned in place down to its intransitive core.
//!
//! ## Pipeline
//!
//! ```text
//! DiceConfig::dice()
//!        ↓  collect
//! Vec<Die>
//!        ↓  build::RelationGraph::build()     (D² comparisons)
//! RelationGraph (every decisive pair)
//!        ↓  reduce::reduce()                  (fixed-point pruning)
//! RelationGraph (only dice that both win and lose)
//!        ↓  report::edges()
//! "2210 > 4110", ...
//! ```
//!
//! ## Invariant
//!
//! For every recorded edge `A → B`, `B` is in `A`'s win-set and `A` is in
//! `B`'s lose-set. Every mutation goes through [`RelationGraph::record_win`]
//! or [`RelationGraph::remove_all`], which keep both sides in step.

pub mod build;
pub mod reduce;

pub use build::{BuildSummary, RelationGraph, Relations};
pub use reduce::{Reduction, reduce};
