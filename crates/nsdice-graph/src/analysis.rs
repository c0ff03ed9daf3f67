//! End-to-end pipeline: generate, build, reduce.

use nsdice_core::timing::timed;
use nsdice_core::{DiceConfig, Die};
use tracing::{info, instrument, warn};

use crate::relation::{BuildSummary, Reduction, RelationGraph, reduce};
use crate::report::{self, Edge};

/// The reduced relation for one dice family, with the counters gathered on
/// the way.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub config: DiceConfig,
    pub build: BuildSummary,
    /// Dice that had at least one decisive result before pruning.
    pub raw_nodes: usize,
    pub reduction: Reduction,
    /// The graph after pruning.
    pub graph: RelationGraph,
}

impl Analysis {
    /// Run the whole pipeline for `config`.
    #[must_use]
    #[instrument(skip_all, fields(min = config.min_value, max = config.max_value, sides = config.sides))]
    pub fn run(config: &DiceConfig) -> Self {
        if config.is_empty_range() {
            warn!("min value exceeds max value; no dice to compare");
        }
        if let Some(expected) = config.expected_die_count() {
            info!(dice = expected, comparisons = ?expected.checked_mul(expected), "enumerating dice");
        }

        let dice: Vec<Die> = timed("generate", || config.dice().collect());
        let (mut graph, build) = timed("build", || RelationGraph::build(&dice));
        let raw_nodes = graph.len();
        let reduction = timed("reduce", || reduce(&mut graph));

        info!(
            dice = build.dice,
            raw_edges = build.edges,
            passes = reduction.passes(),
            remaining = graph.len(),
            edges = graph.edge_count(),
            "reduced relation"
        );

        Self {
            config: *config,
            build,
            raw_nodes,
            reduction,
            graph,
        }
    }

    /// Edges of the reduced graph in report order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        report::edges(&self.graph)
    }
}
