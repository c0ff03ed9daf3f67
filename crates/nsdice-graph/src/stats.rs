//! Summary statistics for an [`Analysis`].
//!
//! # Statistics Provided
//!
//! - **dice**: size of the family (`C(max - min + sides, sides)`).
//! - **comparisons**: directional comparisons performed (`dice²`).
//! - **raw_nodes / raw_edges**: dice with any decisive result, and decisive
//!   pairs, before pruning. Anti-symmetry keeps `raw_edges ≤ dice² / 2`.
//! - **passes / removed**: productive reduction passes and dice pruned.
//! - **nodes / edges**: the reduced graph.
//! - **density**: `edges / (nodes * (nodes - 1))` of the reduced graph; 0.0
//!   for fewer than two nodes.
//! - **components / largest_component**: strongly connected components with
//!   more than one die, and the size of the biggest.
//! - **triangles**: intransitive three-die cycles.
//! - **content_hash**: BLAKE3 of the reduced edge list.

use nsdice_core::DiceConfig;
use serde::Serialize;

use crate::analysis::Analysis;
use crate::cycles::{find_components, find_triangles};

/// Summary statistics for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub config: DiceConfig,
    pub dice: usize,
    pub comparisons: u64,
    pub raw_nodes: usize,
    pub raw_edges: usize,
    pub passes: usize,
    pub removed: usize,
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
    pub components: usize,
    pub largest_component: usize,
    pub triangles: usize,
    pub content_hash: String,
}

impl GraphStats {
    /// Compute statistics from a finished [`Analysis`].
    #[must_use]
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let nodes = analysis.graph.len();
        let edges = analysis.graph.edge_count();
        let components = find_components(&analysis.graph);

        Self {
            config: analysis.config,
            dice: analysis.build.dice,
            comparisons: analysis.build.comparisons,
            raw_nodes: analysis.raw_nodes,
            raw_edges: analysis.build.edges,
            passes: analysis.reduction.passes(),
            removed: analysis.reduction.removed_count(),
            nodes,
            edges,
            density: compute_density(nodes, edges),
            components: components.len(),
            largest_component: components.iter().map(Vec::len).max().unwrap_or(0),
            triangles: find_triangles(&analysis.graph).len(),
            content_hash: analysis.graph.content_hash(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(nodes: usize, edges: usize) -> f64 {
    if nodes < 2 {
        return 0.0;
    }
    edges as f64 / (nodes as f64 * (nodes - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_edge_cases() {
        assert!(compute_density(0, 0).abs() < f64::EPSILON);
        assert!(compute_density(1, 0).abs() < f64::EPSILON);
        assert!((compute_density(2, 2) - 1.0).abs() < f64::EPSILON);
        assert!((compute_density(3, 3) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn transitive_family_stats() {
        let analysis = Analysis::run(&DiceConfig::new(0, 1, 2).expect("valid"));
        let stats = GraphStats::from_analysis(&analysis);

        assert_eq!(stats.dice, 3);
        assert_eq!(stats.comparisons, 9);
        assert_eq!(stats.raw_edges, 3);
        assert_eq!(stats.removed, 3);
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.components, 0);
        assert_eq!(stats.largest_component, 0);
        assert_eq!(stats.triangles, 0);
    }

    #[test]
    fn default_family_stats() {
        let analysis = Analysis::run(&DiceConfig::default());
        let stats = GraphStats::from_analysis(&analysis);

        assert_eq!(stats.dice, 70);
        assert_eq!(stats.comparisons, 4_900);
        assert_eq!(stats.raw_nodes, 70);
        assert_eq!(stats.raw_edges, 2_298);
        assert!(stats.raw_edges as u64 <= stats.comparisons / 2);
        assert_eq!(stats.passes, 13);
        assert_eq!(stats.removed, 32);
        assert_eq!(stats.nodes, 38);
        assert_eq!(stats.edges, 624);
        assert_eq!(stats.components, 1);
        assert_eq!(stats.largest_component, 38);
        assert_eq!(stats.triangles, 49);
        assert!(stats.density > 0.0 && stats.density < 1.0);
    }

    #[test]
    fn stats_are_deterministic() {
        let cfg = DiceConfig::new(0, 3, 4).expect("valid");
        let a = GraphStats::from_analysis(&Analysis::run(&cfg));
        let b = GraphStats::from_analysis(&Analysis::run(&cfg));
        assert_eq!(a, b);
    }
}
