//! Fixed-point pruning of trivial dice.
//!
//! Each pass snapshots every die that currently only wins, only loses, or has
//! no relations left, then removes the whole batch at once and strips the
//! dangling references. Classification never sees a half-pruned graph, so
//! the order of removal inside a pass does not matter.
//!
//! Passes repeat until one finds nothing to remove. The node count strictly
//! drops on every productive pass, so the loop ends after at most `n` passes.

use std::collections::BTreeSet;

use nsdice_core::Die;
use serde::Serialize;
use tracing::{debug, instrument};

use super::build::RelationGraph;

/// What [`reduce`] removed, pass by pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// Dice removed in each productive pass, in canonical order.
    pub passes: Vec<Vec<Die>>,
}

impl Reduction {
    /// Number of passes that removed at least one die.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes.len()
    }

    /// Total dice removed across all passes.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.passes.iter().map(Vec::len).sum()
    }

    /// Returns `true` when the graph was already at its fixed point.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.passes.is_empty()
    }
}

/// Prune `graph` in place until every remaining die both wins and loses.
#[instrument(skip(graph), fields(nodes = graph.len()))]
pub fn reduce(graph: &mut RelationGraph) -> Reduction {
    let mut reduction = Reduction::default();

    loop {
        let doomed: BTreeSet<Die> = graph.trivial_dice();
        if doomed.is_empty() {
            break;
        }

        graph.remove_all(&doomed);
        debug!(
            pass = reduction.passes.len() + 1,
            removed = doomed.len(),
            remaining = graph.len(),
            "reduction pass"
        );
        reduction.passes.push(doomed.into_iter().collect());
    }

    debug_assert!(graph.is_consistent());
    reduction
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsdice_core::DiceConfig;

    fn die(s: &str) -> Die {
        s.parse().expect("die notation")
    }

    fn built(min: u32, max: u32, sides: usize) -> RelationGraph {
        let dice: Vec<Die> = DiceConfig::new(min, max, sides)
            .expect("valid config")
            .dice()
            .collect();
        RelationGraph::build(&dice).0
    }

    #[test]
    fn empty_graph_is_already_fixed() {
        let mut graph = RelationGraph::new();
        let reduction = reduce(&mut graph);
        assert!(reduction.is_noop());
        assert_eq!(reduction.removed_count(), 0);
    }

    #[test]
    fn transitive_family_empties_completely() {
        let mut graph = built(0, 1, 2);
        let reduction = reduce(&mut graph);

        assert!(graph.is_empty());
        // Pass 1 strips 11 (only wins) and 00 (only loses); 10 is then bare.
        assert_eq!(
            reduction.passes,
            vec![vec![die("00"), die("11")], vec![die("10")]]
        );
        assert_eq!(reduction.removed_count(), 3);
    }

    #[test]
    fn pure_cycle_survives_untouched() {
        let mut graph = RelationGraph::new();
        graph.record_win(&die("2210"), &die("4110"));
        graph.record_win(&die("4110"), &die("3300"));
        graph.record_win(&die("3300"), &die("2210"));
        let before = graph.clone();

        let reduction = reduce(&mut graph);
        assert!(reduction.is_noop());
        assert_eq!(graph, before);
    }

    #[test]
    fn cycle_with_tail_keeps_only_cycle() {
        let mut graph = RelationGraph::new();
        graph.record_win(&die("2210"), &die("4110"));
        graph.record_win(&die("4110"), &die("3300"));
        graph.record_win(&die("3300"), &die("2210"));
        // 4444 beats a cycle member and nothing beats it.
        graph.record_win(&die("4444"), &die("3300"));
        // 0000 loses to a cycle member and beats nothing.
        graph.record_win(&die("2210"), &die("0000"));

        let reduction = reduce(&mut graph);
        assert_eq!(reduction.passes(), 1);
        assert_eq!(graph.len(), 3);
        assert!(!graph.contains(&die("4444")));
        assert!(!graph.contains(&die("0000")));
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_consistent());
    }

    #[test]
    fn small_intransitive_family_core() {
        let mut graph = built(0, 3, 4);
        reduce(&mut graph);

        let names: Vec<String> = graph.dice().map(ToString::to_string).collect();
        assert_eq!(names, ["2211", "2220", "3111", "3300"]);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn default_family_reduces_to_known_core() {
        let mut graph = built(0, 4, 4);
        let reduction = reduce(&mut graph);

        assert_eq!(reduction.passes(), 13);
        assert_eq!(reduction.removed_count(), 70 - 38);
        assert_eq!(graph.len(), 38);
        assert_eq!(graph.edge_count(), 624);
    }

    #[test]
    fn reduce_is_idempotent() {
        let mut graph = built(0, 4, 4);
        reduce(&mut graph);
        let once = graph.clone();

        let second = reduce(&mut graph);
        assert!(second.is_noop());
        assert_eq!(graph, once);
    }

    #[test]
    fn survivors_both_win_and_lose() {
        let mut graph = built(0, 4, 4);
        reduce(&mut graph);
        assert!(graph.iter().all(|(_, r)| !r.wins.is_empty() && !r.losses.is_empty()));
    }
}
