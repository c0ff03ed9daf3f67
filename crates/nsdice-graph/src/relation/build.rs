//! Graph construction from a die family.
//!
//! # Edge Direction
//!
//! An edge `A → B` means "A beats B": rolled against each other, `A` shows
//! the higher face in strictly more pairings than `B` does.
//!
//! ## Node Set
//!
//! Nodes are created lazily the first time an edge touches them. A die that
//! ties every die in its family never gets a node, so it never shows up in a
//! report.
//!
//! ## Content Hash
//!
//! [`RelationGraph::content_hash`] is a BLAKE3 hash of the edge list in
//! canonical order. Two graphs with the same edges hash the same, whatever
//! order they were built in.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeMap, BTreeSet};

use nsdice_core::{Die, beats};
use serde::Serialize;
use tracing::instrument;

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

/// The neighbours of one die.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relations {
    /// Dice this die beats.
    pub wins: BTreeSet<Die>,
    /// Dice that beat this die.
    pub losses: BTreeSet<Die>,
}

impl Relations {
    /// A die is trivial when it only wins, only loses, or does neither.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.wins.is_empty() || self.losses.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RelationGraph
// ---------------------------------------------------------------------------

/// Counters from [`RelationGraph::build`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    /// Dice in the family.
    pub dice: usize,
    /// Directional comparisons performed (`dice²`).
    pub comparisons: u64,
    /// Decisive edges recorded.
    pub edges: usize,
}

/// Directed win/lose relation keyed by die, iterated in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationGraph {
    nodes: BTreeMap<Die, Relations>,
}

impl RelationGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare every ordered pair drawn from `dice` (self-pairs included)
    /// and record each decisive result.
    #[must_use]
    #[instrument(skip(dice), fields(dice = dice.len()))]
    pub fn build(dice: &[Die]) -> (Self, BuildSummary) {
        let mut graph = Self::new();
        let mut comparisons = 0_u64;

        for this in dice {
            for opponent in dice {
                comparisons += 1;
                if beats(this, opponent) {
                    graph.record_win(this, opponent);
                }
            }
        }

        let summary = BuildSummary {
            dice: dice.len(),
            comparisons,
            edges: graph.edge_count(),
        };
        (graph, summary)
    }

    /// The relations of `die`, inserting an empty entry on first touch.
    pub fn entry(&mut self, die: &Die) -> &mut Relations {
        self.nodes.entry(die.clone()).or_default()
    }

    /// Record `beater → beaten` on both endpoints.
    pub fn record_win(&mut self, beater: &Die, beaten: &Die) {
        self.entry(beater).wins.insert(beaten.clone());
        self.entry(beaten).losses.insert(beater.clone());
    }

    /// The relations of `die`, if it has a node. Never inserts.
    #[must_use]
    pub fn get(&self, die: &Die) -> Option<&Relations> {
        self.nodes.get(die)
    }

    #[must_use]
    pub fn contains(&self, die: &Die) -> bool {
        self.nodes.contains_key(die)
    }

    /// Returns `true` if the edge `beater → beaten` is recorded.
    #[must_use]
    pub fn has_edge(&self, beater: &Die, beaten: &Die) -> bool {
        self.get(beater).is_some_and(|r| r.wins.contains(beaten))
    }

    /// Number of dice with a node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of recorded edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|r| r.wins.len()).sum()
    }

    /// Dice with a node, in canonical order.
    pub fn dice(&self) -> impl Iterator<Item = &Die> {
        self.nodes.keys()
    }

    /// `(die, relations)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&Die, &Relations)> {
        self.nodes.iter()
    }

    /// Whether `die` has a node that only wins or only loses. Dice without a
    /// node are not trivial; they are simply absent.
    #[must_use]
    pub fn is_trivial(&self, die: &Die) -> bool {
        self.get(die).is_some_and(Relations::is_trivial)
    }

    /// Every edge in report order.
    pub fn edges(&self) -> impl Iterator<Item = crate::report::Edge<'_>> {
        crate::report::edges(self)
    }

    /// Dice whose node is currently trivial (see [`Relations::is_trivial`]).
    #[must_use]
    pub fn trivial_dice(&self) -> BTreeSet<Die> {
        self.nodes
            .iter()
            .filter(|(_, relations)| relations.is_trivial())
            .map(|(die, _)| die.clone())
            .collect()
    }

    /// Remove every die in `doomed`, then strip references to them from the
    /// win- and lose-sets of the dice that remain.
    pub fn remove_all(&mut self, doomed: &BTreeSet<Die>) {
        if doomed.is_empty() {
            return;
        }
        self.nodes.retain(|die, _| !doomed.contains(die));
        for relations in self.nodes.values_mut() {
            relations.wins.retain(|die| !doomed.contains(die));
            relations.losses.retain(|die| !doomed.contains(die));
        }
    }

    /// Check the symmetric edge invariant and that no set names a missing
    /// node.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.nodes.iter().all(|(die, relations)| {
            relations
                .wins
                .iter()
                .all(|beaten| self.get(beaten).is_some_and(|r| r.losses.contains(die)))
                && relations
                    .losses
                    .iter()
                    .all(|beater| self.get(beater).is_some_and(|r| r.wins.contains(die)))
        })
    }

    /// BLAKE3 hash of the canonical edge list.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (beater, relations) in &self.nodes {
            for beaten in &relations.wins {
                hash_die(&mut hasher, beater);
                hasher.update(b">");
                hash_die(&mut hasher, beaten);
                hasher.update(b"\n");
            }
        }
        format!("blake3:{}", hasher.finalize())
    }
}

fn hash_die(hasher: &mut blake3::Hasher, die: &Die) {
    for face in die.faces() {
        hasher.update(&face.to_le_bytes());
    }
    hasher.update(b"\x00");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
