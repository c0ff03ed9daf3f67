//! Intransitive structure of a relation graph.
//!
//! # Edge Direction
//!
//! Same as the relation itself: `A → B` means "A beats B". A cycle
//! `A → B → C → A` is a set of intransitive dice.
//!
//! Strongly connected components come from petgraph's Tarjan SCC over a
//! [`DiGraph`] copy of the relation. Triangles are read straight off the
//! win-sets.

#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeMap;

use nsdice_core::Die;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::relation::RelationGraph;

/// A petgraph copy of a [`RelationGraph`].
///
/// Nodes are added in canonical die order, so node indices follow that
/// order too.
#[derive(Debug)]
pub struct RelationDigraph {
    pub graph: DiGraph<Die, ()>,
    pub node_map: BTreeMap<Die, NodeIndex>,
}

impl RelationDigraph {
    #[must_use]
    pub fn from_relation(relation: &RelationGraph) -> Self {
        let mut graph = DiGraph::<Die, ()>::with_capacity(relation.len(), relation.edge_count());
        let mut node_map = BTreeMap::new();

        for die in relation.dice() {
            let idx = graph.add_node(die.clone());
            node_map.insert(die.clone(), idx);
        }

        for (beater, relations) in relation.iter() {
            let Some(&from) = node_map.get(beater) else {
                continue;
            };
            for beaten in &relations.wins {
                if let Some(&to) = node_map.get(beaten) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self { graph, node_map }
    }

    #[must_use]
    pub fn node_index(&self, die: &Die) -> Option<NodeIndex> {
        self.node_map.get(die).copied()
    }
}

/// A three-die cycle `first > second > third > first`.
///
/// `first` is the smallest of the three in canonical order, so each cycle has
/// exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Triangle {
    pub first: Die,
    pub second: Die,
    pub third: Die,
}

impl std::fmt::Display for Triangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} > {} > {} > {}",
            self.first, self.second, self.third, self.first
        )
    }
}

/// Strongly connected components with more than one die.
///
/// Each component is sorted; the list is sorted by its first member.
/// Comparisons are irreflexive, so there are no self-loops to report.
#[must_use]
pub fn find_components(relation: &RelationGraph) -> Vec<Vec<Die>> {
    let digraph = RelationDigraph::from_relation(relation);

    let mut components: Vec<Vec<Die>> = tarjan_scc(&digraph.graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut dice: Vec<Die> = component
                .into_iter()
                .filter_map(|idx| digraph.graph.node_weight(idx).cloned())
                .collect();
            dice.sort_unstable();
            dice
        })
        .collect();

    components.sort_unstable();
    components
}

/// Every intransitive triangle, in canonical order.
#[must_use]
pub fn find_triangles(relation: &RelationGraph) -> Vec<Triangle> {
    let mut triangles = Vec::new();

    for (first, relations) in relation.iter() {
        for second in relations.wins.iter().filter(|d| *d > first) {
            let Some(second_relations) = relation.get(second) else {
                continue;
            };
            for third in second_relations.wins.iter().filter(|d| *d > first) {
                if relation.has_edge(third, first) {
                    triangles.push(Triangle {
                        first: first.clone(),
                        second: second.clone(),
                        third: third.clone(),
                    });
                }
            }
        }
    }

    triangles
}
