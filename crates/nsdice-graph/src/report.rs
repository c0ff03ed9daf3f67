//! Edge listing for a relation graph.
//!
//! Beaters are visited in canonical die order, and each beater's victims in
//! the same order, so the listing is stable for a given graph.

use std::fmt;

use nsdice_core::Die;
use serde::Serialize;

use crate::relation::RelationGraph;

/// One `beater > beaten` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'a> {
    pub beater: &'a Die,
    pub beaten: &'a Die,
}

impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.beater, self.beaten)
    }
}

/// Every edge of `graph` in report order.
pub fn edges(graph: &RelationGraph) -> impl Iterator<Item = Edge<'_>> {
    graph.iter().flat_map(|(beater, relations)| {
        relations.wins.iter().map(move |beaten| Edge { beater, beaten })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::reduce;
    use nsdice_core::DiceConfig;

    fn die(s: &str) -> Die {
        s.parse().expect("die notation")
    }

    fn reduced_lines(min: u32, max: u32, sides: usize) -> Vec<String> {
        let dice: Vec<Die> = DiceConfig::new(min, max, sides)
            .expect("valid config")
            .dice()
            .collect();
        let (mut graph, _) = RelationGraph::build(&dice);
        reduce(&mut graph);
        edges(&graph).map(|e| e.to_string()).collect()
    }

    #[test]
    fn edge_display_uses_die_names() {
        let a = die("4400");
        let b = die("3311");
        assert_eq!(Edge { beater: &a, beaten: &b }.to_string(), "4400 > 3311");
    }

    #[test]
    fn transitive_family_reports_nothing() {
        assert!(reduced_lines(0, 1, 2).is_empty());
    }

    #[test]
    fn small_family_report_is_ordered() {
        assert_eq!(
            reduced_lines(0, 3, 4),
            [
                "2211 > 3111",
                "2220 > 2211",
                "2220 > 3111",
                "3111 > 3300",
                "3300 > 2220",
            ]
        );
    }

    #[test]
    fn default_family_report_bounds() {
        let lines = reduced_lines(0, 4, 4);
        assert_eq!(lines.len(), 624);
        assert_eq!(lines.first().map(String::as_str), Some("2111 > 4110"));
        assert_eq!(lines.last().map(String::as_str), Some("4411 > 4410"));
        assert!(lines.contains(&"2210 > 4110".to_string()));
        assert!(lines.contains(&"4110 > 3300".to_string()));
        assert!(lines.contains(&"3300 > 2210".to_string()));
    }

    #[test]
    fn edge_serializes_face_arrays() {
        let a = die("10,2");
        let b = die("3");
        let json = serde_json::to_string(&Edge { beater: &a, beaten: &b }).expect("json");
        assert_eq!(json, r#"{"beater":[10,2],"beaten":[3]}"#);
    }
}
