//! Enumeration of every die in a family.
//!
//! # Order
//!
//! Dice come out in ascending lexicographic order of their canonical faces.
//! The first (largest) face steps from `min_value` up to `max_value`; under
//! each prefix the remaining faces are enumerated the same way, capped by the
//! face before them. For `min = 0, max = 1, sides = 2` that is `00, 10, 11`.
//!
//! # Algorithm
//!
//! The generator is an odometer over a non-increasing tuple. To advance, it
//! finds the rightmost position that can still grow (position 0 is capped by
//! `max_value`, position `i` by the face at `i - 1`), increments it, and
//! resets every later face to `min_value`. Since each face is capped by its
//! predecessor, every tuple is canonical as produced and no sort is needed.

use std::iter::FusedIterator;

use crate::die::{Die, Face};

/// Lazy iterator over every die with `sides` faces in `min_value..=max_value`.
///
/// Cloning a generator snapshots its position; build a new one with
/// [`crate::DiceConfig::dice`] to restart from the first die.
#[derive(Debug, Clone)]
pub struct DieGenerator {
    max_value: Face,
    min_value: Face,
    next: Option<Vec<Face>>,
}

impl DieGenerator {
    /// Start an enumeration.
    ///
    /// `sides == 0` yields the single faceless die; callers that need at
    /// least one face validate through [`crate::DiceConfig::new`].
    #[must_use]
    pub fn new(min_value: Face, max_value: Face, sides: usize) -> Self {
        let next = (min_value <= max_value).then(|| vec![min_value; sides]);
        Self {
            max_value,
            min_value,
            next,
        }
    }

    fn cap(&self, faces: &[Face], position: usize) -> Face {
        if position == 0 {
            self.max_value
        } else {
            faces[position - 1]
        }
    }

    fn advance(&self, mut faces: Vec<Face>) -> Option<Vec<Face>> {
        let position = (0..faces.len())
            .rev()
            .find(|&i| faces[i] < self.cap(&faces, i))?;

        faces[position] += 1;
        for face in &mut faces[position + 1..] {
            *face = self.min_value;
        }
        Some(faces)
    }
}

impl Iterator for DieGenerator {
    type Item = Die;

    fn next(&mut self) -> Option<Die> {
        let current = self.next.take()?;
        self.next = self.advance(current.clone());
        Some(Die::from_canonical(current))
    }
}

impl FusedIterator for DieGenerator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(generator: DieGenerator) -> Vec<String> {
        generator.map(|d| d.to_string()).collect()
    }

    #[test]
    fn single_side_yields_each_value() {
        assert_eq!(names(DieGenerator::new(2, 5, 1)), ["2", "3", "4", "5"]);
    }

    #[test]
    fn two_sides_zero_to_one() {
        assert_eq!(names(DieGenerator::new(0, 1, 2)), ["00", "10", "11"]);
    }

    #[test]
    fn three_sides_zero_to_two_in_lexicographic_order() {
        assert_eq!(
            names(DieGenerator::new(0, 2, 3)),
            ["000", "100", "110", "111", "200", "210", "211", "220", "221", "222"]
        );
    }

    #[test]
    fn nonzero_minimum_is_respected_for_every_face() {
        let dice: Vec<Die> = DieGenerator::new(1, 3, 3).collect();
        assert_eq!(dice.len(), 10);
        assert!(dice.iter().all(|d| d.faces().iter().all(|&f| (1..=3).contains(&f))));
        assert_eq!(dice[0].to_string(), "111");
        assert_eq!(dice[9].to_string(), "333");
    }

    #[test]
    fn inverted_range_is_empty() {
        assert_eq!(DieGenerator::new(3, 1, 2).count(), 0);
    }

    #[test]
    fn zero_sides_yields_one_faceless_die() {
        let dice: Vec<Die> = DieGenerator::new(0, 4, 0).collect();
        assert_eq!(dice.len(), 1);
        assert_eq!(dice[0].sides(), 0);
    }

    #[test]
    fn max_face_value_does_not_overflow() {
        let dice: Vec<Die> = DieGenerator::new(Face::MAX - 1, Face::MAX, 2).collect();
        assert_eq!(dice.len(), 3);
        assert_eq!(dice[2].faces(), &[Face::MAX, Face::MAX]);
    }

    #[test]
    fn iterator_is_fused() {
        let mut generator = DieGenerator::new(0, 0, 1);
        assert!(generator.next().is_some());
        assert!(generator.next().is_none());
        assert!(generator.next().is_none());
    }
}
