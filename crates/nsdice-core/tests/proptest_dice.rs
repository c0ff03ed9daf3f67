use std::collections::HashSet;

use nsdice_core::{Outcome, beats, compare, tally};
use proptest::prelude::*;

use generators::*;

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn generator_count_matches_stars_and_bars(cfg in arb_config()) {
        let expected = cfg.expected_die_count().expect("small family");
        prop_assert_eq!(cfg.dice().count() as u64, expected);
    }

    #[test]
    fn generated_dice_are_canonical_and_in_range(cfg in arb_config()) {
        for die in cfg.dice() {
            prop_assert_eq!(die.sides(), cfg.sides);
            prop_assert!(die.faces().windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(die
                .faces()
                .iter()
                .all(|&f| f >= cfg.min_value && f <= cfg.max_value));
        }
    }

    #[test]
    fn generated_dice_are_unique_and_sorted(cfg in arb_config()) {
        let dice: Vec<_> = cfg.dice().collect();
        let unique: HashSet<_> = dice.iter().collect();
        prop_assert_eq!(unique.len(), dice.len());
        prop_assert!(dice.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn generator_restarts_identically(cfg in arb_config()) {
        let first: Vec<_> = cfg.dice().collect();
        let second: Vec<_> = cfg.dice().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn comparison_is_anti_symmetric((a, b) in arb_die_pair()) {
        prop_assert!(!(beats(&a, &b) && beats(&b, &a)));
    }

    #[test]
    fn comparison_is_irreflexive((a, _b) in arb_die_pair()) {
        prop_assert!(!beats(&a, &a));
        prop_assert_eq!(compare(&a, &a), Outcome::Tie);
    }

    #[test]
    fn tally_covers_every_pairing((a, b) in arb_die_pair()) {
        let t = tally(&a, &b);
        prop_assert_eq!(t.total(), (a.sides() * b.sides()) as u64);
        prop_assert_eq!(t.flipped(), tally(&b, &a));
    }

    #[test]
    fn compare_agrees_with_beats((a, b) in arb_die_pair()) {
        let expected = match (beats(&a, &b), beats(&b, &a)) {
            (true, false) => Outcome::FirstWins,
            (false, true) => Outcome::SecondWins,
            _ => Outcome::Tie,
        };
        prop_assert_eq!(compare(&a, &b), expected);
    }

    #[test]
    fn face_order_is_irrelevant(faces in prop::collection::vec(0u32..10, 1..8)) {
        let mut reversed = faces.clone();
        reversed.reverse();
        prop_assert_eq!(
            nsdice_core::Die::from_faces(faces),
            nsdice_core::Die::from_faces(reversed)
        );
    }
}

#[test]
fn unit_range_families_contain_exactly_one_die() {
    for sides in 1..6 {
        let cfg = nsdice_core::DiceConfig::new(3, 3, sides).expect("valid");
        let dice: Vec<_> = cfg.dice().collect();
        assert_eq!(dice.len(), 1);
        assert!(dice[0].faces().iter().all(|&f| f == 3));
    }
}
