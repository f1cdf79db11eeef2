//! Small, hand-checkable crossword instances.

use crate::puzzle::Puzzle;

/// A ring of four length-4 slots, each crossing two others at its endpoints.
///
/// The vocabulary contains one fill ("sail"/"star"/"ruin"/"lean") plus
/// distractors of assorted lengths.
pub fn ring_puzzle() -> Puzzle {
    Puzzle::parse(
        &[
            "____#", //
            "_##_#", //
            "_##_#", //
            "____#", //
            "#####", //
        ],
        [
            "sail", "star", "ruin", "lean", "rain", "exam", "stub", "nose", "tea", "ox",
        ]
        .map(String::from),
    )
    .unwrap()
}

/// A plus-shaped grid: one across slot crossing one down slot at its middle.
pub fn plus_puzzle(words: impl IntoIterator<Item = String>) -> Puzzle {
    Puzzle::parse(&["___", "#_#", "#_#"], words).unwrap()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{engine::SolverEngine, stats::render_stats_table};

    #[test]
    fn the_ring_puzzle_is_fillable() {
        let _ = tracing_subscriber::fmt::try_init();

        let puzzle = ring_puzzle();
        assert_eq!(puzzle.variables().len(), 4);

        let (solution, stats) = SolverEngine::new().solve_with_stats(&puzzle);
        let solution = solution.expect("the ring puzzle has a known fill");

        assert!(solution.is_complete(&puzzle));
        assert!(solution.is_consistent(&puzzle));

        // Every slot got a distinct word of the right length, agreeing at
        // every crossing.
        let mut seen = HashSet::new();
        for (var, word) in solution.entries() {
            assert_eq!(word.len(), var.length);
            assert!(seen.insert(word.to_string()));
            for neighbor in puzzle.neighbors(var) {
                let (i, j) = puzzle.overlap(var, neighbor).unwrap();
                let other = solution.word_for(neighbor).unwrap();
                assert_eq!(word.as_bytes()[i], other.as_bytes()[j]);
            }
        }

        // The stats from a real solve render without issue.
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Nodes Visited"));
    }

    #[test]
    fn search_expands_at_least_one_node_per_slot() {
        let puzzle = ring_puzzle();
        let (_, stats) = SolverEngine::new().solve_with_stats(&puzzle);
        assert!(stats.nodes_visited >= puzzle.variables().len() as u64);
    }

    #[cfg(test)]
    mod prop_tests {
        use proptest::prelude::*;

        use super::*;
        use crate::puzzle::{Direction, Variable};

        fn vocab_strategy() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::vec("[a-d]{3}", 1..10)
        }

        proptest! {
            /// The solver agrees with brute force on the two-slot cross: it
            /// finds a fill exactly when one exists, and any fill it returns
            /// is valid.
            #[test]
            fn solver_matches_brute_force_on_the_plus_grid(words in vocab_strategy()) {
                let puzzle = plus_puzzle(words.iter().cloned());
                let across = Variable::new(0, 0, 3, Direction::Across);
                let down = Variable::new(0, 1, 3, Direction::Down);

                let fill_exists = words.iter().any(|a| {
                    words
                        .iter()
                        .any(|d| a != d && a.as_bytes()[1] == d.as_bytes()[0])
                });

                let solution = SolverEngine::new().solve(&puzzle);
                prop_assert_eq!(solution.is_some(), fill_exists);

                if let Some(solution) = solution {
                    let a = solution.word_for(&across).unwrap();
                    let d = solution.word_for(&down).unwrap();
                    prop_assert_ne!(a, d);
                    prop_assert_eq!(a.as_bytes()[1], d.as_bytes()[0]);
                    prop_assert!(words.iter().any(|w| w == a));
                    prop_assert!(words.iter().any(|w| w == d));
                }
            }
        }
    }
}
