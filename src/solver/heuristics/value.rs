//! Strategies for ordering the candidate words tried for a variable.

use crate::{
    puzzle::{Puzzle, Variable},
    solver::domains::Domains,
};

/// A trait for value-ordering heuristics.
///
/// Returns the variable's current candidates as a fresh, finite sequence in
/// the order the search should try them. Ordering only affects how fast a
/// solution is found, never whether one exists.
pub trait ValueOrderingHeuristic {
    fn order_values(&self, var: &Variable, domains: &Domains, puzzle: &Puzzle) -> Vec<String>;
}

/// Orders candidates by how few options they rule out for neighboring slots.
///
/// For each candidate word, the ruled-out count is the number of candidates
/// across all crossing slots whose overlap character would disagree with it.
/// Candidates that leave neighbors the most room come first; ties are broken
/// lexicographically on the word so the order is reproducible.
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(&self, var: &Variable, domains: &Domains, puzzle: &Puzzle) -> Vec<String> {
        let mut scored: Vec<(usize, String)> = domains
            .candidates(var)
            .iter()
            .map(|word| {
                let mut ruled_out = 0;
                for neighbor in puzzle.neighbors(var) {
                    let (i, j) = puzzle.overlap(var, neighbor).unwrap();
                    let wanted = word.as_bytes()[i];
                    ruled_out += domains
                        .candidates(neighbor)
                        .iter()
                        .filter(|other| other.as_bytes()[j] != wanted)
                        .count();
                }
                (ruled_out, word.clone())
            })
            .collect();

        scored.sort();
        scored.into_iter().map(|(_, word)| word).collect()
    }
}

/// Orders candidates lexicographically.
///
/// The deterministic stand-in for "natural order": candidate sets are
/// unordered, so plain iteration order would vary run to run.
pub struct LexicographicValueHeuristic;

impl ValueOrderingHeuristic for LexicographicValueHeuristic {
    fn order_values(&self, var: &Variable, domains: &Domains, _puzzle: &Puzzle) -> Vec<String> {
        let mut words: Vec<String> = domains.candidates(var).iter().cloned().collect();
        words.sort();
        words
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::Direction;

    // Across slot crossing a down slot at index 2 / index 0.
    fn crossing_puzzle(words: &[&str]) -> (Puzzle, Variable, Variable) {
        let puzzle = Puzzle::parse(
            &["___", "##_", "##_"],
            words.iter().map(|w| w.to_string()),
        )
        .unwrap();
        let across = Variable::new(0, 0, 3, Direction::Across);
        let down = Variable::new(0, 2, 3, Direction::Down);
        (puzzle, across, down)
    }

    #[test]
    fn lcv_puts_the_least_constraining_word_first() {
        let (puzzle, across, down) = crossing_puzzle(&["cat", "dye", "toe", "tan", "era"]);
        let mut domains = Domains::new(&puzzle);
        domains.enforce_node_consistency();
        // across: {cat, dye}; down: {toe, tan, era}.
        domains.remove(&across, "toe");
        domains.remove(&across, "tan");
        domains.remove(&across, "era");
        domains.remove(&down, "cat");
        domains.remove(&down, "dye");

        // "cat" ends in 't' and rules out only "era"; "dye" ends in 'e' and
        // rules out "toe" and "tan".
        let ordered = LeastConstrainingValueHeuristic.order_values(&across, &domains, &puzzle);
        assert_eq!(ordered, vec!["cat".to_string(), "dye".to_string()]);
    }

    #[test]
    fn lcv_ruled_out_counts_are_non_decreasing() {
        let (puzzle, across, _) = crossing_puzzle(&["cat", "dye", "bat", "toe", "tan", "era"]);
        let mut domains = Domains::new(&puzzle);
        domains.enforce_node_consistency();

        let ruled_out = |word: &str| {
            let mut count = 0;
            for neighbor in puzzle.neighbors(&across) {
                let (i, j) = puzzle.overlap(&across, neighbor).unwrap();
                count += domains
                    .candidates(neighbor)
                    .iter()
                    .filter(|other| other.as_bytes()[j] != word.as_bytes()[i])
                    .count();
            }
            count
        };

        let ordered = LeastConstrainingValueHeuristic.order_values(&across, &domains, &puzzle);
        for pair in ordered.windows(2) {
            assert!(ruled_out(&pair[0]) <= ruled_out(&pair[1]));
        }
    }

    #[test]
    fn lcv_breaks_ties_lexicographically() {
        let (puzzle, across, down) = crossing_puzzle(&["cat", "bat", "toe", "era"]);
        let mut domains = Domains::new(&puzzle);
        domains.enforce_node_consistency();
        domains.remove(&across, "toe");
        domains.remove(&across, "era");
        domains.remove(&down, "cat");
        domains.remove(&down, "bat");

        // Both end in 't', so both rule out exactly {"era"}.
        let ordered = LeastConstrainingValueHeuristic.order_values(&across, &domains, &puzzle);
        assert_eq!(ordered, vec!["bat".to_string(), "cat".to_string()]);
    }

    #[test]
    fn isolated_variables_order_purely_by_tie_break() {
        let puzzle = Puzzle::parse(
            &["___"],
            ["rat", "cat", "dog"].into_iter().map(String::from),
        )
        .unwrap();
        let var = Variable::new(0, 0, 3, Direction::Across);
        let mut domains = Domains::new(&puzzle);
        domains.enforce_node_consistency();

        let ordered = LeastConstrainingValueHeuristic.order_values(&var, &domains, &puzzle);
        assert_eq!(
            ordered,
            vec!["cat".to_string(), "dog".to_string(), "rat".to_string()]
        );
    }

    #[test]
    fn lexicographic_ordering_sorts_the_domain() {
        let (puzzle, across, _) = crossing_puzzle(&["toe", "cat", "dye"]);
        let mut domains = Domains::new(&puzzle);
        domains.enforce_node_consistency();

        let ordered = LexicographicValueHeuristic.order_values(&across, &domains, &puzzle);
        assert_eq!(
            ordered,
            vec!["cat".to_string(), "dye".to_string(), "toe".to_string()]
        );
    }
}
