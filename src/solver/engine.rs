use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::solver::config::Configuration;

/// Counters gathered over one `solve` call.
///
/// `total_configs` counts generation events: the seed plus every neighbor
/// ever produced, including neighbors that turn out to be duplicates.
/// `unique_configs` is the size of the visited set when the search stopped.
/// The two are diagnostics only; correctness never depends on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub total_configs: usize,
    pub unique_configs: usize,
}

/// The main engine for solving state-space puzzles.
///
/// The `Solver` takes a start [`Configuration`] and explores the implicit
/// graph it spans in breadth-first order, deduplicating states by
/// structural equality. Because every move has unit cost, the first goal
/// state dequeued sits at minimum depth, so the returned path is shortest
/// by move count.
pub struct Solver;

impl Solver {
    /// Creates a new `Solver`.
    pub fn new() -> Self {
        Self
    }

    /// Attempts to solve the puzzle rooted at `start`.
    ///
    /// Runs to completion in one call: no cancellation, no bound on
    /// frontier size or depth. Puzzles with combinatorially explosive
    /// state spaces are a known scaling limitation; a caller wanting
    /// bounded search time must wrap this with its own cap.
    ///
    /// # Returns
    ///
    /// * `Some(path)` with the shortest sequence of configurations from
    ///   `start` to a goal, inclusive of both endpoints. If `start` is
    ///   already a goal the path is just `[start]`.
    /// * `None` if the frontier exhausts without reaching a goal. This is
    ///   a defined outcome, not an error.
    ///
    /// The [`SearchStats`] counters are returned either way.
    pub fn solve<C: Configuration>(&self, start: C) -> (Option<Vec<C>>, SearchStats) {
        // Maps each discovered configuration to the one it was first
        // reached from. The start maps to no predecessor, terminating the
        // reconstruction walk.
        let mut predecessors: HashMap<C, Option<C>> = HashMap::new();
        let mut frontier = VecDeque::new();
        let mut total_configs = 1usize;

        predecessors.insert(start.clone(), None);
        frontier.push_back(start);

        let mut found_goal = None;
        while let Some(current) = frontier.pop_front() {
            // Goal is tested on dequeue, which also covers the case where
            // the start state is itself already solved.
            if current.is_goal() {
                found_goal = Some(current);
                break;
            }
            for neighbor in current.neighbors() {
                total_configs += 1;
                if !predecessors.contains_key(&neighbor) {
                    predecessors.insert(neighbor.clone(), Some(current.clone()));
                    frontier.push_back(neighbor);
                }
            }
        }

        let stats = SearchStats {
            total_configs,
            unique_configs: predecessors.len(),
        };

        let Some(goal) = found_goal else {
            debug!(
                total = stats.total_configs,
                unique = stats.unique_configs,
                "frontier exhausted without reaching a goal"
            );
            return (None, stats);
        };

        // Walk the predecessor links backward from the goal, then flip the
        // collected order into the forward start..=goal sequence.
        let mut path = Vec::new();
        let mut cursor = Some(&goal);
        while let Some(config) = cursor {
            path.push(config.clone());
            cursor = predecessors.get(config).and_then(|prev| prev.as_ref());
        }
        path.reverse();

        debug!(
            steps = path.len() - 1,
            total = stats.total_configs,
            unique = stats.unique_configs,
            "goal reached"
        );

        (Some(path), stats)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzles::clock::ClockConfig;
    use crate::puzzles::water::WaterConfig;

    #[test]
    fn start_already_at_goal_yields_single_element_path() {
        let _ = tracing_subscriber::fmt::try_init();

        let start = ClockConfig::new(12, 1, 1);
        let (path, stats) = Solver::new().solve(start.clone());

        let path = path.unwrap();
        assert_eq!(path, vec![start]);
        // Only the seed was ever generated.
        assert_eq!(stats.total_configs, 1);
        assert_eq!(stats.unique_configs, 1);
    }

    #[test]
    fn shortest_ring_path_is_found() {
        // From 1 to 6 on a 12-hour ring: 5 steps forward beats 7 back.
        let (path, _) = Solver::new().solve(ClockConfig::new(12, 1, 6));
        let path = path.unwrap();
        assert_eq!(path.len(), 6);
        assert!(path.last().unwrap().is_goal());
    }

    #[test]
    fn path_endpoints_are_start_and_goal() {
        let start = ClockConfig::new(24, 3, 20);
        let (path, _) = Solver::new().solve(start.clone());
        let path = path.unwrap();
        assert_eq!(path.first(), Some(&start));
        assert!(path.last().unwrap().is_goal());
    }

    #[test]
    fn exhausted_frontier_reports_no_solution() {
        // A single bucket of capacity 2 can only ever hold 0 or 2.
        let (path, stats) = Solver::new().solve(WaterConfig::new(4, vec![2]));
        assert!(path.is_none());
        // The full reachable component was visited: {[0], [2]}.
        assert_eq!(stats.unique_configs, 2);
        assert!(stats.total_configs >= stats.unique_configs);
    }

    #[test]
    fn resolving_the_same_start_is_deterministic() {
        let solver = Solver::new();
        let (first_path, first_stats) = solver.solve(WaterConfig::new(4, vec![3, 5]));
        let (second_path, second_stats) = solver.solve(WaterConfig::new(4, vec![3, 5]));
        assert_eq!(
            first_path.as_ref().map(Vec::len),
            second_path.as_ref().map(Vec::len)
        );
        assert_eq!(first_stats, second_stats);
    }

    #[test]
    fn total_counts_generation_events_not_insertions() {
        // The two neighbors of any clock hour are themselves adjacent, so
        // duplicates are generated well before the ring is fully explored.
        let (path, stats) = Solver::new().solve(ClockConfig::new(6, 1, 4));
        assert!(path.is_some());
        assert!(stats.total_configs > stats.unique_configs);
    }
}
