use std::fmt;

use crate::solver::config::Configuration;

/// One position of the modular clock puzzle: a 1-indexed ring of `hours`
/// hours, a fixed target, and the hand's current position. Each move
/// advances the hand one hour in either direction, wrapping at the ends.
///
/// Equality and hashing cover the ring parameters as well as `current`,
/// so configurations from differently-sized clocks can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockConfig {
    hours: u32,
    start: u32,
    end: u32,
    current: u32,
}

impl ClockConfig {
    /// Builds the initial configuration with the hand on `start`.
    ///
    /// Expects `1 <= start <= hours` and `1 <= end <= hours`.
    pub fn new(hours: u32, start: u32, end: u32) -> Self {
        Self {
            hours,
            start,
            end,
            current: start,
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn current(&self) -> u32 {
        self.current
    }
}

impl Configuration for ClockConfig {
    fn neighbors(&self) -> Vec<Self> {
        let back = if self.current == 1 {
            self.hours
        } else {
            self.current - 1
        };
        let forward = if self.current == self.hours {
            1
        } else {
            self.current + 1
        };

        vec![
            Self {
                current: back,
                ..self.clone()
            },
            Self {
                current: forward,
                ..self.clone()
            },
        ]
    }

    fn is_goal(&self) -> bool {
        self.current == self.end
    }
}

impl fmt::Display for ClockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::engine::Solver;

    fn currents(config: &ClockConfig) -> Vec<u32> {
        config.neighbors().iter().map(|n| n.current()).collect()
    }

    #[test]
    fn neighbors_wrap_at_one() {
        assert_eq!(currents(&ClockConfig::new(12, 1, 6)), vec![12, 2]);
    }

    #[test]
    fn neighbors_wrap_at_hours() {
        assert_eq!(currents(&ClockConfig::new(12, 12, 6)), vec![11, 1]);
    }

    #[test]
    fn interior_hour_has_both_adjacent_hours() {
        assert_eq!(currents(&ClockConfig::new(12, 7, 6)), vec![6, 8]);
    }

    #[test]
    fn goal_is_reaching_the_end_hour() {
        assert!(ClockConfig::new(12, 6, 6).is_goal());
        assert!(!ClockConfig::new(12, 5, 6).is_goal());
    }

    #[test]
    fn displays_the_current_hour() {
        assert_eq!(ClockConfig::new(12, 3, 6).to_string(), "3");
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            // BFS on the ring must find the shorter of the two arcs
            // between start and end.
            #[test]
            fn path_length_matches_ring_distance(
                hours in 2u32..=48,
                start_offset in 0u32..48,
                end_offset in 0u32..48,
            ) {
                let start = start_offset % hours + 1;
                let end = end_offset % hours + 1;

                let (path, _) = Solver::new().solve(ClockConfig::new(hours, start, end));
                let path = path.unwrap();

                let forward = (end + hours - start) % hours;
                let distance = forward.min(hours - forward);
                prop_assert_eq!(path.len() as u32, distance + 1);
            }
        }
    }
}
