//! Wavefront is a generic, reusable breadth-first search (BFS) solver for
//! state-space puzzles.
//!
//! The engine is puzzle-agnostic and can be pointed at any problem whose
//! states form an implicit graph with unit-cost moves. The core idea is a
//! two-layered architecture: a generic solver backend and a
//! puzzle-specific frontend.
//!
//! # Core Concepts
//!
//! - **[`Configuration`]**: A trait you implement to define the "what" of
//!   your puzzle: how a state expands into its successors and when a state
//!   counts as solved.
//! - **[`Solver`]**: The engine that takes a start configuration, explores
//!   the graph level by level with visited-state deduplication, and
//!   returns a shortest path to a goal (or reports that none exists),
//!   together with total/unique exploration counters.
//! - **[`puzzles`]**: Four ready-made configurations — a modular clock, a
//!   peg-jump board (Hoppers), a sliding traffic-jam board, and the water
//!   jug problem — that double as worked examples of the trait.
//!
//! # Example: The Clock Puzzle
//!
//! Turn a 12-hour clock hand from 1 to 6 in as few ±1 steps as possible.
//! Going forward takes five moves, so the path holds six configurations.
//!
//! ```
//! use wavefront::puzzles::clock::ClockConfig;
//! use wavefront::solver::config::Configuration;
//! use wavefront::solver::engine::Solver;
//!
//! let start = ClockConfig::new(12, 1, 6);
//! let (path, stats) = Solver::new().solve(start);
//!
//! let path = path.expect("1 and 6 share a ring, so a path exists");
//! assert_eq!(path.len(), 6);
//! assert!(path.last().unwrap().is_goal());
//! assert!(stats.total_configs >= stats.unique_configs);
//! ```
//!
//! [`Configuration`]: crate::solver::config::Configuration
//! [`Solver`]: crate::solver::engine::Solver
//! [`puzzles`]: crate::puzzles
pub mod error;
pub mod puzzles;
pub mod solver;
