use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A trait that defines one state in a puzzle's implicit search graph.
///
/// This is the primary interface for connecting a concrete puzzle (like
/// Hoppers or Traffic Jam) to the generic solver engine. By implementing
/// this trait, you tell the engine how to expand a state and when a state
/// counts as solved; the engine supplies the exploration itself.
///
/// The `Eq + Hash` bounds carry structural identity: two configurations
/// representing the same board or variable state must compare equal and
/// hash equal no matter how they were derived. The engine relies on this
/// for visited-state deduplication, so implementors should derive both
/// over the full domain state rather than hand-rolling a summary hash.
pub trait Configuration: Clone + Eq + Hash + Debug + Display {
    /// Returns every configuration reachable from this one by exactly one
    /// legal puzzle move.
    ///
    /// Must be pure, must never include `self`, and must produce the same
    /// ordering on every call so that search statistics are reproducible.
    fn neighbors(&self) -> Vec<Self>;

    /// Has the goal been reached?
    fn is_goal(&self) -> bool;
}
