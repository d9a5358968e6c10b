//! Shortest-path planner over the route graph.
//!
//! This module implements the core query of the application: given two
//! stop identifiers, find the minimum-total-fare path between them using
//! Dijkstra's algorithm, and reconstruct it into an ordered sequence of
//! presentable steps.
//!
//! The planner only reads the graph; each call is a fresh, self-contained
//! computation over whatever snapshot of the graph it is handed.

mod config;
mod search;

pub use config::SearchConfig;
pub use search::{PathResult, find_shortest_path};
