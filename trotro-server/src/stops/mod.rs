//! Stop directory: display-name to id resolution.
//!
//! The planner requires canonical ids; this module hosts the caller-side
//! step that maps free-text stop names onto them.

mod names;

pub use names::{StopMatch, StopResolver};
