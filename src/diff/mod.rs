//! Diff module - Structural comparison between document versions.
//!
//! [`diff`] computes the ordered list of changes that transforms a base
//! document into a derived one; [`apply`] replays such a list onto a
//! document.

mod apply;
mod change;
mod engine;


pub use apply::*;
pub use change::*;
pub use engine::*;
