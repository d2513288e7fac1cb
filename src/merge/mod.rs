//! Merge module - Conflict-aware reconciliation of two change sets.
//!
//! Both change sets must have been computed against the same base document.
//! Compatible changes are combined; incompatible ones are reported as
//! conflict groups, never resolved silently.

mod conflict;
mod engine;


pub use conflict::*;
pub use engine::*;
