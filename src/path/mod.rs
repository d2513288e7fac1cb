//! Path module - Locations inside nested documents.

mod path;

pub use path::*;
