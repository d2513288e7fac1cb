//! # Structural Diff
//!
//! Structural diff and conflict-aware merge operations for hierarchical
//! documents such as API descriptions.
//!
//! Two versions of a document that share a common ancestor are compared with
//! [`diff`], producing an ordered list of change records. Two change lists
//! computed against the same base are reconciled with [`merge`], which
//! combines everything that is compatible and reports everything that is not
//! as conflict groups for manual resolution.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of JSON/YAML documents
//! - [`path`] - Location addressing inside nested documents
//! - [`diff`] - Structural comparison producing change records
//! - [`merge`] - Conflict-aware reconciliation of change sets

pub mod diff;
pub mod merge;
pub mod path;
pub mod value;

pub use diff::{apply, diff, ApplyError, Change, ChangeKind, ChangeSet};
pub use merge::{merge, ConflictGroup, MergeResult};
pub use path::{Path, PathSegment};
pub use value::{Map, Value};
