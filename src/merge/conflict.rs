//! Conflict types for merge operations.

use crate::diff::ChangeSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ConflictGroup pairs the changes from both sides that overlap on one
/// unresolved location.
///
/// `left` holds the changes from the first merge argument in their original
/// order, `right` the changes from the second. A single ancestor-level
/// change on one side can face any number of finer-grained changes on the
/// other; they still form one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictGroup {
    pub left: ChangeSet,
    pub right: ChangeSet,
}

impl ConflictGroup {
    /// Creates a new conflict group.
    pub fn new(left: ChangeSet, right: ChangeSet) -> Self {
        ConflictGroup { left, right }
    }
}

impl fmt::Display for ConflictGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "left:")?;
        for change in self.left.iter() {
            writeln!(f, "  {}", change)?;
        }
        writeln!(f, "right:")?;
        for (i, change) in self.right.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}", change)?;
        }
        Ok(())
    }
}

/// MergeResult is the outcome of reconciling two change sets: everything
/// that merged cleanly, plus the conflict groups requiring manual
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    pub diffs: ChangeSet,
    pub conflicts: Vec<ConflictGroup>,
}

impl MergeResult {
    /// Returns true if any conflict groups were reported.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
