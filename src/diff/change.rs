//! Change record types produced by the diff engine.

use crate::path::Path;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ChangeKind identifies how a location differs between base and derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// The location exists only in the derived document.
    Add,
    /// The location exists in both documents with different values.
    Update,
    /// The location exists only in the base document.
    Delete,
}

/// Change describes one atomic difference at a specific path.
///
/// `changes` carries the new value for [`ChangeKind::Add`] and
/// [`ChangeKind::Update`], and the removed value for [`ChangeKind::Delete`].
/// A change is fully self-contained; added or deleted subtrees are carried
/// whole rather than decomposed per leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub path: Path,
    pub changes: Value,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
}

impl Change {
    /// Creates an addition of `changes` at `path`.
    pub fn add(path: Path, changes: Value) -> Self {
        Change {
            path,
            changes,
            kind: ChangeKind::Add,
        }
    }

    /// Creates a replacement of the value at `path` with `changes`.
    pub fn update(path: Path, changes: Value) -> Self {
        Change {
            path,
            changes,
            kind: ChangeKind::Update,
        }
    }

    /// Creates a removal of `changes` at `path`.
    pub fn delete(path: Path, changes: Value) -> Self {
        Change {
            path,
            changes,
            kind: ChangeKind::Delete,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Add => write!(f, "add"),
            ChangeKind::Update => write!(f, "update"),
            ChangeKind::Delete => write!(f, "delete"),
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.path)
    }
}

/// ChangeSet is an ordered collection of changes, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    /// Creates a new empty ChangeSet.
    pub fn new() -> Self {
        ChangeSet {
            changes: Vec::new(),
        }
    }

    /// Appends a change.
    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Returns the number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns the change at `index`.
    pub fn get(&self, index: usize) -> Option<&Change> {
        self.changes.get(index)
    }

    /// Returns an iterator over the changes.
    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    /// Returns a slice of the changes.
    pub fn as_slice(&self) -> &[Change] {
        &self.changes
    }
}

impl FromIterator<Change> for ChangeSet {
    fn from_iter<T: IntoIterator<Item = Change>>(iter: T) -> Self {
        ChangeSet {
            changes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Change> for ChangeSet {
    fn extend<T: IntoIterator<Item = Change>>(&mut self, iter: T) {
        self.changes.extend(iter);
    }
}

impl IntoIterator for ChangeSet {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl fmt::Display for ChangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, change) in self.changes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", change)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;
    use pretty_assertions::assert_eq;

    fn title_path() -> Path {
        Path::from_segments(vec![PathSegment::key("info"), PathSegment::key("title")])
    }

    #[test]
    fn test_change_constructors() {
        let add = Change::add(title_path(), Value::String("Pet Store".into()));
        assert_eq!(add.kind, ChangeKind::Add);
        assert_eq!(add.path, title_path());

        let delete = Change::delete(title_path(), Value::String("Pet Store".into()));
        assert_eq!(delete.kind, ChangeKind::Delete);
    }

    #[test]
    fn test_change_wire_shape() {
        let change = Change::update(title_path(), Value::String("New title".into()));
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(
            json,
            r#"{"path":["info","title"],"changes":"New title","type":"update"}"#
        );

        let parsed: Change = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, change);
    }

    #[test]
    fn test_changeset_collection() {
        let mut set = ChangeSet::new();
        assert!(set.is_empty());

        set.push(Change::add(title_path(), Value::Null));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).map(|c| c.kind), Some(ChangeKind::Add));
    }

    #[test]
    fn test_changeset_display() {
        let set: ChangeSet = vec![
            Change::update(title_path(), Value::Null),
            Change::delete(Path::root().with_key("info"), Value::Null),
        ]
        .into_iter()
        .collect();

        assert_eq!(format!("{}", set), "update at .info.title\ndelete at .info");
    }
}
