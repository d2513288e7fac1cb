//! Path segment and path types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// PathSegment represents one level of navigation inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Key of a map entry.
    Key(String),
    /// Index into a list.
    Index(usize),
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(i: usize) -> Self {
        PathSegment::Index(i)
    }

    /// Returns the key name if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the index if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

/// Path identifies a location in a document as a sequence of segments.
/// The empty path is the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates the root path.
    pub fn root() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Creates a path from a vector of segments.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Path { segments }
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path is the document root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn iter(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Returns the last segment.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Creates a new path with the given segment appended.
    pub fn with(&self, segment: PathSegment) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// Creates a new path extended by a key segment.
    pub fn with_key(&self, name: impl Into<String>) -> Self {
        self.with(PathSegment::Key(name.into()))
    }

    /// Creates a new path extended by an index segment.
    pub fn with_index(&self, i: usize) -> Self {
        self.with(PathSegment::Index(i))
    }

    /// Returns a slice of the path segments.
    pub fn as_slice(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if this path is a strict prefix of `other`.
    pub fn is_ancestor_of(&self, other: &Path) -> bool {
        self.len() < other.len() && other.segments[..self.len()] == self.segments[..]
    }

    /// Returns true if the paths are equal or one is an ancestor of the other.
    pub fn is_related_to(&self, other: &Path) -> bool {
        self == other || self.is_ancestor_of(other) || other.is_ancestor_of(self)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<T: IntoIterator<Item = PathSegment>>(iter: T) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = PathSegment;
    type IntoIter = std::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => write!(f, ".{}", name),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
