//! Replays a change set onto a document.

use super::{Change, ChangeKind, ChangeSet};
use crate::path::{Path, PathSegment};
use crate::value::Value;
use thiserror::Error;

/// ApplyError reports a change whose path cannot be realized on the target
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("path {path} does not exist in the target document")]
    MissingPath { path: Path },
    #[error("path {path} does not address a container")]
    NotAContainer { path: Path },
    #[error("cannot {kind} at the document root")]
    RootMutation { kind: ChangeKind },
}

/// Applies every change in `changes` to a copy of `base` and returns the
/// transformed document. Changes are applied in order; the first failing
/// change aborts the whole application.
///
/// For a change set produced by [`diff`](super::diff),
/// `apply(base, &diff(base, derived))` reconstructs `derived`.
pub fn apply(base: &Value, changes: &ChangeSet) -> Result<Value, ApplyError> {
    let mut doc = base.clone();
    for change in changes.iter() {
        apply_change(&mut doc, change)?;
    }
    Ok(doc)
}

fn apply_change(doc: &mut Value, change: &Change) -> Result<(), ApplyError> {
    let Some((last, parents)) = change.path.as_slice().split_last() else {
        // The root has no parent; only a full replacement is meaningful.
        return match change.kind {
            ChangeKind::Update => {
                *doc = change.changes.clone();
                Ok(())
            }
            kind => Err(ApplyError::RootMutation { kind }),
        };
    };

    let parent = navigate(doc, parents, &change.path)?;
    match change.kind {
        ChangeKind::Add => insert(parent, last, change),
        ChangeKind::Update => {
            let slot = child_mut(parent, last, &change.path)?;
            *slot = change.changes.clone();
            Ok(())
        }
        ChangeKind::Delete => remove(parent, last, &change.path),
    }
}

/// Walks `segments` down from `doc`, returning the addressed node.
fn navigate<'a>(
    doc: &'a mut Value,
    segments: &[PathSegment],
    full: &Path,
) -> Result<&'a mut Value, ApplyError> {
    let mut current = doc;
    for segment in segments {
        current = child_mut(current, segment, full)?;
    }
    Ok(current)
}

fn child_mut<'a>(
    value: &'a mut Value,
    segment: &PathSegment,
    full: &Path,
) -> Result<&'a mut Value, ApplyError> {
    match (value, segment) {
        (Value::Map(map), PathSegment::Key(key)) => {
            map.get_mut(key).ok_or_else(|| ApplyError::MissingPath {
                path: full.clone(),
            })
        }
        (Value::List(list), PathSegment::Index(index)) => {
            list.get_mut(*index).ok_or_else(|| ApplyError::MissingPath {
                path: full.clone(),
            })
        }
        _ => Err(ApplyError::NotAContainer { path: full.clone() }),
    }
}

fn insert(parent: &mut Value, segment: &PathSegment, change: &Change) -> Result<(), ApplyError> {
    match (parent, segment) {
        (Value::Map(map), PathSegment::Key(key)) => {
            map.set(key.clone(), change.changes.clone());
            Ok(())
        }
        (Value::List(list), PathSegment::Index(index)) if *index <= list.len() => {
            list.insert(*index, change.changes.clone());
            Ok(())
        }
        (Value::List(_), PathSegment::Index(_)) => Err(ApplyError::MissingPath {
            path: change.path.clone(),
        }),
        _ => Err(ApplyError::NotAContainer {
            path: change.path.clone(),
        }),
    }
}

fn remove(parent: &mut Value, segment: &PathSegment, full: &Path) -> Result<(), ApplyError> {
    match (parent, segment) {
        (Value::Map(map), PathSegment::Key(key)) => {
            map.delete(key).ok_or_else(|| ApplyError::MissingPath {
                path: full.clone(),
            })?;
            Ok(())
        }
        (Value::List(list), PathSegment::Index(index)) if *index < list.len() => {
            list.remove(*index);
            Ok(())
        }
        (Value::List(_), PathSegment::Index(_)) => Err(ApplyError::MissingPath {
            path: full.clone(),
        }),
        _ => Err(ApplyError::NotAContainer { path: full.clone() }),
    }
}
