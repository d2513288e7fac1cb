//! Reconciles two change sets computed against the same base document.

use super::{ConflictGroup, MergeResult};
use crate::diff::{Change, ChangeKind, ChangeSet};
use crate::path::Path;
use std::collections::HashMap;

/// What happened to a B-side change during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Pending,
    /// Emitted into the merged diffs at the given slot.
    Merged(usize),
    /// Collected into the conflict group at the given index.
    Grouped(usize),
    /// Redundant under a change that already covers it.
    Dropped,
}

/// Combines two change sets derived from the same base document.
///
/// Changes that do not overlap by path, or that both sides agree on, land in
/// `diffs`; overlapping changes the sides disagree on are collected into
/// [`ConflictGroup`]s. Nested deletions collapse to the highest-level one;
/// an edit against a deletion always surfaces as a conflict. Swapping the
/// arguments swaps `left`/`right` in every group and the append order of
/// `diffs`, nothing else.
pub fn merge(diff_a: &ChangeSet, diff_b: &ChangeSet) -> MergeResult {
    let b_changes: Vec<&Change> = diff_b.iter().collect();
    let mut b_state = vec![Disposition::Pending; b_changes.len()];

    // Merged changes go into slots so a change emitted early can still be
    // pulled back into a conflict group discovered later in the scan.
    let mut merged: Vec<Option<Change>> = Vec::new();
    let mut groups: Vec<ConflictGroup> = Vec::new();
    let mut group_by_root: HashMap<Path, usize> = HashMap::new();

    for a in diff_a.iter() {
        let related: Vec<usize> = (0..b_changes.len())
            .filter(|&j| a.path.is_related_to(&b_changes[j].path))
            .collect();

        if related.is_empty() {
            merged.push(Some(a.clone()));
            continue;
        }

        let conflicting = related.iter().any(|&j| is_conflicting(a, b_changes[j]));

        if !conflicting {
            if related.iter().all(|&j| b_state[j] == Disposition::Pending) {
                resolve_consistent(a, &related, &b_changes, &mut b_state, &mut merged);
            }
            // Otherwise the only consistent counterpart is a higher-level
            // delete that was already kept; this change is redundant under it.
            continue;
        }

        // The overlap root is the shortest path involved; every change
        // transitively related through it joins the same group.
        let mut root = a.path.clone();
        for &j in &related {
            if b_changes[j].path.len() < root.len() {
                root = b_changes[j].path.clone();
            }
        }

        let group_index = related
            .iter()
            .find_map(|&j| match b_state[j] {
                Disposition::Grouped(index) => Some(index),
                _ => None,
            })
            .unwrap_or_else(|| {
                *group_by_root.entry(root).or_insert_with(|| {
                    groups.push(ConflictGroup::default());
                    groups.len() - 1
                })
            });

        groups[group_index].left.push(a.clone());
        for &j in &related {
            if !is_conflicting(a, b_changes[j]) {
                // A delete nested inside the contested delete; subsumed by it.
                b_state[j] = Disposition::Dropped;
                continue;
            }
            match b_state[j] {
                Disposition::Pending => {}
                // A delete that was kept as the survivor of nested deletes
                // turns out to be contested; pull it back out of the diffs.
                Disposition::Merged(slot) => merged[slot] = None,
                Disposition::Grouped(_) | Disposition::Dropped => continue,
            }
            groups[group_index].right.push(b_changes[j].clone());
            b_state[j] = Disposition::Grouped(group_index);
        }
    }

    // Everything left on the B side has no counterpart in A.
    for (j, b) in b_changes.iter().enumerate() {
        if b_state[j] == Disposition::Pending {
            merged.push(Some((*b).clone()));
        }
    }

    MergeResult {
        diffs: merged.into_iter().flatten().collect(),
        conflicts: groups,
    }
}

/// A related pair is conflicting when the same path carries different
/// changes, or when one side changes something inside a subtree the other
/// side deleted. Nested deletions are the only compatible overlap.
fn is_conflicting(a: &Change, b: &Change) -> bool {
    if a.path == b.path {
        return a.kind != b.kind || a.changes != b.changes;
    }
    !(a.kind == ChangeKind::Delete && b.kind == ChangeKind::Delete)
}

/// Resolves an A-side change whose related B-side changes all agree with it:
/// either the identical change made on both sides, or deletions nested
/// inside one another. Exactly one change survives into the merged diffs.
fn resolve_consistent(
    a: &Change,
    related: &[usize],
    b_changes: &[&Change],
    b_state: &mut [Disposition],
    merged: &mut Vec<Option<Change>>,
) {
    // An ancestor delete on the B side covers this change entirely.
    let covering = related
        .iter()
        .copied()
        .find(|&j| b_changes[j].path.len() < a.path.len());

    match covering {
        Some(j) => {
            merged.push(Some(b_changes[j].clone()));
            b_state[j] = Disposition::Merged(merged.len() - 1);
        }
        None => {
            // The shared change, or the delete covering every related
            // B-side delete.
            merged.push(Some(a.clone()));
            for &j in related {
                b_state[j] = Disposition::Dropped;
            }
        }
    }
}
