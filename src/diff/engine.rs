//! Structural comparison between two versions of a document.

use super::{Change, ChangeSet};
use crate::path::Path;
use crate::value::Value;

/// Compares `base` against `derived` and returns the ordered list of changes
/// that transforms base into derived.
///
/// Maps are walked entry by entry: entries present on both sides are
/// recursed into, entries missing from one side become a single atomic
/// [`Change`] carrying the whole subtree. Everything else - scalars, lists,
/// and shape mismatches - is compared by deep equality and replaced as a
/// unit. `diff(v, v)` is always empty.
pub fn diff(base: &Value, derived: &Value) -> ChangeSet {
    let mut changes = ChangeSet::new();
    diff_value(&Path::root(), base, derived, &mut changes);
    changes
}

fn diff_value(path: &Path, base: &Value, derived: &Value, out: &mut ChangeSet) {
    match (base, derived) {
        (Value::Map(base_map), Value::Map(derived_map)) => {
            // Base entries first, in base order; derived-only entries after,
            // in derived order.
            for (key, base_entry) in base_map.iter() {
                let entry_path = path.with_key(key.clone());
                match derived_map.get(key) {
                    Some(derived_entry) => diff_value(&entry_path, base_entry, derived_entry, out),
                    None => out.push(Change::delete(entry_path, base_entry.clone())),
                }
            }
            for (key, derived_entry) in derived_map.iter() {
                if !base_map.has(key) {
                    out.push(Change::add(path.with_key(key.clone()), derived_entry.clone()));
                }
            }
        }
        _ => {
            if base != derived {
                out.push(Change::update(path.clone(), derived.clone()));
            }
        }
    }
}
