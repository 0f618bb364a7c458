use std::fmt;

use serde_json::{json, Value};
use tracing::debug;

use super::types::PathMapping;
use crate::core::path::normalize;

/// Invoked after a mutation when the caller asked for notification.
pub type ChangeCallback = Box<dyn FnMut(&PathMappingList)>;

/// Ordered list of path prefix substitutions.
///
/// Order is priority: every lookup takes the first pair that applies, not the
/// longest one. Prefixes and replacements are normalized when stored, never at
/// lookup time.
///
/// Copies are detached from the change callback. [`Clone::clone`] copies the
/// pairs and starts a fresh modification counter, [`Clone::clone_from`] also
/// takes over the source counter, and [`PathMappingList::snapshot`] hands out
/// the bare pairs. None of them ever carries a callback.
pub struct PathMappingList {
    pairs: Vec<PathMapping>,
    callback: Option<ChangeCallback>,
    mod_id: u64,
}

impl PathMappingList {
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            callback: None,
            mod_id: 0,
        }
    }

    /// Create an empty list which reports its mutations to `callback`.
    ///
    /// The callback runs synchronously inside the mutating call and only sees a
    /// shared reference to the list.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: FnMut(&PathMappingList) + 'static,
    {
        Self {
            pairs: Vec::new(),
            callback: Some(Box::new(callback)),
            mod_id: 0,
        }
    }

    // ============================================================================================
    // Mutations
    // ============================================================================================

    pub fn append(&mut self, prefix: &str, replacement: &str, notify: bool) {
        let mapping = PathMapping::new(prefix, replacement);
        debug!(target: "pathmap::mapping", prefix = %mapping.prefix, replacement = %mapping.replacement, "Appending path mapping");
        self.pairs.push(mapping);
        self.changed(notify);
    }

    /// Copy every pair of `other`, in order, to the end of this list.
    pub fn append_list(&mut self, other: &PathMappingList, notify: bool) {
        if other.pairs.is_empty() {
            return;
        }
        debug!(target: "pathmap::mapping", count = other.pairs.len(), "Appending path mappings from another list");
        self.pairs.extend(other.pairs.iter().cloned());
        self.changed(notify);
    }

    /// Append unless an identical (normalized) pair is already present.
    /// Returns whether the pair was added.
    pub fn append_unique(&mut self, prefix: &str, replacement: &str, notify: bool) -> bool {
        let mapping = PathMapping::new(prefix, replacement);
        if self.pairs.contains(&mapping) {
            debug!(target: "pathmap::mapping", prefix = %mapping.prefix, replacement = %mapping.replacement, "Path mapping already present");
            return false;
        }
        self.pairs.push(mapping);
        self.changed(notify);
        true
    }

    /// Insert before `index`; an index past the end appends.
    pub fn insert(&mut self, prefix: &str, replacement: &str, index: usize, notify: bool) {
        let mapping = PathMapping::new(prefix, replacement);
        let index = index.min(self.pairs.len());
        debug!(target: "pathmap::mapping", index, prefix = %mapping.prefix, replacement = %mapping.replacement, "Inserting path mapping");
        self.pairs.insert(index, mapping);
        self.changed(notify);
    }

    /// Overwrite both sides of the pair at `index`.
    pub fn replace_at(&mut self, prefix: &str, replacement: &str, index: usize, notify: bool) -> bool {
        let Some(slot) = self.pairs.get_mut(index) else {
            return false;
        };
        *slot = PathMapping::new(prefix, replacement);
        debug!(target: "pathmap::mapping", index, prefix = %slot.prefix, replacement = %slot.replacement, "Replaced path mapping");
        self.changed(notify);
        true
    }

    /// Give the first pair whose prefix is `path` a new replacement.
    pub fn replace(&mut self, path: &str, new_replacement: &str, notify: bool) -> bool {
        let Some(index) = self.find_index_for_path(path) else {
            return false;
        };
        let slot = &mut self.pairs[index];
        slot.replacement = normalize(new_replacement);
        debug!(target: "pathmap::mapping", index, prefix = %slot.prefix, replacement = %slot.replacement, "Replaced path mapping target");
        self.changed(notify);
        true
    }

    pub fn remove_at(&mut self, index: usize, notify: bool) -> bool {
        if index >= self.pairs.len() {
            return false;
        }
        let removed = self.pairs.remove(index);
        debug!(target: "pathmap::mapping", index, prefix = %removed.prefix, "Removed path mapping");
        self.changed(notify);
        true
    }

    /// Remove the first pair whose prefix is `path`.
    pub fn remove(&mut self, path: &str, notify: bool) -> bool {
        match self.find_index_for_path(path) {
            Some(index) => self.remove_at(index, notify),
            None => false,
        }
    }

    pub fn clear(&mut self, notify: bool) {
        if self.pairs.is_empty() {
            return;
        }
        debug!(target: "pathmap::mapping", count = self.pairs.len(), "Clearing path mappings");
        self.pairs.clear();
        self.changed(notify);
    }

    fn changed(&mut self, notify: bool) {
        self.mod_id += 1;
        if !notify {
            return;
        }
        // Held outside the list while it runs, so the callback cannot re-enter itself.
        if let Some(mut callback) = self.callback.take() {
            callback(&*self);
            self.callback = Some(callback);
        }
    }

    // ============================================================================================
    // Lookups
    // ============================================================================================

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Bumped once per successful mutation. Lets caches tell whether the list
    /// changed since they last looked.
    pub fn modification_id(&self) -> u64 {
        self.mod_id
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathMapping> + '_ {
        self.pairs.iter()
    }

    /// The pairs alone, detached from any callback.
    pub fn snapshot(&self) -> Vec<PathMapping> {
        self.pairs.clone()
    }

    pub fn paths_at_index(&self, index: usize) -> Option<(String, String)> {
        self.pairs
            .get(index)
            .map(|m| (m.prefix.clone(), m.replacement.clone()))
    }

    /// Index of the first pair whose prefix equals `path` once normalized.
    pub fn find_index_for_path(&self, path: &str) -> Option<usize> {
        let path = normalize(path);
        self.pairs.iter().position(|m| m.prefix == path)
    }

    // ============================================================================================
    // Output
    // ============================================================================================

    /// Write all pairs, one `[index] "prefix" -> "replacement"` line each, or
    /// only `prefix -> replacement` for the pair at `pair_index`.
    pub fn dump<W: fmt::Write + ?Sized>(&self, out: &mut W, pair_index: Option<usize>) -> fmt::Result {
        match pair_index {
            None => {
                for (index, m) in self.pairs.iter().enumerate() {
                    writeln!(out, "[{}] \"{}\" -> \"{}\"", index, m.prefix, m.replacement)?;
                }
                Ok(())
            }
            Some(index) => match self.pairs.get(index) {
                Some(m) => write!(out, "{} -> {}", m.prefix, m.replacement),
                None => Ok(()),
            },
        }
    }

    /// `[[prefix, replacement], ...]`, in list order.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.pairs
                .iter()
                .map(|m| json!([m.prefix, m.replacement]))
                .collect(),
        )
    }
}

impl Default for PathMappingList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PathMappingList {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
            callback: None,
            mod_id: 0,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pairs.clone_from(&source.pairs);
        self.callback = None;
        self.mod_id = source.mod_id;
    }
}

impl fmt::Debug for PathMappingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMappingList")
            .field("pairs", &self.pairs)
            .field("mod_id", &self.mod_id)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl fmt::Display for PathMappingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f, None)
    }
}
