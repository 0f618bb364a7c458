use serde::Serialize;

use crate::core::path::normalize;

/// One (prefix, replacement) pair. Both sides are normalized on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathMapping {
    /// The "from" side, matched against the start of a path being remapped.
    pub prefix: String,
    /// The "to" side, substituted for a matched prefix.
    pub replacement: String,
}

impl PathMapping {
    pub fn new(prefix: &str, replacement: &str) -> Self {
        Self {
            prefix: normalize(prefix),
            replacement: normalize(replacement),
        }
    }
}
