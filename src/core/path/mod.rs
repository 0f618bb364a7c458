//! Lexical path helpers used by the mapping list.
//!
//! Nothing in here touches the filesystem: `.`/`..` resolution and separator
//! cleanup happen on the string alone, following the host platform's path rules.

use std::path::{is_separator, Path};

/// Canonicalize a path string without filesystem access.
///
/// - `.` components and redundant or trailing separators are dropped
/// - `..` pops the previous normal component, is dropped at the root and kept
///   when a relative path has nothing left to pop
/// - a relative path that reduces to nothing becomes `"."`
///
/// An empty input stays empty.
pub fn normalize(path: &str) -> String {
    // clean("") gives "."
    if path.is_empty() {
        return String::new();
    }
    path_clean::clean(Path::new(path))
        .to_string_lossy()
        .into_owned()
}

pub fn is_relative(path: &str) -> bool {
    Path::new(path).is_relative()
}

/// Append `suffix` to `base` as further path components and normalize the result.
///
/// Leading separators on `suffix` are ignored, so `join("/new/root", "/foo.c")`
/// gives `/new/root/foo.c` rather than `/foo.c`.
pub fn join(base: &str, suffix: &str) -> String {
    let suffix = suffix.trim_start_matches(is_separator);
    if suffix.is_empty() {
        return normalize(base);
    }
    if base.is_empty() {
        return normalize(suffix);
    }
    normalize(&Path::new(base).join(suffix).to_string_lossy())
}
