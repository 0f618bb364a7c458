use std::collections::HashSet;
use std::path::Path;

use tracing::trace;

/// Existence check consulted by [`PathMappingList::find_file`](crate::core::mapping::PathMappingList::find_file).
///
/// Implementations must not distinguish "absent" from "probe failed": both are `false`.
pub trait FileProbe {
    fn exists(&self, path: &str) -> bool;
}

/// Probes the local filesystem through `std::fs::metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileProbe for LocalFileSystem {
    fn exists(&self, path: &str) -> bool {
        match Path::new(path).metadata() {
            Ok(_) => true,
            Err(e) => {
                trace!(target: "pathmap::fs", path = %path, error = %e, "Probe failed");
                false
            }
        }
    }
}

/// An in-memory set of paths which are considered to exist.
///
/// Paths are stored normalized, so lookups match regardless of redundant
/// separators or `.` components in either side.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashSet<String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: &str) {
        self.files.insert(crate::core::path::normalize(path));
    }

    pub fn with_files<'a, I: IntoIterator<Item = &'a str>>(paths: I) -> Self {
        let mut fs = Self::new();
        for p in paths {
            fs.add_file(p);
        }
        fs
    }
}

impl FileProbe for MemoryFileSystem {
    fn exists(&self, path: &str) -> bool {
        self.files.contains(&crate::core::path::normalize(path))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn memory_probe_matches_normalized_paths() {
        let fs = MemoryFileSystem::with_files(["/real/./f.c"]);
        assert!(fs.exists("/real/f.c"));
        assert!(fs.exists("/real//f.c"));
        assert!(!fs.exists("/nope/f.c"));
    }

    #[test]
    fn local_probe_reports_missing_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("present.c");
        std::fs::write(&file, "int main;").unwrap();

        assert!(LocalFileSystem.exists(file.to_str().unwrap()));
        assert!(!LocalFileSystem.exists(dir.path().join("absent.c").to_str().unwrap()));
    }
}
