use tracing::trace;

use super::list::PathMappingList;
use crate::core::fs::{FileProbe, LocalFileSystem};
use crate::core::path;

impl PathMappingList {
    /// Rewrite a recorded path into its local form.
    ///
    /// The first pair whose prefix leads `path` wins, even if a later pair has a
    /// longer prefix. A prefix of `"."` only applies to relative paths.
    pub fn remap_path(&self, path: &str) -> Option<String> {
        if self.is_empty() || path.is_empty() {
            return None;
        }

        // computed at most once per call, only if a "." prefix is reached
        let mut path_is_relative: Option<bool> = None;

        for mapping in self.iter() {
            let remainder = match path.strip_prefix(mapping.prefix.as_str()) {
                Some(rest) => rest,
                None => {
                    // relative paths have lost their leading "./" to normalization
                    if mapping.prefix != "." {
                        continue;
                    }
                    if !*path_is_relative.get_or_insert_with(|| path::is_relative(path)) {
                        continue;
                    }
                    path
                }
            };

            let remapped = path::join(&mapping.replacement, remainder);
            trace!(target: "pathmap::remap", from = %path, to = %remapped, prefix = %mapping.prefix, "Remapped path");
            return Some(remapped);
        }

        trace!(target: "pathmap::remap", path = %path, "No mapping applies");
        None
    }

    /// Rewrite a local path back into its recorded form, matching on the
    /// replacement side of each pair.
    pub fn reverse_remap_path(&self, path: &str) -> Option<String> {
        let path = path::normalize(path);

        for mapping in self.iter() {
            let Some(remainder) = path.strip_prefix(mapping.replacement.as_str()) else {
                continue;
            };
            let recorded = path::join(&mapping.prefix, remainder);
            trace!(target: "pathmap::remap", from = %path, to = %recorded, replacement = %mapping.replacement, "Reverse remapped path");
            return Some(recorded);
        }

        trace!(target: "pathmap::remap", path = %path, "No mapping applies in reverse");
        None
    }

    /// Like [`remap_path`](Self::remap_path), but only accepts a rewrite that
    /// `probe` reports as existing, and keeps scanning later pairs until one does.
    ///
    /// Prefix and path must agree on relativity; `"."` counts as an empty
    /// relative prefix.
    pub fn find_file<P: FileProbe + ?Sized>(&self, path: &str, probe: &P) -> Option<String> {
        if self.is_empty() || path.is_empty() {
            return None;
        }

        let path = path::normalize(path);
        let path_is_relative = path::is_relative(&path);

        for mapping in self.iter() {
            let (prefix, prefix_is_relative) = if mapping.prefix == "." {
                ("", true)
            } else {
                (mapping.prefix.as_str(), path::is_relative(&mapping.prefix))
            };
            if path.len() < prefix.len() || prefix_is_relative != path_is_relative {
                continue;
            }
            let Some(remainder) = path.strip_prefix(prefix) else {
                continue;
            };

            let candidate = path::join(&mapping.replacement, remainder);
            if probe.exists(&candidate) {
                trace!(target: "pathmap::remap", from = %path, to = %candidate, "Found remapped file");
                return Some(candidate);
            }
            trace!(target: "pathmap::remap", candidate = %candidate, "Remapped file does not exist");
        }

        None
    }

    /// [`find_file`](Self::find_file) against the local filesystem.
    pub fn find_file_on_disk(&self, path: &str) -> Option<String> {
        self.find_file(path, &LocalFileSystem)
    }
}
