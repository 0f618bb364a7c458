//! Ordered, bidirectional path-prefix remapping.
//!
//! A [`PathMappingList`] holds `(prefix, replacement)` pairs and rewrites paths
//! recorded in debug information into paths on the local filesystem, and back.
//! The first applicable pair always wins.
//!
//! ```
//! use pathmap::PathMappingList;
//!
//! let mut list = PathMappingList::new();
//! list.append("/buildbot/src", "/home/me/src", false);
//! let local = list.remap_path("/buildbot/src/lib/foo.c").unwrap();
//! #[cfg(unix)]
//! assert_eq!(local, "/home/me/src/lib/foo.c");
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::fs::{FileProbe, LocalFileSystem, MemoryFileSystem};
pub use crate::core::mapping::{ChangeCallback, PathMapping, PathMappingList};
pub use crate::utils::{Error, PathmapResult};
