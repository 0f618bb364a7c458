use std::io::Write;

use tracing::warn;

use crate::core::fs::FileProbe;
use crate::core::mapping::PathMappingList;
use crate::utils::PathmapResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Recorded path to local path.
    Forward,
    /// Local path back to recorded path.
    Reverse,
    /// Forward, accepting only rewrites that exist.
    Existing,
}

/// Translate each path and print `<input> -> <output>` lines.
/// Returns whether every path could be translated.
pub fn translate_paths<W: Write, P: FileProbe + ?Sized>(
    list: &PathMappingList,
    paths: &[String],
    direction: Direction,
    probe: &P,
    out: &mut W,
) -> PathmapResult<bool> {
    let mut all_mapped = true;
    for path in paths {
        let result = match direction {
            Direction::Forward => list.remap_path(path),
            Direction::Reverse => list.reverse_remap_path(path),
            Direction::Existing => list.find_file(path, probe),
        };
        match result {
            Some(mapped) => writeln!(out, "{path} -> {mapped}")?,
            None => {
                warn!("No {direction:?} mapping for '{path}'");
                writeln!(out, "{path} -> (no match)")?;
                all_mapped = false;
            }
        }
    }
    Ok(all_mapped)
}

pub fn list_mappings<W: Write>(list: &PathMappingList, json: bool, out: &mut W) -> PathmapResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &list.to_json())?;
        writeln!(out)?;
    } else {
        write!(out, "{list}")?;
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::core::fs::MemoryFileSystem;

    fn sample() -> PathMappingList {
        let mut list = PathMappingList::new();
        list.append("/build", "/nope", false);
        list.append("/build", "/home/me", false);
        list
    }

    fn run(direction: Direction, paths: &[&str]) -> (bool, String) {
        let fs = MemoryFileSystem::with_files(["/home/me/a.c"]);
        let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        let mut out = Vec::new();
        let ok = translate_paths(&sample(), &paths, direction, &fs, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn forward_and_existing_differ() {
        assert_eq!(run(Direction::Forward, &["/build/a.c"]), (true, "/build/a.c -> /nope/a.c\n".to_string()));
        assert_eq!(
            run(Direction::Existing, &["/build/a.c"]),
            (true, "/build/a.c -> /home/me/a.c\n".to_string())
        );
    }

    #[test]
    fn misses_are_reported() {
        let (ok, text) = run(Direction::Reverse, &["/home/me/a.c", "/elsewhere/b.c"]);
        assert!(!ok);
        assert_eq!(text, "/home/me/a.c -> /build/a.c\n/elsewhere/b.c -> (no match)\n");
    }

    #[test]
    fn listing() {
        let mut out = Vec::new();
        list_mappings(&sample(), false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[0] \"/build\" -> \"/nope\"\n[1] \"/build\" -> \"/home/me\"\n"
        );

        let mut out = Vec::new();
        list_mappings(&sample(), true, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([["/build", "/nope"], ["/build", "/home/me"]]));
    }
}
