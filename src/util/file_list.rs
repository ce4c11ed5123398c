//! Directory enumeration for the batch orchestrator's pre-load phase.
//!
//! Unlike `lz4r::util::file_list`, this never recurses into subdirectories —
//! the batch orchestrator operates over one flat directory of images or
//! containers. Entries are returned sorted by file name so that task
//! creation order (and therefore Phase 3 reporting order) is deterministic
//! regardless of the directory's on-disk entry order.

use std::io;
use std::path::{Path, PathBuf};

/// Lists the regular files directly inside `dir` whose extension (compared
/// case-insensitively) is one of `extensions`, sorted by file name.
pub fn list_by_extension(dir: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        let ext_matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| extensions.iter().any(|want| e.eq_ignore_ascii_case(want)))
            .unwrap_or(false);
        if ext_matches {
            matches.push(path);
        }
    }
    matches.sort();
    Ok(matches)
}
