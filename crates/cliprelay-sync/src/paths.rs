//! Download-directory path handling, including the collision suffix policy.

use std::path::{Path, PathBuf};

/// Pick a free path for `filename` inside `dir`, inserting a numeric suffix
/// before the extension (`name_1.ext`, `name_2.ext`, ...) until a name that
/// does not exist is found. Existing files are never overwritten.
pub fn next_available_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(filename);
    let stem = name
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let extension = name.extension().and_then(|e| e.to_str());

    let mut counter = 1u32;
    loop {
        let numbered = match extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        let candidate = dir.join(numbered);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
