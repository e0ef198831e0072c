use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const JSON_EXT: &str = ".json";

/// Sorted names of the JSON files in `dir`. A missing directory has none.
pub fn list_files(dir: &Path) -> anyhow::Result<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to list {}", dir.display()));
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(JSON_EXT) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Pick the file to serve from `dir`.
///
/// With a date, candidates are the JSON files whose name contains it; without,
/// every JSON file. The lexicographically greatest name wins, which relies on
/// filenames embedding zero-padded dates.
pub fn select_file(dir: &Path, date: Option<&str>) -> anyhow::Result<Option<PathBuf>> {
    let names = list_files(dir)?;
    let picked = names
        .into_iter()
        .filter(|name| date.map_or(true, |d| name.contains(d)))
        .max();
    Ok(picked.map(|name| dir.join(name)))
}
