use anyhow::Context;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse a JSON file.
///
/// A missing file is `Ok(None)`; callers pick their own default. Any other read
/// or parse failure is an error, since it means the upstream data is broken.
pub fn load_json(path: &Path) -> anyhow::Result<Option<Value>> {
    let buf = match std::fs::read(path) {
        Ok(buf) => buf,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "data file missing");
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let value = serde_json::from_slice::<Value>(&buf)
        .with_context(|| format!("malformed JSON in {}", path.display()))?;
    Ok(Some(value))
}
