use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("[io::json::write] Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)
                .with_context(|| format!("[io::json::write] Failed to write {}", path.display()))?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        None => {
            let mut writer = io::stdout().lock();
            serde_json::to_writer_pretty(&mut writer, value)
                .context("[io::json::write] Failed to write to stdout")?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Serialize `value` as pretty JSON text.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("[io::json::write] Failed to serialize")
}
