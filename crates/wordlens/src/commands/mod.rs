//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod frequency;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod transform;
pub mod watch;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a document and validate its size against the configured limit.
///
/// A path of `-` reads standard input.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Read one byte past the limit so oversized input is detected without
    // buffering all of it.
    let limit = max_bytes.map_or(u64::MAX, |max| max as u64 + 1);
    let mut content = String::new();
    std::io::stdin()
        .lock()
        .take(limit)
        .read_to_string(&mut content)
        .context("failed to read standard input")?;
    if let Some(max) = max_bytes
        && content.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    Ok(content)
}

/// Check an in-memory document against the configured limit.
pub fn check_input_size(text: &str, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && text.len() > max
    {
        anyhow::bail!(
            "input too large: {} bytes (limit: {max} bytes)",
            text.len()
        );
    }
    Ok(())
}
