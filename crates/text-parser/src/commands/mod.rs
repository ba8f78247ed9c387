//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read standard input, failing once it exceeds the configured limit.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), max_bytes, "stdin")
}

fn read_limited(reader: impl Read, max_bytes: Option<usize>, name: &str) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {name}"))?;
            if content.len() > max {
                anyhow::bail!("input too large: {name} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {name}"))?;
        }
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn missing_file_is_an_error() {
        let err = read_input_file(Utf8Path::new("/nonexistent/input.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn limited_reader_accepts_input_at_limit() {
        let text = read_limited(Cursor::new("hello"), Some(5), "test").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn limited_reader_rejects_oversized_input() {
        let err = read_limited(Cursor::new("hello world"), Some(5), "test").unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn unlimited_reader_reads_everything() {
        let text = read_limited(Cursor::new("hello world"), None, "test").unwrap();
        assert_eq!(text, "hello world");
    }
}
