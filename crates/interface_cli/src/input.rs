//! Request input from a file or stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context};

/// Reads a request file
pub fn read_file(path: &Path) -> anyhow::Result<String> {
    if !path.is_file() {
        bail!("Not a file: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

/// Reads a request from stdin
pub fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read request from stdin")?;

    if buffer.trim().is_empty() {
        bail!("No request on stdin; pass --input <PATH> or pipe a JSON request");
    }
    Ok(buffer)
}
