use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Load the input buffer from a file, or stdin when `path` is `-`.
///
/// With `hex_text`, the input is parsed as hex digits with all ASCII
/// whitespace removed first, so `xxd -p` output and hand-typed
/// `"0a 05 68 65"` both work.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid hex.
pub fn load(path: &Path, hex_text: bool) -> Result<Vec<u8>> {
    load_with_stdin(path, hex_text, io::stdin().lock())
}

/// [`load`] with `stdin` standing in for the process's standard input.
fn load_with_stdin(path: &Path, hex_text: bool, mut stdin: impl Read) -> Result<Vec<u8>> {
    let raw = if path == Path::new("-") {
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf).context("cannot read stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
    };

    debug!(path = %path.display(), bytes = raw.len(), hex_text, "input loaded");
    decode(raw, hex_text)
}

/// Turn loaded input into the buffer to read: as-is, or hex-decoded.
fn decode(raw: Vec<u8>, hex_text: bool) -> Result<Vec<u8>> {
    if !hex_text {
        return Ok(raw);
    }

    let digits: Vec<u8> = raw
        .into_iter()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    hex::decode(&digits).context("input is not valid hex")
}

/// Render `bytes` as space-separated lowercase hex pairs.
pub fn hex_pairs(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write a hex dump of `bytes`, `width` bytes per line, indented by `indent`.
///
/// Offsets are absolute, starting at `base`.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_hex_dump(
    out: &mut impl Write,
    bytes: &[u8],
    base: usize,
    width: usize,
    indent: &str,
) -> io::Result<()> {
    let width = width.max(1);
    for (i, chunk) in bytes.chunks(width).enumerate() {
        let offset = base + i * width;
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        let hex = hex_pairs(chunk);
        writeln!(out, "{indent}{offset:06x}  {hex:<w$}  {ascii}", w = width * 3 - 1)?;
    }
    Ok(())
}
