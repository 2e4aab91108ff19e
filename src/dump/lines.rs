/// Hex encoding and fixed-width line chunking.
use std::path::Path;

use super::errors::DumpError;

/// Iterator over fixed-width lines of a hex-encoded payload.
///
/// Yields non-overlapping chunks of `2 × width` hex characters, left to
/// right. The final chunk may be shorter when the encoded length is not an
/// exact multiple; no padding is added. Finite and not restartable.
#[derive(Debug)]
pub struct HexLines {
    text: String,
    chars_per_line: usize,
    pos: usize,
}

impl Iterator for HexLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pos >= self.text.len() {
            return None;
        }
        let end = usize::min(self.pos + self.chars_per_line, self.text.len());
        let line = self.text[self.pos..end].to_owned();
        self.pos = end;
        Some(line)
    }
}

/// Encode `data` as lowercase hex and chunk it into lines of `width` bytes
/// (`2 × width` characters) each.
///
/// # Errors
///
/// Returns `DumpError::InvalidWidth` when `width` is zero.
pub fn hex_lines(data: &[u8], width: usize) -> Result<HexLines, DumpError> {
    if width == 0 {
        return Err(DumpError::InvalidWidth { width });
    }
    Ok(HexLines {
        text: hex::encode(data),
        chars_per_line: width * 2,
        pos: 0,
    })
}

/// Read `path` fully into memory and return its hex-dump lines.
///
/// The whole file is loaded at once; there is no streaming mode.
///
/// # Errors
///
/// Returns `DumpError::InvalidWidth` for a zero width and `DumpError::Read`
/// when the file cannot be opened or read.
pub fn dump_file(path: &Path, width: usize) -> Result<HexLines, DumpError> {
    let data = std::fs::read(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    hex_lines(&data, width)
}
