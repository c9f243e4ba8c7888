//! Output file handling

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{Error, Result};

/// Characters a file name taken from a waypoint name must not carry
const UNSAFE_FILE_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Write the whole document, replacing any existing file
pub fn write_text_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let failed = |source: std::io::Error| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(failed)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(failed)?;
    writer.flush().map_err(failed)?;

    info!("{} bytes written to {}", content.len(), path.display());

    Ok(())
}

/// Default `.gpx` file name for a waypoint name
pub fn suggest_file_name(name: &str) -> String {
    let mut stem: String = name
        .trim()
        .chars()
        .map(|c| if UNSAFE_FILE_CHARS.contains(&c) { '_' } else { c })
        .collect();

    if stem.is_empty() {
        stem = "waypoint".to_string();
    }

    format!("{}.gpx", stem)
}
