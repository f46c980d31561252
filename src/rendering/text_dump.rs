use std::fmt::Display;
use std::path::Path;

use raster_ops::Buffer2D;

use crate::error::DumpError;

/// Render a buffer as text: one line per row, values separated by commas,
/// every line newline-terminated.
pub fn format_matrix<T: Display>(matrix: &Buffer2D<T>) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Write [`format_matrix`] output to `path`, replacing any existing file.
pub fn write_matrix<T: Display>(matrix: &Buffer2D<T>, path: &Path) -> Result<(), DumpError> {
    std::fs::write(path, format_matrix(matrix)).map_err(|source| DumpError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Wrote matrix dump");
    Ok(())
}
