//! CLI command implementations.

pub mod schema;
pub mod seed;

use std::io::Write;
use std::path::Path;

/// Write `content` to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the file or stdout cannot be written.
pub fn emit(content: &str, output: Option<&Path>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
