//! Post-processing filter for generated CX API documentation.
//!
//! The documentation generator renders a "Parameters" table and a "Return
//! Value" paragraph under every API entry, duplicating the prose above them.
//! This crate deletes both kinds of block from the rendered `cx.html`,
//! rewriting the file in place. The interface is designed to be exercised
//! both from the binary entrypoint and from tests where the document path and
//! stderr stream can be substituted.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;

mod filter;

pub use filter::strip_generated_sections;

/// Document rewritten by the binary, relative to the working directory.
pub const DOC_FILE: &str = "cx.html";

/// Failures raised while rewriting the documentation file.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The document could not be loaded into memory.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the document that failed to load.
        path: PathBuf,
        /// Underlying IO failure, including invalid UTF-8 content.
        source: io::Error,
    },
    /// The filtered document could not be persisted.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path of the document that failed to persist.
        path: PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
}

/// Reads the document at `path`, strips the generated sections, and writes
/// the result back to the same path.
///
/// The document is rewritten even when no block matched, so a run always
/// refreshes the file's modification time.
///
/// # Errors
///
/// Returns [`FilterError::Read`] when the document cannot be loaded (missing
/// file, unreadable file, or bytes that are not valid UTF-8) and
/// [`FilterError::Write`] when persisting the filtered text fails.
///
/// # Examples
/// ```no_run
/// use docstrip::rewrite_in_place;
///
/// let doc = std::env::temp_dir().join(docstrip::DOC_FILE);
/// std::fs::write(
///     &doc,
///     "<h4 class=\"parameters\">P</h4><table class=\"list\"></table><p>kept</p>",
/// )
/// .expect("seed document");
/// rewrite_in_place(&doc).expect("rewrite failed");
///
/// assert_eq!(std::fs::read_to_string(&doc).expect("read back"), "<p>kept</p>");
/// ```
pub fn rewrite_in_place(path: &Path) -> Result<(), FilterError> {
    let text = fs::read_to_string(path).map_err(|source| FilterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cleaned = strip_generated_sections(&text);
    fs::write(path, cleaned.as_bytes()).map_err(|source| FilterError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Filters the document at `doc_path` and maps the outcome to an exit code.
///
/// Successful runs are silent. Failures print their diagnostic to `stderr`
/// and return [`ExitCode::FAILURE`] so a calling build script aborts instead
/// of publishing a half-filtered document.
#[must_use]
pub fn run<E: Write>(doc_path: &Path, stderr: &mut E) -> ExitCode {
    match rewrite_in_place(doc_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}
