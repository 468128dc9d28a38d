//! CLI entrypoint for the CX documentation filter.
//!
//! The binary delegates to [`docstrip::run`], which rewrites the generated
//! `cx.html` in the current working directory and reports any failure on the
//! locked stderr stream.

use std::io::{self, StderrLock};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    docstrip::run(Path::new(docstrip::DOC_FILE), &mut stderr)
}
