//! Output assembly and file writing for the generated extensions.
//!
//! This module drives a full generation run: it checks the destination,
//! renders every descriptor of a [`Catalog`] through a [`CodeWriter`], and
//! replaces the destination file only once all text has been written.
//!
//! ## Output Structure
//!
//! ```text
//! // header warning
//! using ...;                      // fixed block
//! namespace Flurl.Http {
//!     public static class GeneratedExtensions {
//!         ...request methods      // enumeration order
//!         ...fluent methods       // per URL-like receiver
//!     }
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Pre-check**: a missing destination directory fails before any write
//! - **Atomic writes**: output is staged in `<destination>.tmp` and renamed
//!   over the destination on success; on any failure the staged file is
//!   removed and the destination keeps its previous contents
//! - **Determinism**: the same catalog always renders to the same bytes

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use fluent_define::{Catalog, Receiver};
use tracing::{debug, info};

use crate::codegen::{write_closing, write_fluent_method, write_preamble, write_request_method};
use crate::errors::GeneratorError;
use crate::writer::CodeWriter;

/// Destination used when none is given, relative to the generator's
/// working directory.
pub const DEFAULT_DESTINATION: &str = "../Flurl.Http/GeneratedExtensions.cs";

/// Summary of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    /// Request method blocks rendered.
    pub request_methods: usize,
    /// Fluent method blocks rendered (one per method per URL-like receiver).
    pub fluent_methods: usize,
    pub lines: usize,
    pub bytes: u64,
}

/// Renders the complete file for `catalog` into `writer`.
///
/// Writes the preamble, every request method in order, every fluent method
/// once per URL-like receiver, and the closing braces. The writer ends at
/// the depth it started at.
///
/// ## Errors
///
/// Returns the sink's I/O error unchanged.
pub fn render<W: Write>(catalog: &Catalog, writer: &mut CodeWriter<W>) -> io::Result<()> {
    write_preamble(writer)?;

    let mut current = None;
    for method in &catalog.request_methods {
        announce(&mut current, &method.name);
        write_request_method(writer, method)?;
    }

    for receiver in Receiver::URL_LIKE {
        for method in &catalog.fluent_methods {
            announce(&mut current, &method.name);
            write_fluent_method(writer, receiver, method)?;
        }
    }

    write_closing(writer)
}

/// Logs the method name once per run of same-named blocks.
fn announce<'a>(current: &mut Option<&'a str>, name: &'a str) {
    if *current != Some(name) {
        debug!("writing {}...", name);
        *current = Some(name);
    }
}

/// Renders `catalog` into a string without touching the file system.
///
/// Used for `--dry-run` and in tests.
pub fn render_to_string(catalog: &Catalog) -> Result<String, GeneratorError> {
    let mut writer = CodeWriter::new(Vec::new());
    render(catalog, &mut writer).map_err(|e| GeneratorError::failure("<memory>", e))?;
    let bytes = writer
        .finish()
        .map_err(|e| GeneratorError::failure("<memory>", e))?;
    String::from_utf8(bytes).map_err(|e| {
        GeneratorError::failure("<memory>", io::Error::new(io::ErrorKind::InvalidData, e))
    })
}

/// Verifies that the directory containing `destination` exists.
///
/// An empty parent (a bare file name) refers to the current directory.
///
/// ## Errors
///
/// Returns `GeneratorError::DestinationNotFound` with the absolute
/// directory path if it does not exist.
pub fn check_destination(destination: &Path) -> Result<(), GeneratorError> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if parent.is_dir() {
        Ok(())
    } else {
        Err(GeneratorError::DestinationNotFound {
            path: std::path::absolute(parent).unwrap_or_else(|_| parent.to_path_buf()),
        })
    }
}

/// Path of the staging file used while `destination` is being generated.
pub fn staging_path(destination: &Path) -> PathBuf {
    let mut name = destination.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// A temp file beside the destination that is renamed into place on
/// [`commit`](StagedFile::commit) and removed on drop otherwise.
struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedFile {
    fn create(target: &Path) -> io::Result<(Self, File)> {
        let temp = staging_path(target);
        let file = File::create(&temp)?;
        let staged = Self {
            temp,
            target: target.to_path_buf(),
            committed: false,
        };
        Ok((staged, file))
    }

    fn commit(mut self, file: File) -> io::Result<()> {
        file.sync_all()?;
        drop(file);
        fs::rename(&self.temp, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            // Best effort; the file may never have been created.
            let _ = fs::remove_file(&self.temp);
        }
    }
}

/// Generates the extensions file for `catalog` at `destination`.
///
/// This is the main entry point for code generation.
///
/// ## Errors
///
/// Returns an error if:
/// - The destination directory does not exist (nothing is written)
/// - Any write, flush or rename fails (the destination is left untouched)
pub fn generate(destination: &Path, catalog: &Catalog) -> Result<GenerationReport, GeneratorError> {
    check_destination(destination)?;
    let fail = |e: io::Error| GeneratorError::failure(destination, e);

    let (staged, file) = StagedFile::create(destination).map_err(fail)?;
    let mut writer = CodeWriter::new(BufWriter::new(file));
    render(catalog, &mut writer).map_err(fail)?;

    let report = GenerationReport {
        request_methods: catalog.request_methods.len(),
        fluent_methods: catalog.fluent_methods.len() * Receiver::URL_LIKE.len(),
        lines: writer.lines_written(),
        bytes: writer.bytes_written(),
    };

    let file = writer
        .finish()
        .map_err(fail)?
        .into_inner()
        .map_err(|e| fail(e.into_error()))?;
    staged.commit(file).map_err(fail)?;

    info!(
        "Wrote {} request and {} fluent methods ({} lines) to {}",
        report.request_methods,
        report.fluent_methods,
        report.lines,
        destination.display()
    );
    Ok(report)
}
