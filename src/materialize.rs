//! Sample materialization
//!
//! Places the selected samples inside the kit folder, either as plain
//! copies or converted to another format by SoX. The assembler only sees
//! the [`Materializer`] trait, so it can be driven without touching real
//! files or external tools.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::{KitError, Result};

/// Name of the external converter used for format conversion.
pub const SOX: &str = "sox";

/// Puts a sample file at its place in the kit folder.
pub trait Materializer {
    /// Create `destination` from `source`.
    ///
    /// Only called when `destination` does not exist yet.
    fn materialize(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// What [`ensure_sample`] did with a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Created,
    AlreadyPresent,
}

/// Materialize `source` at `destination` unless the destination exists.
///
/// An existing destination is left untouched, which makes re-running a
/// conversion into the same kit cheap.
pub fn ensure_sample(
    materializer: &dyn Materializer,
    source: &Path,
    destination: &Path,
) -> Result<Placement> {
    if destination.exists() {
        debug!("Keeping existing {}", destination.display());
        return Ok(Placement::AlreadyPresent);
    }

    materializer.materialize(source, destination)?;
    Ok(Placement::Created)
}

/// File name a sample gets in the kit folder.
///
/// With an output extension (`.flac`, `wav`, ...) the last extension of
/// `file` is replaced, otherwise the name is kept.
pub fn destination_name(file: &str, output_extension: Option<&str>) -> String {
    match output_extension {
        Some(ext) => Path::new(file)
            .with_extension(ext.trim_start_matches('.'))
            .to_string_lossy()
            .into_owned(),
        None => file.to_string(),
    }
}

/// Copies samples unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCopier;

impl Materializer for FileCopier {
    fn materialize(&self, source: &Path, destination: &Path) -> Result<()> {
        info!("Processing {}...", source.display());
        fs::copy(source, destination).map_err(|e| KitError::CopyError {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// Converts samples with the `sox` command line tool.
#[derive(Debug, Clone)]
pub struct SoxConverter {
    program: PathBuf,
}

impl SoxConverter {
    /// Locate `sox` in the folders of `search_path` (`PATH` syntax).
    ///
    /// Fails up front when the tool is missing, before any sample is
    /// touched.
    pub fn locate_in(search_path: &OsStr) -> Result<Self> {
        find_program_in(search_path, SOX)
            .map(|program| Self { program })
            .ok_or_else(|| KitError::ToolNotFound {
                tool: SOX.to_string(),
            })
    }

    /// Use a specific converter executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Materializer for SoxConverter {
    fn materialize(&self, source: &Path, destination: &Path) -> Result<()> {
        info!("Processing {}...", source.display());
        let status = Command::new(&self.program)
            .arg(source)
            .arg(destination)
            .stdout(Stdio::null())
            .status()
            .map_err(|e| KitError::ConversionFailed {
                from: source.to_path_buf(),
                reason: format!("cannot run {}: {}", self.program.display(), e),
            })?;

        if !status.success() {
            return Err(KitError::ConversionFailed {
                from: source.to_path_buf(),
                reason: format!("{} exited with {}", self.program.display(), status),
            });
        }
        Ok(())
    }
}

/// Plans a kit without writing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

impl Materializer for DryRun {
    fn materialize(&self, source: &Path, destination: &Path) -> Result<()> {
        debug!("Would place {} at {}", source.display(), destination.display());
        Ok(())
    }
}

/// Search the folders of `search_path` for an executable called `name`.
///
/// Files that exist but cannot be executed are passed over, so a later
/// folder can still provide the program.
pub fn find_program_in(search_path: &OsStr, name: &str) -> Option<PathBuf> {
    env::split_paths(search_path)
        .flat_map(|dir| candidates(&dir, name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{}.exe", name)), dir.join(name)]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}
