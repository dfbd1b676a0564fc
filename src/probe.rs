//! Pixel-size lookup for source images.
//!
//! The matcher only needs a width and height per file. That lookup lives behind
//! [`DimensionProbe`] so the pipeline can be driven by ImageMagick in production and by an
//! in-memory table in tests.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::ProbeError;
use crate::models::Dimensions;

/// Capability for reading the pixel dimensions of an image file.
pub trait DimensionProbe {
  /// Returns `true` when the probe can be used at all.
  fn is_available(&self) -> bool;

  /// Look up the width and height of the image at `path`.
  fn probe(&self, path: &Path) -> Result<Dimensions, ProbeError>;

  /// Name shown to the user when the probe is missing.
  fn name(&self) -> &str;
}

/// Probe backed by ImageMagick's `identify` command.
#[derive(Debug, Clone)]
pub struct IdentifyProbe {
  program: PathBuf,
}

impl IdentifyProbe {
  /// Create a probe that runs `program`, looked up on `PATH` unless it contains a separator.
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
    }
  }

  fn display_name(&self) -> String {
    self.program.to_string_lossy().into_owned()
  }
}

impl DimensionProbe for IdentifyProbe {
  fn is_available(&self) -> bool {
    resolve_program(&self.program, env::var_os("PATH")).is_some()
  }

  fn probe(&self, path: &Path) -> Result<Dimensions, ProbeError> {
    let output = Command::new(&self.program)
      .args(["-format", "%w %h"])
      .arg(path)
      .output()
      .map_err(|err| ProbeError::Command {
        program: self.display_name(),
        detail: err.to_string(),
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ProbeError::Command {
        program: self.display_name(),
        detail: format!("{} {}", output.status, stderr.trim()),
      });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let dimensions = parse_dimensions(&stdout)?;
    debug!(
      path = %path.display(),
      width = dimensions.width,
      height = dimensions.height,
      "probed image"
    );
    Ok(dimensions)
  }

  fn name(&self) -> &str {
    self
      .program
      .file_name()
      .and_then(|name| name.to_str())
      .unwrap_or("identify")
  }
}

fn dimensions_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s+(\d+(?:\.\d+)?)\s*$").expect("invalid dimensions regex")
  })
}

/// Parse `"<width> <height>"` as printed by `identify -format '%w %h'`.
pub fn parse_dimensions(output: &str) -> Result<Dimensions, ProbeError> {
  let parse_error = || ProbeError::Parse {
    output: output.to_string(),
  };
  let caps = dimensions_pattern().captures(output).ok_or_else(parse_error)?;
  let width = caps[1].parse::<f64>().map_err(|_| parse_error())?;
  let height = caps[2].parse::<f64>().map_err(|_| parse_error())?;
  Ok(Dimensions { width, height })
}

/// Locate `program` the way a shell would: directly when it contains a path separator,
/// otherwise in each directory of `search_path`.
fn resolve_program(program: &Path, search_path: Option<OsString>) -> Option<PathBuf> {
  if program.components().count() > 1 {
    return is_executable(program).then(|| program.to_path_buf());
  }

  let search_path = search_path?;
  env::split_paths(&search_path)
    .map(|dir| dir.join(program))
    .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;

  path
    .metadata()
    .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
  path.is_file()
}
