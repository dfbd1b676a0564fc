//! Error types shared by every stage of the bundle pipeline.

use std::path::{Path, PathBuf};

/// Errors raised by a [`crate::probe::DimensionProbe`].
#[derive(Debug)]
pub enum ProbeError {
  /// The inspection program could not be started or exited unsuccessfully.
  Command {
    /// Program that was invoked.
    program: String,
    /// Exit status or spawn failure, rendered for display.
    detail: String,
  },
  /// The inspection program printed something other than two numbers.
  Parse {
    /// Raw output that failed to parse.
    output: String,
  },
}

/// Errors that terminate a bundle build.
#[derive(Debug)]
pub enum IconsetError {
  /// Invalid or missing command line input.
  Usage(String),
  /// The dimension probe is not installed.
  MissingTool {
    /// Name of the program that was looked up.
    program: String,
  },
  /// The bundle directory already exists and may not be replaced.
  Conflict {
    /// Bundle directory name, including the `.appiconset` extension.
    bundle_name: String,
    /// Directory the bundle would have been written to.
    output_dir: PathBuf,
  },
  /// Replacing the bundle would delete the input directory.
  InputIsBundle {
    /// Bundle directory that is, or contains, the input directory.
    path: PathBuf,
  },
  /// Looking up the dimensions of a source image failed.
  Probe {
    /// Image being inspected.
    path: PathBuf,
    /// Underlying probe failure.
    source: ProbeError,
  },
  /// A filesystem operation failed.
  Io {
    /// What was being attempted.
    action: &'static str,
    /// Path the operation targeted.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Copying a source image into the bundle failed.
  Copy {
    /// Image being copied.
    from: PathBuf,
    /// Destination inside the bundle.
    to: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The manifest could not be encoded.
  Serialize(serde_json::Error),
}

impl IconsetError {
  /// Wrap an I/O error with the action and path it relates to.
  pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
    Self::Io {
      action,
      path: path.to_path_buf(),
      source,
    }
  }

  /// Process exit status reported for this error.
  pub fn exit_code(&self) -> i32 {
    1
  }
}

impl std::fmt::Display for ProbeError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Command { program, detail } => write!(f, "{program} failed: {detail}"),
      Self::Parse { output } => {
        write!(f, "expected \"<width> <height>\" but got {:?}", output)
      }
    }
  }
}

impl std::error::Error for ProbeError {}

impl std::fmt::Display for IconsetError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Usage(message) => f.write_str(message),
      Self::MissingTool { program } => write!(
        f,
        "The {program} command was not found. Make sure that ImageMagick is installed."
      ),
      Self::Conflict {
        bundle_name,
        output_dir,
      } => write!(
        f,
        "{bundle_name} already exists in {}.\nSpecify the --remove option to remove the appiconset.",
        output_dir.display()
      ),
      Self::InputIsBundle { path } => write!(
        f,
        "{} holds the input directory and cannot be removed.",
        path.display()
      ),
      Self::Probe { path, source } => {
        write!(f, "failed to read image size of {}: {}", path.display(), source)
      }
      Self::Io {
        action,
        path,
        source,
      } => write!(f, "failed to {action} {}: {source}", path.display()),
      Self::Copy { from, to, source } => write!(
        f,
        "failed to copy {} to {}: {source}",
        from.display(),
        to.display()
      ),
      Self::Serialize(source) => write!(f, "failed to encode Contents.json: {source}"),
    }
  }
}

impl std::error::Error for IconsetError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Probe { source, .. } => Some(source),
      Self::Io { source, .. } => Some(source),
      Self::Copy { source, .. } => Some(source),
      Self::Serialize(source) => Some(source),
      _ => None,
    }
  }
}

impl From<serde_json::Error> for IconsetError {
  fn from(err: serde_json::Error) -> Self {
    Self::Serialize(err)
  }
}

/// Result alias used across the crate.
pub type IconsetResult<T> = Result<T, IconsetError>;
