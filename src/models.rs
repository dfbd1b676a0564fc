//! Data structures produced while assembling an icon bundle.

use std::path::PathBuf;

use serde::Serialize;

/// Pixel dimensions reported for a source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
  /// Width in pixels.
  pub width: f64,
  /// Height in pixels.
  pub height: f64,
}

/// A candidate source file together with its probed size.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
  /// Full path of the file inside the input directory.
  pub path: PathBuf,
  /// Width in pixels as reported by the probe.
  pub width: f64,
  /// Height in pixels as reported by the probe.
  pub height: f64,
  /// File name component of `path`, used as the name inside the bundle.
  pub filename: String,
}

impl SourceImage {
  /// Returns `true` when the image is exactly `width` by `height` pixels.
  pub fn has_dimensions(&self, width: f64, height: f64) -> bool {
    self.width == width && self.height == height
  }
}

/// A source file that has to be copied into the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToCopy {
  /// Path of the source file.
  pub path: PathBuf,
  /// Destination name inside the bundle directory.
  pub filename: String,
}

/// One image record of `Contents.json`.
///
/// Field order is the serialisation order Xcode writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
  /// Point size, for example `20x20` or `83.5x83.5`.
  pub size: String,
  /// Device family the variant applies to.
  pub idiom: String,
  /// File name inside the bundle.
  pub filename: String,
  /// Scale factor, for example `2x`.
  pub scale: String,
}

/// The `info` block of `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestInfo {
  /// Schema version.
  pub version: u32,
  /// Tool identifier expected by Xcode.
  pub author: String,
}

impl Default for ManifestInfo {
  fn default() -> Self {
    Self {
      version: 1,
      author: "xcode".into(),
    }
  }
}

/// Serializable representation of the bundle's `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
  /// Matched variants in catalog order.
  pub images: Vec<ManifestEntry>,
  /// Fixed metadata block.
  pub info: ManifestInfo,
}

impl Manifest {
  /// Wrap matched entries with the standard metadata block.
  pub fn new(images: Vec<ManifestEntry>) -> Self {
    Self {
      images,
      info: ManifestInfo::default(),
    }
  }

  /// Render the manifest as two-space indented JSON without a trailing newline.
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

/// Result of matching an inventory against the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
  /// Files to copy, unique by source path, in first-use order.
  pub files_to_copy: Vec<FileToCopy>,
  /// Manifest entries in catalog order, then scale order.
  pub images: Vec<ManifestEntry>,
}

impl MatchOutcome {
  /// Build the manifest written alongside the copied files.
  pub fn manifest(&self) -> Manifest {
    Manifest::new(self.images.clone())
  }
}

/// Summary returned once a bundle has been written.
#[derive(Debug, Clone)]
pub struct BuildReport {
  /// Directory the bundle was written to.
  pub bundle_dir: PathBuf,
  /// Manifest serialised into the bundle.
  pub manifest: Manifest,
  /// Number of files copied into the bundle.
  pub copied_files: usize,
}
