//! Run configuration for a single bundle build.

use std::path::PathBuf;

use crate::error::{IconsetError, IconsetResult};

/// Bundle name used when none is given.
pub const DEFAULT_BUNDLE_NAME: &str = "AppIcon";
/// Extension Xcode expects on app icon set directories.
pub const APPICONSET_EXTENSION: &str = ".appiconset";
/// Manifest file written inside the bundle.
pub const CONTENTS_FILE: &str = "Contents.json";
/// Extension of the source images picked up from the input directory.
pub const IMAGE_EXTENSION: &str = "png";
/// Program used to read image dimensions.
pub const IDENTIFY_PROGRAM: &str = "identify";

/// Everything a bundle build needs, passed explicitly through each stage.
#[derive(Debug, Clone)]
pub struct BundleConfig {
  /// Directory holding the source PNG files.
  pub input_dir: Option<PathBuf>,
  /// Directory the bundle is created in.
  pub output_dir: Option<PathBuf>,
  /// Bundle name, with or without the `.appiconset` extension.
  pub name: String,
  /// Replace an existing bundle instead of failing.
  pub remove: bool,
  /// Dimension lookup program.
  pub identify_program: PathBuf,
}

impl Default for BundleConfig {
  fn default() -> Self {
    Self {
      input_dir: None,
      output_dir: None,
      name: DEFAULT_BUNDLE_NAME.into(),
      remove: false,
      identify_program: IDENTIFY_PROGRAM.into(),
    }
  }
}

/// Configuration whose directories have been checked to exist.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
  /// Directory holding the source PNG files.
  pub input_dir: PathBuf,
  /// Directory the bundle is created in.
  pub output_dir: PathBuf,
  /// Bundle name without the `.appiconset` extension.
  pub name: String,
  /// Replace an existing bundle instead of failing.
  pub remove: bool,
}

impl ValidatedConfig {
  /// Directory name of the bundle, e.g. `AppIcon.appiconset`.
  pub fn bundle_dir_name(&self) -> String {
    format!("{}{}", self.name, APPICONSET_EXTENSION)
  }

  /// Full path of the bundle directory.
  pub fn bundle_dir(&self) -> PathBuf {
    self.output_dir.join(self.bundle_dir_name())
  }
}

impl BundleConfig {
  /// Check the options in the order users see them, reporting the first problem.
  pub fn validate(&self) -> IconsetResult<ValidatedConfig> {
    let input_dir = self
      .input_dir
      .as_deref()
      .ok_or_else(|| usage("Input directory must be specified."))?;
    let output_dir = self
      .output_dir
      .as_deref()
      .ok_or_else(|| usage("Output directory must be specified."))?;

    require(input_dir.exists(), "Input directory does not exist.")?;
    require(output_dir.exists(), "Output directory does not exist.")?;
    require(input_dir.is_dir(), "Specified input is not a directory.")?;
    require(output_dir.is_dir(), "Specified output is not a directory.")?;

    Ok(ValidatedConfig {
      input_dir: input_dir.to_path_buf(),
      output_dir: output_dir.to_path_buf(),
      name: strip_appiconset_extension(&self.name).to_string(),
      remove: self.remove,
    })
  }
}

/// Remove one trailing `.appiconset`, matched case-sensitively.
pub fn strip_appiconset_extension(name: &str) -> &str {
  name.strip_suffix(APPICONSET_EXTENSION).unwrap_or(name)
}

fn require(condition: bool, message: &str) -> IconsetResult<()> {
  if condition { Ok(()) } else { Err(usage(message)) }
}

fn usage(message: &str) -> IconsetError {
  IconsetError::Usage(message.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn usage_message(config: &BundleConfig) -> String {
    match config.validate() {
      Err(IconsetError::Usage(message)) => message,
      other => panic!("expected usage error, got {other:?}"),
    }
  }

  #[test]
  fn strips_single_trailing_extension() {
    assert_eq!(strip_appiconset_extension("Foo.appiconset"), "Foo");
    assert_eq!(strip_appiconset_extension("Foo"), "Foo");
    assert_eq!(strip_appiconset_extension("Foo.APPICONSET"), "Foo.APPICONSET");
    assert_eq!(
      strip_appiconset_extension("Foo.appiconset.appiconset"),
      "Foo.appiconset"
    );
  }

  #[test]
  fn reports_missing_options_first() {
    let config = BundleConfig::default();
    assert_eq!(usage_message(&config), "Input directory must be specified.");

    let config = BundleConfig {
      input_dir: Some("nowhere".into()),
      ..BundleConfig::default()
    };
    assert_eq!(usage_message(&config), "Output directory must be specified.");
  }

  #[test]
  fn reports_missing_and_non_directory_paths() {
    let temp = tempdir().unwrap();
    let dir = temp.path().to_path_buf();
    let file = temp.path().join("file.png");
    fs::write(&file, b"png").unwrap();

    let config = BundleConfig {
      input_dir: Some(dir.join("missing")),
      output_dir: Some(dir.clone()),
      ..BundleConfig::default()
    };
    assert_eq!(usage_message(&config), "Input directory does not exist.");

    let config = BundleConfig {
      input_dir: Some(dir.clone()),
      output_dir: Some(dir.join("missing")),
      ..BundleConfig::default()
    };
    assert_eq!(usage_message(&config), "Output directory does not exist.");

    let config = BundleConfig {
      input_dir: Some(file.clone()),
      output_dir: Some(dir.clone()),
      ..BundleConfig::default()
    };
    assert_eq!(usage_message(&config), "Specified input is not a directory.");

    let config = BundleConfig {
      input_dir: Some(dir.clone()),
      output_dir: Some(file),
      ..BundleConfig::default()
    };
    assert_eq!(usage_message(&config), "Specified output is not a directory.");
  }

  #[test]
  fn validated_config_resolves_bundle_path() {
    let temp = tempdir().unwrap();
    let config = BundleConfig {
      input_dir: Some(temp.path().to_path_buf()),
      output_dir: Some(temp.path().to_path_buf()),
      name: "Foo.appiconset".into(),
      remove: true,
      ..BundleConfig::default()
    };

    let validated = config.validate().unwrap();
    assert_eq!(validated.name, "Foo");
    assert!(validated.remove);
    assert_eq!(validated.bundle_dir(), temp.path().join("Foo.appiconset"));
  }
}
