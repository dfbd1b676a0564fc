//! Writing the `.appiconset` directory: replacement policy, file copies and manifest.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use same_file::is_same_file;
use tracing::{debug, info};

use crate::config::{CONTENTS_FILE, ValidatedConfig};
use crate::error::{IconsetError, IconsetResult};
use crate::models::{BuildReport, FileToCopy, MatchOutcome};

/// Create the bundle directory for `config` and populate it from `outcome`.
///
/// An existing bundle is deleted first when `config.remove` is set, otherwise the call
/// fails before anything on disk is touched. A failed copy aborts the remaining copies and
/// leaves whatever was already written in place.
pub fn write_bundle(config: &ValidatedConfig, outcome: &MatchOutcome) -> IconsetResult<BuildReport> {
  let bundle_dir = config.bundle_dir();

  clear_existing_bundle(config, &bundle_dir)?;

  fs::create_dir(&bundle_dir)
    .map_err(|err| IconsetError::io("create directory", &bundle_dir, err))?;

  for file in &outcome.files_to_copy {
    copy_into_bundle(file, &bundle_dir)?;
  }

  let manifest = outcome.manifest();
  let contents_path = bundle_dir.join(CONTENTS_FILE);
  let json = manifest.to_json()?;
  fs::write(&contents_path, json).map_err(|err| IconsetError::io("write", &contents_path, err))?;

  info!(
    bundle = %bundle_dir.display(),
    images = manifest.images.len(),
    files = outcome.files_to_copy.len(),
    "wrote app icon set"
  );

  Ok(BuildReport {
    bundle_dir,
    manifest,
    copied_files: outcome.files_to_copy.len(),
  })
}

fn clear_existing_bundle(config: &ValidatedConfig, bundle_dir: &Path) -> IconsetResult<()> {
  match fs::symlink_metadata(bundle_dir) {
    Ok(_) => {}
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
    Err(err) => return Err(IconsetError::io("inspect", bundle_dir, err)),
  }

  if !config.remove {
    return Err(IconsetError::Conflict {
      bundle_name: config.bundle_dir_name(),
      output_dir: config.output_dir.clone(),
    });
  }

  if is_same_file(&config.input_dir, bundle_dir).unwrap_or(false)
    || is_nested_in(&config.input_dir, bundle_dir)
  {
    return Err(IconsetError::InputIsBundle {
      path: bundle_dir.to_path_buf(),
    });
  }

  debug!(bundle = %bundle_dir.display(), "removing existing app icon set");
  remove_path(bundle_dir).map_err(|err| IconsetError::io("remove", bundle_dir, err))
}

fn is_nested_in(path: &Path, dir: &Path) -> bool {
  match (path.canonicalize(), dir.canonicalize()) {
    (Ok(path), Ok(dir)) => path.starts_with(dir),
    _ => false,
  }
}

fn remove_path(path: &Path) -> std::io::Result<()> {
  if fs::symlink_metadata(path)?.is_dir() {
    fs::remove_dir_all(path)
  } else {
    fs::remove_file(path)
  }
}

fn copy_into_bundle(file: &FileToCopy, bundle_dir: &Path) -> IconsetResult<()> {
  let destination = bundle_dir.join(&file.filename);
  if let Err(err) = fs::copy(&file.path, &destination) {
    return Err(IconsetError::Copy {
      from: file.path.clone(),
      to: destination,
      source: err,
    });
  }
  debug!(
    source = %file.path.display(),
    destination = %destination.display(),
    "copied icon"
  );
  Ok(())
}
