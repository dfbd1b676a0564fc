//! Directory listing and size inventory of candidate source images.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconsetError, IconsetResult};
use crate::models::SourceImage;
use crate::probe::DimensionProbe;

/// List regular files in `dir` whose name ends with `.{extension}`.
///
/// The match is case-sensitive. Paths are sorted by file name so later tie-breaks do not
/// depend on the order the platform returns directory entries in.
pub fn list_candidate_images(dir: &Path, extension: &str) -> IconsetResult<Vec<PathBuf>> {
  let suffix = format!(".{extension}");
  let entries =
    fs::read_dir(dir).map_err(|err| IconsetError::io("read directory", dir, err))?;

  let mut paths = Vec::new();
  for entry in entries {
    let entry = entry.map_err(|err| IconsetError::io("read directory", dir, err))?;
    let file_name = entry.file_name();
    if !file_name.as_encoded_bytes().ends_with(suffix.as_bytes()) {
      continue;
    }

    let path = entry.path();
    if path.is_file() {
      paths.push(path);
    }
  }

  paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
  Ok(paths)
}

/// Probe every path in order, failing on the first file whose size cannot be read.
pub fn build_inventory<P: DimensionProbe + ?Sized>(
  paths: &[PathBuf],
  probe: &P,
) -> IconsetResult<Vec<SourceImage>> {
  paths
    .iter()
    .map(|path| -> IconsetResult<SourceImage> {
      let dimensions = probe.probe(path).map_err(|source| IconsetError::Probe {
        path: path.clone(),
        source,
      })?;
      Ok(SourceImage {
        path: path.clone(),
        width: dimensions.width,
        height: dimensions.height,
        filename: file_name_of(path),
      })
    })
    .collect()
}

fn file_name_of(path: &Path) -> String {
  path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use std::cell::RefCell;
  use std::collections::BTreeMap;
  use tempfile::tempdir;

  use crate::error::ProbeError;
  use crate::models::Dimensions;

  /// In-memory probe keyed by file name.
  #[derive(Default)]
  pub(crate) struct FakeProbe {
    pub(crate) available: bool,
    pub(crate) sizes: BTreeMap<String, (f64, f64)>,
    pub(crate) calls: RefCell<Vec<String>>,
  }

  impl FakeProbe {
    pub(crate) fn with_sizes(sizes: &[(&str, f64, f64)]) -> Self {
      Self {
        available: true,
        sizes: sizes
          .iter()
          .map(|(name, w, h)| (name.to_string(), (*w, *h)))
          .collect(),
        calls: RefCell::new(Vec::new()),
      }
    }
  }

  impl DimensionProbe for FakeProbe {
    fn is_available(&self) -> bool {
      self.available
    }

    fn probe(&self, path: &Path) -> Result<Dimensions, ProbeError> {
      let name = file_name_of(path);
      self.calls.borrow_mut().push(name.clone());
      self
        .sizes
        .get(&name)
        .map(|&(width, height)| Dimensions { width, height })
        .ok_or(ProbeError::Parse {
          output: String::new(),
        })
    }

    fn name(&self) -> &str {
      "identify"
    }
  }

  #[test]
  fn lists_only_png_files_sorted_by_name() {
    let dir = tempdir().unwrap();
    for name in ["b.png", "a.png", "c.PNG", "notes.txt", "icon.png.bak"] {
      fs::write(dir.path().join(name), b"data").unwrap();
    }
    fs::create_dir(dir.path().join("folder.png")).unwrap();

    let paths = list_candidate_images(dir.path(), "png").unwrap();
    let names: Vec<String> = paths.iter().map(|p| file_name_of(p)).collect();
    assert_eq!(names, vec!["a.png", "b.png"]);
  }

  #[cfg(target_os = "linux")]
  #[test]
  fn lists_files_with_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let name = OsStr::from_bytes(b"ic\xffon.png");
    fs::write(dir.path().join(name), b"data").unwrap();
    fs::write(dir.path().join(OsStr::from_bytes(b"ic\xffon.txt")), b"data").unwrap();

    let paths = list_candidate_images(dir.path(), "png").unwrap();
    assert_eq!(paths, vec![dir.path().join(name)]);
  }

  #[test]
  fn listing_missing_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = list_candidate_images(&dir.path().join("missing"), "png").unwrap_err();
    assert!(matches!(err, IconsetError::Io { .. }));
  }

  #[test]
  fn inventory_preserves_order_and_sizes() {
    let probe = FakeProbe::with_sizes(&[("a.png", 40.0, 40.0), ("b.png", 120.0, 120.0)]);
    let paths = vec![PathBuf::from("in/b.png"), PathBuf::from("in/a.png")];

    let inventory = build_inventory(&paths, &probe).unwrap();
    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory[0].filename, "b.png");
    assert_eq!(inventory[0].width, 120.0);
    assert_eq!(inventory[1].path, PathBuf::from("in/a.png"));
    assert_eq!(inventory[1].height, 40.0);
  }

  #[test]
  fn inventory_stops_at_first_failure() {
    let probe = FakeProbe::with_sizes(&[("a.png", 40.0, 40.0), ("c.png", 60.0, 60.0)]);
    let paths = vec![
      PathBuf::from("a.png"),
      PathBuf::from("broken.png"),
      PathBuf::from("c.png"),
    ];

    let err = build_inventory(&paths, &probe).unwrap_err();
    match err {
      IconsetError::Probe { path, .. } => assert_eq!(path, PathBuf::from("broken.png")),
      other => panic!("unexpected error: {other}"),
    }
    assert_eq!(*probe.calls.borrow(), vec!["a.png", "broken.png"]);
  }
}
