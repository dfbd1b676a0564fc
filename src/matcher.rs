//! Matching probed images against the icon catalog.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::catalog::{CatalogEntry, scale_label};
use crate::models::{FileToCopy, ManifestEntry, MatchOutcome, SourceImage};

/// Resolve every (variant, scale) pair of `catalog` to a source image.
///
/// Entries are visited in catalog order and scales in declared order. For each pair the
/// first image in `inventory` whose size equals the required pixel size exactly is used;
/// pairs without such an image are left out. Each source path appears at most once in
/// [`MatchOutcome::files_to_copy`], however many variants it satisfies.
pub fn match_catalog(inventory: &[SourceImage], catalog: &[CatalogEntry]) -> MatchOutcome {
  let mut outcome = MatchOutcome::default();
  let mut copied: BTreeSet<&Path> = BTreeSet::new();

  for entry in catalog {
    for &scale in entry.scales {
      let (width, height) = entry.pixel_size(scale);
      let Some(image) = inventory
        .iter()
        .find(|image| image.has_dimensions(width, height))
      else {
        debug!(
          size = %entry.size_label(),
          idiom = entry.idiom,
          scale,
          "no {width}x{height} image, skipping variant"
        );
        continue;
      };

      if copied.insert(image.path.as_path()) {
        outcome.files_to_copy.push(FileToCopy {
          path: image.path.clone(),
          filename: image.filename.clone(),
        });
      }

      outcome.images.push(ManifestEntry {
        size: entry.size_label(),
        idiom: entry.idiom.to_string(),
        filename: image.filename.clone(),
        scale: scale_label(scale),
      });
    }
  }

  outcome
}
