//! Bundle build orchestrator: inventory, catalog matching and bundle writing.

use tracing::debug;

use crate::bundle::write_bundle;
use crate::catalog::{APP_ICON_CATALOG, CatalogEntry};
use crate::config::{IMAGE_EXTENSION, ValidatedConfig};
use crate::error::{IconsetError, IconsetResult};
use crate::inventory::{build_inventory, list_candidate_images};
use crate::matcher::match_catalog;
use crate::models::{BuildReport, MatchOutcome};
use crate::probe::DimensionProbe;

/// High-level helper running the three pipeline stages in order.
pub struct IconsetBuilder<'a, P: DimensionProbe + ?Sized> {
  config: &'a ValidatedConfig,
  probe: &'a P,
  catalog: &'a [CatalogEntry],
}

impl<'a, P: DimensionProbe + ?Sized> IconsetBuilder<'a, P> {
  /// Create a builder for the app icon catalog.
  pub fn new(config: &'a ValidatedConfig, probe: &'a P) -> Self {
    Self {
      config,
      probe,
      catalog: &APP_ICON_CATALOG,
    }
  }

  /// Probe the input directory and match it against the catalog without writing anything.
  ///
  /// Fails with [`IconsetError::MissingTool`] before any file is probed when the probe is
  /// unavailable.
  pub fn plan(&self) -> IconsetResult<MatchOutcome> {
    let paths = list_candidate_images(&self.config.input_dir, IMAGE_EXTENSION)?;
    debug!(count = paths.len(), "found candidate images");

    if !self.probe.is_available() {
      return Err(IconsetError::MissingTool {
        program: self.probe.name().to_string(),
      });
    }

    let inventory = build_inventory(&paths, self.probe)?;
    Ok(match_catalog(&inventory, self.catalog))
  }

  /// Run the whole pipeline and write the bundle.
  pub fn build(&self) -> IconsetResult<BuildReport> {
    let outcome = self.plan()?;
    write_bundle(self.config, &outcome)
  }
}
