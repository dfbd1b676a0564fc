//! The fixed table of icon variants an iOS app icon set can contain.

/// A required icon variant: a point size, the device idiom and the scales it ships at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
  /// Width in points. May be a half-point value such as `83.5`.
  pub base_width: f64,
  /// Height in points.
  pub base_height: f64,
  /// Device idiom written to the manifest.
  pub idiom: &'static str,
  /// Scale factors, in the order they are emitted.
  pub scales: &'static [u32],
}

impl CatalogEntry {
  const fn square(points: f64, idiom: &'static str, scales: &'static [u32]) -> Self {
    Self {
      base_width: points,
      base_height: points,
      idiom,
      scales,
    }
  }

  /// Pixel dimensions required for the given scale.
  pub fn pixel_size(&self, scale: u32) -> (f64, f64) {
    let factor = f64::from(scale);
    (self.base_width * factor, self.base_height * factor)
  }

  /// Manifest `size` value, e.g. `20x20` or `83.5x83.5`.
  pub fn size_label(&self) -> String {
    format!("{}x{}", self.base_width, self.base_height)
  }
}

/// Manifest `scale` value, e.g. `2x`.
pub fn scale_label(scale: u32) -> String {
  format!("{scale}x")
}

/// iPhone, iPad and App Store variants, in manifest order.
pub const APP_ICON_CATALOG: [CatalogEntry; 10] = [
  CatalogEntry::square(20.0, "iphone", &[2, 3]),
  CatalogEntry::square(29.0, "iphone", &[2, 3]),
  CatalogEntry::square(40.0, "iphone", &[2, 3]),
  CatalogEntry::square(60.0, "iphone", &[2, 3]),
  CatalogEntry::square(20.0, "ipad", &[1, 2]),
  CatalogEntry::square(29.0, "ipad", &[1, 2]),
  CatalogEntry::square(40.0, "ipad", &[1, 2]),
  CatalogEntry::square(76.0, "ipad", &[1, 2]),
  CatalogEntry::square(83.5, "ipad", &[2]),
  CatalogEntry::square(1024.0, "ios-marketing", &[1]),
];

/// Total number of (variant, scale) pairs in a catalog.
pub fn variant_count(catalog: &[CatalogEntry]) -> usize {
  catalog.iter().map(|entry| entry.scales.len()).sum()
}
