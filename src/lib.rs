#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod bundle;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod matcher;
pub mod models;
pub mod probe;

pub use builder::IconsetBuilder;
pub use config::{BundleConfig, ValidatedConfig};
pub use error::{IconsetError, IconsetResult, ProbeError};
pub use probe::{DimensionProbe, IdentifyProbe};
