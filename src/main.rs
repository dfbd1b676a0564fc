use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use appiconset::config::DEFAULT_BUNDLE_NAME;
use appiconset::{BundleConfig, IconsetBuilder, IconsetError, IdentifyProbe};
use clap::{CommandFactory, Parser};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
  name = "appiconset",
  version,
  about = "Create an Xcode appiconset from a directory of PNG icons"
)]
struct Cli {
  /// Input directory containing PNG images to copy into an appiconset.
  #[arg(short, long, value_name = "DIR")]
  input: Option<PathBuf>,

  /// Output directory to create appiconset in.
  #[arg(short, long, value_name = "DIR")]
  output: Option<PathBuf>,

  /// Name of the appiconset.
  #[arg(short, long, value_name = "NAME", default_value = DEFAULT_BUNDLE_NAME)]
  name: String,

  /// If set removes the appiconset if it already exists. Otherwise errors.
  #[arg(short, long)]
  remove: bool,

  /// Print diagnostics about probed and matched images to stderr.
  #[arg(short, long)]
  verbose: bool,
}

impl From<Cli> for BundleConfig {
  fn from(cli: Cli) -> Self {
    Self {
      input_dir: cli.input,
      output_dir: cli.output,
      name: cli.name,
      remove: cli.remove,
      ..Self::default()
    }
  }
}

fn init_logging(verbose: bool) {
  let level = if verbose { Level::DEBUG } else { Level::WARN };
  let _ = tracing_subscriber::fmt()
    .with_max_level(level)
    .with_target(false)
    .without_time()
    .with_writer(std::io::stderr)
    .try_init();
}

fn run(cli: Cli) -> Result<(), IconsetError> {
  let config = BundleConfig::from(cli);
  let probe = IdentifyProbe::new(&config.identify_program);
  let validated = config.validate()?;

  let report = IconsetBuilder::new(&validated, &probe).build()?;
  println!(
    "Created {} with {} icon variants from {} files.",
    report.bundle_dir.display(),
    report.manifest.images.len(),
    report.copied_files
  );
  Ok(())
}

fn main() -> Result<ExitCode> {
  if std::env::args_os().len() <= 1 {
    Cli::command().print_help()?;
    return Ok(ExitCode::SUCCESS);
  }

  let cli = Cli::parse();
  init_logging(cli.verbose);

  let result = run(cli);
  if let Err(err) = &result {
    println!("{err}");
  }
  Ok(ExitCode::from(exit_status(&result)))
}

fn exit_status(result: &Result<(), IconsetError>) -> u8 {
  match result {
    Ok(()) => 0,
    Err(err) => u8::try_from(err.exit_code()).unwrap_or(1),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_flags_map_onto_config() {
    let cli = Cli::try_parse_from([
      "appiconset",
      "-i",
      "a",
      "-o",
      "b",
      "-n",
      "X.appiconset",
      "-r",
    ])
    .unwrap();
    assert!(!cli.verbose);

    let config = BundleConfig::from(cli);
    assert_eq!(config.input_dir, Some(PathBuf::from("a")));
    assert_eq!(config.output_dir, Some(PathBuf::from("b")));
    assert_eq!(config.name, "X.appiconset");
    assert!(config.remove);
    assert_eq!(config.identify_program, PathBuf::from("identify"));
  }

  #[test]
  fn long_flags_and_defaults() {
    let cli = Cli::try_parse_from(["appiconset", "--input", "in", "--output", "out", "--verbose"])
      .unwrap();
    assert!(cli.verbose);

    let config = BundleConfig::from(cli);
    assert_eq!(config.name, "AppIcon");
    assert!(!config.remove);
  }

  #[test]
  fn missing_options_are_reported_by_validation() {
    let cli = Cli::try_parse_from(["appiconset", "-o", "out"]).unwrap();

    let result = run(cli);

    match &result {
      Err(IconsetError::Usage(message)) => {
        assert_eq!(message, "Input directory must be specified.")
      }
      other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(exit_status(&result), 1);
  }

  #[test]
  fn success_exits_zero() {
    assert_eq!(exit_status(&Ok(())), 0);
  }

  #[test]
  fn command_definition_is_consistent() {
    Cli::command().debug_assert();
  }
}
