use clap::Parser;
use std::path::PathBuf;

use crate::models::ConversionConfig;

/// Default directory scanned for weight exports.
pub const DEFAULT_INPUT_DIR: &str = "./weight_files";

/// Default CSV report path.
pub const DEFAULT_OUTPUT_CSV: &str = "weight_export.csv";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Convert fitness-tracker weight exports (JSON) into a single CSV report
#[derive(Parser, Debug, Clone)]
#[command(
    name = "weight-export",
    about = "Convert fitness-tracker weight exports (JSON) into a single CSV report",
    version
)]
pub struct Settings {
    /// Directory containing the exported `.json` weight files
    #[arg(long, env = "WEIGHT_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Path of the CSV report to write
    #[arg(long, env = "WEIGHT_OUTPUT_CSV", default_value = DEFAULT_OUTPUT_CSV)]
    pub output: PathBuf,

    /// Convert weights from pounds to kilograms without prompting
    #[arg(long, conflicts_with = "lbs")]
    pub kg: bool,

    /// Keep weights in pounds without prompting
    #[arg(long)]
    pub lbs: bool,

    /// Logging level
    #[arg(long, env = "WEIGHT_LOG_LEVEL", default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse CLI arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`load`](Self::load) but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// The unit decision made on the command line, if any.
    ///
    /// `None` means the user must be asked.
    pub fn unit_choice(&self) -> Option<bool> {
        if self.kg {
            Some(true)
        } else if self.lbs {
            Some(false)
        } else {
            None
        }
    }

    /// Build the pipeline configuration for the given conversion flag.
    pub fn conversion_config(&self, convert_to_kg: bool) -> ConversionConfig {
        ConversionConfig::new(self.input_dir.clone(), self.output.clone(), convert_to_kg)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        let mut full = vec!["weight-export"];
        full.extend_from_slice(args);
        Settings::load_from_args(full).expect("valid args")
    }

    #[test]
    fn test_settings_defaults() {
        let settings = parse(&[]);
        assert_eq!(settings.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT_CSV));
        assert_eq!(settings.log_level, "INFO");
        assert_eq!(settings.unit_choice(), None);
    }

    #[test]
    fn test_settings_explicit_paths() {
        let settings = parse(&["--input-dir", "/data/exports", "--output", "/tmp/report.csv"]);
        assert_eq!(settings.input_dir, PathBuf::from("/data/exports"));
        assert_eq!(settings.output, PathBuf::from("/tmp/report.csv"));
    }

    #[test]
    fn test_settings_unit_flags() {
        assert_eq!(parse(&["--kg"]).unit_choice(), Some(true));
        assert_eq!(parse(&["--lbs"]).unit_choice(), Some(false));
    }

    #[test]
    fn test_settings_kg_conflicts_with_lbs() {
        let result = Settings::load_from_args(["weight-export", "--kg", "--lbs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_debug_overrides_log_level() {
        let settings = parse(&["--log-level", "ERROR", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_settings_rejects_unknown_log_level() {
        let result = Settings::load_from_args(["weight-export", "--log-level", "TRACE"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_conversion_config() {
        let settings = parse(&["--input-dir", "in", "--output", "out.csv"]);
        let config = settings.conversion_config(true);
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert!(config.convert_to_kg);
    }
}
