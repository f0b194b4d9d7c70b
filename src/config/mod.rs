pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, MAX_ORDER, SUPPORTED_FORMATS};
#[cfg(feature = "cli")]
use crate::{core::Grid, utils::validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "woc-bootcamp")]
#[command(about = "Plot Taylor expansions of y = exp(-x) against the true curve")]
pub struct CliConfig {
    /// Highest order term in the polynomial expansion
    pub order: u32,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "100")]
    pub points: usize,

    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub x_min: f64,

    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub x_max: f64,

    #[arg(long, value_delimiter = ',', default_value = "svg,csv,json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Overlay every order from 0 up to ORDER")]
    pub compare: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn order(&self) -> u32 {
        self.order
    }

    fn grid(&self) -> Grid {
        Grid::new(self.x_min, self.x_max, self.points)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn compare(&self) -> bool {
        self.compare
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_plot_settings(self)
    }
}

/// Checks shared by every [`ConfigProvider`].
pub fn validate_plot_settings<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validation::validate_range("order", config.order(), 0, MAX_ORDER)?;

    let grid = config.grid();
    validation::validate_positive_number("grid.points", grid.points, 2)?;
    validation::validate_interval("grid", grid.start, grid.stop)?;

    validation::validate_path("output_path", config.output_path())?;
    validation::validate_formats("output_formats", config.output_formats(), &SUPPORTED_FORMATS)?;

    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_order() {
        let config = CliConfig::try_parse_from(["woc-bootcamp", "5"]).unwrap();
        assert_eq!(config.order, 5);
        assert_eq!(config.grid(), Grid::default());
        assert_eq!(config.formats, vec!["svg", "csv", "json"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_order() {
        assert!(CliConfig::try_parse_from(["woc-bootcamp"]).is_err());
        assert!(CliConfig::try_parse_from(["woc-bootcamp", "three"]).is_err());
        assert!(CliConfig::try_parse_from(["woc-bootcamp", "-2"]).is_err());
    }

    #[test]
    fn test_validate_catches_bad_settings() {
        let config = CliConfig::try_parse_from(["woc-bootcamp", "200"]).unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::try_parse_from([
            "woc-bootcamp",
            "3",
            "--x-min",
            "5",
            "--x-max",
            "-5",
        ])
        .unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::try_parse_from(["woc-bootcamp", "3", "--formats", "png"]).unwrap();
        assert!(config.validate().is_err());
    }
}
