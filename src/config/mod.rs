pub mod recipe_config;
pub mod storage;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "turtle-island")]
#[command(about = "Apply a TOML recipe of Polars expressions to a CSV file")]
pub struct CliConfig {
    /// Path to the recipe file
    #[arg(short, long, default_value = "recipe.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    /// Override the input path from the recipe
    #[arg(long)]
    pub input: Option<String>,

    /// Override the recipe's monitoring setting
    #[arg(long)]
    pub monitor: Option<bool>,

    /// Build and log the plan without reading or writing data
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_takes_a_bool_value() {
        let args = CliConfig::try_parse_from(["turtle-island", "--monitor", "false"]).unwrap();
        assert_eq!(args.monitor, Some(false));

        let args = CliConfig::try_parse_from(["turtle-island", "--monitor", "true"]).unwrap();
        assert_eq!(args.monitor, Some(true));

        let args = CliConfig::try_parse_from(["turtle-island"]).unwrap();
        assert_eq!(args.monitor, None);
        assert_eq!(args.config, "recipe.toml");
    }
}
