use crate::config::{toml_config::TomlConfig, ResolvedConfig};
use crate::core::LogFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sample")]
#[command(about = "Runs the sample entry point with the given arguments")]
pub struct CliConfig {
    /// Arguments forwarded to the entry point
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    #[arg(long, help = "Path to a sample.toml config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// Loads the config file if one was given and layers the flags over it.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(self.merge(file))
    }

    pub fn merge(&self, file: TomlConfig) -> ResolvedConfig {
        let args = if self.args.is_empty() {
            file.run.args
        } else {
            self.args.clone()
        };

        ResolvedConfig {
            verbose: self.verbose || file.logging.verbose,
            log_format: self.log_format.unwrap_or(file.logging.format),
            args,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
            validate_file_extension("config", path, "toml")?;
        }
        Ok(())
    }
}
