use crate::core::{ConfigProvider, LogFormat};
use crate::utils::error::{Result, SampleError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional `sample.toml` settings. Every section may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
    /// Arguments used when none are given on the command line.
    #[serde(default)]
    pub args: Vec<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: TomlConfig = toml::from_str(content)?;
        config.run.args = Self::substitute_env_vars(config.run.args)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces `${VAR}` in each parsed argument with the environment value.
    /// Unknown variables stay as written.
    fn substitute_env_vars(args: Vec<String>) -> Result<Vec<String>> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SampleError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let substituted = args
            .into_iter()
            .map(|arg| {
                re.replace_all(&arg, |caps: &regex::Captures| {
                    let var_name = &caps[1];
                    std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                })
                .into_owned()
            })
            .collect();

        Ok(substituted)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(index) = self.run.args.iter().position(|arg| arg.contains('\0')) {
            return Err(SampleError::ConfigError {
                message: format!("run.args[{}] contains a null byte", index),
            });
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn verbose(&self) -> bool {
        self.logging.verbose
    }

    fn log_format(&self) -> LogFormat {
        self.logging.format
    }

    fn args(&self) -> &[String] {
        &self.run.args
    }
}
