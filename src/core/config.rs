//! Configuration for the command-line front end, read from the environment.

use std::env;
use std::str::FromStr;

use clap::ValueEnum;

/// Environment variable selecting the default output format.
pub const FORMAT_VAR: &str = "CODE_SPANS_FORMAT";

/// How spans are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per span
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CODE_SPANS_FORMAT must be 'text' or 'json', got '{0}'")]
    InvalidFormat(String),
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load configuration through `var`, which looks up an environment variable by name.
/// Unset or empty variables fall back to defaults.
pub fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let format = match var(FORMAT_VAR).filter(|s| !s.trim().is_empty()) {
        Some(value) => value.parse()?,
        None => OutputFormat::default(),
    };
    log::debug!("output format: {:?}", format);
    Ok(Config { format })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_text() {
        let config = load_from(|_| None).expect("default config");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn empty_value_uses_default() {
        let config = load_from(|_| Some("  ".to_string())).expect("default config");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn json_is_case_insensitive() {
        let config = load_from(|_| Some("JSON".to_string())).expect("json config");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_names_the_variable() {
        let err = load_from(|_| Some("yaml".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(ref v) if v == "yaml"));
        let msg = err.to_string();
        assert!(msg.contains(FORMAT_VAR));
        assert!(msg.contains("yaml"));
    }
}
