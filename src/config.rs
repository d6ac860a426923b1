//! Runtime configuration from the environment and `.env`.

use crate::output::Format;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

pub const FORMAT_VAR: &str = "IPCALC_FORMAT";
pub const LOG_CONFIG_VAR: &str = "IPCALC_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default output format, overridden by `--format`.
    pub format: Format,
    /// log4rs YAML file.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: Format::Text,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    ///
    /// A `format` given on the command line wins and `IPCALC_FORMAT` is not read.
    pub fn from_env(format: Option<Format>) -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok(), format)
    }

    /// Build a config from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F, format: Option<Format>) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(format) = format {
            config.format = format;
        } else if let Some(format) = lookup(FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            config.format = format
                .parse()
                .map_err(|e| format!("Invalid {FORMAT_VAR}: {e}"))?;
        }
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }
        Ok(config)
    }
}

/// Start log4rs from `path`, or log warnings to stderr when the file is missing.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("{} not found, using built-in log config", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]), None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (FORMAT_VAR, "json"),
            (LOG_CONFIG_VAR, "/etc/ipcalc/log.yml"),
        ]), None)
        .unwrap();
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.log_config, PathBuf::from("/etc/ipcalc/log.yml"));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[(FORMAT_VAR, " ")]), None).unwrap();
        assert_eq!(config.format, Format::Text);
    }

    #[test]
    fn test_invalid_format() {
        let err = Config::from_lookup(lookup_from(&[(FORMAT_VAR, "xml")]), None).unwrap_err();
        assert!(err.to_string().contains(FORMAT_VAR));
    }

    #[test]
    fn test_format_flag_overrides_invalid_env() {
        let config =
            Config::from_lookup(lookup_from(&[(FORMAT_VAR, "xml")]), Some(Format::Json)).unwrap();
        assert_eq!(config.format, Format::Json);

        let config =
            Config::from_lookup(lookup_from(&[(FORMAT_VAR, "json")]), Some(Format::Text)).unwrap();
        assert_eq!(config.format, Format::Text);
    }
}
