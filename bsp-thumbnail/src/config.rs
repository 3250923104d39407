use std::path::Path;

use ini::Ini;
use quake::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Ini(#[from] ini::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] ini::ParseError),
    #[error("invalid value {value:?} for `{key}` in [{section}]")]
    Value {
        section: &'static str,
        key: &'static str,
        value: String,
    },
}

/// Settings read from `thumbnail.ini`. Every key is optional.
///
/// ```ini
/// [bsp]
/// winding = complete
/// bounds = exact
///
/// [thumbnail]
/// model = 0
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailConfig {
    pub options: LoadOptions,
    pub model: usize,
}

impl ThumbnailConfig {
    /// A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        log::info!("Reading config {:?}", path);
        Self::from_ini(&Ini::load_from_file(path)?)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Self::from_ini(&Ini::load_from_str(text)?)
    }

    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(bsp) = ini.section(Some("bsp")) {
            if let Some(value) = bsp.get("winding") {
                config.options.winding = match value.to_ascii_lowercase().as_str() {
                    "complete" => WindingPolicy::Complete,
                    "legacy" => WindingPolicy::Legacy,
                    _ => return Err(invalid("bsp", "winding", value)),
                };
            }
            if let Some(value) = bsp.get("bounds") {
                config.options.bounds = match value.to_ascii_lowercase().as_str() {
                    "exact" => BoundsSeed::Exact,
                    "legacy" => BoundsSeed::Legacy,
                    _ => return Err(invalid("bsp", "bounds", value)),
                };
            }
        }

        if let Some(thumbnail) = ini.section(Some("thumbnail")) {
            if let Some(value) = thumbnail.get("model") {
                config.model = value
                    .parse()
                    .map_err(|_| invalid("thumbnail", "model", value))?;
            }
        }

        Ok(config)
    }
}

fn invalid(section: &'static str, key: &'static str, value: &str) -> ConfigError {
    ConfigError::Value {
        section,
        key,
        value: value.to_owned(),
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ThumbnailConfig::parse("").unwrap();
        assert_eq!(config, ThumbnailConfig::default());
        assert_eq!(config.options.winding, WindingPolicy::Complete);
        assert_eq!(config.options.bounds, BoundsSeed::Exact);
        assert_eq!(config.model, 0);

        let config = ThumbnailConfig::load(Path::new("no/such/thumbnail.ini")).unwrap();
        assert_eq!(config, ThumbnailConfig::default());
    }

    #[test]
    fn legacy() {
        let config = ThumbnailConfig::parse(
            "[bsp]\nwinding = Legacy\nbounds = legacy\n\n[thumbnail]\nmodel = 2\n",
        )
        .unwrap();
        assert_eq!(config.options.winding, WindingPolicy::Legacy);
        assert_eq!(config.options.bounds, BoundsSeed::Legacy);
        assert_eq!(config.model, 2);
    }

    #[test]
    fn bad_values() {
        let err = ThumbnailConfig::parse("[bsp]\nwinding = sometimes\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"sometimes\" for `winding` in [bsp]"
        );

        assert!(matches!(
            ThumbnailConfig::parse("[thumbnail]\nmodel = -1\n"),
            Err(ConfigError::Value { key: "model", .. })
        ));
    }
}
