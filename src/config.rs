use serde::Deserialize;

use crate::core::mapping::PathMappingList;
use crate::utils::PathmapResult;

impl Config {
    pub fn init() -> PathmapResult<Self> {
        // get config toml path from env, with default
        let config_path =
            std::env::var("PATHMAP_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml, if there is one
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of PATHMAP)
            .add_source(config::Environment::with_prefix("PATHMAP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn from_toml_str(toml: &str) -> PathmapResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Build a mapping list from the configured `source_map` entries, in file order.
    pub fn build_mapping_list(&self) -> PathMappingList {
        let mut list = PathMappingList::new();
        for entry in &self.source_map {
            list.append(&entry.prefix, &entry.replacement, false);
        }
        list
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub source_map: Vec<SourceMapEntry>,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_level() -> String {
    String::from("info")
}

// ===============================================================================
// Source map
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SourceMapEntry {
    /// Prefix as recorded in debug information (e.g. "/buildbot/src")
    pub prefix: String,
    /// Local prefix the same tree lives under (e.g. "/home/me/src")
    pub replacement: String,
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn parses_source_map_in_order() {
        let config = Config::from_toml_str(
            r#"
            [logs]
            level = "debug"

            [[source_map]]
            prefix = "/build/src/"
            replacement = "/home/me/src"

            [[source_map]]
            prefix = "."
            replacement = "/tmp"
            "#,
        )
        .unwrap();

        assert_eq!(config.logs.level, "debug");
        let list = config.build_mapping_list();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.paths_at_index(0),
            Some(("/build/src".to_string(), "/home/me/src".to_string()))
        );
        assert_eq!(list.modification_id(), 2);
    }

    #[test]
    fn defaults_when_sections_missing() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.logs.level, "info");
        assert!(config.build_mapping_list().is_empty());
    }

    #[test]
    fn rejects_incomplete_entries() {
        let err = Config::from_toml_str(
            r#"
            [[source_map]]
            prefix = "/build"
            "#,
        );
        assert!(matches!(err, Err(crate::utils::Error::Config(_))));
    }
}
