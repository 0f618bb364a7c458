use std::str::FromStr;

use tracing::Level;

use crate::core::mapping::PathMappingList;
use crate::utils::{Error, PathmapResult};

pub fn init_logging(config: &crate::config::Config) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();
}

/// Stderr logging at INFO, unless a subscriber is already installed.
pub fn init_fallback_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Split a `FROM=TO` command line mapping at its first `=`.
pub fn parse_mapping_arg(arg: &str) -> PathmapResult<(String, String)> {
    match arg.split_once('=') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(Error::InvalidMapping(arg.to_string())),
    }
}

/// The configured mappings followed by any given on the command line.
pub fn build_mapping_list(
    config: &crate::config::Config,
    extra: &[String],
) -> PathmapResult<PathMappingList> {
    let mut list = config.build_mapping_list();
    for arg in extra {
        let (from, to) = parse_mapping_arg(arg)?;
        list.append(&from, &to, false);
    }
    tracing::debug!("Loaded {} path mapping(s)", list.len());
    Ok(list)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn mapping_args() {
        assert_eq!(
            parse_mapping_arg("/build=/home/me").unwrap(),
            ("/build".to_string(), "/home/me".to_string())
        );
        assert_eq!(
            parse_mapping_arg("/a=b=/c").unwrap(),
            ("/a".to_string(), "b=/c".to_string())
        );
        assert!(matches!(parse_mapping_arg("/build"), Err(Error::InvalidMapping(_))));
        assert!(matches!(parse_mapping_arg("=/home"), Err(Error::InvalidMapping(_))));
        assert!(matches!(parse_mapping_arg("/build="), Err(Error::InvalidMapping(_))));
    }

    #[test]
    fn command_line_mappings_follow_config() {
        let config = crate::config::Config::from_toml_str(
            r#"
            [[source_map]]
            prefix = "/build"
            replacement = "/from-config"
            "#,
        )
        .unwrap();

        let list = build_mapping_list(&config, &["/build=/from-cli".to_string()]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.find_index_for_path("/build"), Some(0));
        assert_eq!(list.remap_path("/build/a.c").as_deref(), Some("/from-config/a.c"));

        assert!(build_mapping_list(&config, &["nonsense".to_string()]).is_err());
    }
}
