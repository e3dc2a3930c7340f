use std::fs;
use std::path::{Path, PathBuf};

use super::core::SimulatorConfig;
use crate::errors::ConfigError;

/// File names searched for, in order, in each candidate directory.
pub const CONFIG_FILE_NAMES: &[&str] = &["mvsim.yaml", "mvsim.yml", "mvsim.toml"];

const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pure function to pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Pure function to parse config contents in the given format
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<SimulatorConfig, ConfigError> {
    let config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str::<SimulatorConfig>(contents)?,
        ConfigFormat::Toml => toml::from_str::<SimulatorConfig>(contents)?,
    };
    Ok(config)
}

/// Read and parse a configuration file, failing on any error.
pub fn load_config_from_path(path: &Path) -> Result<SimulatorConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let config = parse_config(&contents, format)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest configuration file starting at `start`.
pub fn discover_config_from(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

/// Resolve the effective configuration.
///
/// An explicit path must exist and parse. Without one, the current directory
/// and its ancestors are searched; a discovered file that fails to parse is
/// an error as well, since silently ignoring it would hide the customer's
/// numbers. When nothing is found the built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> Result<(SimulatorConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = load_config_from_path(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return Ok((SimulatorConfig::default(), ConfigSource::Defaults));
        }
    };

    match discover_config_from(current) {
        Some(path) => {
            let config = load_config_from_path(&path)?;
            Ok((config, ConfigSource::File(path)))
        }
        None => {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok((SimulatorConfig::default(), ConfigSource::Defaults))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::ApplicationConfig;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/mvsim.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("mvsim.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("mvsim.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("mvsim.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = parse_config(
            indoc! {"
                implementation:
                  num_cameras: 6
                  overlap_factor: 2
            "},
            ConfigFormat::Yaml,
        )
        .unwrap();

        assert_eq!(config.implementation.num_cameras, 6);
        assert_eq!(config.implementation.overlap_factor, 2);
        assert_eq!(config.application, ApplicationConfig::default());
        assert_eq!(config.implementation.system_cost, 10_000.0);
    }

    #[test]
    fn test_toml_sections() {
        let config = parse_config(
            indoc! {r#"
                [application]
                type = "Label verification"
                current_defect_rate = 1.5

                [expectations]
                max_fn_rate = 2.0
            "#},
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.application.application_type, "Label verification");
        assert_eq!(config.application.current_defect_rate, 1.5);
        assert_eq!(config.expectations.max_fn_rate, 2.0);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let err = parse_config("implementation: [", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_negative_camera_count_fails_to_parse() {
        let err = parse_config("[implementation]\nnum_cameras = -1\n", ConfigFormat::Toml)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("mvsim.yaml");
        assert!(matches!(
            resolve_config(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_discovery_walks_up_ancestors() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("line/station");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("mvsim.toml"), "[implementation]\nnum_cameras = 8\n").unwrap();

        let found = discover_config_from(nested).unwrap();
        assert_eq!(found, dir.path().join("mvsim.toml"));
        assert_eq!(
            load_config_from_path(&found)
                .unwrap()
                .implementation
                .num_cameras,
            8
        );
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(
            ancestors,
            vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]
        );
    }
}
