use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::app::{Page, PanelLayouts};

const MIN_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `LEANVISION_LOG`
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub start_page: Page,
    pub tick_rate_ms: u64,
    pub layouts: PanelLayouts,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_page: Page::default(),
            tick_rate_ms: 200,
            layouts: PanelLayouts::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

/// Loads the config file.
///
/// An explicit path must exist. A discovered path that does not exist yields defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("LEANVISION_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("leanvision").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("leanvision").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "leanvision", "leanvision")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("leanvision"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("leanvision"));
    }
    directories::ProjectDirs::from("io", "leanvision", "leanvision")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path(log: &LogConfig) -> Option<PathBuf> {
    log.file
        .clone()
        .or_else(|| data_dir().map(|dir| dir.join("leanvision.log")))
}


#[cfg(test)]
mod tests {
    use super::test_env::with_env;
    use super::*;
    use crate::app::{DownloadsLayout, StatsLayout};
    use std::io::Write;

    const CONFIG_VARS: [&str; 3] = ["LEANVISION_CONFIG", "XDG_CONFIG_HOME", "HOME"];

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
start_page = "stats"
tick_rate_ms = 100

[layouts]
downloads = "hint"
stats = "audit"

[log]
level = "debug"
file = "/tmp/lv.log"
"#,
        );
        let config = load_from(file.path()).unwrap();
        assert_eq!(config.start_page, Page::Stats);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.layouts.downloads, DownloadsLayout::Hint);
        assert_eq!(config.layouts.stats, StatsLayout::Audit);
        assert_eq!(config.log.level, "debug");
        assert_eq!(log_path(&config.log), Some(PathBuf::from("/tmp/lv.log")));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("[layouts]\nstats = \"audit\"\n");
        let config = load_from(file.path()).unwrap();
        assert_eq!(config.start_page, Page::Recs);
        assert_eq!(config.layouts.downloads, DownloadsLayout::Listing);
        assert_eq!(config.layouts.stats, StatsLayout::Audit);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_docs_alias_for_start_page() {
        let file = write_config("start_page = \"docs\"\n");
        assert_eq!(load_from(file.path()).unwrap().start_page, Page::Downloads);
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let file = write_config("start_page = \"kitchen\"\n");
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_config_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_config_env_var_comes_first() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        with_env(
            &[
                ("LEANVISION_CONFIG", Some(path_str(&explicit))),
                ("XDG_CONFIG_HOME", Some(path_str(dir.path()))),
                ("HOME", Some(path_str(dir.path()))),
            ],
            || assert_eq!(config_path(), Some(explicit.clone())),
        );
    }

    #[test]
    fn test_xdg_config_home_before_home() {
        let xdg = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        with_env(
            &[
                ("LEANVISION_CONFIG", None),
                ("XDG_CONFIG_HOME", Some(path_str(xdg.path()))),
                ("HOME", Some(path_str(home.path()))),
            ],
            || {
                assert_eq!(
                    config_path(),
                    Some(xdg.path().join("leanvision").join("config.toml"))
                );
            },
        );
    }

    #[test]
    fn test_home_config_dir() {
        let home = tempfile::tempdir().unwrap();
        with_env(
            &[
                ("LEANVISION_CONFIG", None),
                ("XDG_CONFIG_HOME", None),
                ("HOME", Some(path_str(home.path()))),
            ],
            || {
                assert_eq!(
                    config_path(),
                    Some(home.path().join(".config").join("leanvision").join("config.toml"))
                );
            },
        );
    }

    #[test]
    fn test_project_dirs_fallback() {
        let unset: Vec<(&str, Option<&str>)> = CONFIG_VARS.iter().map(|key| (*key, None)).collect();
        with_env(&unset, || {
            if let Some(path) = config_path() {
                assert!(path.ends_with("config.toml"), "{}", path.display());
            }
        });
    }

    #[test]
    fn test_explicit_path_beats_env_var() {
        let from_env = write_config("start_page = \"stats\"\n");
        let explicit = write_config("start_page = \"downloads\"\n");
        with_env(
            &[("LEANVISION_CONFIG", Some(path_str(from_env.path())))],
            || {
                assert_eq!(load(None).unwrap().start_page, Page::Stats);
                assert_eq!(
                    load(Some(explicit.path())).unwrap().start_page,
                    Page::Downloads
                );
            },
        );
    }

    #[test]
    fn test_discovered_file_is_loaded_and_missing_one_is_default() {
        let xdg = tempfile::tempdir().unwrap();
        let vars = [
            ("LEANVISION_CONFIG", None),
            ("XDG_CONFIG_HOME", Some(path_str(xdg.path()))),
        ];

        with_env(&vars, || assert_eq!(load(None).unwrap(), Config::default()));

        let dir = xdg.path().join("leanvision");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "[layouts]\ndownloads = \"hint\"\n").unwrap();
        with_env(&vars, || {
            assert_eq!(load(None).unwrap().layouts.downloads, DownloadsLayout::Hint);
        });
    }

    #[test]
    fn test_default_log_path_under_xdg_data_home() {
        let data = tempfile::tempdir().unwrap();
        with_env(&[("XDG_DATA_HOME", Some(path_str(data.path())))], || {
            assert_eq!(
                log_path(&LogConfig::default()),
                Some(data.path().join("leanvision").join("leanvision.log"))
            );
        });
    }

    #[test]
    fn test_default_log_path_under_home() {
        let home = tempfile::tempdir().unwrap();
        with_env(
            &[
                ("XDG_DATA_HOME", None),
                ("HOME", Some(path_str(home.path()))),
            ],
            || {
                assert_eq!(
                    log_path(&LogConfig::default()),
                    Some(
                        home.path()
                            .join(".local")
                            .join("share")
                            .join("leanvision")
                            .join("leanvision.log")
                    )
                );
            },
        );
    }
}
