//! Configuration loading and discovery.
//!
//! Discovers configuration by walking up from the current directory,
//! merging user config from the XDG config directory, and applying
//! `READTIME_`-prefixed environment variables on top. TOML, YAML, and
//! JSON are all accepted.
//!
//! Config file locations (in order of precedence, highest first):
//! - `readtime.<ext>` in the current directory or any parent
//! - `.readtime.<ext>` in the current directory or any parent
//! - `~/.config/readtime/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`.
//!
//! Configuration is read per invocation by callers that build
//! [`Options`](crate::Options) from it; the pipeline itself never caches
//! a configured value.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::estimate::{DEFAULT_WPM, Options};
use crate::render::Labels;

/// The configuration for readtime.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Reading rate in words per minute. Defaults to 200 when unset.
    pub words_per_minute: Option<u32>,
    /// Display label for rendered output. Defaults to "Read time".
    pub label: Option<String>,
    /// Include the visually-hidden word-count annotation in HTML output.
    pub show_word_count: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            words_per_minute: None,
            label: None,
            show_word_count: true,
        }
    }
}

impl Config {
    /// Build pipeline [`Options`] from this configuration.
    ///
    /// Unset fields fall back to the pipeline defaults. Called fresh per
    /// invocation so a reloaded config takes effect immediately.
    pub fn options(&self) -> Options {
        let mut labels = Labels::default();
        if let Some(ref label) = self.label {
            labels.display = label.clone();
        }
        Options {
            rate: self.words_per_minute.unwrap_or(DEFAULT_WPM),
            labels,
            show_word_count: self.show_word_count,
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so callers
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from a `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in merge order).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "readtime";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from the XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader walks up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/readtime/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable the boundary marker (search all the way to the filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `READTIME_`-prefixed environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/readtime/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = Self::find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // READTIME_WORDS_PER_MINUTE=250, READTIME_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("READTIME_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && Self::find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that
    /// has any match, ordered low-to-high precedence: dotfiles before
    /// regular files, earlier extensions before later.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for the boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in the XDG config directory.
    fn find_user_config() -> Option<Utf8PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        let config_dir = proj_dirs.config_dir();

        for ext in CONFIG_EXTENSIONS {
            let config_path = config_dir.join(format!("config.{ext}"));
            if config_path.is_file() {
                return Utf8PathBuf::from_path_buf(config_path).ok();
            }
        }

        None
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/readtime/` on Linux, `~/Library/Application
/// Support/readtime/` on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.words_per_minute.is_none());
        assert!(config.label.is_none());
        assert!(config.show_word_count);
    }

    #[test]
    fn default_options_from_empty_config() {
        let opts = Config::default().options();
        assert_eq!(opts.rate, DEFAULT_WPM);
        assert_eq!(opts.labels.display, "Read time");
    }

    #[test]
    fn configured_rate_and_label_flow_into_options() {
        let config = Config {
            words_per_minute: Some(250),
            label: Some("Time to read".to_string()),
            ..Config::default()
        };
        let opts = config.options();
        assert_eq!(opts.rate, 250);
        assert_eq!(opts.labels.display, "Time to read");
        // Minute units stay at their defaults
        assert_eq!(opts.labels.minute_singular, "min");
    }

    #[test]
    fn loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn single_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "words_per_minute = 180\nlabel = \"Lesezeit\"\n").unwrap();

        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        assert_eq!(config.words_per_minute, Some(180));
        assert_eq!(config.label.as_deref(), Some("Lesezeit"));
    }

    #[test]
    fn later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();

        let base = tmp.path().join("base.toml");
        fs::write(&base, "words_per_minute = 150\n").unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, "words_per_minute = 300\n").unwrap();

        let base = Utf8PathBuf::try_from(base).unwrap();
        let over = Utf8PathBuf::try_from(over).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();

        assert_eq!(config.words_per_minute, Some(300));
    }

    #[test]
    fn project_config_discovered_from_subdirectory() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("content").join("posts");
        fs::create_dir_all(&sub).unwrap();
        fs::write(tmp.path().join(".readtime.toml"), "words_per_minute = 220\n").unwrap();

        let sub = Utf8PathBuf::try_from(sub).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub)
            .load()
            .unwrap();

        assert_eq!(config.words_per_minute, Some(220));
        assert!(!sources.project_files.is_empty());
    }

    #[test]
    fn boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        fs::write(parent.join(".readtime.toml"), "words_per_minute = 99\n").unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert!(config.words_per_minute.is_none());
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn regular_file_overrides_dotfile() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".readtime.toml"), "words_per_minute = 100\n").unwrap();
        fs::write(tmp.path().join("readtime.toml"), "words_per_minute = 400\n").unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.words_per_minute, Some(400));
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn yaml_and_json_formats_parse() {
        let tmp = TempDir::new().unwrap();
        let yaml = tmp.path().join("a.yaml");
        fs::write(&yaml, "label: From YAML\n").unwrap();
        let json = tmp.path().join("b.json");
        fs::write(&json, r#"{"words_per_minute": 175}"#).unwrap();

        let yaml = Utf8PathBuf::try_from(yaml).unwrap();
        let json = Utf8PathBuf::try_from(json).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&yaml)
            .with_file(&json)
            .load()
            .unwrap();

        assert_eq!(config.label.as_deref(), Some("From YAML"));
        assert_eq!(config.words_per_minute, Some(175));
    }

    #[test]
    fn show_word_count_can_be_disabled() {
        let yaml = "show_word_count: false\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.show_word_count);
        assert!(!config.options().show_word_count);
    }

    #[test]
    fn load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();

        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn load_or_error_succeeds_with_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "words_per_minute = 210\n").unwrap();

        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load_or_error()
            .unwrap();

        assert_eq!(config.words_per_minute, Some(210));
    }

    #[test]
    fn user_config_dir_mentions_app() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("readtime"));
        }
    }
}
