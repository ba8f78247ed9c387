//! Layered configuration.
//!
//! [`ConfigLoader`] merges, lowest precedence first: built-in defaults, the
//! user file (`config.<ext>` in the platform config directory), project files
//! found by walking up from the working directory, files passed explicitly,
//! and `TEXT_PARSER_*` environment variables.
//!
//! Project files are `.text-parser.<ext>` and `text-parser.<ext>` with `<ext>`
//! one of `toml`, `yaml`, `yml`, `json`. Only the closest directory holding
//! any of them contributes, and the walk stops at a `.git` directory.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use text_parser_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("neighbors per lemma: {}", config.neighbor_count);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::nlp::DEFAULT_NEIGHBOR_COUNT;

/// The configuration for text-parser.
///
/// Deserialized from config files found during discovery (TOML, YAML, or JSON)
/// and from `TEXT_PARSER_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Word-embedding table in word2vec/GloVe text format.
    ///
    /// Falls back to `<user data dir>/embeddings/en.txt` when unset.
    pub embeddings_path: Option<Utf8PathBuf>,
    /// Maximum number of embedding neighbors listed per lemma.
    pub neighbor_count: usize,
    /// Merge adjacent capitalized tokens into a single name during entity extraction.
    pub join_names: bool,
    /// Maximum input size in bytes for `--file` input (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            embeddings_path: None,
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
            join_names: true,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// Resolve the embedding table path, applying the platform default.
    pub fn resolved_embeddings_path(&self) -> Option<Utf8PathBuf> {
        self.embeddings_path
            .clone()
            .or_else(|| user_data_dir().map(|dir| dir.join("embeddings").join("en.txt")))
    }

    /// Effective input size limit, or `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            self.max_input_bytes
                .or(Some(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
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

/// The files a [`ConfigLoader`] merged, returned next to the [`Config`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files from the closest directory that had any, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// `config.<ext>` from the user config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed with `--config`, in the order given.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win: the last explicit file, else the last
    /// project file, else the user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.merge_order().pop()
    }

    /// Every file in the order it is merged.
    fn merge_order(&self) -> Vec<&Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
            .collect()
    }
}

/// Recognized extensions; within one directory later entries override earlier ones.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Used for the config file names and the platform directories.
const APP_NAME: &str = "text-parser";

const ENV_PREFIX: &str = "TEXT_PARSER_";

/// Layered configuration loader.
///
/// Values are merged from built-in defaults, the user file, project files,
/// explicit files and finally `TEXT_PARSER_*` environment variables, each
/// layer overriding the previous one.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    /// Project search does not climb past a directory containing this entry.
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// A loader that reads the user file and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Search for project files starting at `dir` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.project_search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Let project search climb to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Merge `path` after all discovered files; later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Discover the config files and merge every layer.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        let figment = sources.merge_order().into_iter().fold(
            Figment::new().merge(Serialized::defaults(Config::default())),
            merge_file,
        );
        // TEXT_PARSER_NEIGHBOR_COUNT=5 sets `neighbor_count`
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;

        tracing::debug!(
            files = sources.merge_order().len(),
            log_level = config.log_level.as_str(),
            neighbor_count = config.neighbor_count,
            join_names = config.join_names,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    fn discover(self) -> ConfigSources {
        let user_file = self.include_user_config.then(find_user_config).flatten();
        let project_files = self
            .project_search_root
            .as_deref()
            .map(|root| self.find_project_configs(root))
            .unwrap_or_default();
        ConfigSources {
            project_files,
            user_file,
            explicit_files: self.explicit_files,
        }
    }

    /// Config files of the closest directory at or above `start` that has any.
    ///
    /// A directory holding the boundary marker is still searched, but the
    /// walk does not continue above it.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found: Vec<Utf8PathBuf> = [".", ""]
                .iter()
                .flat_map(|prefix| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| dir.join(format!("{prefix}{APP_NAME}.{ext}")))
                })
                .filter(|path| path.is_file())
                .collect();
            if !found.is_empty() {
                return found;
            }
            let at_boundary = self
                .boundary_marker
                .as_ref()
                .is_some_and(|marker| dir != start && dir.join(marker).exists());
            if at_boundary {
                break;
            }
        }
        Vec::new()
    }
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Merge one file, choosing the format by extension (TOML by default).
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

fn utf8_dir(dir: &std::path::Path) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(dir.to_path_buf()).ok()
}

/// Platform config directory, e.g. `~/.config/text-parser/` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    utf8_dir(project_dirs()?.config_dir())
}

/// Platform data directory, parent of the default embedding table.
pub fn user_data_dir() -> Option<Utf8PathBuf> {
    utf8_dir(project_dirs()?.data_dir())
}

/// Machine-local data directory, parent of the default log directory.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    utf8_dir(project_dirs()?.data_local_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that touch `TEXT_PARSER_*` variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
    }

    /// Loader with no user file and no boundary, searching from `dir`.
    fn isolated(dir: &std::path::Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(dir))
    }

    #[test]
    fn defaults_without_any_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let (config, sources) = isolated(tmp.path()).load().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.neighbor_count, DEFAULT_NEIGHBOR_COUNT);
        assert!(config.join_names);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn analysis_settings_from_each_format() {
        let tmp = TempDir::new().unwrap();
        let cases = [
            ("a.toml", "neighbor_count = 3\njoin_names = false\n"),
            ("b.yaml", "neighbor_count: 3\njoin_names: false\n"),
            ("c.json", r#"{"neighbor_count": 3, "join_names": false}"#),
        ];
        for (name, body) in cases {
            let path = tmp.path().join(name);
            fs::write(&path, body).unwrap();
            let (config, _) = ConfigLoader::new()
                .with_user_config(false)
                .with_file(utf8(&path))
                .load()
                .unwrap();
            assert_eq!(config.neighbor_count, 3, "{name}");
            assert!(!config.join_names, "{name}");
            assert_eq!(config.log_level, LogLevel::Info, "{name}");
        }
    }

    #[test]
    fn project_file_found_from_subdirectory() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("src").join("nested");
        fs::create_dir_all(&deep).unwrap();
        fs::write(
            tmp.path().join(".text-parser.toml"),
            "embeddings_path = \"/data/vectors.txt\"\n",
        )
        .unwrap();

        let (config, sources) = isolated(&deep).load().unwrap();
        assert_eq!(
            config.resolved_embeddings_path().as_deref(),
            Some(Utf8Path::new("/data/vectors.txt"))
        );
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn regular_name_and_later_extension_win_in_one_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".text-parser.toml"), "neighbor_count = 1\n").unwrap();
        fs::write(tmp.path().join(".text-parser.json"), r#"{"neighbor_count": 2}"#).unwrap();
        fs::write(tmp.path().join("text-parser.toml"), "neighbor_count = 3\n").unwrap();

        let (config, sources) = isolated(tmp.path()).load().unwrap();
        assert_eq!(config.neighbor_count, 3);
        assert_eq!(sources.project_files.len(), 3);
        assert!(
            sources
                .primary_file()
                .is_some_and(|p| p.as_str().ends_with("/text-parser.toml"))
        );
    }

    #[test]
    fn only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let child = tmp.path().join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(tmp.path().join(".text-parser.toml"), "join_names = false\n").unwrap();
        fs::write(child.join(".text-parser.toml"), "neighbor_count = 4\n").unwrap();

        let (config, _) = isolated(&child).load().unwrap();
        assert_eq!(config.neighbor_count, 4);
        assert!(config.join_names, "parent config must not contribute");
    }

    #[test]
    fn boundary_marker_stops_the_walk() {
        let tmp = TempDir::new().unwrap();
        let repo = tmp.path().join("repo");
        let work = repo.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir(repo.join(".git")).unwrap();
        fs::write(tmp.path().join(".text-parser.toml"), "neighbor_count = 2\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(&work))
            .load()
            .unwrap();
        assert_eq!(config.neighbor_count, DEFAULT_NEIGHBOR_COUNT);
        assert!(sources.project_files.is_empty());

        // A config next to the marker is still found.
        fs::write(repo.join("text-parser.toml"), "neighbor_count = 6\n").unwrap();
        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(&work))
            .load()
            .unwrap();
        assert_eq!(config.neighbor_count, 6);
    }

    #[test]
    fn explicit_files_override_project_in_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".text-parser.toml"), "neighbor_count = 7\n").unwrap();
        let first = tmp.path().join("first.toml");
        let second = tmp.path().join("second.yaml");
        fs::write(&first, "neighbor_count = 2\njoin_names = false\n").unwrap();
        fs::write(&second, "neighbor_count: 5\n").unwrap();

        let (config, sources) = isolated(tmp.path())
            .with_file(utf8(&first))
            .with_file(utf8(&second))
            .load()
            .unwrap();
        assert_eq!(config.neighbor_count, 5);
        assert!(!config.join_names);
        assert_eq!(sources.primary_file(), Some(utf8(&second).as_path()));
    }

    #[test]
    fn invalid_value_is_a_deserialize_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "neighbor_count = \"many\"\n").unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&path))
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn input_limit_defaults_and_disable() {
        let mut config = Config::default();
        assert_eq!(config.input_limit(), Some(crate::DEFAULT_MAX_INPUT_BYTES));

        config.max_input_bytes = Some(1024);
        assert_eq!(config.input_limit(), Some(1024));

        config.disable_input_limit = true;
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn default_embeddings_path_lives_in_data_dir() {
        if let Some(path) = Config::default().resolved_embeddings_path() {
            assert!(path.as_str().contains("text-parser"));
            assert!(path.as_str().ends_with("en.txt"));
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn env_overrides_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "log_dir = \"/from/file\"\nneighbor_count = 8\n").unwrap();

        // SAFETY: ENV_LOCK serializes environment access in this module.
        unsafe {
            std::env::set_var("TEXT_PARSER_LOG_DIR", "/from/env");
        }
        let loaded = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&path))
            .load();
        // SAFETY: as above.
        unsafe {
            std::env::remove_var("TEXT_PARSER_LOG_DIR");
        }

        let (config, _) = loaded.unwrap();
        assert_eq!(config.log_dir.as_deref(), Some(Utf8Path::new("/from/env")));
        assert_eq!(config.neighbor_count, 8);
    }
}
