//! Configuration for Hirelens.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{HirelensError, HirelensResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "hirelens.toml";

/// Main configuration for Hirelens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Upstream GitHub API settings.
    #[serde(default)]
    pub github: GithubConfig,

    /// Repository sampling settings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Timeout for each upstream request (in seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_timeout() -> u64 {
    20
}

/// GitHub API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Base URL of the REST API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Bearer token. Takes precedence over `token_env`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Environment variable read when `token` is not set.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// User-Agent header (GitHub rejects requests without one).
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Repositories requested on the first (and only) page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Sort order of the repository list.
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            token_env: default_token_env(),
            user_agent: default_user_agent(),
            per_page: default_per_page(),
            sort: default_sort(),
        }
    }
}

impl GithubConfig {
    /// Resolves the bearer token from the config or the environment.
    ///
    /// Empty values count as absent.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.token_env)
                    .ok()
                    .filter(|t| !t.trim().is_empty())
            })
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_user_agent() -> String {
    format!("hirelens/{}", env!("CARGO_PKG_VERSION"))
}

fn default_per_page() -> u32 {
    50
}

fn default_sort() -> String {
    "updated".to_string()
}

/// Repository sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Most recently updated repositories inspected for README and commits.
    #[serde(default = "default_max_repos_to_scan")]
    pub max_repos_to_scan: usize,

    /// Window for the recent commit count (in days).
    #[serde(default = "default_commit_window_days")]
    pub commit_window_days: i64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_repos_to_scan: default_max_repos_to_scan(),
            commit_window_days: default_commit_window_days(),
        }
    }
}

/// Default cap of deeply inspected repositories.
pub const MAX_REPOS_TO_SCAN: usize = 3;

fn default_max_repos_to_scan() -> usize {
    MAX_REPOS_TO_SCAN
}

fn default_commit_window_days() -> i64 {
    60
}

/// Result cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum cache capacity (number of usernames).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,

    /// Entry time to live in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    1000
}

fn default_cache_ttl() -> u64 {
    600 // 10 minutes
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> HirelensResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> HirelensResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            github: GithubConfig::default(),
            scan: ScanConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Path of the per-user configuration file, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hirelens").join(CONFIG_FILE_NAME))
    }

    /// Tries the current directory, then the user config dir, then defaults.
    ///
    /// A file that exists but fails to load is an error; the caller decides
    /// whether to fall back to defaults once logging is up.
    pub fn discover() -> HirelensResult<Self> {
        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE_NAME))
            .chain(Self::user_config_path());
        Self::discover_from(candidates)
    }

    /// Loads the first existing file among `candidates`.
    pub fn discover_from(candidates: impl IntoIterator<Item = PathBuf>) -> HirelensResult<Self> {
        match candidates.into_iter().find(|path| path.exists()) {
            Some(path) => Self::load(&path)
                .map_err(|e| HirelensError::config(format!("{}: {}", path.display(), e))),
            None => Ok(Self::default_config()),
        }
    }

    /// Checks values that would make evaluation meaningless.
    pub fn validate(&self) -> HirelensResult<()> {
        if self.scan.max_repos_to_scan == 0 {
            return Err(HirelensError::config("scan.max_repos_to_scan must be at least 1"));
        }
        if self.github.per_page == 0 || self.github.per_page > 100 {
            return Err(HirelensError::config("github.per_page must be between 1 and 100"));
        }
        if self.general.timeout_secs == 0 {
            return Err(HirelensError::config("general.timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default_config();

        assert_eq!(config.general.timeout_secs, 20);
        assert_eq!(config.github.per_page, 50);
        assert_eq!(config.github.sort, "updated");
        assert_eq!(config.scan.max_repos_to_scan, MAX_REPOS_TO_SCAN);
        assert_eq!(config.scan.commit_window_days, 60);
        assert_eq!(config.cache.ttl_secs, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scan]
            max_repos_to_scan = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.scan.max_repos_to_scan, 5);
        assert_eq!(config.scan.commit_window_days, 60);
        assert_eq!(config.github.api_base, "https://api.github.com");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default_config();
        config.cache.ttl_secs = 42;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.cache.ttl_secs, 42);
    }

    #[test]
    fn test_discover_skips_missing_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[cache]\nttl_secs = 7\n").unwrap();

        let config =
            Config::discover_from([dir.path().join("missing.toml"), path]).unwrap();
        assert_eq!(config.cache.ttl_secs, 7);

        let config = Config::discover_from([dir.path().join("missing.toml")]).unwrap();
        assert_eq!(config.cache.ttl_secs, 600);
    }

    #[test]
    fn test_discover_reports_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[scan]\nmax_repos_to_scan = 0\n").unwrap();

        let err = Config::discover_from([path.clone()]).unwrap_err();
        assert!(matches!(err, HirelensError::Config(_)));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_validate_rejects_zero_scan() {
        let mut config = Config::default_config();
        config.scan.max_repos_to_scan = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.github.per_page = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_token_wins() {
        let github = GithubConfig {
            token: Some("abc".to_string()),
            token_env: "HIRELENS_TEST_TOKEN_UNSET".to_string(),
            ..GithubConfig::default()
        };
        assert_eq!(github.resolve_token(), Some("abc".to_string()));
    }

    #[test]
    fn test_blank_token_is_absent() {
        let github = GithubConfig {
            token: Some("   ".to_string()),
            token_env: "HIRELENS_TEST_TOKEN_NEVER_SET".to_string(),
            ..GithubConfig::default()
        };
        assert_eq!(github.resolve_token(), None);
    }
}
