use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "insureflow";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_MONTHS_BACK: usize = 6;
pub const MAX_MONTHS_BACK: usize = 24;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub months_back: usize,
    pub monthly_goal: Option<f64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig {
                api_key: None,
                model: DEFAULT_MODEL.to_string(),
            },
            dashboard: DashboardConfig {
                months_back: DEFAULT_MONTHS_BACK,
                monthly_goal: None,
            },
        }
    }
}

impl AppConfig {
    /// API key for the generative service: environment first, config second.
    pub fn resolve_api_key(&self) -> Option<String> {
        match env::var(API_KEY_ENV) {
            Ok(value) if !value.trim().is_empty() => Some(value),
            _ => self.ai.api_key.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid months_back value: {0} (expected 1..={MAX_MONTHS_BACK})")]
    InvalidMonthsBack(i64),
    #[error("invalid monthly_goal value: {0}")]
    InvalidMonthlyGoal(f64),
    #[error("invalid model name")]
    InvalidModel,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    ai: Option<AiFile>,
    dashboard: Option<DashboardFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AiFile {
    api_key: Option<String>,
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DashboardFile {
    months_back: Option<i64>,
    monthly_goal: Option<f64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    // The file may carry the API key, so refuse group/world access.
    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(ai) = parsed.ai {
        if let Some(api_key) = ai.api_key {
            if !api_key.trim().is_empty() {
                config.ai.api_key = Some(api_key);
            }
        }
        if let Some(model) = ai.model {
            if model.trim().is_empty() {
                return Err(ConfigError::InvalidModel);
            }
            config.ai.model = model;
        }
    }

    if let Some(dashboard) = parsed.dashboard {
        if let Some(months_back) = dashboard.months_back {
            if months_back < 1 || months_back > MAX_MONTHS_BACK as i64 {
                return Err(ConfigError::InvalidMonthsBack(months_back));
            }
            config.dashboard.months_back = months_back as usize;
        }
        if let Some(goal) = dashboard.monthly_goal {
            if !goal.is_finite() || goal <= 0.0 {
                return Err(ConfigError::InvalidMonthlyGoal(goal));
            }
            config.dashboard.monthly_goal = Some(goal);
        }
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
