use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{AppError, ErrConfig};

pub const CONFIG_FILE_NAME: &str = "keeper.conf";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_DATABASE: &str = "keeper.db";
const DEFAULT_ERROR_LOG: &str = "errors.log";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_directory: PathBuf,
    pub app_name: String,
    pub database_path: PathBuf,
    pub error_log_path: PathBuf,
    /// Password prompts allowed per login.
    pub max_attempts: u32,
}

impl AppConfig {
    pub fn new(custom_base_dir: Option<PathBuf>) -> Result<Self, AppError> {
        let app_name = "Keeper".to_string();

        let base_directory = match custom_base_dir {
            Some(dir) => dir,
            None => match env::var_os("KEEPER_DATA_DIR") {
                Some(dir) => PathBuf::from(dir),
                None => Self::get_default_base_directory()?,
            },
        };

        let app_dir = base_directory.join(&app_name);
        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)
                .map_err(|_| AppError::Config(ErrConfig::DirectoryCreationFailed))?;
        }

        let mut config = Self {
            database_path: app_dir.join(DEFAULT_DATABASE),
            error_log_path: app_dir.join(DEFAULT_ERROR_LOG),
            base_directory: app_dir,
            app_name,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        };

        let file = config.base_directory.join(CONFIG_FILE_NAME);
        if file.exists() {
            let content =
                fs::read_to_string(&file).map_err(|_| AppError::Config(ErrConfig::ReadError))?;
            config.apply_file(&content)?;
        }

        if let Some(raw) = env::var_os("KEEPER_MAX_ATTEMPTS") {
            config.max_attempts = parse_max_attempts(&raw.to_string_lossy())?;
        }

        debug!(
            "config: base={:?} db={:?} max_attempts={}",
            config.base_directory, config.database_path, config.max_attempts
        );
        Ok(config)
    }

    /// Applies `key=value` lines; blank lines and `#` comments are skipped.
    pub fn apply_file(&mut self, content: &str) -> Result<(), AppError> {
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                warn!("ignoring malformed config line: {trimmed}");
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "max_attempts" => self.max_attempts = parse_max_attempts(value)?,
                "database" => self.database_path = self.resolve(value),
                "error_log" => self.error_log_path = self.resolve(value),
                other => warn!("ignoring unknown config key: {other}"),
            }
        }
        Ok(())
    }

    fn resolve(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_directory.join(path)
        }
    }

    /// Platform data directory: `LOCALAPPDATA` on Windows,
    /// `~/Library/Application Support` on macOS, XDG elsewhere.
    pub(crate) fn get_default_base_directory() -> Result<PathBuf, AppError> {
        let home = || env::var_os("HOME").map(PathBuf::from);

        let data_dir = if cfg!(target_os = "windows") {
            env::var_os("LOCALAPPDATA").map(PathBuf::from)
        } else if cfg!(target_os = "macos") {
            home().map(|h| h.join("Library").join("Application Support"))
        } else {
            env::var_os("XDG_DATA_HOME")
                .map(PathBuf::from)
                .or_else(|| home().map(|h| h.join(".local").join("share")))
        };

        data_dir.ok_or(AppError::Config(ErrConfig::DirectoryNotFound))
    }
}

pub fn parse_max_attempts(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Config(ErrConfig::InvalidMaxAttempts(
            raw.to_string(),
        ))),
    }
}
