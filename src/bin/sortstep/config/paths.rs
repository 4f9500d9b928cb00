use std::path::PathBuf;

use super::error::ConfigError;

const APP_DIR: &str = "sortstep";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl ConfigPaths {
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = config_override {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .ok_or(ConfigError::MissingHome)?;
            return Ok(Self::from_dirs(
                dir,
                default_data_dir()?,
                default_logs_dir()?,
                path,
            ));
        }
        let config_dir = default_config_dir()?;
        let config_file = config_dir.join("config.toml");
        Ok(Self::from_dirs(
            config_dir,
            default_data_dir()?,
            default_logs_dir()?,
            config_file,
        ))
    }

    /// Keeps every directory under `root`.
    #[cfg(test)]
    pub fn rooted(root: &std::path::Path) -> Self {
        let data_dir = root.join("data");
        Self::from_dirs(
            root.to_path_buf(),
            data_dir.clone(),
            data_dir.join("logs"),
            root.join("config.toml"),
        )
    }

    fn from_dirs(
        config_dir: PathBuf,
        data_dir: PathBuf,
        logs_dir: PathBuf,
        config_file: PathBuf,
    ) -> Self {
        Self {
            config_file,
            config_dir,
            data_dir,
            logs_dir,
        }
    }

    pub fn default_log_file(&self) -> PathBuf {
        self.logs_dir.join(format!("{APP_DIR}.log"))
    }
}

fn home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::MissingHome)
}

fn default_config_dir() -> Result<PathBuf, ConfigError> {
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR))
}

fn default_logs_dir() -> Result<PathBuf, ConfigError> {
    Ok(default_data_dir()?.join("logs"))
}
