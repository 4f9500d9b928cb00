use std::fs;

use super::error::ConfigError;
use super::load::{ensure_dirs, secure_file_permissions};
use super::paths::ConfigPaths;
use super::types::AppConfig;

pub fn save_config(config: &AppConfig, paths: &ConfigPaths) -> Result<(), ConfigError> {
    ensure_dirs(paths)?;
    let contents = toml::to_string_pretty(config)?;
    fs::write(&paths.config_file, contents)?;
    secure_file_permissions(&paths.config_file)?;
    log::info!("wrote config to {}", paths.config_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load::load_from;

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::rooted(dir.path());
        let mut config = AppConfig::default();
        config.playback.default_input = "ZYX".to_string();
        config.playback.interval_ms = 90;
        config.ui.theme = "cool".to_string();
        save_config(&config, &paths).unwrap();

        let loaded = load_from(paths).unwrap();
        assert!(loaded.config_exists);
        assert_eq!(loaded.config.playback.default_input, "ZYX");
        assert_eq!(loaded.config.playback.interval_ms, 90);
        assert_eq!(loaded.config.ui.theme, "cool");
    }

    #[cfg(unix)]
    #[test]
    fn saved_config_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::rooted(dir.path());
        save_config(&AppConfig::default(), &paths).unwrap();
        let mode = fs::metadata(&paths.config_file).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
