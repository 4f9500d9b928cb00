use std::io;
use std::path::PathBuf;

/// Failures while reading or writing the sortstep config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot access sortstep config: {0}")]
    Io(#[from] io::Error),
    #[error("invalid sortstep config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot serialize sortstep config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no home directory to place the sortstep config in")]
    MissingHome,
}
