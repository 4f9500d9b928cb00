use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "sortstep",
    about = "Step through an insertion sort one comparison at a time",
    allow_hyphen_values = true
)]
pub struct CliArgs {
    /// Text to sort; whitespace is ignored
    #[arg(index = 1)]
    pub input: Option<String>,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Delay between automatic steps while playing
    #[arg(long)]
    pub interval_ms: Option<u64>,
    #[arg(long, short = 't')]
    pub theme: Option<String>,
    /// Print the whole log and exit
    #[arg(long)]
    pub print: bool,
    /// Print the whole log as JSON and exit
    #[arg(long)]
    pub json: bool,
    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl CliArgs {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(input) = &self.input {
            config.playback.default_input = input.clone();
        }
        if let Some(interval_ms) = self.interval_ms {
            config.playback.interval_ms = interval_ms;
        }
        if let Some(theme) = &self.theme {
            config.ui.theme = theme.clone();
        }
    }

    pub fn wants_print(&self) -> bool {
        self.print || self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_input_overrides_default() {
        let args = CliArgs::try_parse_from(["sortstep", "DCBA", "--interval-ms", "40"]).unwrap();
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.playback.default_input, "DCBA");
        assert_eq!(config.playback.interval_ms, 40);
        assert_eq!(config.ui.theme, "warm");
        assert!(!args.wants_print());
    }

    #[test]
    fn json_implies_print() {
        let args = CliArgs::try_parse_from(["sortstep", "--json"]).unwrap();
        assert!(args.wants_print());
        assert!(args.input.is_none());
    }

    #[test]
    fn leaves_config_alone_without_flags() {
        let args = CliArgs::try_parse_from(["sortstep"]).unwrap();
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.playback.default_input, sortstep::DEFAULT_INPUT);
    }
}
