mod print;
mod tui;

use clap::Parser;
use std::io::IsTerminal;

use crate::args::CliArgs;
use crate::config::{load_config, save_config, LoadedConfig};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let LoadedConfig {
        mut config,
        paths,
        config_exists,
    } = load_config(args.config.clone())?;
    let _logger = init_logging(&config.logging, &paths)?;
    if !config_exists {
        log::info!(
            "no config at {}, using defaults",
            paths.config_file.display()
        );
    }
    args.apply_overrides(&mut config);

    if args.init_config {
        save_config(&config, &paths)?;
        println!("wrote {}", paths.config_file.display());
        return Ok(());
    }

    if args.wants_print() || !std::io::stdout().is_terminal() {
        let mut stdout = std::io::stdout().lock();
        print::print_log(&mut stdout, &config.playback.default_input, args.json)?;
        return Ok(());
    }

    tui::run_tui(config).await
}
