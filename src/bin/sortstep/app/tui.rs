use crate::config::AppConfig;
use crate::runtime::{controller::AppController, init_terminal, restore_terminal, run_app};
use crate::runtime::{AppEvent, AppState};
use crate::terminal::TerminalCapabilities;

pub async fn run_tui(config: AppConfig) -> anyhow::Result<()> {
    let terminal_caps = TerminalCapabilities::detect();
    let mut terminal = init_terminal(&terminal_caps)?;
    let result = run_inner(config, terminal_caps.clone(), &mut terminal).await;
    let restored = restore_terminal(&terminal_caps);
    finish(result, restored)
}

/// A failed run outranks a failed restore; the latter is only logged then.
fn finish(result: anyhow::Result<()>, restored: std::io::Result<()>) -> anyhow::Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            log::error!("terminal restore failed after error: {restore_err}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => Ok(restored?),
    }
}

async fn run_inner(
    config: AppConfig,
    terminal_caps: TerminalCapabilities,
    terminal: &mut crate::runtime::AppTerminal,
) -> anyhow::Result<()> {
    let interval = config.playback.interval();
    let state = AppState::new(config, terminal_caps);
    let (tx, rx) = tokio::sync::mpsc::channel::<AppEvent>(128);
    log::info!(
        "starting on {:?}, step every {}ms",
        state.playback.input(),
        interval.as_millis()
    );
    run_app(AppController::new(state), terminal, rx, tx, interval).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn restore_error() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "tty gone"))
    }

    #[test]
    fn run_error_survives_failed_restore() {
        let err = finish(Err(anyhow::anyhow!("draw failed")), restore_error()).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn restore_error_reported_after_clean_run() {
        let err = finish(Ok(()), restore_error()).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
    }

    #[test]
    fn clean_run_and_restore() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
