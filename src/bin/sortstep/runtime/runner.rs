use std::io;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

use crate::runtime::{AppEvent, InputEvent};
use crate::ui::render_app;

use super::controller::AppController;
use super::terminal::AppTerminal;

const SLOW_FRAME_MS: u64 = 100;

pub async fn run_app(
    controller: AppController,
    terminal: &mut AppTerminal,
    rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
    period: Duration,
) -> anyhow::Result<()> {
    let mut runner = AppRunner::new(controller, terminal, rx, event_tx, period);
    runner.run().await
}

/// Owns the playback timer; the controller itself never sees wall-clock time.
struct AppRunner<'a> {
    controller: AppController,
    terminal: &'a mut AppTerminal,
    rx: mpsc::Receiver<AppEvent>,
    playback_tick: Interval,
    was_playing: bool,
    dirty: bool,
}

impl<'a> AppRunner<'a> {
    fn new(
        mut controller: AppController,
        terminal: &'a mut AppTerminal,
        rx: mpsc::Receiver<AppEvent>,
        event_tx: mpsc::Sender<AppEvent>,
        period: Duration,
    ) -> Self {
        controller.state.terminal_size = terminal
            .size()
            .map(|r| (r.width, r.height))
            .unwrap_or((0, 0));
        spawn_event_reader(event_tx);
        let mut playback_tick = tokio::time::interval(period);
        playback_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            controller,
            terminal,
            rx,
            playback_tick,
            was_playing: false,
            dirty: true,
        }
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        while !self.controller.state.should_quit {
            if self.dirty {
                self.draw()?;
                self.dirty = false;
            }
            self.wait_for_event().await;
        }
        Ok(())
    }

    async fn wait_for_event(&mut self) {
        let changed = tokio::select! {
            event = self.rx.recv() => match event {
                Some(event) => self.controller.handle_event(event),
                None => {
                    log::warn!("terminal input closed, quitting");
                    self.controller.state.should_quit = true;
                    false
                }
            },
            _ = self.playback_tick.tick() => self.controller.handle_event(AppEvent::PlaybackTick),
        };
        self.dirty |= changed;
        self.sync_playback_timer();
    }

    /// Restarts the period whenever playback starts, so the first automatic
    /// step comes one full period after pressing play.
    fn sync_playback_timer(&mut self) {
        let playing = self.controller.state.playback.is_playing();
        if playing && !self.was_playing {
            self.playback_tick.reset();
            log::debug!("playback started");
        } else if !playing && self.was_playing {
            log::debug!("playback stopped at {}", self.controller.state.playback.status());
        }
        self.was_playing = playing;
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        let started = Instant::now();
        self.terminal
            .draw(|frame| render_app(frame, &self.controller.state))?;
        let elapsed = started.elapsed();
        if elapsed > Duration::from_millis(SLOW_FRAME_MS) {
            log::warn!("slow frame: {}ms", elapsed.as_millis());
        }
        Ok(())
    }
}

fn spawn_event_reader(sender: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || forward_events(crossterm::event::read, &sender));
}

/// Forwards terminal events until a read fails or the app stops listening.
/// Dropping the sender on return closes the channel, which ends the app.
fn forward_events(mut read: impl FnMut() -> io::Result<Event>, sender: &mpsc::Sender<AppEvent>) {
    loop {
        let event = match read() {
            Ok(event) => event,
            Err(err) => {
                log::error!("terminal read failed: {err}");
                return;
            }
        };
        let Some(input) = map_event(event) else {
            continue;
        };
        if sender.blocking_send(AppEvent::Input(input)).is_err() {
            return;
        }
    }
}

fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => Some(InputEvent::Key(key)),
        Event::Mouse(mouse) => Some(InputEvent::Mouse(mouse)),
        Event::Paste(text) => Some(InputEvent::Paste(text)),
        Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::error::TryRecvError;

    #[test]
    fn read_error_stops_forwarding_and_closes_channel() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut reads = vec![
            Err(io::Error::new(io::ErrorKind::Other, "tty gone")),
            Ok(Event::FocusGained),
            Ok(Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))),
        ];
        let mut calls = 0;
        forward_events(
            || {
                calls += 1;
                reads.pop().unwrap_or_else(|| Ok(Event::FocusLost))
            },
            &tx,
        );
        drop(tx);
        assert_eq!(calls, 3);
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::Input(InputEvent::Key(_)))
        ));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[test]
    fn closed_receiver_stops_forwarding() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut calls = 0;
        forward_events(
            || {
                calls += 1;
                Ok(Event::Resize(80, 24))
            },
            &tx,
        );
        assert_eq!(calls, 1);
    }
}
