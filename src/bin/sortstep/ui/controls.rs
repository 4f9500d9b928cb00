use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use sortstep::{State, Status};

use super::theme::{indicators, Theme};

/// Step and Play/Pause hints, enabled the way the buttons are: stepping by
/// hand only while idle, play/pause until the log is done.
pub fn render_controls(frame: &mut Frame<'_>, area: Rect, playback: &State, theme: &Theme) {
    let step_style = if playback.status() == Status::Idle {
        theme.accent
    } else {
        theme.disabled
    };
    let toggle_style = if playback.is_done() {
        theme.disabled
    } else {
        theme.status
    };
    let toggle_label = if playback.status() == Status::Idle {
        format!("{} Play", indicators::PLAY)
    } else {
        "‖ Pause".to_string()
    };
    let line = Line::from(vec![
        Span::styled("→ Step", step_style),
        Span::raw("  "),
        Span::styled(format!("␣ {toggle_label}"), toggle_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
