use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use sortstep::Status;
use unicode_width::UnicodeWidthStr;

use super::theme::{indicators, Theme};
use crate::runtime::AppState;

const DETAIL_MIN_WIDTH: u16 = 60;

pub struct StatusLine {
    pub left: Vec<Span<'static>>,
    pub right: Vec<Span<'static>>,
}

pub fn render_status(frame: &mut Frame<'_>, area: Rect, line: StatusLine, theme: &Theme) {
    let left_width = spans_width(&line.left);
    let right_width = spans_width(&line.right);
    let filler_width = area.width.saturating_sub(left_width + right_width);
    let filler = Span::styled(" ".repeat(filler_width as usize), theme.status);
    let mut spans = Vec::with_capacity(line.left.len() + line.right.len() + 1);
    spans.extend(line.left);
    spans.push(filler);
    spans.extend(line.right);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn spans_width(spans: &[Span<'static>]) -> u16 {
    spans.iter().map(|span| span.content.width() as u16).sum()
}

pub fn build_status_line(state: &AppState, theme: &Theme) -> StatusLine {
    let playback = &state.playback;
    let status_style = match playback.status() {
        Status::Idle => theme.status_idle,
        Status::Playing => theme.status_playing,
        Status::Done => theme.status_done,
    };
    let mut left = vec![
        Span::styled(format!("{} ", indicators::BULLET), status_style),
        Span::styled(playback.status().to_string(), status_style),
        Span::styled(" · ", theme.status),
        Span::styled(progress_label(state), theme.status),
    ];
    if !state.selection.is_following() {
        left.push(Span::styled(" · selecting", theme.muted));
    }

    let mut right = Vec::new();
    if state.terminal_size.0 >= DETAIL_MIN_WIDTH {
        right.push(Span::styled(
            format!(
                "interval {}ms · theme {} · ",
                state.config.playback.interval().as_millis(),
                theme.name
            ),
            theme.status,
        ));
    }
    right.push(Span::styled("? help", theme.muted));
    StatusLine { left, right }
}

fn progress_label(state: &AppState) -> String {
    match state.playback.log() {
        None => "not started".to_string(),
        Some(log) if log.is_empty() => "nothing to sort".to_string(),
        Some(log) => format!("snapshot {}/{}", state.playback.position() + 1, log.len()),
    }
}
