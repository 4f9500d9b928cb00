use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::runtime::{AppState, Focus, OverlayState};

use super::controls::render_controls;
use super::help::render_help;
use super::input::{render_input, InputProps};
use super::log_view::{render_log, LogViewProps};
use super::status::{build_status_line, render_status};
use super::theme::Theme;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;
const HEADER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const CONTROLS_WIDTH: u16 = 24;
const HELP_WIDTH_PCT: u16 = 70;
const HELP_HEIGHT_PCT: u16 = 60;

pub fn render_app(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::from_name(&state.config.ui.theme, state.terminal_caps.color_level);
    let size = frame.area();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_too_small(frame, size, &theme);
        return;
    }
    let areas = split_rows(size);
    render_input(
        frame,
        InputProps {
            area: areas.input,
            buffer: &state.input,
            theme: &theme,
            focused: state.focus == Focus::Input && state.overlay == OverlayState::None,
        },
    );
    render_controls(frame, areas.controls, &state.playback, &theme);
    render_log(
        frame,
        LogViewProps {
            area: areas.log,
            playback: &state.playback,
            selected: state.selected_row(),
            theme: &theme,
            focused: state.focus == Focus::Log,
        },
    );
    render_status(frame, areas.status, build_status_line(state, &theme), &theme);
    if state.overlay == OverlayState::Help {
        render_help(
            frame,
            centered_rect(HELP_WIDTH_PCT, HELP_HEIGHT_PCT, size),
            &theme,
        );
    }
}

struct MainAreas {
    input: Rect,
    controls: Rect,
    log: Rect,
    status: Rect,
}

fn split_rows(area: Rect) -> MainAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(CONTROLS_WIDTH)])
        .split(rows[0]);
    MainAreas {
        input: header[0],
        controls: header[1],
        log: rows[1],
        status: rows[2],
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let message = format!(
        "Terminal too small (min {}x{}). Resize to continue.",
        MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(Text::from(message))
        .block(Block::default().borders(Borders::ALL).title("sortstep"))
        .style(theme.error);
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const FULL_PERCENT: u16 = 100;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((FULL_PERCENT - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((FULL_PERCENT - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((FULL_PERCENT - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((FULL_PERCENT - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
