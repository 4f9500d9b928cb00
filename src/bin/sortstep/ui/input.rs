use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use sortstep::parse_symbols;

use crate::input::InputBuffer;

use super::theme::{indicators, Theme};

const INPUT_BORDER_OFFSET: u16 = 1;
const PROMPT_WIDTH: u16 = 2; // prompt + space

pub struct InputProps<'a> {
    pub area: Rect,
    pub buffer: &'a InputBuffer,
    pub theme: &'a Theme,
    pub focused: bool,
}

pub fn render_input(frame: &mut Frame<'_>, props: InputProps<'_>) {
    let theme = props.theme;
    let count = parse_symbols(props.buffer.text()).len();
    let border = if props.focused {
        theme.border_focused
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" List to sort ")
        .title_bottom(Line::styled(format!(" {} ", character_count(count)), theme.muted));

    let prompt_style = if props.focused {
        theme.prompt
    } else {
        theme.muted
    };
    let content = if props.buffer.is_empty() {
        Span::styled("type some characters", theme.muted)
    } else {
        Span::styled(props.buffer.text().to_string(), Style::default())
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", indicators::PROMPT), prompt_style),
        content,
    ]);
    frame.render_widget(Paragraph::new(line).block(block), props.area);

    if props.focused {
        let column = if props.buffer.is_empty() {
            0
        } else {
            props.buffer.cursor_column()
        };
        frame.set_cursor_position(Position::new(
            props.area.x + INPUT_BORDER_OFFSET + PROMPT_WIDTH + column,
            props.area.y + INPUT_BORDER_OFFSET,
        ));
    }
}

pub fn character_count(count: usize) -> String {
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{count} characters")
    }
}
