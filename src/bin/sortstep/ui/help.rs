use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::theme::Theme;

pub fn render_help(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(Clear, area);

    let lines = vec![
        help_line("Step", "→ / l / n, Enter in the input, Ctrl+n", theme),
        help_line("Play/Pause", "Space / p, Ctrl+p", theme),
        help_line("Select", "↑↓ / j k, g first, G follow newest", theme),
        help_line("Revert", "Enter / r on the selected row", theme),
        help_line("Input", "Tab or i to edit, Esc back, Ctrl+u clear", theme),
        help_line("Exit", "q, Ctrl+c", theme),
        Line::from(""),
        Line::styled("Any key closes this window", theme.muted),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused)
                .title(" Help "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn help_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", key),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, theme.muted),
    ])
}
