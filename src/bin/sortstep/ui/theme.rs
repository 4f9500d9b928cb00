use ratatui::style::{Color, Modifier, Style};

use crate::terminal::ColorLevel;

/// Unicode indicators for status and UI elements
pub mod indicators {
    pub const PROMPT: &str = "❯";
    pub const BULLET: &str = "●";
    pub const CHECK: &str = "✓";
    pub const PLAY: &str = "▶";
    pub const SELECTED: &str = "›";
    pub const REVERT: &str = "↺";
}

/// Styles for one index marker (`i` or `j`).
#[derive(Debug, Clone, Copy)]
pub struct MarkerStyle {
    /// Label under the item on the current row
    pub label: Style,
    /// Underline under the item on earlier rows
    pub rule: Style,
    /// Legend badge (`i = 3`)
    pub badge: Style,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub accent: Style,
    pub muted: Style,
    pub disabled: Style,
    pub border: Style,
    pub border_focused: Style,
    pub error: Style,
    pub prompt: Style,
    pub index: Style,
    pub selected: Style,
    pub done_badge: Style,
    pub status: Style,
    pub status_idle: Style,
    pub status_playing: Style,
    pub status_done: Style,
    pub marker_i: MarkerStyle,
    pub marker_j: MarkerStyle,
}

type Rgb = (u8, u8, u8);

const TEAL_500: Rgb = (20, 184, 166);
const TEAL_100: Rgb = (204, 251, 241);
const INDIGO_500: Rgb = (99, 102, 241);
const INDIGO_100: Rgb = (224, 231, 255);
const FUCHSIA_500: Rgb = (217, 70, 239);
const FUCHSIA_100: Rgb = (250, 232, 255);
const GREEN_200: Rgb = (187, 247, 208);
const GRAY_800: Rgb = (31, 41, 55);
const ORANGE: Rgb = (217, 119, 87);
const SKY: Rgb = (96, 165, 250);
const WARM_GRAY: Rgb = (140, 135, 130);

impl Theme {
    pub fn from_name(name: &str, level: ColorLevel) -> Self {
        if level == ColorLevel::None {
            return Self::mono();
        }
        match name.to_lowercase().as_str() {
            "mono" => Self::mono(),
            "cool" => Self::cool(level),
            _ => Self::warm(level),
        }
    }

    /// Orange accent, teal `i` and indigo `j`
    pub fn warm(level: ColorLevel) -> Self {
        let accent = pick(level, ORANGE, Color::LightRed);
        Self::colored(
            "warm",
            level,
            accent,
            marker(level, TEAL_500, TEAL_100, Color::Cyan),
            marker(level, INDIGO_500, INDIGO_100, Color::Blue),
        )
    }

    /// Blue accent, teal `i` and fuchsia `j`
    pub fn cool(level: ColorLevel) -> Self {
        let accent = pick(level, SKY, Color::LightBlue);
        Self::colored(
            "cool",
            level,
            accent,
            marker(level, TEAL_500, TEAL_100, Color::Cyan),
            marker(level, FUCHSIA_500, FUCHSIA_100, Color::Magenta),
        )
    }

    fn colored(
        name: &'static str,
        level: ColorLevel,
        accent: Color,
        marker_i: MarkerStyle,
        marker_j: MarkerStyle,
    ) -> Self {
        let muted = pick(level, WARM_GRAY, Color::Gray);
        let green = pick(level, GREEN_200, Color::Green);
        let dark = pick(level, GRAY_800, Color::Black);
        Self {
            name,
            accent: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(muted),
            disabled: Style::default().fg(muted).add_modifier(Modifier::DIM),
            border: Style::default().fg(muted),
            border_focused: Style::default().fg(accent),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(accent),
            index: Style::default().fg(muted),
            selected: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            done_badge: Style::default()
                .fg(dark)
                .bg(green)
                .add_modifier(Modifier::BOLD),
            status: Style::default().fg(muted),
            status_idle: Style::default().fg(muted),
            status_playing: Style::default().fg(accent),
            status_done: Style::default().fg(green),
            marker_i,
            marker_j,
        }
    }

    /// No colors; markers differ by modifier
    pub fn mono() -> Self {
        let plain = Style::default();
        Self {
            name: "mono",
            accent: plain.add_modifier(Modifier::BOLD),
            muted: plain.add_modifier(Modifier::DIM),
            disabled: plain.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            border: plain,
            border_focused: plain.add_modifier(Modifier::BOLD),
            error: plain.add_modifier(Modifier::BOLD),
            prompt: plain.add_modifier(Modifier::BOLD),
            index: plain.add_modifier(Modifier::DIM),
            selected: plain.add_modifier(Modifier::REVERSED),
            done_badge: plain.add_modifier(Modifier::REVERSED | Modifier::BOLD),
            status: plain,
            status_idle: plain.add_modifier(Modifier::DIM),
            status_playing: plain.add_modifier(Modifier::BOLD),
            status_done: plain.add_modifier(Modifier::BOLD),
            marker_i: MarkerStyle {
                label: plain.add_modifier(Modifier::BOLD),
                rule: plain,
                badge: plain.add_modifier(Modifier::REVERSED),
            },
            marker_j: MarkerStyle {
                label: plain.add_modifier(Modifier::ITALIC),
                rule: plain.add_modifier(Modifier::DIM),
                badge: plain.add_modifier(Modifier::REVERSED | Modifier::ITALIC),
            },
        }
    }
}

fn marker(level: ColorLevel, strong: Rgb, soft: Rgb, fallback: Color) -> MarkerStyle {
    let strong = pick(level, strong, fallback);
    let badge = if level.has_rgb() {
        Style::default()
            .fg(pick(level, GRAY_800, Color::Black))
            .bg(pick(level, soft, fallback))
    } else {
        Style::default().fg(Color::Black).bg(fallback)
    };
    MarkerStyle {
        label: Style::default().fg(strong).add_modifier(Modifier::BOLD),
        rule: Style::default().fg(strong),
        badge,
    }
}

fn pick(level: ColorLevel, rgb: Rgb, fallback: Color) -> Color {
    if level.has_rgb() {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    } else {
        fallback
    }
}
