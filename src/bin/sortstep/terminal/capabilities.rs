use std::env;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorLevel {
    TrueColor,
    Ansi256,
    Ansi16,
    Ansi8,
    None,
}

impl ColorLevel {
    pub fn has_rgb(self) -> bool {
        self == ColorLevel::TrueColor
    }
}

#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_mouse: bool,
    pub supports_bracketed_paste: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        let env = TerminalEnv::from_env();
        Self::from_env(env)
    }

    fn from_env(env: TerminalEnv) -> Self {
        let color_level = detect_color_level(&env);
        let interactive = is_interactive(&env);
        Self {
            color_level,
            supports_mouse: interactive,
            supports_bracketed_paste: interactive,
        }
    }
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self {
            color_level: ColorLevel::TrueColor,
            supports_mouse: true,
            supports_bracketed_paste: true,
        }
    }
}

#[derive(Debug, Clone)]
struct TerminalEnv {
    term: Option<String>,
    colorterm: Option<String>,
    no_color: bool,
}

impl TerminalEnv {
    fn from_env() -> Self {
        Self {
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            no_color: env::var("NO_COLOR").is_ok(),
        }
    }
}

fn detect_color_level(env: &TerminalEnv) -> ColorLevel {
    if env.no_color {
        return ColorLevel::None;
    }
    let term = env.term.as_deref().unwrap_or_default();
    if term == "dumb" {
        return ColorLevel::None;
    }
    if has_truecolor(env.colorterm.as_deref()) {
        return ColorLevel::TrueColor;
    }
    if term.contains("256color") {
        return ColorLevel::Ansi256;
    }
    if term.contains("color") {
        return ColorLevel::Ansi16;
    }
    ColorLevel::Ansi8
}

fn has_truecolor(value: Option<&str>) -> bool {
    value
        .map(|v| v.to_lowercase())
        .map(|v| v.contains("truecolor") || v.contains("24bit"))
        .unwrap_or(false)
}

fn is_interactive(env: &TerminalEnv) -> bool {
    env.term.as_deref().unwrap_or_default() != "dumb"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(term: Option<&str>, colorterm: Option<&str>, no_color: bool) -> TerminalEnv {
        TerminalEnv {
            term: term.map(|v| v.to_string()),
            colorterm: colorterm.map(|v| v.to_string()),
            no_color,
        }
    }

    #[test]
    fn detects_truecolor() {
        let caps = TerminalCapabilities::from_env(env_with(
            Some("xterm-256color"),
            Some("truecolor"),
            false,
        ));
        assert_eq!(caps.color_level, ColorLevel::TrueColor);
        assert!(caps.color_level.has_rgb());
    }

    #[test]
    fn detects_ansi256() {
        let caps = TerminalCapabilities::from_env(env_with(Some("xterm-256color"), None, false));
        assert_eq!(caps.color_level, ColorLevel::Ansi256);
        assert!(caps.supports_mouse);
    }

    #[test]
    fn no_color_wins() {
        let caps =
            TerminalCapabilities::from_env(env_with(Some("xterm-256color"), Some("24bit"), true));
        assert_eq!(caps.color_level, ColorLevel::None);
    }

    #[test]
    fn dumb_terminal_is_plain() {
        let caps = TerminalCapabilities::from_env(env_with(Some("dumb"), None, false));
        assert_eq!(caps.color_level, ColorLevel::None);
        assert!(!caps.supports_mouse);
        assert!(!caps.supports_bracketed_paste);
    }
}
