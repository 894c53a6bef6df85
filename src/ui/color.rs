//! Named terminal colors and colored log lines

use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";

/// The eight standard ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

const FOREGROUND: [&str; 8] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
    "\x1b[37m",
];

const BACKGROUND: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m",
    "\x1b[47m",
];

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    pub fn fg(self) -> &'static str {
        FOREGROUND[self as usize]
    }

    pub fn bg(self) -> &'static str {
        BACKGROUND[self as usize]
    }
}

/// Wrap `text` in the color, ignoring terminal support
pub fn paint(text: &str, fg: Color) -> String {
    format!("{}{}{}", fg.fg(), text, RESET)
}

/// Wrap `text` in a foreground and background color, ignoring terminal support
pub fn paint_on(text: &str, fg: Color, bg: Color) -> String {
    format!("{}{}{}{}", fg.fg(), bg.bg(), text, RESET)
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, fg: Color) -> String {
    if supports_formatting() {
        paint(text, fg)
    } else {
        text.to_string()
    }
}

/// Apply foreground and background color if the terminal supports it
pub fn colorize_on(text: &str, fg: Color, bg: Color) -> String {
    if supports_formatting() {
        paint_on(text, fg, bg)
    } else {
        text.to_string()
    }
}

/// Write one colored line to `out`
pub fn write_line<W: Write>(out: &mut W, text: &str, fg: Color) -> io::Result<()> {
    writeln!(out, "{}", colorize(text, fg))
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" || term.is_empty() {
            return false;
        }

        if term.contains("color")
            || term.contains("256")
            || term.starts_with("xterm")
            || term.starts_with("screen")
            || term.starts_with("tmux")
            || term == "linux"
        {
            return true;
        }
    }

    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        match term_program.as_str() {
            "Apple_Terminal" | "iTerm.app" | "vscode" | "Hyper" | "Alacritty" | "kitty"
            | "WezTerm" => return true,
            _ => {}
        }
    }

    if env::var("CI").is_ok() {
        let ci_supports_color = [
            "GITHUB_ACTIONS",
            "TRAVIS",
            "CIRCLECI",
            "APPVEYOR",
            "GITLAB_CI",
            "AZURE_HTTP_USER_AGENT",
            "BUILDKITE",
        ]
        .iter()
        .any(|var| env::var(var).is_ok());

        if ci_supports_color {
            return true;
        }
    }

    false
}
