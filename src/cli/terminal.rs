//! Terminal capability detection and colorizing helpers.

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Check if the terminal is narrow (< 60 columns).
///
/// Narrow terminals get stacked output instead of tables.
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(w, _)| w.0 < 60)
}

/// Extension trait for colorizing output.
///
/// Every method degrades to the plain string when the terminal does not
/// support color.
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl<T: AsRef<str>> Colorize for T {
    fn success(&self) -> String {
        if supports_color() {
            self.as_ref().fg::<css::Green>().to_string()
        } else {
            self.as_ref().to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.as_ref().fg::<css::Orange>().to_string()
        } else {
            self.as_ref().to_string()
        }
    }

    fn info(&self) -> String {
        if supports_color() {
            self.as_ref().fg::<css::LightBlue>().to_string()
        } else {
            self.as_ref().to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.as_ref().dimmed().to_string()
        } else {
            self.as_ref().to_string()
        }
    }
}
