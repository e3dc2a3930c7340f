//! Terminal color handling for report output.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    /// Resolve the mode from `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
    pub fn from_env() -> Self {
        resolve_env_mode(
            env::var("NO_COLOR").ok().as_deref(),
            env::var("CLICOLOR").ok().as_deref(),
            env::var("CLICOLOR_FORCE").ok().as_deref(),
        )
    }

    /// Set the process-wide `colored` override to match this mode.
    pub fn apply(&self) {
        colored::control::set_override(self.should_use_color());
    }
}

// Pure function so precedence can be tested without touching the environment
fn resolve_env_mode(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
) -> ColorMode {
    let mut mode = ColorMode::Auto;

    // Per no-color.org, presence alone disables color
    if no_color.is_some() || clicolor == Some("0") {
        mode = ColorMode::Never;
    }
    if clicolor_force == Some("1") {
        mode = ColorMode::Always;
    }

    mode
}

/// Styling helpers that degrade to plain text when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            color: mode.should_use_color(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn bad(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    /// Green when `value` is favourable (non-negative), red otherwise.
    pub fn signed(&self, value: f64, text: &str) -> String {
        if value >= 0.0 {
            self.good(text)
        } else {
            self.bad(text)
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_precedence() {
        assert_eq!(resolve_env_mode(None, None, None), ColorMode::Auto);
        assert_eq!(resolve_env_mode(Some(""), None, None), ColorMode::Never);
        assert_eq!(resolve_env_mode(None, Some("0"), None), ColorMode::Never);
        assert_eq!(
            resolve_env_mode(Some("1"), None, Some("1")),
            ColorMode::Always
        );
    }

    #[test]
    fn test_plain_palette_leaves_text_untouched() {
        let palette = Palette::plain();
        assert_eq!(palette.header("Results"), "Results");
        assert_eq!(palette.signed(-1.0, "-1.00"), "-1.00");
    }
}
