//! Terminal styling for human output

use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// One style per kind of text the CLI prints.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Listing and profile titles, section rules
    pub title: Style,
    /// Flash confirmations
    pub ok: Style,
    pub failure: Style,
    pub caution: Style,
    /// Field labels in profile details
    pub label: Style,
    /// Mails and placeholders
    pub faint: Style,
    /// Best-friend marker in profile views
    pub best: Style,
}

impl Theme {
    /// Plain output when stdout is not a terminal or `NO_COLOR` is set
    pub fn detect() -> Self {
        let colored = std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term();
        Self::new(colored)
    }

    pub fn new(colored: bool) -> Self {
        let pick = |style: Style| if colored { style } else { Style::new() };
        Self {
            title: pick(Style::new().cyan().bold()),
            ok: pick(Style::new().green().bold()),
            failure: pick(Style::new().red().bold()),
            caution: pick(Style::new().yellow()),
            label: pick(Style::new().white().dimmed()),
            faint: pick(Style::new().bright_black()),
            best: pick(Style::new().yellow().bold()),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
