use std::io::IsTerminal;

use colored::{Color, Colorize};

use activity_config::Config;

/// Visual settings for rendered views.
#[derive(Debug, Clone)]
pub struct UiStyle {
    pub header_prefix: String,
    pub active_marker: String,
    pub error_marker: String,
    pub required_marker: String,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub color_highlight: Option<Color>,
    pub plain_mode: bool,
}

impl UiStyle {
    /// No colour and ASCII markers. Output is stable across terminals.
    pub fn plain() -> Self {
        Self {
            header_prefix: "> ".into(),
            active_marker: ">".into(),
            error_marker: "!".into(),
            required_marker: "*".into(),
            use_color: false,
            color_header: None,
            color_highlight: None,
            plain_mode: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let plain_mode = config.plain_output;
        let use_color = stdout_tty && config.ui_color_enabled && !plain_mode && !no_color;
        if plain_mode {
            return Self::plain();
        }

        Self {
            header_prefix: "⮞ ".into(),
            active_marker: "▸".into(),
            error_marker: "✗".into(),
            required_marker: "*".into(),
            use_color,
            color_header: use_color.then_some(Color::BrightBlue),
            color_highlight: use_color.then_some(Color::Cyan),
            plain_mode,
        }
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if self.use_color {
            match self.color_header {
                Some(color) => text.color(color).bold().to_string(),
                None => text.bold().to_string(),
            }
        } else {
            text.to_string()
        }
    }

    pub fn apply_highlight_style(&self, text: &str) -> String {
        if self.use_color {
            match self.color_highlight {
                Some(color) => text.color(color).bold().to_string(),
                None => text.bold().to_string(),
            }
        } else {
            text.to_string()
        }
    }

    pub fn apply_error_style(&self, text: &str) -> String {
        if self.use_color {
            text.bright_red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn apply_muted_style(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, title: &str) -> String {
        self.apply_header_style(&format!("{}{}", self.header_prefix, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_config_forces_the_plain_style() {
        let config = Config {
            plain_output: true,
            ..Config::default()
        };
        let style = UiStyle::from_config(&config);
        assert!(style.plain_mode);
        assert!(!style.use_color);
        assert_eq!(style.header("Title"), "> Title");
    }

    #[test]
    fn disabled_colour_leaves_text_untouched() {
        let config = Config {
            ui_color_enabled: false,
            ..Config::default()
        };
        let style = UiStyle::from_config(&config);
        assert_eq!(style.apply_error_style("oops"), "oops");
    }
}
