//! Colour configuration and the palette used by every widget.

use crate::model::Status;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for list rows and chrome.
///
/// With colours disabled every style is plain except for modifiers (bold,
/// reversed) that stay readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Primary row text.
    pub text: Style,
    /// Secondary text such as emails and descriptions.
    pub muted: Style,
    /// Item names.
    pub title: Style,
    /// Prices.
    pub accent: Style,
    /// Selected tab.
    pub highlight: Style,
    /// Borders and scrollbar.
    pub border: Style,
    /// Key names in the help overlay.
    pub key: Style,
    /// Selected list item.
    pub selected: Style,
    active: Style,
    inactive: Style,
    pending: Style,
}

impl Palette {
    /// Build the palette for a colour configuration.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                text: Style::default().fg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Yellow),
                highlight: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Gray),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().bg(Color::DarkGray),
                active: Style::default().fg(Color::Green),
                inactive: Style::default().fg(Color::Red),
                pending: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                text: Style::default(),
                muted: Style::default(),
                title: Style::default().add_modifier(Modifier::BOLD),
                accent: Style::default(),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                border: Style::default(),
                key: Style::default().add_modifier(Modifier::BOLD),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                active: Style::default(),
                inactive: Style::default(),
                pending: Style::default(),
            }
        }
    }

    /// Style of a status tag.
    pub fn status(&self, status: Status) -> Style {
        match status {
            Status::Active => self.active,
            Status::Inactive => self.inactive,
            Status::Pending => self.pending,
        }
    }

    /// Style of a stock label.
    pub fn stock(&self, in_stock: bool) -> Style {
        if in_stock {
            self.active
        } else {
            self.inactive
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
