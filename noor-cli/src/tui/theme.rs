//! TUI themes - light and dark palettes
//!
//! Two palettes mirroring the original web app: a warm paper-like light
//! theme and an amber-accented dark theme. The theme toggle swaps which
//! palette the renderer reads; nothing else changes.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub border: Color,
    pub user: Color,
    pub assistant: Color,
}

impl Palette {
    /// Dark mode - amber on near-black
    pub const fn dark() -> Self {
        Self {
            text: Color::Rgb(230, 225, 215),
            muted: Color::Rgb(120, 115, 105),
            accent: Color::Rgb(255, 190, 90),
            highlight: Color::Rgb(255, 210, 130),
            border: Color::Rgb(80, 75, 65),
            user: Color::Rgb(255, 190, 90),
            assistant: Color::Rgb(200, 195, 185),
        }
    }

    /// Light mode - stone on warm white
    pub const fn light() -> Self {
        Self {
            text: Color::Rgb(60, 55, 50),
            muted: Color::Rgb(150, 145, 135),
            accent: Color::Rgb(180, 110, 30),
            highlight: Color::Rgb(200, 140, 50),
            border: Color::Rgb(190, 185, 175),
            user: Color::Rgb(50, 45, 40),
            assistant: Color::Rgb(90, 85, 80),
        }
    }

    pub const fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Header/title style
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Normal text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Secondary information style
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Active border style
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// User message prefix style
    pub fn user_prefix(&self) -> Style {
        Style::default().fg(self.user).add_modifier(Modifier::BOLD)
    }

    /// Assistant message prefix style
    pub fn assistant_prefix(&self) -> Style {
        Style::default().fg(self.assistant)
    }

    /// Loading indicator style
    pub fn loading(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Key hint style for the help bar
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Suggestion prompt style on the empty-state screen
    pub fn suggestion(&self) -> Style {
        Style::default().fg(self.highlight)
    }
}
