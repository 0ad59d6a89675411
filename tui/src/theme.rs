//! Color theme and glyphs for the Operative TUI.
//!
//! Agency palette (cyan on gunmetal) by default with an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use operative_engine::Accent;
use operative_types::UiOptions;

/// Agency color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_GUNMETAL: Color = Color::Rgb(10, 15, 20); // agency-gunmetal
    pub const BG_SLATE: Color = Color::Rgb(26, 31, 36); // agency-slate
    pub const BG_BORDER: Color = Color::Rgb(0, 70, 78); // dimmed cyan

    // === Foregrounds ===
    pub const CYAN: Color = Color::Rgb(0, 240, 255); // agency-cyan
    pub const CYAN_DIM: Color = Color::Rgb(0, 130, 140);
    pub const TEXT_MUTED: Color = Color::Rgb(90, 105, 115);

    // === Accents ===
    pub const AMBER: Color = Color::Rgb(255, 184, 0); // agency-amber
    pub const CRIMSON: Color = Color::Rgb(255, 0, 60); // agency-crimson
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub text_muted: Color,
    pub amber: Color,
    pub crimson: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_GUNMETAL,
            bg_panel: colors::BG_SLATE,
            bg_border: colors::BG_BORDER,
            primary: colors::CYAN,
            primary_dim: colors::CYAN_DIM,
            text_muted: colors::TEXT_MUTED,
            amber: colors::AMBER,
            crimson: colors::CRIMSON,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            primary: Color::White,
            primary_dim: Color::Gray,
            text_muted: Color::DarkGray,
            amber: Color::Yellow,
            crimson: Color::Red,
        }
    }

    /// Map a roster accent role onto the palette.
    #[must_use]
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Amber => self.amber,
            Accent::Cyan => self.primary,
            Accent::Crimson => self.crimson,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Fixed glyph table, with ASCII fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub live_dot: &'static str,
    pub cursor_block: &'static str,
    pub selected_left: &'static str,
    pub selected_right: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            live_dot: "*",
            cursor_block: "#",
            selected_left: ">",
            selected_right: "<",
            separator: "|",
        }
    } else {
        Glyphs {
            live_dot: "\u{25cf}",      // ●
            cursor_block: "\u{2588}",  // █
            selected_left: "\u{25b8}", // ▸
            selected_right: "\u{25c2}", // ◂
            separator: "\u{2502}",     // │
        }
    }
}

/// Common styles derived from the palette.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn chrome(palette: &Palette) -> Style {
        Style::default().fg(palette.primary_dim)
    }
}
