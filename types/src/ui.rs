//! UI rendering options shared by the engine and the TUI layer.

/// Accessibility and terminal-capability switches, sourced from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs and markers (no braille, no Unicode dots).
    pub ascii_only: bool,
    /// Use a high-contrast palette instead of the agency theme.
    pub high_contrast: bool,
    /// Freeze decorative motion (globe rotation, cursor pulse).
    pub reduced_motion: bool,
}
