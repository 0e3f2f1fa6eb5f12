//! Theme configuration for the desktop app

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Detect the theme from the environment.
///
/// Desktop environments expose the preference inconsistently; the GTK theme
/// name is the one signal available everywhere we ship.
#[must_use]
pub fn detect_theme() -> ResolvedTheme {
    match std::env::var("GTK_THEME") {
        Ok(theme) if theme.to_lowercase().contains("dark") => {
            tracing::debug!("System theme detected from GTK_THEME: dark");
            ResolvedTheme::Dark
        }
        _ => ResolvedTheme::Light,
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)] // All colors defined for completeness, not all used yet
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f6f7f9",
    text_primary: "#18181b",
    text_secondary: "#52525b",
    text_muted: "#a1a1aa",
    border: "#d4d4d8",
    border_light: "#e4e4e7",
    accent: "#0f766e",
    accent_text: "#ffffff",
    error: "#dc2626",
    success: "#16a34a",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#18181b",
    bg_secondary: "#232327",
    text_primary: "#e4e4e7",
    text_secondary: "#a1a1aa",
    text_muted: "#52525b",
    border: "#3f3f46",
    border_light: "#52525b",
    accent: "#2dd4bf",
    accent_text: "#18181b",
    error: "#f87171",
    success: "#4ade80",
};

impl ResolvedTheme {
    /// Check if the theme is dark
    #[must_use]
    #[allow(dead_code)]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(
            ResolvedTheme::Light.palette().bg_primary,
            ResolvedTheme::Dark.palette().bg_primary
        );
        assert!(ResolvedTheme::Dark.is_dark());
        assert!(!ResolvedTheme::Light.is_dark());
    }
}
