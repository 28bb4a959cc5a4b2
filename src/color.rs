/// Day/night color themes
///
/// The browser has exactly two palettes. Each one is a
/// (background, foreground) pair that drives the whole UI.

use iced::theme::Palette;
use iced::{Color, Theme};
use std::fmt;

/// An 8-bit sRGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.0, self.1, self.2)
    }
}

/// Formats as "r, g, b"
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const LIGHT: Rgb = Rgb(255, 255, 255);
const DARK: Rgb = Rgb(10, 10, 20);

/// Which palette the user wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Day,
    Night,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 2] = [ThemePreference::Day, ThemePreference::Night];

    /// Pick the initial preference from the host's dark-mode signal
    pub fn from_probe(probe: &dyn ColorSchemeProbe) -> Self {
        if probe.prefers_dark() {
            ThemePreference::Night
        } else {
            ThemePreference::Day
        }
    }

    /// (background, foreground) for this preference
    pub fn resolve(self) -> (Rgb, Rgb) {
        match self {
            ThemePreference::Day => (LIGHT, DARK),
            ThemePreference::Night => (DARK, LIGHT),
        }
    }

    /// Build the iced theme for this preference.
    /// Accent colors come from the matching built-in palette.
    pub fn to_theme(self) -> Theme {
        let (background, foreground) = self.resolve();
        let base = match self {
            ThemePreference::Day => Palette::LIGHT,
            ThemePreference::Night => Palette::DARK,
        };

        Theme::custom(
            self.to_string(),
            Palette {
                background: background.to_color(),
                text: foreground.to_color(),
                ..base
            },
        )
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Day => write!(f, "Day"),
            ThemePreference::Night => write!(f, "Night"),
        }
    }
}

/// Host capability: does the desktop prefer a dark color scheme?
///
/// Read once at startup.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// Asks the desktop for its color scheme.
///
/// Uses the platform setting (Windows, macOS, freedesktop portal). A dark
/// `GTK_THEME` (e.g. "Adwaita:dark") also counts, for sessions where the
/// platform reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl ColorSchemeProbe for SystemProbe {
    fn prefers_dark(&self) -> bool {
        let mode = dark_light::detect();
        let gtk_theme = std::env::var("GTK_THEME").ok();
        log::debug!("Desktop color scheme: {:?}, GTK_THEME={:?}", mode, gtk_theme);
        scheme_is_dark(mode, gtk_theme.as_deref())
    }
}

fn scheme_is_dark(mode: dark_light::Mode, gtk_theme: Option<&str>) -> bool {
    match mode {
        dark_light::Mode::Dark => true,
        dark_light::Mode::Light => false,
        dark_light::Mode::Default => gtk_theme.is_some_and(gtk_theme_is_dark),
    }
}

fn gtk_theme_is_dark(value: &str) -> bool {
    let value = value.to_ascii_lowercase();
    value.ends_with(":dark") || value.ends_with("-dark")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Prefers(bool);

    impl ColorSchemeProbe for Prefers {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_resolve_table() {
        assert_eq!(ThemePreference::Day.resolve(), (Rgb(255, 255, 255), Rgb(10, 10, 20)));
        assert_eq!(ThemePreference::Night.resolve(), (Rgb(10, 10, 20), Rgb(255, 255, 255)));
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb(10, 10, 20).to_string(), "10, 10, 20");
    }

    #[test]
    fn test_preference_from_desktop_scheme() {
        assert_eq!(ThemePreference::from_probe(&Prefers(true)), ThemePreference::Night);
        assert_eq!(ThemePreference::from_probe(&Prefers(false)), ThemePreference::Day);
    }

    #[test]
    fn test_theme_uses_resolved_colors() {
        let palette = ThemePreference::Night.to_theme().palette();
        assert_eq!(palette.background, Color::from_rgb8(10, 10, 20));
        assert_eq!(palette.text, Color::from_rgb8(255, 255, 255));
    }

    #[test]
    fn test_gtk_theme_detection() {
        assert!(gtk_theme_is_dark("Adwaita:dark"));
        assert!(gtk_theme_is_dark("Arc-Dark"));
        assert!(!gtk_theme_is_dark("Adwaita"));
        assert!(!gtk_theme_is_dark(""));
    }

    #[test]
    fn test_platform_scheme_wins() {
        assert!(scheme_is_dark(dark_light::Mode::Dark, None));
        assert!(scheme_is_dark(dark_light::Mode::Dark, Some("Adwaita")));
        assert!(!scheme_is_dark(dark_light::Mode::Light, Some("Adwaita:dark")));
    }

    #[test]
    fn test_gtk_theme_when_platform_is_silent() {
        assert!(scheme_is_dark(dark_light::Mode::Default, Some("Adwaita:dark")));
        assert!(!scheme_is_dark(dark_light::Mode::Default, Some("Adwaita")));
        assert!(!scheme_is_dark(dark_light::Mode::Default, None));
    }
}
