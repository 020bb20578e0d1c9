//! Centralized colorization for terminal output.
//!
//! Colors are extracted from syntect's bundled themes so that the light and
//! dark palettes stay internally consistent.

use std::sync::LazyLock;

use colored::{ColoredString, Colorize};
use syntect::highlighting::{Color as SyntectColor, Theme as SyntectTheme, ThemeSet};
use terminal_colorsaurus::{QueryOptions, ThemeMode, theme_mode};

use crate::theme::{Theme, prefers_light};

/// Global theme set (loaded once on first use)
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Terminal background, queried at most once per process
static DETECTED_DARK: LazyLock<bool> = LazyLock::new(detect_dark_background);

const DARK_THEME: &str = "base16-eighties.dark";
const LIGHT_THEME: &str = "InspiredGitHub";

const WHITE: SyntectColor = SyntectColor {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Palette extracted from a syntect theme.
#[derive(Debug, Clone)]
struct Palette {
    /// List numbers and bullets
    accent: SyntectColor,
    /// Result titles
    title: SyntectColor,
    /// URLs
    link: SyntectColor,
    /// Matched search terms and inline code
    highlight: SyntectColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: WHITE,
            title: WHITE,
            link: WHITE,
            highlight: WHITE,
        }
    }
}

impl Palette {
    /// Extract a palette from the given syntect theme.
    fn from_theme(theme: &SyntectTheme) -> Self {
        let foreground = theme.settings.foreground.unwrap_or(WHITE);

        let mut accent = None;
        let mut title = None;
        let mut link = None;
        let mut highlight = None;

        for item in &theme.scopes {
            let scope_str = format!("{:?}", item.scope);

            if let Some(fg) = item.style.foreground {
                if accent.is_none()
                    && (scope_str.contains("keyword") || scope_str.contains("storage.modifier"))
                {
                    accent = Some(fg);
                }

                if title.is_none()
                    && (scope_str.contains("entity.name.function")
                        || scope_str.contains("support.function"))
                {
                    title = Some(fg);
                }

                if link.is_none()
                    && (scope_str.contains("entity.name.type")
                        || scope_str.contains("entity.name.class")
                        || scope_str.contains("support.type"))
                {
                    link = Some(fg);
                }

                if highlight.is_none()
                    && (scope_str.contains("string") || scope_str.contains("constant.character"))
                {
                    highlight = Some(fg);
                }
            }
        }

        Self {
            accent: accent.unwrap_or(foreground),
            title: title.unwrap_or(foreground),
            link: link.unwrap_or(foreground),
            highlight: highlight.unwrap_or(foreground),
        }
    }

    fn named(name: &str) -> Self {
        THEME_SET
            .themes
            .get(name)
            .map(Self::from_theme)
            .unwrap_or_default()
    }
}

/// Check if we're running in a test environment where terminal queries may hang.
fn is_test_environment() -> bool {
    // NEXTEST is set by cargo-nextest
    // RUST_TEST_THREADS is set by cargo test
    std::env::var("NEXTEST").is_ok() || std::env::var("RUST_TEST_THREADS").is_ok()
}

fn detect_dark_background() -> bool {
    // See: https://github.com/bash/terminal-colorsaurus/issues/38
    if is_test_environment() {
        return true;
    }

    match theme_mode(QueryOptions::default()) {
        Ok(ThemeMode::Light) => false,
        Ok(ThemeMode::Dark) => true,
        Err(_) => !prefers_light(|key| std::env::var(key).ok()),
    }
}

/// Styles the pieces of a rendered search result.
///
/// Every method returns the text unchanged when colors are disabled
/// through `colored::control`.
#[derive(Debug, Clone)]
pub struct Colorizer {
    palette: Palette,
    is_dark: bool,
}

impl Colorizer {
    /// Create a colorizer for the given theme.
    ///
    /// [`Theme::Auto`] only queries the terminal when colors are enabled.
    pub fn new(theme: Theme) -> Self {
        let is_dark = match theme {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::Auto if Self::is_enabled() => *DETECTED_DARK,
            Theme::Auto => true,
        };

        let palette = Palette::named(if is_dark { DARK_THEME } else { LIGHT_THEME });

        Self { palette, is_dark }
    }

    /// Check if colors are enabled (respects global override).
    #[inline]
    pub fn is_enabled() -> bool {
        colored::control::SHOULD_COLORIZE.should_colorize()
    }

    /// Whether the dark palette is in use.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    fn apply_color(&self, text: &str, color: SyntectColor) -> ColoredString {
        text.truecolor(color.r, color.g, color.b)
    }

    /// Style a list number or bullet.
    pub fn accent(&self, text: &str) -> String {
        if Self::is_enabled() {
            self.apply_color(text, self.palette.accent).to_string()
        } else {
            text.to_string()
        }
    }

    /// Style the title line of a result.
    pub fn title(&self, text: &str) -> String {
        if Self::is_enabled() {
            self.apply_color(text, self.palette.title).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Style a URL.
    pub fn link(&self, text: &str) -> String {
        if Self::is_enabled() {
            self.apply_color(text, self.palette.link)
                .underline()
                .to_string()
        } else {
            text.to_string()
        }
    }

    /// Style a matched search term.
    pub fn highlight(&self, text: &str) -> String {
        if Self::is_enabled() {
            self.apply_color(text, self.palette.highlight)
                .bold()
                .to_string()
        } else {
            text.to_string()
        }
    }

    /// Style text as emphasis (italic).
    pub fn emphasis(&self, text: &str) -> String {
        if Self::is_enabled() {
            text.italic().to_string()
        } else {
            text.to_string()
        }
    }

    /// Style text as strong (bold).
    pub fn strong(&self, text: &str) -> String {
        if Self::is_enabled() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Style text as inline code.
    pub fn inline_code(&self, code: &str) -> String {
        if Self::is_enabled() {
            self.apply_color(code, self.palette.highlight).to_string()
        } else {
            format!("`{}`", code)
        }
    }

    /// Style a line of a fenced or indented code block.
    pub fn code_line(&self, line: &str) -> String {
        if Self::is_enabled() {
            line.dimmed().to_string()
        } else {
            line.to_string()
        }
    }

    /// Style text as a heading with an inverse background.
    ///
    /// h1 gets the strongest contrast, h4 and below the most subtle.
    pub fn heading(&self, text: &str, level: u32) -> String {
        if !Self::is_enabled() {
            return text.to_string();
        }

        let (bg, fg) = if self.is_dark {
            match level {
                1 => (220, 0),
                2 => (180, 0),
                3 => (140, 0),
                _ => (100, 0),
            }
        } else {
            match level {
                1 => (50, 255),
                2 => (80, 255),
                3 => (110, 255),
                _ => (140, 255),
            }
        };

        let prefix = "#".repeat(level as usize);
        format!(" {} {} ", prefix, text)
            .bold()
            .truecolor(fg, fg, fg)
            .on_truecolor(bg, bg, bg)
            .to_string()
    }

    /// Get the blockquote prefix.
    pub fn blockquote_prefix(&self) -> String {
        if Self::is_enabled() {
            "\u{2502} ".dimmed().to_string()
        } else {
            "\u{2502} ".to_string()
        }
    }

    /// Get a horizontal rule of the given width.
    pub fn rule(&self, width: usize) -> String {
        let rule = "\u{2500}".repeat(width);
        if Self::is_enabled() {
            rule.bright_black().to_string()
        } else {
            rule
        }
    }
}
