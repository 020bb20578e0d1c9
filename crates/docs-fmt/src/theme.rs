use std::str::FromStr;

/// Which palette the renderer should use.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Theme {
    /// Ask the terminal for its background color, falling back to
    /// environment heuristics when it does not answer.
    #[default]
    Auto,

    /// Palette for dark backgrounds.
    Dark,

    /// Palette for light backgrounds.
    Light,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

/// Guess whether the terminal uses a light background, using only
/// environment variables.
///
/// `var` looks up an environment variable; empty values count as unset.
pub fn prefers_light<F>(var: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| var(key).filter(|value| !value.is_empty());

    // The GitHub CLI exports its own theme setting
    match lookup("GH_THEME").as_deref() {
        Some("light") => return true,
        Some("dark") => return false,
        _ => {}
    }

    // "foreground;background", light backgrounds use the high color numbers
    if let Some(colorfgbg) = lookup("COLORFGBG") {
        let parts: Vec<&str> = colorfgbg.split(';').collect();
        if parts.len() >= 2
            && let Some(Ok(background)) = parts.last().map(|bg| bg.parse::<i32>())
        {
            return background >= 7;
        }
    }

    match lookup("TERM_PROGRAM").as_deref() {
        Some("Apple_Terminal") => return true,
        Some("iTerm.app") | Some("vscode") => return false,
        _ => {}
    }

    if lookup("VSCODE_INJECTION").is_some() {
        return false;
    }

    if cfg!(windows) {
        // Windows Terminal defaults to dark, the legacy console to light
        return lookup("WT_SESSION").is_none();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_gh_theme_wins() {
        assert!(prefers_light(env(&[("GH_THEME", "light"), ("COLORFGBG", "15;0")])));
        assert!(!prefers_light(env(&[("GH_THEME", "dark"), ("COLORFGBG", "0;15")])));
    }

    #[test]
    fn test_colorfgbg_background() {
        assert!(prefers_light(env(&[("COLORFGBG", "0;15")])));
        assert!(prefers_light(env(&[("COLORFGBG", "0;default;7")])));
        assert!(!prefers_light(env(&[("COLORFGBG", "15;0")])));
    }

    #[test]
    fn test_colorfgbg_unparseable_falls_through() {
        assert!(prefers_light(env(&[
            ("COLORFGBG", "15;default"),
            ("TERM_PROGRAM", "Apple_Terminal"),
        ])));
        assert!(prefers_light(env(&[
            ("COLORFGBG", "15"),
            ("TERM_PROGRAM", "Apple_Terminal"),
        ])));
    }

    #[test]
    fn test_term_program() {
        assert!(prefers_light(env(&[("TERM_PROGRAM", "Apple_Terminal")])));
        assert!(!prefers_light(env(&[("TERM_PROGRAM", "iTerm.app")])));
        assert!(!prefers_light(env(&[("TERM_PROGRAM", "vscode")])));
    }

    #[test]
    fn test_empty_values_are_unset() {
        assert!(prefers_light(env(&[
            ("GH_THEME", ""),
            ("TERM_PROGRAM", "Apple_Terminal"),
        ])));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_default_is_dark() {
        assert!(!prefers_light(env(&[])));
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("auto".parse::<Theme>(), Ok(Theme::Auto));
        assert!("solarized".parse::<Theme>().is_err());
    }
}
