use std::io::IsTerminal;

/// Controls when to use colors in output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Color {
    /// Colors will be used if stdout is a terminal. Colors will not be used if
    /// stdout is a regular file or a pipe.
    #[default]
    Auto,

    /// Colors will never be used.
    Never,

    /// Colors will always be used.
    Always,
}

impl Color {
    /// Apply this choice to the process-wide `colored` switch.
    ///
    /// `Auto` leaves `NO_COLOR` and `CLICOLOR` handling to `colored` as long
    /// as stdout is a terminal.
    pub fn apply(self) {
        match self {
            Self::Auto => {
                if !std::io::stdout().is_terminal() {
                    colored::control::set_override(false);
                }
            }
            Self::Never => colored::control::set_override(false),
            Self::Always => colored::control::set_override(true),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            "always" => Ok(Self::Always),
            _ => Err(format!("Invalid color option: {}", s)),
        }
    }
}
