//! Theme domain entity

use serde::{Deserialize, Serialize};

/// Storage slot holding the selected theme
pub const THEME_KEY: &str = "theme";

/// Color theme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Theme implied by the system color-scheme preference
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Caption shown next to the theme switch
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Modo Claro",
            Theme::Dark => "Modo Oscuro",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" | "claro" => Ok(Theme::Light),
            "dark" | "oscuro" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}. Use: dark, light", s)),
        }
    }
}
