//! Action parser for user text commands
//!
//! Parses commands typed at the prompt like "post hola", "delete 2", etc.

use std::path::PathBuf;

use crate::domain::entities::{PhotoSlot, Theme};
use crate::error::ParseError;

/// Requested change to the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Set(Theme),
    Toggle,
}

impl std::str::FromStr for ThemeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toggle" | "switch" | "cambiar" => Ok(ThemeChoice::Toggle),
            other => other.parse().map(ThemeChoice::Set),
        }
    }
}

/// Actions a user can take via text commands
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Publish a post; blank text is accepted here and ignored by the feed
    Post { text: String },

    /// Delete the post shown at this index
    Delete { item_index: usize },

    /// Reload and redraw the feed
    Feed,

    /// Show the profile header
    Profile,

    /// Show the bio
    ShowBio,

    /// Replace the bio
    SetBio { text: String },

    /// Show the current theme
    ShowTheme,

    /// Change the theme
    SetTheme(ThemeChoice),

    /// Upload a photo from disk
    SetPhoto { slot: PhotoSlot, path: PathBuf },

    /// Get help on available commands
    Help,

    /// Leave the program
    Quit,
}

/// Split off the first word, returning it and the untouched remainder
fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (input, ""),
    }
}

/// Parse a user action from text input
pub fn parse_action(input: &str) -> Result<UserAction, ParseError> {
    let input = input.trim();

    // Handle empty input
    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let (command, rest) = split_command(input);
    let command = command.to_lowercase();

    match command.as_str() {
        "post" | "tweet" | "publicar" => Ok(UserAction::Post {
            text: rest.to_string(),
        }),

        "delete" | "rm" | "eliminar" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("delete".to_string()));
            }
            let index: usize = rest.parse().map_err(|_| {
                ParseError::InvalidArgument(format!("'{}' is not a valid number", rest))
            })?;
            if index == 0 {
                return Err(ParseError::InvalidArgument(
                    "index must be 1 or greater".to_string(),
                ));
            }
            Ok(UserAction::Delete {
                item_index: index - 1,
            })
        }

        "feed" | "refresh" => Ok(UserAction::Feed),

        "profile" | "perfil" => Ok(UserAction::Profile),

        "bio" => {
            let (sub, text) = split_command(rest);
            match sub.to_lowercase().as_str() {
                "" => Ok(UserAction::ShowBio),
                "set" | "edit" => Ok(UserAction::SetBio {
                    text: text.to_string(),
                }),
                other => Err(ParseError::InvalidArgument(format!(
                    "unknown bio action '{}' (usage: bio set <text>)",
                    other
                ))),
            }
        }

        "theme" | "tema" => {
            if rest.is_empty() {
                return Ok(UserAction::ShowTheme);
            }
            let choice: ThemeChoice = rest.parse().map_err(|e: String| {
                ParseError::InvalidArgument(format!("{} (valid: dark, light, toggle)", e))
            })?;
            Ok(UserAction::SetTheme(choice))
        }

        "photo" | "foto" => {
            let (slot, path) = split_command(rest);
            if slot.is_empty() || path.is_empty() {
                return Err(ParseError::MissingArgument(
                    "photo (usage: photo <profile|cover> <path>)".to_string(),
                ));
            }
            let slot: PhotoSlot = slot.parse().map_err(ParseError::InvalidArgument)?;
            Ok(UserAction::SetPhoto {
                slot,
                path: PathBuf::from(path),
            })
        }

        "help" | "?" | "ayuda" => Ok(UserAction::Help),

        "quit" | "exit" | "salir" => Ok(UserAction::Quit),

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

/// Get help text for available commands
pub fn help_text() -> String {
    r#"# Comandos

## Publicaciones
- `post <texto>` - Publica un tweet
- `delete N` - Elimina la publicación N
- `feed` - Vuelve a cargar las publicaciones

## Perfil
- `profile` - Muestra el perfil
- `bio` - Muestra la biografía
- `bio set <texto>` - Cambia la biografía
- `photo profile <ruta>` - Cambia la foto de perfil
- `photo cover <ruta>` - Cambia la foto de portada
- `theme` - Muestra el tema actual
- `theme dark|light|toggle` - Cambia el tema

## Otros
- `help` - Muestra esta ayuda
- `quit` - Salir

---
Los números del feed (p. ej. [1], [2]) se usan con `delete`.
"#
    .to_string()
}
