//! Profile domain entity
//!
//! The page owner's identity: display name, handle, bio and the two photos.
//! Each piece lives in its own storage slot with no cross-slot invariants.

use serde::Serialize;

/// Storage slot holding the free-text bio
pub const BIO_KEY: &str = "userBio";

/// Bio shown until the user writes one
pub const DEFAULT_BIO: &str = "¡Hola! Todavía no he escrito mi biografía.";

/// Avatar used when no profile picture has been uploaded
pub const PLACEHOLDER_AVATAR: &str = "https://placehold.co/150x150/cccccc/333333?text=Profile";

/// Which of the two profile photos an upload targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSlot {
    ProfilePic,
    CoverPhoto,
}

impl PhotoSlot {
    pub fn storage_key(&self) -> &'static str {
        match self {
            PhotoSlot::ProfilePic => "profilePic",
            PhotoSlot::CoverPhoto => "coverPhoto",
        }
    }
}

impl std::fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoSlot::ProfilePic => write!(f, "profile"),
            PhotoSlot::CoverPhoto => write!(f, "cover"),
        }
    }
}

impl std::str::FromStr for PhotoSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "profile" | "avatar" | "perfil" => Ok(PhotoSlot::ProfilePic),
            "cover" | "portada" => Ok(PhotoSlot::CoverPhoto),
            _ => Err(format!("Unknown photo: {}. Use: profile, cover", s)),
        }
    }
}

/// Who a post is rendered as
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub handle: String,
    pub avatar: String,
}

/// Snapshot of everything shown in the profile header
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub bio: String,
    /// Data URL of the resized profile picture
    pub profile_pic: Option<String>,
    /// Data URL of the resized cover photo
    pub cover_photo: Option<String>,
}

impl Profile {
    pub fn avatar(&self) -> &str {
        self.profile_pic.as_deref().unwrap_or(PLACEHOLDER_AVATAR)
    }

    pub fn author(&self) -> Author {
        Author {
            name: self.name.clone(),
            handle: self.handle.clone(),
            avatar: self.avatar().to_string(),
        }
    }
}
