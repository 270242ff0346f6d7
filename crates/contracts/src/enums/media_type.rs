use std::fmt;

use serde::{Deserialize, Serialize};

/// Media categories of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Anime,
    Manga,
    #[serde(rename = "Light Novel")]
    LightNovel,
}

impl MediaType {
    /// Wire label, as the backend spells it
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Anime => "Anime",
            MediaType::Manga => "Manga",
            MediaType::LightNovel => "Light Novel",
        }
    }

    /// All media types, in display order
    pub fn all() -> Vec<MediaType> {
        vec![MediaType::Anime, MediaType::Manga, MediaType::LightNovel]
    }

    /// Parse from the wire label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Anime" => Some(MediaType::Anime),
            "Manga" => Some(MediaType::Manga),
            "Light Novel" => Some(MediaType::LightNovel),
            _ => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
