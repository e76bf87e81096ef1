use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GalleryError;
use crate::models::{Artwork, STATUS_SUCCESS};

/// Color scheme offered by the generation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Vibrant,
    Pastel,
    Monochrome,
    Earth,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Vibrant,
        ColorScheme::Pastel,
        ColorScheme::Monochrome,
        ColorScheme::Earth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Vibrant => "vibrant",
            ColorScheme::Pastel => "pastel",
            ColorScheme::Monochrome => "monochrome",
            ColorScheme::Earth => "earth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Vibrant => "Vibrant",
            ColorScheme::Pastel => "Pastel",
            ColorScheme::Monochrome => "Monochrome",
            ColorScheme::Earth => "Earth Tones",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vibrant" => Ok(ColorScheme::Vibrant),
            "pastel" => Ok(ColorScheme::Pastel),
            "monochrome" => Ok(ColorScheme::Monochrome),
            "earth" | "earth tones" | "earth_tones" => Ok(ColorScheme::Earth),
            other => Err(GalleryError::Config(format!("Unknown color scheme '{}'", other))),
        }
    }
}

/// Body of `POST /api/generate-artwork`. `title` is always sent, `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub title: Option<String>,
    pub style: ColorScheme,
}

impl GenerateRequest {
    /// Builds the request from the dialog fields. An empty title means "let the server name it".
    pub fn from_form(title: &str, style: ColorScheme) -> Self {
        Self {
            title: if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            },
            style,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResult {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub artwork: Option<Artwork>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GenerateResult {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
