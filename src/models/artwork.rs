use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, Result};

/// An artwork as served by the gallery backend. Read-only on the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub style: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_palette: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// `data:image/png;base64,...`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

impl Artwork {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            style: style.into(),
            tags: Vec::new(),
            recommendation_score: None,
            description: None,
            color_palette: Vec::new(),
            image_url: None,
            image_data: None,
            created_date: None,
            ai_generated: false,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.recommendation_score = Some(score);
        self
    }

    pub fn with_ai_generated(mut self, ai_generated: bool) -> Self {
        self.ai_generated = ai_generated;
        self
    }

    /// Decodes the embedded preview image, if the backend sent one.
    pub fn decode_image(&self) -> Result<Option<Vec<u8>>> {
        let Some(data) = self.image_data.as_deref() else {
            return Ok(None);
        };
        let payload = match data.split_once("base64,") {
            Some((_, payload)) => payload,
            None => data,
        };
        STANDARD
            .decode(payload.trim())
            .map(Some)
            .map_err(|e| GalleryError::Response(format!("Invalid image data for {}: {}", self.id, e)))
    }
}
