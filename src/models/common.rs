use serde::{Deserialize, Serialize};

use crate::models::Artwork;

pub const STATUS_SUCCESS: &str = "success";

/// Which list the grid is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    Recommendations,
    All,
}

impl ListMode {
    pub fn path(&self) -> &'static str {
        match self {
            ListMode::Recommendations => "/api/recommendations",
            ListMode::All => "/api/artworks",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            ListMode::Recommendations => "AI Recommendations For You",
            ListMode::All => "All Gallery Artworks",
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self {
            ListMode::Recommendations => "Loading your personalized recommendations...",
            ListMode::All => "Loading all artworks...",
        }
    }

    pub fn error_text(&self) -> &'static str {
        match self {
            ListMode::Recommendations => "Error loading recommendations",
            ListMode::All => "Error loading artworks",
        }
    }

    /// Only recommendation lists carry meaningful scores.
    pub fn shows_scores(&self) -> bool {
        matches!(self, ListMode::Recommendations)
    }
}

/// Body of both list endpoints. The recommendations endpoint names its list
/// `recommendations`, the catalogue endpoint names it `artworks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkList {
    #[serde(default)]
    pub status: String,
    #[serde(default, alias = "recommendations")]
    pub artworks: Option<Vec<Artwork>>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ArtworkList {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Server-side explanation for a failed call, if any.
    pub fn reason(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

/// Body of endpoints that only answer with a status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_body_uses_alias() {
        let body = r#"{"status":"success","recommendations":[
            {"id":"art001","title":"Dawn","artist":"A","style":"digital","tags":["sky"],"recommendation_score":0.8}
        ],"total":1}"#;
        let list: ArtworkList = serde_json::from_str(body).unwrap();
        assert!(list.is_success());
        assert_eq!(list.total, Some(1));
        let artworks = list.artworks.unwrap();
        assert_eq!(artworks[0].id, "art001");
        assert_eq!(artworks[0].recommendation_score, Some(0.8));
    }

    #[test]
    fn test_session_error_body() {
        let list: ArtworkList = serde_json::from_str(r#"{"error":"No user session"}"#).unwrap();
        assert!(!list.is_success());
        assert!(list.artworks.is_none());
        assert_eq!(list.reason(), Some("No user session"));
    }

    #[test]
    fn test_mode_texts() {
        assert_eq!(ListMode::Recommendations.section_title(), "AI Recommendations For You");
        assert_eq!(ListMode::All.section_title(), "All Gallery Artworks");
        assert!(ListMode::Recommendations.shows_scores());
        assert!(!ListMode::All.shows_scores());
    }
}
