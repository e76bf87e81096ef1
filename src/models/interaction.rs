use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Like,
    Unlike,
    View,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Like => "like",
            InteractionType::Unlike => "unlike",
            InteractionType::View => "view",
        }
    }
}

/// Body of `POST /api/interact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub artwork_id: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
}

impl InteractionEvent {
    pub fn new(artwork_id: impl Into<String>, kind: InteractionType) -> Self {
        Self {
            artwork_id: artwork_id.into(),
            kind,
        }
    }

    pub fn like(artwork_id: impl Into<String>) -> Self {
        Self::new(artwork_id, InteractionType::Like)
    }

    pub fn unlike(artwork_id: impl Into<String>) -> Self {
        Self::new(artwork_id, InteractionType::Unlike)
    }

    pub fn view(artwork_id: impl Into<String>) -> Self {
        Self::new(artwork_id, InteractionType::View)
    }
}
