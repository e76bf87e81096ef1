use serde::{Deserialize, Serialize};

use crate::models::STATUS_SUCCESS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub preferred_styles: Vec<String>,
    #[serde(default)]
    pub preferred_colors: Vec<String>,
    #[serde(default)]
    pub liked_artworks: Vec<String>,
    #[serde(default)]
    pub viewing_history: Vec<String>,
    #[serde(default)]
    pub total_interactions: usize,
}

/// Body of `GET /api/user-profile`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProfileResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Body of `POST /api/update-preferences`. Absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_styles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_colors: Option<Vec<String>>,
}

impl PreferenceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_styles = Some(styles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.preferred_styles.is_none() && self.preferred_colors.is_none()
    }
}
