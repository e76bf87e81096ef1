use crate::{
    error::Result,
    models::{
        ArtworkList, GenerateRequest, GenerateResult, InteractionEvent, ListMode,
        PreferenceUpdate, UserProfile,
    },
};
use async_trait::async_trait;

/// The gallery backend's HTTP surface. Paths, methods and bodies are fixed by the server.
#[async_trait]
pub trait GalleryApi: Send + Sync {
    /// `GET /`, which makes the backend issue the session cookie every other call relies on.
    async fn open_session(&self) -> Result<()>;

    /// `GET /api/recommendations` or `GET /api/artworks`. Non-success bodies are returned, not raised.
    async fn list(&self, mode: ListMode) -> Result<ArtworkList>;

    /// `POST /api/interact`. Any 2xx is success.
    async fn interact(&self, event: &InteractionEvent) -> Result<()>;

    /// `POST /api/generate-artwork`. Non-success bodies are returned, not raised.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResult>;

    async fn user_profile(&self) -> Result<UserProfile>;

    async fn update_preferences(&self, update: &PreferenceUpdate) -> Result<()>;

    /// `GET /export-artsteps`, the gallery document for Artsteps.
    async fn export_artsteps(&self) -> Result<serde_json::Value>;

    async fn recommendations(&self) -> Result<ArtworkList> {
        self.list(ListMode::Recommendations).await
    }

    async fn artworks(&self) -> Result<ArtworkList> {
        self.list(ListMode::All).await
    }
}
