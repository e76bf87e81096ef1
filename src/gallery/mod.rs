pub mod events;
pub mod generator;
pub mod likes;
pub mod loader;
pub mod render;
pub mod session;
pub mod surface;
pub mod viewer;

#[cfg(test)]
mod fake;

use crate::{
    api::{GalleryApi, HttpGalleryApi},
    config::GalleryConfig,
    error::{GalleryError, Result},
};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub use events::{ClickTarget, EventBindings, EventKind, EventOutcome, GalleryEvent, Handler};
pub use generator::{GenerateOutcome, Generator};
pub use likes::{LikeToggle, ToggleOutcome};
pub use loader::{ListLoader, LoadOutcome};
pub use render::{CardView, GenerateButtonView, GridView, LikeButtonView};
pub use session::{GallerySession, LikedSet};
pub use surface::{GenerateForm, MemorySurface, Surface};
pub use viewer::{ViewNotifier, ViewOutcome};

/// The gallery page controller: owns the session and wires the components to
/// one backend and one rendering surface.
#[derive(Clone)]
pub struct GalleryClient {
    api: Arc<dyn GalleryApi>,
    surface: Arc<dyn Surface>,
    session: GallerySession,
    bindings: Arc<EventBindings>,
    loader: ListLoader,
    likes: LikeToggle,
    generator: Generator,
    viewer: ViewNotifier,
}

impl GalleryClient {
    /// Builds the controller and registers the page's event bindings.
    pub fn new(
        api: Arc<dyn GalleryApi>,
        surface: Arc<dyn Surface>,
        config: &GalleryConfig,
    ) -> Result<Self> {
        let session = GallerySession::new();
        let bindings = EventBindings::standard()?;

        let loader = ListLoader::new(api.clone(), surface.clone(), session.clone());
        let likes = LikeToggle::new(api.clone(), surface.clone(), session.clone());
        let generator = Generator::new(
            api.clone(),
            surface.clone(),
            session.clone(),
            loader.clone(),
            config.default_scheme,
        );
        let viewer = ViewNotifier::new(api.clone());

        surface.reset_generate_form(config.default_scheme);

        Ok(Self {
            api,
            surface,
            session,
            bindings: Arc::new(bindings),
            loader,
            likes,
            generator,
            viewer,
        })
    }

    /// Controller talking HTTP to the backend named in `config`.
    pub fn connect(config: &GalleryConfig, surface: Arc<dyn Surface>) -> Result<Self> {
        let api = HttpGalleryApi::new(config)?;
        Self::new(Arc::new(api), surface, config)
    }

    /// Opens the backend session and fires the page-load event.
    pub async fn init(&self) -> Result<EventOutcome> {
        if let Err(e) = self.api.open_session().await {
            log::warn!("Could not open gallery session: {}", e);
        }
        self.dispatch(GalleryEvent::PageLoaded).await
    }

    pub fn loader(&self) -> &ListLoader {
        &self.loader
    }

    pub fn likes(&self) -> &LikeToggle {
        &self.likes
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn viewer(&self) -> &ViewNotifier {
        &self.viewer
    }

    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    pub fn surface(&self) -> &Arc<dyn Surface> {
        &self.surface
    }

    pub fn api(&self) -> &Arc<dyn GalleryApi> {
        &self.api
    }

    /// Routes an event to the handler bound to its kind.
    pub async fn dispatch(&self, event: GalleryEvent) -> Result<EventOutcome> {
        let kind = event.kind();
        let handler = self.bindings.handler_for(kind).ok_or_else(|| {
            GalleryError::Binding(format!("No handler bound for {:?}", kind))
        })?;
        log::debug!("Dispatching {:?} to {}", event, handler.name());

        let outcome = match handler {
            Handler::LoadRecommendations => {
                EventOutcome::Loaded(self.loader.load_recommendations().await)
            }
            Handler::LoadAllArtworks => EventOutcome::Loaded(self.loader.load_all().await),
            Handler::ShowGenerateModal => {
                self.generator.show();
                EventOutcome::ModalShown
            }
            Handler::HideGenerateModal => {
                self.generator.hide();
                EventOutcome::ModalHidden
            }
            Handler::GenerateArt => EventOutcome::Generated(self.generator.generate().await),
            Handler::HandleClick => match event {
                GalleryEvent::Click(target) => self.handle_click(target).await,
                _ => EventOutcome::Ignored,
            },
        };

        Ok(outcome)
    }

    /// Dispatches on a separate task so a slow request does not hold up the caller.
    pub fn spawn_dispatch(&self, event: GalleryEvent) -> JoinHandle<Result<EventOutcome>> {
        let client = self.clone();
        tokio::spawn(async move { client.dispatch(event).await })
    }

    async fn handle_click(&self, target: ClickTarget) -> EventOutcome {
        match target {
            ClickTarget::Card(artwork_id) => {
                EventOutcome::Viewed(self.viewer.view(&artwork_id).await)
            }
            ClickTarget::LikeButton(artwork_id) => {
                EventOutcome::Toggled(self.likes.toggle(&artwork_id).await)
            }
            ClickTarget::ModalBackdrop if self.generator.is_open() => {
                self.generator.hide();
                EventOutcome::ModalHidden
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Seeds the liked set from the server-side profile. Returns how many ids were loaded.
    pub async fn sync_likes_from_profile(&self) -> Result<usize> {
        let profile = self.api.user_profile().await?;
        let count = profile.liked_artworks.len();
        self.session.seed_likes(profile.liked_artworks);
        log::info!("Synced {} liked artworks for user {}", count, profile.user_id);
        Ok(count)
    }

    /// Downloads the Artsteps export and writes it to `path` as pretty JSON.
    pub async fn export_artsteps_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let document = self.api.export_artsteps().await?;
        let bytes = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(path.as_ref(), bytes).await?;
        log::info!("💾 Artsteps export saved to: {}", path.as_ref().display());
        Ok(())
    }
}
