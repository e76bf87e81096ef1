use std::sync::Arc;

use crate::{
    api::GalleryApi,
    gallery::{render::LikeButtonView, session::GallerySession, surface::Surface},
    models::InteractionEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Liked,
    Unliked,
    /// The request failed; membership and button are unchanged.
    Rejected,
    /// A toggle for the same artwork is still running; nothing was sent.
    InFlight,
}

/// Likes or unlikes an artwork. State changes only after the server accepted the request.
#[derive(Clone)]
pub struct LikeToggle {
    api: Arc<dyn GalleryApi>,
    surface: Arc<dyn Surface>,
    session: GallerySession,
}

impl LikeToggle {
    pub fn new(api: Arc<dyn GalleryApi>, surface: Arc<dyn Surface>, session: GallerySession) -> Self {
        Self {
            api,
            surface,
            session,
        }
    }

    pub async fn toggle(&self, artwork_id: &str) -> ToggleOutcome {
        let Some(was_liked) = self.session.begin_toggle(artwork_id) else {
            log::debug!("Like toggle for {} already in flight", artwork_id);
            return ToggleOutcome::InFlight;
        };

        self.surface.update_like_button(
            artwork_id,
            LikeButtonView {
                liked: was_liked,
                pending: true,
            },
        );

        let event = if was_liked {
            InteractionEvent::unlike(artwork_id)
        } else {
            InteractionEvent::like(artwork_id)
        };

        let accepted = match self.api.interact(&event).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error sending {} for {}: {}", event.kind.as_str(), artwork_id, e);
                false
            }
        };

        let liked = self.session.finish_toggle(artwork_id, was_liked, accepted);
        self.surface.update_like_button(
            artwork_id,
            LikeButtonView {
                liked,
                pending: false,
            },
        );

        match (accepted, liked) {
            (false, _) => ToggleOutcome::Rejected,
            (true, true) => ToggleOutcome::Liked,
            (true, false) => ToggleOutcome::Unliked,
        }
    }
}
