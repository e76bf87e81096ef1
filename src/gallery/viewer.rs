use std::sync::Arc;

use crate::{api::GalleryApi, models::InteractionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    Recorded,
    Failed,
}

/// Reports that an artwork was opened. Touches no visible state.
#[derive(Clone)]
pub struct ViewNotifier {
    api: Arc<dyn GalleryApi>,
}

impl ViewNotifier {
    pub fn new(api: Arc<dyn GalleryApi>) -> Self {
        Self { api }
    }

    pub async fn view(&self, artwork_id: &str) -> ViewOutcome {
        match self.api.interact(&InteractionEvent::view(artwork_id)).await {
            Ok(()) => {
                log::info!("Viewed artwork: {}", artwork_id);
                ViewOutcome::Recorded
            }
            Err(e) => {
                log::error!("Error recording view of {}: {}", artwork_id, e);
                ViewOutcome::Failed
            }
        }
    }
}
