use std::sync::Arc;

use crate::{
    api::GalleryApi,
    gallery::{
        render::{build_grid, GridView},
        session::GallerySession,
        surface::Surface,
    },
    models::ListMode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    /// Success with an empty list; the no-results placeholder is shown.
    Empty,
    /// The error placeholder is shown.
    Failed(String),
}

/// Fetches one list and replaces the grid with it. Single attempt, no retry.
#[derive(Clone)]
pub struct ListLoader {
    api: Arc<dyn GalleryApi>,
    surface: Arc<dyn Surface>,
    session: GallerySession,
}

impl ListLoader {
    pub fn new(api: Arc<dyn GalleryApi>, surface: Arc<dyn Surface>, session: GallerySession) -> Self {
        Self {
            api,
            surface,
            session,
        }
    }

    pub async fn load_recommendations(&self) -> LoadOutcome {
        self.load(ListMode::Recommendations).await
    }

    pub async fn load_all(&self) -> LoadOutcome {
        self.load(ListMode::All).await
    }

    pub async fn load(&self, mode: ListMode) -> LoadOutcome {
        self.session.set_mode(mode);
        self.surface.set_section_title(mode.section_title());
        self.surface.render_grid(GridView::placeholder(mode.loading_text()));

        let reason = match self.api.list(mode).await {
            Ok(list) if list.is_success() => match list.artworks {
                Some(artworks) => {
                    if let Some(total) = list.total {
                        log::debug!("Backend reports {} artworks for {:?}", total, mode);
                    }
                    let grid = build_grid(&artworks, mode.shows_scores(), &self.session);
                    self.surface.render_grid(grid);
                    log::info!("Loaded {} artworks from {}", artworks.len(), mode.path());
                    return if artworks.is_empty() {
                        LoadOutcome::Empty
                    } else {
                        LoadOutcome::Loaded {
                            count: artworks.len(),
                        }
                    };
                }
                None => format!("{} answered success without a list", mode.path()),
            },
            Ok(list) => format!(
                "{} answered status '{}': {}",
                mode.path(),
                list.status,
                list.reason().unwrap_or("no reason given")
            ),
            Err(e) => e.to_string(),
        };

        log::error!("Error loading {:?}: {}", mode, reason);
        self.surface.render_grid(GridView::placeholder(mode.error_text()));
        LoadOutcome::Failed(reason)
    }
}
