use std::sync::Arc;

use crate::{
    api::GalleryApi,
    gallery::{
        loader::ListLoader, render::GenerateButtonView, session::GallerySession, surface::Surface,
    },
    models::{Artwork, ColorScheme, GenerateRequest},
};

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Generated(Artwork),
    /// The server answered with a non-success status.
    Rejected(String),
    /// Transport or parse failure.
    Failed(String),
    /// A generation was already running; nothing was sent.
    Busy,
}

/// The "Generate AI Art" dialog and its submit action.
#[derive(Clone)]
pub struct Generator {
    api: Arc<dyn GalleryApi>,
    surface: Arc<dyn Surface>,
    session: GallerySession,
    loader: ListLoader,
    default_scheme: ColorScheme,
}

impl Generator {
    pub fn new(
        api: Arc<dyn GalleryApi>,
        surface: Arc<dyn Surface>,
        session: GallerySession,
        loader: ListLoader,
        default_scheme: ColorScheme,
    ) -> Self {
        Self {
            api,
            surface,
            session,
            loader,
            default_scheme,
        }
    }

    pub fn show(&self) {
        self.session.set_modal_open(true);
        self.surface.set_modal_visible(true);
    }

    /// Closes the dialog and resets its fields.
    pub fn hide(&self) {
        self.session.set_modal_open(false);
        self.surface.set_modal_visible(false);
        self.surface.reset_generate_form(self.default_scheme);
    }

    pub fn is_open(&self) -> bool {
        self.session.modal_open()
    }

    /// Submits the dialog. On success the dialog closes and the full catalogue reloads.
    pub async fn generate(&self) -> GenerateOutcome {
        if !self.session.begin_generation() {
            log::debug!("Generation already in progress");
            return GenerateOutcome::Busy;
        }

        let form = self.surface.generate_form();
        let request = GenerateRequest::from_form(&form.title, form.scheme);
        self.surface.set_generate_button(GenerateButtonView::busy());

        let outcome = match self.api.generate(&request).await {
            Ok(result) if result.is_success() => match result.artwork {
                Some(artwork) => {
                    self.surface
                        .alert(&format!("Successfully generated: {}", artwork.title));
                    self.hide();
                    GenerateOutcome::Generated(artwork)
                }
                None => {
                    log::error!("Generation succeeded without an artwork in the response");
                    self.surface.alert("Error generating artwork");
                    GenerateOutcome::Failed("missing artwork in response".to_string())
                }
            },
            Ok(result) => {
                let message = result
                    .message
                    .unwrap_or_else(|| "unknown error".to_string());
                log::warn!("Generation rejected: {}", message);
                self.surface
                    .alert(&format!("Error generating artwork: {}", message));
                GenerateOutcome::Rejected(message)
            }
            Err(e) => {
                log::error!("Error generating artwork: {}", e);
                self.surface.alert("Error generating artwork");
                GenerateOutcome::Failed(e.to_string())
            }
        };

        self.surface.set_generate_button(GenerateButtonView::idle());
        self.session.finish_generation();

        if let GenerateOutcome::Generated(artwork) = &outcome {
            log::info!("Generated artwork {} ({})", artwork.id, artwork.title);
            self.loader.load_all().await;
        }

        outcome
    }
}
