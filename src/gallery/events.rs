use std::collections::HashMap;

use crate::error::{GalleryError, Result};
use crate::gallery::{
    generator::GenerateOutcome, likes::ToggleOutcome, loader::LoadOutcome, viewer::ViewOutcome,
};

/// Where a click landed on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Anywhere on a card except its like button.
    Card(String),
    LikeButton(String),
    /// The dimmed area around the generation dialog.
    ModalBackdrop,
    ModalContent,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    PageLoaded,
    RecommendationsRequested,
    AllArtworksRequested,
    GenerateDialogOpened,
    GenerateDialogClosed,
    GenerateSubmitted,
    Click(ClickTarget),
}

impl GalleryEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GalleryEvent::PageLoaded => EventKind::PageLoad,
            GalleryEvent::RecommendationsRequested => EventKind::RecommendationsButton,
            GalleryEvent::AllArtworksRequested => EventKind::AllArtworksButton,
            GalleryEvent::GenerateDialogOpened => EventKind::GenerateOpen,
            GalleryEvent::GenerateDialogClosed => EventKind::GenerateClose,
            GalleryEvent::GenerateSubmitted => EventKind::GenerateSubmit,
            GalleryEvent::Click(_) => EventKind::Click,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PageLoad,
    RecommendationsButton,
    AllArtworksButton,
    GenerateOpen,
    GenerateClose,
    GenerateSubmit,
    Click,
}

/// Named handler functions an event kind can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    LoadRecommendations,
    LoadAllArtworks,
    ShowGenerateModal,
    HideGenerateModal,
    GenerateArt,
    HandleClick,
}

impl Handler {
    pub fn name(&self) -> &'static str {
        match self {
            Handler::LoadRecommendations => "load_recommendations",
            Handler::LoadAllArtworks => "load_all_artworks",
            Handler::ShowGenerateModal => "show_generate_modal",
            Handler::HideGenerateModal => "hide_generate_modal",
            Handler::GenerateArt => "generate_art",
            Handler::HandleClick => "handle_click",
        }
    }
}

/// Event subscriptions, each kind bound at most once.
#[derive(Debug, Clone, Default)]
pub struct EventBindings {
    handlers: HashMap<EventKind, Handler>,
}

impl EventBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The gallery page's subscriptions: recommendations on load, the three
    /// control buttons, the dialog's submit and close, and document clicks.
    pub fn standard() -> Result<Self> {
        let mut bindings = Self::new();
        bindings.bind(EventKind::PageLoad, Handler::LoadRecommendations)?;
        bindings.bind(EventKind::RecommendationsButton, Handler::LoadRecommendations)?;
        bindings.bind(EventKind::AllArtworksButton, Handler::LoadAllArtworks)?;
        bindings.bind(EventKind::GenerateOpen, Handler::ShowGenerateModal)?;
        bindings.bind(EventKind::GenerateClose, Handler::HideGenerateModal)?;
        bindings.bind(EventKind::GenerateSubmit, Handler::GenerateArt)?;
        bindings.bind(EventKind::Click, Handler::HandleClick)?;
        Ok(bindings)
    }

    pub fn bind(&mut self, kind: EventKind, handler: Handler) -> Result<()> {
        if let Some(existing) = self.handlers.get(&kind) {
            return Err(GalleryError::Binding(format!(
                "{:?} is already bound to {}",
                kind,
                existing.name()
            )));
        }
        log::debug!("Bound {:?} to {}", kind, handler.name());
        self.handlers.insert(kind, handler);
        Ok(())
    }

    pub fn handler_for(&self, kind: EventKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Loaded(LoadOutcome),
    Toggled(ToggleOutcome),
    Viewed(ViewOutcome),
    Generated(GenerateOutcome),
    ModalShown,
    ModalHidden,
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bindings() {
        let bindings = EventBindings::standard().unwrap();
        assert_eq!(bindings.len(), 7);
        assert_eq!(
            bindings.handler_for(EventKind::PageLoad),
            Some(Handler::LoadRecommendations)
        );
        assert_eq!(
            bindings.handler_for(GalleryEvent::Click(ClickTarget::Elsewhere).kind()),
            Some(Handler::HandleClick)
        );
    }

    #[test]
    fn test_double_binding_is_rejected() {
        let mut bindings = EventBindings::new();
        bindings
            .bind(EventKind::GenerateSubmit, Handler::GenerateArt)
            .unwrap();
        let err = bindings
            .bind(EventKind::GenerateSubmit, Handler::HideGenerateModal)
            .unwrap_err();
        assert!(matches!(err, GalleryError::Binding(_)));
        assert_eq!(
            bindings.handler_for(EventKind::GenerateSubmit),
            Some(Handler::GenerateArt)
        );
    }

    #[test]
    fn test_unbound_kind() {
        assert!(EventBindings::new().handler_for(EventKind::Click).is_none());
    }
}
