use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::ListMode;

/// Artwork ids liked during this page session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet {
    ids: HashSet<String>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, artwork_id: &str) -> bool {
        self.ids.contains(artwork_id)
    }

    pub fn insert(&mut self, artwork_id: impl Into<String>) -> bool {
        self.ids.insert(artwork_id.into())
    }

    pub fn remove(&mut self, artwork_id: &str) -> bool {
        self.ids.remove(artwork_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }
}

#[derive(Debug, Default)]
struct SessionState {
    liked: LikedSet,
    pending_likes: HashSet<String>,
    generating: bool,
    modal_open: bool,
    mode: Option<ListMode>,
}

/// Session-scoped state shared by the gallery components.
///
/// Cloning yields another handle to the same state. The lock is never held
/// across an await point.
#[derive(Debug, Clone, Default)]
pub struct GallerySession {
    state: Arc<Mutex<SessionState>>,
}

impl GallerySession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_liked(&self, artwork_id: &str) -> bool {
        self.lock().liked.contains(artwork_id)
    }

    pub fn is_pending(&self, artwork_id: &str) -> bool {
        self.lock().pending_likes.contains(artwork_id)
    }

    pub fn liked(&self) -> LikedSet {
        self.lock().liked.clone()
    }

    /// Marks a toggle for `artwork_id` as in flight and returns whether the
    /// artwork was liked before it. `None` if a toggle for it is already running.
    pub fn begin_toggle(&self, artwork_id: &str) -> Option<bool> {
        let mut state = self.lock();
        if !state.pending_likes.insert(artwork_id.to_string()) {
            return None;
        }
        Some(state.liked.contains(artwork_id))
    }

    /// Ends the in-flight toggle. Membership flips only when the server accepted it.
    /// Returns the membership after the call.
    pub fn finish_toggle(&self, artwork_id: &str, was_liked: bool, accepted: bool) -> bool {
        let mut state = self.lock();
        state.pending_likes.remove(artwork_id);
        if accepted {
            if was_liked {
                state.liked.remove(artwork_id);
            } else {
                state.liked.insert(artwork_id);
            }
        }
        state.liked.contains(artwork_id)
    }

    /// Replaces the liked set, e.g. from the server-side profile.
    pub fn seed_likes<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.lock();
        state.liked = LikedSet::new();
        for id in ids {
            state.liked.insert(id);
        }
    }

    pub fn begin_generation(&self) -> bool {
        let mut state = self.lock();
        if state.generating {
            return false;
        }
        state.generating = true;
        true
    }

    pub fn finish_generation(&self) {
        self.lock().generating = false;
    }

    pub fn is_generating(&self) -> bool {
        self.lock().generating
    }

    pub fn modal_open(&self) -> bool {
        self.lock().modal_open
    }

    pub fn set_modal_open(&self, open: bool) {
        self.lock().modal_open = open;
    }

    pub fn mode(&self) -> Option<ListMode> {
        self.lock().mode
    }

    pub fn set_mode(&self, mode: ListMode) {
        self.lock().mode = Some(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_when_accepted() {
        let session = GallerySession::new();

        let was_liked = session.begin_toggle("art001").unwrap();
        assert!(!was_liked);
        assert!(!session.finish_toggle("art001", was_liked, false));
        assert!(!session.is_liked("art001"));

        let was_liked = session.begin_toggle("art001").unwrap();
        assert!(session.finish_toggle("art001", was_liked, true));
        assert!(session.is_liked("art001"));

        let was_liked = session.begin_toggle("art001").unwrap();
        assert!(was_liked);
        assert!(!session.finish_toggle("art001", was_liked, true));
    }

    #[test]
    fn test_second_toggle_is_refused_while_pending() {
        let session = GallerySession::new();
        assert!(session.begin_toggle("art002").is_some());
        assert!(session.is_pending("art002"));
        assert!(session.begin_toggle("art002").is_none());
        assert!(session.begin_toggle("art003").is_some());

        session.finish_toggle("art002", false, true);
        assert!(!session.is_pending("art002"));
        assert!(session.begin_toggle("art002").is_some());
    }

    #[test]
    fn test_clones_share_state() {
        let session = GallerySession::new();
        let other = session.clone();
        other.seed_likes(["a", "b"]);
        assert!(session.is_liked("a"));
        assert_eq!(session.liked().len(), 2);

        session.seed_likes(["c"]);
        assert!(!other.is_liked("a"));
        assert!(other.is_liked("c"));
    }

    #[test]
    fn test_generation_guard() {
        let session = GallerySession::new();
        assert!(session.begin_generation());
        assert!(!session.begin_generation());
        session.finish_generation();
        assert!(!session.is_generating());
        assert!(session.begin_generation());
    }
}
