//! Client and presentation layer for the AI-curated virtual art gallery.
//!
//! [`GalleryClient`] fetches artworks and recommendations from the gallery
//! backend, renders them into a [`Surface`] as escaped cards, keeps the
//! session's liked set and forwards likes, views and generation requests back
//! to the server.

pub mod api;
pub mod config;
pub mod error;
pub mod gallery;
pub mod logger;
pub mod models;

pub use api::{GalleryApi, HttpGalleryApi};
pub use config::GalleryConfig;
pub use error::{GalleryError, Result};
pub use gallery::{
    ClickTarget, EventOutcome, GalleryClient, GalleryEvent, GallerySession, MemorySurface, Surface,
};
pub use models::*;
