pub mod http_client;
pub mod traits;

pub use http_client::HttpGalleryApi;
pub use traits::GalleryApi;
