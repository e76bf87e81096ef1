use crate::{
    api::traits::GalleryApi,
    config::GalleryConfig,
    error::{GalleryError, Result},
    models::{
        ArtworkList, GenerateRequest, GenerateResult, InteractionEvent, ListMode,
        PreferenceUpdate, ProfileResponse, StatusResponse, UserProfile,
    },
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

const INTERACT_PATH: &str = "/api/interact";
const GENERATE_PATH: &str = "/api/generate-artwork";
const PROFILE_PATH: &str = "/api/user-profile";
const PREFERENCES_PATH: &str = "/api/update-preferences";
const EXPORT_PATH: &str = "/export-artsteps";

/// reqwest-backed [`GalleryApi`]. Keeps a cookie store so the backend session survives across calls.
#[derive(Clone)]
pub struct HttpGalleryApi {
    client: Client,
    base_url: String,
    recommendation_count: Option<u32>,
}

impl HttpGalleryApi {
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GalleryError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
            recommendation_count: config.recommendation_count,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_success(path: &str, response: &Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(GalleryError::Status {
                endpoint: path.to_string(),
                status: response.status().as_u16(),
            })
        }
    }

    /// Parses the body whatever the HTTP status: the backend reports failures
    /// as `{"status": "error", ...}` on 4xx/5xx responses too.
    async fn parse_body<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GalleryError::Request(format!("Reading {} failed: {}", path, e)))?;

        serde_json::from_str(&text).map_err(|e| {
            GalleryError::Response(format!(
                "Failed to parse {} response (HTTP {}): {}",
                path,
                status.as_u16(),
                e
            ))
        })
    }
}

#[async_trait]
impl GalleryApi for HttpGalleryApi {
    async fn open_session(&self) -> Result<()> {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .map_err(|e| GalleryError::Request(format!("Opening session failed: {}", e)))?;

        Self::ensure_success("/", &response)?;
        log::debug!("Gallery session opened at {}", self.base_url);
        Ok(())
    }

    async fn list(&self, mode: ListMode) -> Result<ArtworkList> {
        let path = mode.path();
        let mut request = self.client.get(self.url(path));
        if let (ListMode::Recommendations, Some(count)) = (mode, self.recommendation_count) {
            request = request.query(&[("count", count)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GalleryError::Request(format!("GET {} failed: {}", path, e)))?;

        Self::parse_body(path, response).await
    }

    async fn interact(&self, event: &InteractionEvent) -> Result<()> {
        let response = self
            .client
            .post(self.url(INTERACT_PATH))
            .json(event)
            .send()
            .await
            .map_err(|e| GalleryError::Request(format!("POST {} failed: {}", INTERACT_PATH, e)))?;

        Self::ensure_success(INTERACT_PATH, &response)
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResult> {
        log::info!(
            "Requesting artwork generation with scheme: {}",
            request.style
        );

        let response = self
            .client
            .post(self.url(GENERATE_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| GalleryError::Request(format!("POST {} failed: {}", GENERATE_PATH, e)))?;

        Self::parse_body(GENERATE_PATH, response).await
    }

    async fn user_profile(&self) -> Result<UserProfile> {
        let response = self
            .client
            .get(self.url(PROFILE_PATH))
            .send()
            .await
            .map_err(|e| GalleryError::Request(format!("GET {} failed: {}", PROFILE_PATH, e)))?;

        let body: ProfileResponse = Self::parse_body(PROFILE_PATH, response).await?;
        if !body.is_success() {
            return Err(GalleryError::Response(
                body.error.unwrap_or_else(|| "Profile unavailable".to_string()),
            ));
        }
        body.profile
            .ok_or_else(|| GalleryError::Response("Profile missing from response".into()))
    }

    async fn update_preferences(&self, update: &PreferenceUpdate) -> Result<()> {
        let response = self
            .client
            .post(self.url(PREFERENCES_PATH))
            .json(update)
            .send()
            .await
            .map_err(|e| {
                GalleryError::Request(format!("POST {} failed: {}", PREFERENCES_PATH, e))
            })?;

        let body: StatusResponse = Self::parse_body(PREFERENCES_PATH, response).await?;
        if body.is_success() {
            Ok(())
        } else {
            Err(GalleryError::Response(
                body.message
                    .or(body.error)
                    .unwrap_or_else(|| "Preference update rejected".to_string()),
            ))
        }
    }

    async fn export_artsteps(&self) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(self.url(EXPORT_PATH))
            .send()
            .await
            .map_err(|e| GalleryError::Request(format!("GET {} failed: {}", EXPORT_PATH, e)))?;

        Self::ensure_success(EXPORT_PATH, &response)?;
        Self::parse_body(EXPORT_PATH, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = GalleryConfig::new().with_base_url("");
        assert!(matches!(
            HttpGalleryApi::new(&config),
            Err(GalleryError::Config(_))
        ));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = GalleryConfig::new().with_base_url("http://127.0.0.1:5000/");
        let api = HttpGalleryApi::new(&config).unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:5000");
        assert_eq!(api.url("/api/artworks"), "http://127.0.0.1:5000/api/artworks");
    }
}
