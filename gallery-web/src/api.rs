use gallery_common::GalleryConfig;
use gallery_ui::display_types::{PhotoDetail, PhotoSummary};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Photo object as returned by both the list and the info endpoints
#[derive(Deserialize)]
struct PicsumPhoto {
    id: String,
    author: String,
    width: u32,
    height: u32,
    url: String,
}

/// Why a catalog request produced no data.
///
/// `Display` output is shown to the user as-is.
#[derive(Debug, Error, PartialEq)]
pub enum FetchError {
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),
    #[error("Photo not found")]
    NotFound,
    /// Any other non-success status
    #[error("Server error: {0}")]
    Status(u16),
    /// Success status, but the body was not what the catalog promises
    #[error("Parse error: {0}")]
    Decode(String),
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(())
}

/// Client for the Lorem Picsum catalog
#[derive(Clone)]
pub struct PicsumClient {
    http: reqwest::Client,
    config: GalleryConfig,
}

impl PicsumClient {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch one page of photo summaries. An empty page means the catalog
    /// has nothing past this point.
    pub async fn list_photos(&self, page: u32, limit: u32) -> Result<Vec<PhotoSummary>, FetchError> {
        let body = self.get(&self.config.list_url(page, limit)).await.map_err(|e| {
            // A missing list page is still a server problem, not a missing photo
            if e == FetchError::NotFound {
                FetchError::Status(StatusCode::NOT_FOUND.as_u16())
            } else {
                e
            }
        })?;
        self.decode_list(&body)
    }

    /// Fetch metadata for a single photo.
    pub async fn fetch_photo(&self, id: &str) -> Result<PhotoDetail, FetchError> {
        let body = self.get(&self.config.info_url(id)).await?;
        self.decode_detail(&body)
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        check_status(resp.status())?;

        resp.text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }

    fn decode_list(&self, body: &str) -> Result<Vec<PhotoSummary>, FetchError> {
        let photos: Vec<PicsumPhoto> =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(photos
            .into_iter()
            .map(|p| PhotoSummary {
                thumbnail_url: self.config.thumbnail_url(&p.id),
                id: p.id,
                author: p.author,
                width: p.width,
                height: p.height,
            })
            .collect())
    }

    fn decode_detail(&self, body: &str) -> Result<PhotoDetail, FetchError> {
        let p: PicsumPhoto =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(PhotoDetail {
            full_size_url: self.config.image_url(&p.id, p.width, p.height),
            id: p.id,
            author: p.author,
            width: p.width,
            height: p.height,
            source_url: p.url,
        })
    }
}
