//! Gallery configuration and catalog endpoint URLs

/// Default Lorem Picsum origin
const DEFAULT_API_BASE: &str = "https://picsum.photos";
/// Photos requested per page
const DEFAULT_PAGE_SIZE: u32 = 20;
/// Edge length of the square grid thumbnails, in pixels
const DEFAULT_THUMBNAIL_SIZE: u32 = 400;

/// Settings shared by every view.
///
/// Built once at startup and handed down the component tree; nothing here
/// changes while the app runs.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    /// Catalog origin, without a trailing slash
    pub api_base: String,
    pub page_size: u32,
    pub thumbnail_size: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

impl GalleryConfig {
    /// List endpoint for one page of photo summaries.
    pub fn list_url(&self, page: u32, limit: u32) -> String {
        format!("{}/v2/list?page={}&limit={}", self.api_base, page, limit)
    }

    /// Detail endpoint for a single photo.
    pub fn info_url(&self, id: &str) -> String {
        format!("{}/id/{}/info", self.api_base, urlencoding::encode(id))
    }

    /// Asset URL rendering `id` at the given size.
    pub fn image_url(&self, id: &str, width: u32, height: u32) -> String {
        format!(
            "{}/id/{}/{}/{}",
            self.api_base,
            urlencoding::encode(id),
            width,
            height
        )
    }

    /// Square grid thumbnail.
    pub fn thumbnail_url(&self, id: &str) -> String {
        self.image_url(id, self.thumbnail_size, self.thumbnail_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.api_base, "https://picsum.photos");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.thumbnail_size, 400);
    }

    #[test]
    fn test_list_url() {
        let config = GalleryConfig::default();
        assert_eq!(
            config.list_url(3, 20),
            "https://picsum.photos/v2/list?page=3&limit=20"
        );
    }

    #[test]
    fn test_info_url() {
        let config = GalleryConfig::default();
        assert_eq!(config.info_url("42"), "https://picsum.photos/id/42/info");
    }

    #[test]
    fn test_image_urls() {
        let config = GalleryConfig::default();
        assert_eq!(
            config.thumbnail_url("10"),
            "https://picsum.photos/id/10/400/400"
        );
        assert_eq!(
            config.image_url("10", 2500, 1667),
            "https://picsum.photos/id/10/2500/1667"
        );
    }

    #[test]
    fn test_ids_stay_one_path_segment() {
        let config = GalleryConfig::default();
        assert_eq!(
            config.info_url("a/b c"),
            "https://picsum.photos/id/a%2Fb%20c/info"
        );
    }
}
