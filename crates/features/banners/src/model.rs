use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
}

/// Fields accepted by `save_banner`; a missing `id` creates a new banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
}

impl Banner {
    /// Active banners in display order.
    #[must_use]
    pub fn visible(banners: &[Self]) -> Vec<&Self> {
        let mut visible: Vec<&Self> = banners.iter().filter(|b| b.active).collect();
        visible.sort_by_key(|b| b.position);
        visible
    }
}

impl From<&Banner> for BannerInput {
    fn from(banner: &Banner) -> Self {
        Self {
            id: Some(banner.id.clone()),
            title: banner.title.clone(),
            image_url: banner.image_url.clone(),
            link_url: banner.link_url.clone(),
            position: banner.position,
            active: banner.active,
        }
    }
}
