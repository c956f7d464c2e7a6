use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author_name: String,
    /// ISO-8601 timestamp; `None` while the post is a draft.
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Post {
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        self.published_at.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author_name: String,
}

/// Lowercase, ASCII-alphanumeric words joined by `-`.
///
/// ```
/// assert_eq!(gamma_blog::model::slugify("Hello, Rust World!"), "hello-rust-world");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
