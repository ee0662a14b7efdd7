#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Feed fetch failed: {0}")]
    FeedFetch(String),

    #[error("Network error: {0}")]
    Network(String),
}
