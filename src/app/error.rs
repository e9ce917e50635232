use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeraldError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("List parsing error: {0}")]
    ListParse(String),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Cookie jar error: {0}")]
    Cookie(String),

    #[error("Notification error: {0}")]
    Notify(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeraldError>;
