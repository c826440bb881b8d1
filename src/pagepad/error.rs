use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagepadError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("No page is selected")]
    NoSelection,

    #[error("Invalid selection: {0}")]
    Selection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PagepadError>;
