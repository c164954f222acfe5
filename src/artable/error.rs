use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtableError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Selection failed while fetching page {page}: {source}")]
    Selection {
        page: usize,
        #[source]
        source: Box<ArtableError>,
    },

    #[error("Page {page} is out of range (the dataset has {total_pages} pages)")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ArtableError>;
