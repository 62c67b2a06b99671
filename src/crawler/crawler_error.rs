use crate::browser::BrowserError;
use crate::errors::ServerError;
use thiserror::Error;

/// Why a single container could not be turned into a listing.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("listing #{index}: no element matches `{selector}`")]
    MissingElement { index: usize, selector: &'static str },

    #[error("listing #{index}: `{selector}` has no `{attr}` attribute")]
    MissingAttribute {
        index: usize,
        selector: &'static str,
        attr: &'static str,
    },

    #[error("listing #{index}: no image found under a link to {link}")]
    MissingImage { index: usize, link: String },
}

/// Failure of one page's fetch/wait/extract step. The run logs it and moves on.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Failures that stop a crawl run before it starts.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("could not open browser session: {0}")]
    Browser(#[from] BrowserError),

    #[error("could not open listing store: {0}")]
    Store(#[from] ServerError),
}
