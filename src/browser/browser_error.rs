use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("webdriver request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webdriver HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("webdriver error {error}: {message}")]
    Protocol { error: String, message: String },

    #[error("webdriver response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("webdriver response missing {0}")]
    MissingField(&'static str),

    #[error("timed out after {waited:?} waiting for {selector}")]
    Timeout { selector: String, waited: Duration },
}
