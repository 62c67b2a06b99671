mod browser_error;
mod webdriver;

pub use browser_error::BrowserError;
pub use webdriver::RemoteSession;

use std::time::{Duration, Instant};

/// Same bound the crawler has always used for the content marker.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A page as the browser sees it once loaded: its current URL and DOM source.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub url: String,
    pub html: String,
}

/// The few browser operations a crawl run needs.
pub trait Browser {
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Whether at least one element matches the CSS selector right now.
    fn has_element(&mut self, css: &str) -> Result<bool, BrowserError>;

    fn snapshot(&mut self) -> Result<LoadedPage, BrowserError>;
}

/// Bounded wait for an element to show up, polling like Selenium's WebDriverWait.
#[derive(Debug, Clone, Copy)]
pub struct Wait {
    pub timeout: Duration,
    pub poll: Duration,
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Wait {
    pub fn until_present<B: Browser + ?Sized>(
        &self,
        browser: &mut B,
        css: &str,
    ) -> Result<(), BrowserError> {
        let start = Instant::now();

        loop {
            if browser.has_element(css)? {
                return Ok(());
            }

            let waited = start.elapsed();
            if waited >= self.timeout {
                return Err(BrowserError::Timeout {
                    selector: css.to_string(),
                    waited,
                });
            }

            std::thread::sleep(self.poll.min(self.timeout - waited));
        }
    }
}
