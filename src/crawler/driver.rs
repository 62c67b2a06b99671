// driver.rs
use crate::browser::{Browser, RemoteSession, Wait};
use crate::config::{StoreConfig, WebDriverConfig};
use crate::crawler::extract::{extract_ads, CONTENT_MARKER};
use crate::crawler::spiders::Spider;
use crate::crawler::{CrawlError, PageError};
use crate::db::{insert_listing, Database};
use crate::domain::NewListing;
use rusqlite::Connection;

/// What a crawl run is asked to cover.
#[derive(Debug, Clone)]
pub struct CrawlParams {
    pub base_url: String,
    pub path: String,
    pub pages: u32,
}

impl CrawlParams {
    /// `base_url + path + "?page=i"` for i in 1..=pages, in order.
    pub fn page_urls(&self) -> Vec<String> {
        (1..=self.pages)
            .map(|i| format!("{}{}?page={i}", self.base_url, self.path))
            .collect()
    }
}

/// Tally of one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    pub pages_attempted: usize,
    pub pages_failed: usize,
    pub listings_extracted: usize,
    pub listings_saved: usize,
    pub listings_rejected: usize,
}

/// One crawl run: a browser session and a store connection held for its whole
/// lifetime. Both are released when the crawler is dropped.
pub struct Crawler<B: Browser> {
    spider: Spider,
    browser: B,
    conn: Connection,
    wait: Wait,
}

impl Crawler<RemoteSession> {
    /// Opens the remote browser session and the store connection for a run.
    pub fn connect(
        spider: Spider,
        webdriver: &WebDriverConfig,
        store: &StoreConfig,
    ) -> Result<Self, CrawlError> {
        let conn = Database::new(store.path.clone()).connect()?;
        let browser = RemoteSession::connect(webdriver)?;
        Ok(Self::new(spider, browser, conn))
    }
}

impl<B: Browser> Crawler<B> {
    pub fn new(spider: Spider, browser: B, conn: Connection) -> Self {
        Self {
            spider,
            browser,
            conn,
            wait: Wait::default(),
        }
    }

    pub fn with_wait(mut self, wait: Wait) -> Self {
        self.wait = wait;
        self
    }

    pub fn run(&mut self, params: &CrawlParams) -> CrawlReport {
        let urls = params.page_urls();
        let mut report = CrawlReport::default();

        if !self.spider.allows(&params.base_url) {
            tracing::warn!(
                spider = self.spider.name,
                base_url = %params.base_url,
                allowed = ?self.spider.allowed_domains,
                "Base URL is outside the spider's allowed domains"
            );
        }

        tracing::info!(spider = self.spider.name, pages = urls.len(), "Crawl started");

        for url in &urls {
            report.pages_attempted += 1;

            match self.load_page(url) {
                Ok(listings) => {
                    report.listings_extracted += listings.len();
                    self.save_all(&listings, &mut report);
                    tracing::info!("Scraped {} ads from {}", listings.len(), url);
                }
                Err(e) => {
                    report.pages_failed += 1;
                    tracing::error!(url = %url, error = %e, "Failed to scrape page");
                }
            }
        }

        tracing::info!(
            spider = self.spider.name,
            pages = report.pages_attempted,
            failed_pages = report.pages_failed,
            saved = report.listings_saved,
            rejected = report.listings_rejected,
            "Crawl finished"
        );

        report
    }

    /// Fetch, wait for content, extract. Any failure here fails the whole page.
    fn load_page(&mut self, url: &str) -> Result<Vec<NewListing>, PageError> {
        self.browser.navigate(url)?;
        self.wait.until_present(&mut self.browser, CONTENT_MARKER)?;

        let page = self.browser.snapshot()?;
        let ads = extract_ads(&page)?;

        Ok(ads
            .into_iter()
            .map(|ad| ad.into_listing(self.spider.estate_type))
            .collect())
    }

    /// Each listing is its own transaction; a rejected one doesn't stop the rest.
    fn save_all(&mut self, listings: &[NewListing], report: &mut CrawlReport) {
        for listing in listings {
            match insert_listing(&mut self.conn, listing) {
                Ok(_) => report.listings_saved += 1,
                Err(e) => {
                    report.listings_rejected += 1;
                    tracing::error!(title = %listing.title, error = %e, "Error adding ad to the database");
                }
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (B, Connection) {
        (self.browser, self.conn)
    }
}
