mod crawler_error;
pub mod driver;
pub mod extract;
pub mod spiders;

pub use crawler_error::{CrawlError, ExtractError, PageError};
pub use driver::{CrawlParams, CrawlReport, Crawler};
pub use spiders::ScraperType;
