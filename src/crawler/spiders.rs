use crate::domain::EstateType;
use clap::ValueEnum;
use url::Url;

/// The sources a crawl run can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScraperType {
    Sreality,
}

/// Static description of one source.
#[derive(Debug, Clone, Copy)]
pub struct Spider {
    pub name: &'static str,
    pub allowed_domains: &'static [&'static str],
    pub estate_type: EstateType,
}

const SREALITY: Spider = Spider {
    name: "sreality",
    allowed_domains: &["www.sreality.cz"],
    estate_type: EstateType::Apartment,
};

impl ScraperType {
    pub fn spider(self) -> Spider {
        match self {
            ScraperType::Sreality => SREALITY,
        }
    }
}

impl Spider {
    /// Whether `url` is on one of this spider's domains. Unparseable URLs are not.
    pub fn allows(&self, url: &str) -> bool {
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
            .is_some_and(|host| self.allowed_domains.iter().any(|d| host == *d))
    }
}
