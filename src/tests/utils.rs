use crate::browser::{Browser, BrowserError, LoadedPage};
use crate::config::TemplatesConfig;
use crate::db::{init_db, Database};
use crate::errors::ServerError;
use rusqlite::Connection;
use crate::domain::{EstateType, NewListing};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

/// A fresh store in its own temp dir. Keep the `TempDir` alive for the test.
pub fn make_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = Database::new(dir.path().join("listings.sqlite"));
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (dir, db)
}

pub fn count_listings(conn: &Connection) -> Result<i64, ServerError> {
    let n = conn.query_row("SELECT COUNT(*) FROM ads", [], |row| row.get(0))?;
    Ok(n)
}

pub fn templates_config(stylesheet: Option<&str>) -> TemplatesConfig {
    TemplatesConfig {
        dir: PathBuf::from("templates"),
        listings: "listings.html".to_string(),
        stylesheet: stylesheet.map(str::to_string),
    }
}

pub fn new_listing(title: &str) -> NewListing {
    NewListing {
        title: title.to_string(),
        address: "Prague 1".to_string(),
        price: "10000".to_string(),
        image_url: "http://x/img.jpg".to_string(),
        estate_type: EstateType::Apartment,
    }
}

/// Fixture ad as it appears on a results page: the picture link sits before the
/// text block and points at the same detail page.
pub struct AdFixture<'a> {
    pub title: &'a str,
    pub address: &'a str,
    pub price: &'a str,
    pub link: &'a str,
    pub image: &'a str,
}

impl AdFixture<'_> {
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="property">
  <a href="{link}" class="images"><img src="{image}" alt=""></a>
  <div class="text-wrap">
    <h2><a ng-href="{link}"><span class="name">{title}</span></a></h2>
    <span class="locality">{address}</span>
    <span class="norm-price">{price}</span>
  </div>
</div>"#,
            link = self.link,
            image = self.image,
            title = self.title,
            address = self.address,
            price = self.price,
        )
    }
}

pub fn results_page(blocks: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Results</title></head><body><div class=\"dir-property-list\">{}</div></body></html>",
        blocks.join("\n")
    )
}

pub fn ad(title: &str, link: &str) -> String {
    AdFixture {
        title,
        address: "Prague 1",
        price: "10000",
        link,
        image: "http://x/img.jpg",
    }
    .to_html()
}

pub enum FakePage {
    Ready(String),
    NeverLoads,
    Unreachable,
}

/// Scripted browser: URLs map to canned pages, every navigation is recorded.
#[derive(Default)]
pub struct FakeBrowser {
    pages: HashMap<String, FakePage>,
    current: Option<String>,
    pub visited: Vec<String>,
}

impl FakeBrowser {
    pub fn with_page(mut self, url: &str, page: FakePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }
}

impl Browser for FakeBrowser {
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        self.visited.push(url.to_string());
        match self.pages.get(url) {
            Some(FakePage::Unreachable) | None => Err(BrowserError::Protocol {
                error: "unknown error".to_string(),
                message: format!("net::ERR_NAME_NOT_RESOLVED at {url}"),
            }),
            Some(_) => {
                self.current = Some(url.to_string());
                Ok(())
            }
        }
    }

    fn has_element(&mut self, _css: &str) -> Result<bool, BrowserError> {
        let page = self.current.as_ref().and_then(|u| self.pages.get(u));
        Ok(matches!(page, Some(FakePage::Ready(_))))
    }

    fn snapshot(&mut self) -> Result<LoadedPage, BrowserError> {
        let url = self.current.clone().ok_or(BrowserError::MissingField("url"))?;
        match self.pages.get(&url) {
            Some(FakePage::Ready(html)) => Ok(LoadedPage {
                url,
                html: html.clone(),
            }),
            _ => Err(BrowserError::MissingField("source")),
        }
    }
}
