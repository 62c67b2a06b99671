pub mod components;
pub mod layouts;
pub mod pages;

pub use layouts::desktop::desktop_layout;

use crate::config::TemplatesConfig;
use crate::domain::Listing;
use maud::Markup;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

type ListingsPage = fn(&[Listing], Option<&str>) -> Markup;

/// Page templates by the name the static config refers to them with.
const LISTINGS_PAGES: &[(&str, ListingsPage)] = &[
    ("listings.html", pages::listings_page),
    ("listings_table.html", pages::listings_table_page),
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves the configured template names and renders them.
#[derive(Debug, Clone)]
pub struct Templates {
    dir: PathBuf,
    listings: String,
    stylesheet: Option<String>,
}

impl Templates {
    pub fn new(config: &TemplatesConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            listings: config.listings.clone(),
            stylesheet: config.stylesheet.clone(),
        }
    }

    pub fn render_listings(&self, listings: &[Listing]) -> Result<Markup, TemplateError> {
        let page = lookup(&self.listings)?;
        let css = self.read_stylesheet()?;
        Ok(page(listings, css.as_deref()))
    }

    // Read on every render so edits show up without a restart.
    fn read_stylesheet(&self) -> Result<Option<String>, TemplateError> {
        let Some(name) = &self.stylesheet else {
            return Ok(None);
        };
        let path = self.dir.join(name);
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| TemplateError::Io { path, source })
    }
}

fn lookup(name: &str) -> Result<ListingsPage, TemplateError> {
    LISTINGS_PAGES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, page)| *page)
        .ok_or_else(|| TemplateError::NotFound(name.to_string()))
}
