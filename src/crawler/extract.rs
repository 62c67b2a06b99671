// extract.rs
use crate::browser::LoadedPage;
use crate::crawler::ExtractError;
use crate::domain::{EstateType, NewListing};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Present on the page once the listing grid has rendered.
pub const CONTENT_MARKER: &str = ".text-wrap";

const CONTAINER: &str = "div.text-wrap";
const TITLE: &str = "span.name";
const ADDRESS: &str = "span.locality";
const PRICE: &str = "span.norm-price";
const DETAIL_LINK: &str = "h2 a";
const DETAIL_LINK_ATTR: &str = "ng-href";
const ANCHOR: &str = "a[href]";
const IMAGE: &str = "img";

/// The five fields read off one listing container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedAd {
    pub title: String,
    pub address: String,
    pub price: String,
    pub detail_link: String,
    pub image_url: String,
}

impl ScrapedAd {
    pub fn into_listing(self, estate_type: EstateType) -> NewListing {
        NewListing {
            title: self.title,
            address: self.address,
            price: self.price,
            image_url: self.image_url,
            estate_type,
        }
    }
}

struct Selectors {
    container: Selector,
    title: Selector,
    address: Selector,
    price: Selector,
    detail_link: Selector,
    anchor: Selector,
    image: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ExtractError> {
        let parse = |css: &str| {
            Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{css}: {e}")))
        };

        Ok(Self {
            container: parse(CONTAINER)?,
            title: parse(TITLE)?,
            address: parse(ADDRESS)?,
            price: parse(PRICE)?,
            detail_link: parse(DETAIL_LINK)?,
            anchor: parse(ANCHOR)?,
            image: parse(IMAGE)?,
        })
    }
}

/// Pulls every listing container off a loaded page.
///
/// All-or-nothing per page: the first malformed container fails the whole
/// page, and the caller persists nothing from it.
pub fn extract_ads(page: &LoadedPage) -> Result<Vec<ScrapedAd>, ExtractError> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(&page.html);
    let base = Url::parse(&page.url).ok();

    document
        .select(&selectors.container)
        .enumerate()
        .map(|(index, container)| {
            extract_one(&document, &selectors, base.as_ref(), index, container)
        })
        .collect()
}

fn extract_one(
    document: &Html,
    sel: &Selectors,
    base: Option<&Url>,
    index: usize,
    container: ElementRef<'_>,
) -> Result<ScrapedAd, ExtractError> {
    let title = text_of(container, &sel.title, index, TITLE)?;
    let address = text_of(container, &sel.address, index, ADDRESS)?;
    let price = text_of(container, &sel.price, index, PRICE)?;

    let detail_link = container
        .select(&sel.detail_link)
        .next()
        .ok_or(ExtractError::MissingElement {
            index,
            selector: DETAIL_LINK,
        })?
        .value()
        .attr(DETAIL_LINK_ATTR)
        .ok_or(ExtractError::MissingAttribute {
            index,
            selector: DETAIL_LINK,
            attr: DETAIL_LINK_ATTR,
        })?
        .to_string();

    // The picture lives outside the text block: find the first anchor anywhere on
    // the page pointing at the same detail link. If several match, the first one
    // in document order wins.
    let src = document
        .select(&sel.anchor)
        .find(|a| a.value().attr("href") == Some(detail_link.as_str()))
        .and_then(|a| a.select(&sel.image).next())
        .and_then(|img| img.value().attr("src"))
        .ok_or_else(|| ExtractError::MissingImage {
            index,
            link: detail_link.clone(),
        })?;

    Ok(ScrapedAd {
        title,
        address,
        price,
        image_url: resolve(base, src),
        detail_link,
    })
}

fn text_of(
    container: ElementRef<'_>,
    selector: &Selector,
    index: usize,
    css: &'static str,
) -> Result<String, ExtractError> {
    container
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .ok_or(ExtractError::MissingElement {
            index,
            selector: css,
        })
}

/// A live DOM reports `img.src` as an absolute URL; do the same for the snapshot.
fn resolve(base: Option<&Url>, src: &str) -> String {
    base.and_then(|b| b.join(src).ok())
        .map(String::from)
        .unwrap_or_else(|| src.to_string())
}
