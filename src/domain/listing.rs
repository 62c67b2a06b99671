use crate::domain::EstateType;

/// A listing as pulled off a page, before it has a row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub title: String,
    pub address: String,
    pub price: String, // raw text, e.g. "10 000 Kč"
    pub image_url: String,
    pub estate_type: EstateType,
}

/// A stored row of the `ads` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub price: String,
    pub image_url: String,
    pub estate_type: EstateType,
}
