pub mod listings;

pub use listings::{listings_page, listings_table_page};
