pub mod estate_type;
pub mod listing;

pub use estate_type::EstateType;
pub use listing::{Listing, NewListing};
