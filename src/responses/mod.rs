pub mod errors;
pub mod html;

pub use errors::{html_error_response, ResultResp, INTERNAL_ERROR_MESSAGE};
pub use html::html_response;
