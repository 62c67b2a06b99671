use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use std::error::Error;

pub type ResultResp = Result<Response, ServerError>;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Turns a handler error into a response. Anything other than a 404 is logged
/// with its full cause chain and reaches the client only as a generic 500.
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),
        other => {
            tracing::error!(error = %error_chain(&other), "Error processing request");
            render_error(500, INTERNAL_ERROR_MESSAGE)
        }
    }
}

fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

fn render_error(status: u16, message: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head><meta charset=\"utf-8\"><title>Error {status}</title></head>
<body>
  <h1>Error {status}</h1>
  <p>{message}</p>
</body>
</html>"
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from(message.to_string())))
}
