mod listings_tests;

use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::Method;
use std::io::Read;

/// Runs a request through the router the way the server closure does.
pub fn get(path: &str, state: &AppState) -> Response {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::from(String::new()))
        .unwrap();

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    }
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
