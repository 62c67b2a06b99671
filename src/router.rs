use crate::db::{all_listings, Database};
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates::Templates;
use astra::Request;

/// What the request handlers need; built once from config and shared by workers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub templates: Templates,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => listings(state),
        _ => Err(ServerError::NotFound),
    }
}

fn listings(state: &AppState) -> ResultResp {
    // Fresh connection per request, closed when this returns.
    let ads = state.db.with_conn(|conn| all_listings(conn))?;
    let markup = state.templates.render_listings(&ads)?;
    html_response(markup)
}
