// webdriver.rs
use crate::browser::{Browser, BrowserError, LoadedPage};
use crate::config::WebDriverConfig;
use reqwest::blocking::Client;
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A remote headless Chrome session behind a WebDriver hub.
///
/// The session lives exactly as long as this value: it is created in
/// [`RemoteSession::connect`] and deleted on drop, whichever way the crawl ends.
pub struct RemoteSession {
    client: Client,
    base: String,
    session_id: String,
}

impl RemoteSession {
    pub fn connect(config: &WebDriverConfig) -> Result<Self, BrowserError> {
        Self::connect_to(&config.endpoint())
    }

    pub fn connect_to(endpoint: &str) -> Result<Self, BrowserError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base = endpoint.trim_end_matches('/').to_string();

        let value = send(
            &client,
            Method::POST,
            &format!("{base}/session"),
            Some(&headless_chrome_capabilities()),
        )?;

        // W3C puts the id under `value`, legacy hubs at the top level.
        let session_id = value
            .pointer("/value/sessionId")
            .or_else(|| value.pointer("/sessionId"))
            .and_then(|v| v.as_str())
            .ok_or(BrowserError::MissingField("sessionId"))?
            .to_string();

        tracing::info!(endpoint = %base, session = %session_id, "WebDriver session opened");

        Ok(Self {
            client,
            base,
            session_id,
        })
    }

    fn session_url(&self, command: &str) -> String {
        format!("{}/session/{}{}", self.base, self.session_id, command)
    }

    fn command(
        &self,
        method: Method,
        command: &str,
        body: Option<&Value>,
    ) -> Result<Value, BrowserError> {
        send(&self.client, method, &self.session_url(command), body)
    }

    fn string_value(&self, command: &str) -> Result<String, BrowserError> {
        let value = self.command(Method::GET, command, None)?;
        value
            .get("value")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(BrowserError::MissingField("value"))
    }
}

impl Browser for RemoteSession {
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        self.command(Method::POST, "/url", Some(&json!({ "url": url })))?;
        Ok(())
    }

    fn has_element(&mut self, css: &str) -> Result<bool, BrowserError> {
        let value = self.command(
            Method::POST,
            "/elements",
            Some(&json!({ "using": "css selector", "value": css })),
        )?;
        Ok(value
            .get("value")
            .and_then(|v| v.as_array())
            .is_some_and(|found| !found.is_empty()))
    }

    fn snapshot(&mut self) -> Result<LoadedPage, BrowserError> {
        let url = self.string_value("/url")?;
        let html = self.string_value("/source")?;
        Ok(LoadedPage { url, html })
    }
}

impl Drop for RemoteSession {
    fn drop(&mut self) {
        let url = format!("{}/session/{}", self.base, self.session_id);
        match self.client.delete(url).send() {
            Ok(_) => tracing::info!(session = %self.session_id, "WebDriver session closed"),
            Err(e) => {
                tracing::warn!(session = %self.session_id, error = %e, "Failed to close WebDriver session")
            }
        }
    }
}

fn headless_chrome_capabilities() -> Value {
    json!({
        "capabilities": {
            "alwaysMatch": {
                "browserName": "chrome",
                "goog:chromeOptions": { "args": ["--headless"] }
            }
        }
    })
}

/// Sends one WebDriver command and unwraps the protocol's error envelope.
fn send(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&Value>,
) -> Result<Value, BrowserError> {
    let mut req = client.request(method, url);
    if let Some(body) = body {
        req = req.json(body);
    }

    let resp = req.send()?;
    let status = resp.status();
    let text = resp.text()?;

    let value: Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(_) if !status.is_success() => {
            return Err(BrowserError::Http {
                status: status.as_u16(),
                body: truncate(&text, 240),
            })
        }
        Err(e) => return Err(BrowserError::Decode(e)),
    };

    if let Some(error) = value.pointer("/value/error").and_then(|v| v.as_str()) {
        let message = value
            .pointer("/value/message")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown webdriver error");
        return Err(BrowserError::Protocol {
            error: error.to_string(),
            message: message.to_string(),
        });
    }

    if !status.is_success() {
        return Err(BrowserError::Http {
            status: status.as_u16(),
            body: truncate(&text, 240),
        });
    }

    Ok(value)
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
