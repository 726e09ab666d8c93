//! HTTP response helpers.
//!
//! Every response carries `Access-Control-Allow-Origin: *` so the admin page
//! can be opened from another origin during development.

use crate::embed::serve::{ERROR_HTML, ErrorVars};
use crate::utils::mime::types::{HTML, JSON};
use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Respond with a static file.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        let response = Response::empty(StatusCode(200));
        return send(request, with_cors(response, content_type, true));
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body, true)
}

/// Respond with a JSON document.
pub fn respond_json(request: Request, status: u16, value: &Value) -> Result<()> {
    let body = serde_json::to_vec(value)?;
    send_body(request, status, JSON, body, false)
}

/// Respond with the HTML error page.
pub fn respond_error(request: Request, status: u16, message: &str) -> Result<()> {
    let body = ERROR_HTML.render(&ErrorVars { status, message });
    send_body(request, status, HTML, body.into_bytes(), false)
}

/// Answer a CORS preflight.
pub fn respond_preflight(request: Request) -> Result<()> {
    let response = Response::empty(StatusCode(200));
    let response = add_header(response, "Access-Control-Allow-Origin", "*");
    let response = add_header(response, "Access-Control-Allow-Methods", ALLOW_METHODS);
    let response = add_header(response, "Access-Control-Allow-Headers", ALLOW_HEADERS);
    send(request, response)
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &str,
    body: Vec<u8>,
    allow_all: bool,
) -> Result<()> {
    let response = Response::from_data(body).with_status_code(StatusCode(status));
    send(request, with_cors(response, content_type, allow_all))
}

/// Content type plus CORS headers; `allow_all` adds the method/header lists.
fn with_cors<R: std::io::Read>(
    response: Response<R>,
    content_type: &str,
    allow_all: bool,
) -> Response<R> {
    let response = add_header(response, "Content-Type", content_type);
    let response = add_header(response, "Access-Control-Allow-Origin", "*");
    if !allow_all {
        return response;
    }
    let response = add_header(response, "Access-Control-Allow-Methods", ALLOW_METHODS);
    add_header(response, "Access-Control-Allow-Headers", ALLOW_HEADERS)
}

fn add_header<R: std::io::Read>(response: Response<R>, key: &str, value: &str) -> Response<R> {
    match Header::from_bytes(key, value) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

fn send<R: std::io::Read>(request: Request, response: Response<R>) -> Result<()> {
    request.respond(response)?;
    Ok(())
}
