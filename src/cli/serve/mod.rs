//! Admin server: static files plus the save and commit endpoints.
//!
//! | Method  | Path           | Action                                   |
//! |---------|----------------|------------------------------------------|
//! | GET     | any            | file under the site root (`/` → index)   |
//! | POST    | `/save-file`   | overwrite a top-level file               |
//! | POST    | `/git-commit`  | run `folio commit` in a child process    |
//! | OPTIONS | any            | CORS preflight                           |
//!
//! Requests are handled one at a time on the calling thread.

mod api;
mod lifecycle;
mod path;
mod response;

use crate::{config::FolioConfig, debug, log};
use anyhow::Result;
use api::ApiError;
use serde_json::Value;
use std::sync::Arc;
use tiny_http::{Method, Request};

/// Bind and serve until Ctrl+C.
pub fn serve_site(config: &FolioConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_shutdown(Arc::clone(&server))?;

    log!("serve"; "http://{}", addr);
    log!("serve"; "serving {}", config.get_root().display());

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, config) {
            log!("serve"; "request error: {e:#}");
        }
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(mut request: Request, config: &FolioConfig) -> Result<()> {
    let method = request.method().clone();
    debug!("serve"; "{} {}", method, request.url());

    match method {
        Method::Get | Method::Head => serve_file(request, config),
        Method::Options => response::respond_preflight(request),
        Method::Post => {
            let route = request.url().split('?').next().unwrap_or_default().to_string();
            let mut body = String::new();
            if let Err(e) = request.as_reader().read_to_string(&mut body) {
                return response::respond_error(request, 400, &format!("Unreadable body: {e}"));
            }
            let result = match route.as_str() {
                "/save-file" => save_file(&body, config),
                "/git-commit" => git_commit(&body, config),
                _ => return response::respond_error(request, 404, "Endpoint not found"),
            };
            match result {
                Ok(value) => response::respond_json(request, 200, &value),
                Err(e) => {
                    log!("serve"; "{} failed: {}", route, e);
                    response::respond_error(request, e.status(), &e.to_string())
                }
            }
        }
        _ => response::respond_error(request, 405, "Method not allowed"),
    }
}

fn serve_file(request: Request, config: &FolioConfig) -> Result<()> {
    match path::resolve_path(request.url(), config.get_root(), &config.serve.index) {
        Some(file) => response::respond_file(request, &file),
        None => {
            let message = format!("File not found: {}", request.url());
            response::respond_error(request, 404, &message)
        }
    }
}

fn save_file(body: &str, config: &FolioConfig) -> Result<Value, ApiError> {
    let value = api::save_file(config.get_root(), body)?;
    log!("serve"; "saved {}", value["filename"].as_str().unwrap_or_default());
    Ok(value)
}

fn git_commit(body: &str, config: &FolioConfig) -> Result<Value, ApiError> {
    let value = api::git_commit(config, body)?;
    log!("serve"; "commit finished");
    Ok(value)
}
