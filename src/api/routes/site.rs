//! Site Route
//!
//! Serves the page shell (`index.html`) for `/` and for every path the
//! static directory does not have. The built shell boots the WASM app from
//! an inline module script, so each response gets a fresh nonce: it is set
//! on every `<script>` tag and added to the policy's `script-src`.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Fresh per-response nonce
pub fn script_nonce() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn script_tag() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<script\b([^>]*)>").expect("script tag pattern is valid"))
}

/// Put `nonce` on every `<script>` tag that does not already carry one
pub fn apply_nonce(html: &str, nonce: &str) -> String {
    script_tag()
        .replace_all(html, |caps: &Captures| {
            let attrs = &caps[1];
            if attrs.contains("nonce=") {
                caps[0].to_string()
            } else {
                format!(r#"<script nonce="{}"{}>"#, nonce, attrs)
            }
        })
        .into_owned()
}

/// Policy with `'nonce-…'` added to `script-src`.
///
/// Without a `script-src` directive one is added, seeded from `default-src`.
pub fn policy_with_nonce(policy: &str, nonce: &str) -> String {
    let source = format!("'nonce-{}'", nonce);
    let mut directives: Vec<String> = policy
        .split(';')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();

    match directives
        .iter_mut()
        .find(|d| d.split_whitespace().next() == Some("script-src"))
    {
        Some(directive) => {
            directive.push(' ');
            directive.push_str(&source);
        }
        None => {
            let fallback = directives
                .iter()
                .find_map(|d| d.strip_prefix("default-src "))
                .unwrap_or("'self'")
                .to_string();
            directives.push(format!("script-src {} {}", fallback, source));
        }
    }

    let mut joined = directives.join("; ");
    joined.push(';');
    joined
}

/// GET / and unmatched paths
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let path = Path::new(&state.config.server.static_dir).join("index.html");
    let html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::NotFound(format!("Site shell not found: {}", path.display()))
        } else {
            ApiError::Io(e)
        }
    })?;

    let nonce = script_nonce();
    let policy = policy_with_nonce(&state.config.security.content_security_policy, &nonce);
    let policy = HeaderValue::from_str(&policy)
        .map_err(|e| ApiError::Internal(format!("Invalid content security policy: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8")),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
            (header::CONTENT_SECURITY_POLICY, policy),
        ],
        apply_nonce(&html, &nonce),
    )
        .into_response())
}
