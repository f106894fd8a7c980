//! CORS configuration for the dashboard frontend.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Returns true for `https://<domain>` and `https://<sub>.<domain>`.
pub fn origin_allowed(origin: &str, domain: &str) -> bool {
    let Some(host) = origin.strip_prefix("https://") else {
        return false;
    };

    if host == domain {
        return true;
    }

    host.strip_suffix(domain)
        .and_then(|prefix| prefix.strip_suffix('.'))
        .is_some_and(|sub| !sub.is_empty() && !sub.contains('/'))
}

/// Builds the CORS layer allowing the configured domain and its subdomains.
///
/// Credentials are allowed so the session cookie is sent by the browser.
pub fn cors_layer(domain: String) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request| {
                origin
                    .to_str()
                    .map(|origin| origin_allowed(origin, &domain))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
