//! API utilities for frontend-backend communication
//!
//! Every admin endpoint hangs off one prefix, e.g. `https://host/admin/`.

/// Get the base prefix for API requests
///
/// Uses the compile-time `ADMIN_API_PREFIX` when set, otherwise
/// `<window origin>/admin/`.
///
/// # Returns
/// - Prefix ending in `/`, like "https://example.com/admin/"
/// - "/admin/" if window is not available
pub fn api_base() -> String {
    if let Some(prefix) = option_env!("ADMIN_API_PREFIX") {
        return with_trailing_slash(prefix);
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/admin/", origin)
}

/// Build a full API URL from a path relative to the prefix
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("offers/show");
/// ```
pub fn api_url(path: &str) -> String {
    join_prefix(&api_base(), path)
}

fn with_trailing_slash(prefix: &str) -> String {
    if prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{}/", prefix)
    }
}

fn join_prefix(base: &str, path: &str) -> String {
    format!("{}{}", with_trailing_slash(base), path.trim_start_matches('/'))
}
