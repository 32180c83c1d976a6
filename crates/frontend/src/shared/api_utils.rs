//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Comes from the embedded configuration (`[api] base_url`), optionally
/// overridden at build time with `DASHBOARD_API_URL`. Never ends with `/`.
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/atm/fetch-data");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/atm/fetch-data"),
            "http://localhost:8000/atm/fetch-data"
        );
        assert_eq!(
            join_url("http://localhost:8000", "googlemap_data"),
            "http://localhost:8000/googlemap_data"
        );
    }
}
