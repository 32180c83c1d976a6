//! Session-aware HTTP client.
//!
//! Every request carries the session cookie (`credentials: include`); no
//! `Authorization` header is ever set. A 401 is routed through the global
//! session interceptor before the error is handed back to the caller.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;
use crate::system::auth::session;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("backend unreachable: {0}")]
    NetworkUnavailable(String),
    /// Already handled globally: cached user cleared and redirect started
    #[error("session expired")]
    Unauthorized,
    #[error("HTTP {status}")]
    Http { status: u16 },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to build request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::NetworkUnavailable(_))
    }
}

/// Maps an HTTP status onto the error taxonomy; 2xx is success.
pub fn classify_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::Http { status }),
    }
}

/// Appends the serialised query (if any) to `path`.
pub fn build_path<Q>(path: &str, query: Option<&Q>) -> Result<String, ApiError>
where
    Q: Serialize,
{
    let Some(query) = query else {
        return Ok(path.to_string());
    };
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

/// `GET {api_base}{path}[?query]` and decode the JSON body
pub async fn get_json<T, Q>(path: &str, query: Option<&Q>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let url = api_url(&build_path(path, query)?);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;

    read_json(response).await
}

/// `POST {api_base}{path}` with a JSON body
pub async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let url = api_url(path);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if let Err(e) = classify_status(response.status()) {
        if e == ApiError::Unauthorized {
            session::on_unauthorized();
        }
        return Err(e);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::ListQuery;

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), Ok(()));
        assert_eq!(classify_status(204), Ok(()));
        assert_eq!(classify_status(401), Err(ApiError::Unauthorized));
        assert_eq!(classify_status(403), Err(ApiError::Http { status: 403 }));
        assert_eq!(classify_status(500), Err(ApiError::Http { status: 500 }));
    }

    #[test]
    fn test_list_query_is_sent_with_empty_filters() {
        let query = ListQuery::first_page(10);
        assert_eq!(
            build_path("/atm/fetch-data", Some(&query)).unwrap(),
            "/atm/fetch-data?page=1&limit=10&search=&city="
        );
    }

    #[test]
    fn test_filters_are_encoded() {
        let query = ListQuery {
            page: 3,
            limit: 10,
            search: "SBI".to_string(),
            city: "Pune".to_string(),
        };
        assert_eq!(
            build_path("/atm/fetch-data", Some(&query)).unwrap(),
            "/atm/fetch-data?page=3&limit=10&search=SBI&city=Pune"
        );
    }

    #[test]
    fn test_no_query_keeps_path() {
        assert_eq!(
            build_path::<ListQuery>("/googlemap_data", None).unwrap(),
            "/googlemap_data"
        );
    }
}
