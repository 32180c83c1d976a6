use serde::{Deserialize, Serialize};

/// Query parameters sent to every `/{entity}/fetch-data` endpoint.
///
/// Serialised as `page=&limit=&search=&city=`; empty filters are still sent
/// so the backend sees the same shape on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u32,
    /// Page size, fixed per entity
    pub limit: u32,
    pub search: String,
    pub city: String,
}

impl ListQuery {
    pub fn first_page(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            search: String::new(),
            city: String::new(),
        }
    }
}

/// Raw paginated response as the backend sends it.
///
/// Every field may be missing or `null`; use [`ListResponse::into_result`]
/// to get the normalised form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Option<Vec<T>>,
    pub total_pages: Option<u32>,
    pub total_count: Option<u64>,
}

impl<T> ListResponse<T> {
    pub fn into_result(self) -> ListResult<T> {
        ListResult {
            rows: self.data.unwrap_or_default(),
            total_pages: self.total_pages.filter(|p| *p > 0).unwrap_or(1),
            total_count: self.total_count.unwrap_or(0),
        }
    }
}

/// One page of rows with the totals needed to render the pager.
///
/// `total_pages` is always at least 1, even for an empty result.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub rows: Vec<T>,
    pub total_pages: u32,
    pub total_count: u64,
}

impl<T> ListResult<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_pages: 1,
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
