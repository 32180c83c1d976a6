//! PageFrame: root wrapper for every page rendered inside the dashboard shell.
//!
//! The root element always carries `id="{entity}--{category}"` and a
//! `data-page-category` attribute, so a page found in the DOM inspector can be
//! traced back to its module (`a001_atm--list` lives in `domain/a001_atm`).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Paginated table of records
    List,
    Dashboard,
    System,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Dashboard => "dashboard",
            PageCategory::System => "system",
        }
    }

    fn class(self) -> &'static str {
        match self {
            PageCategory::Dashboard => "page page--dashboard",
            PageCategory::List | PageCategory::System => "page",
        }
    }
}

/// `{entity}--{category}` with a non-empty entity part
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// e.g. `"a001_atm--list"`
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "malformed page id: {page_id}");

    view! {
        <div
            id=page_id
            class=category.class()
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_atm--list"));
        assert!(is_valid_page_id("d400_master_stats--dashboard"));
        assert!(!is_valid_page_id("a001_atm"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_atm--"));
    }
}
