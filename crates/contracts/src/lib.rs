//! Wire contracts shared by the dashboard frontend and its tests.
//!
//! Everything in here is plain serde data plus the small amount of logic that
//! does not need a browser (query normalisation, stats fallback, overview counts).

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
