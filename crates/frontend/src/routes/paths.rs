//! Client-side route paths.

pub const SIGN_IN: &str = crate::system::auth::session::SIGN_IN_PATH;

pub const HOME: &str = "/dashboard/home";
pub const REPORTS: &str = "/dashboard/reports";
pub const ATM: &str = "/dashboard/atm";
pub const COLLEGE_DUNIA: &str = "/dashboard/college-dunia";
pub const BANK: &str = "/dashboard/bank";
pub const HEYPLACES: &str = "/dashboard/heyplaces";
