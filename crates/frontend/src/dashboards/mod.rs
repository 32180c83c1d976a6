pub mod d400_master_stats;
pub mod d401_overview;

pub use d400_master_stats::ui::MasterStatsDashboard;
pub use d401_overview::ui::OverviewDashboard;
