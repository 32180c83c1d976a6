pub mod dashboard;

pub use dashboard::MasterStatsDashboard;
