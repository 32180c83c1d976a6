pub mod d400_master_stats;
pub mod d401_overview;
