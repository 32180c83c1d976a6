pub mod lenient;
pub mod list;
