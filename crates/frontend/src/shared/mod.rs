pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod export;
pub mod icons;
pub mod number_format;
pub mod page_frame;
pub mod remote_list;
pub mod xlsx;
