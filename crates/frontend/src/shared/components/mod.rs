pub mod notice_banner;
pub mod page_header;
pub mod pagination_controls;
pub mod ranked_table;
pub mod stat_card;
