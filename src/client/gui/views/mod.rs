pub mod panel;
pub mod query_page;
