pub mod api;
pub mod report;
