pub mod detail;
pub mod pagination;
pub mod review;
