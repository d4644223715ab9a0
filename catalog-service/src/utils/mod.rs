pub mod config;
pub mod html;
pub mod negotiate;
