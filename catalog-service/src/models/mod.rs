pub mod book;
pub mod error;
#[cfg(test)]
pub mod memory;
pub mod responses;
pub mod storage;
