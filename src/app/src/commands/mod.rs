pub mod browser;
pub mod storage;
