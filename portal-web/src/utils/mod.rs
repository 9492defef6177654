//! Utility modules

pub mod constants;
pub mod storage;
pub mod url;
