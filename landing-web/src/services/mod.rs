//! Browser-facing services

pub mod rpc;
pub mod storage;
pub mod wallet;
