//! Infrastructure - concrete adapters for the outbound ports

pub mod storage;
