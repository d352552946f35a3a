//! Storage adapters implementing the outbound `StorageProvider` port

mod file;
mod memory;

pub use file::FileStorageProvider;
pub use memory::InMemoryStorageProvider;
