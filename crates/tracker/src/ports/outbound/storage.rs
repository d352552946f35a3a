//! StorageProvider - outbound key-value persistence port
//!
//! The notes sidecar (and anything else needing durable local state)
//! writes through this trait. The surface is deliberately infallible:
//! adapters log failures instead of propagating them, because losing a
//! notes write must never break the tracking flow.

/// Key-value persistence port.
///
/// No versioning, no schema - values are opaque strings.
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key.
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found.
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key.
    fn remove(&self, key: &str);
}
