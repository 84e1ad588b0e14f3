// Adapters layer: concrete implementations of the domain ports.

pub mod publisher;
pub mod storage;

pub use publisher::DryRunPublisher;
pub use storage::LocalStorage;
