// Adapters layer: concrete implementations for external systems.

pub mod credentials;
pub mod http;
