// Adapters layer: concrete implementations for external systems (http, session storage).

pub mod http;
pub mod session;
