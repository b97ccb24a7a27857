//! Upstream pairing/session service clients.

pub mod http;

pub use http::HttpPairingUpstream;
