//! Infrastructure layer for pairgate.
//!
//! Contains the reqwest implementation of the `PairingUpstream` port defined
//! in `pairgate-core` and the `pairgate.toml` configuration loader.

pub mod config;
pub mod upstream;
