//! Handler behaviour and the upstream port trait for pairgate.
//!
//! This crate defines the `PairingUpstream` port that the infrastructure
//! layer implements, and the transport-agnostic `GatewayService` the HTTP
//! layer calls into. It depends only on `pairgate-types` -- never on
//! `pairgate-infra` or any HTTP crate.

pub mod service;
pub mod upstream;
