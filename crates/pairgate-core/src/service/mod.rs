//! Services for the gateway endpoints.

pub mod gateway;
