//! HTTP request handlers for the gateway endpoints.

pub mod check_user;
pub mod pair;
pub mod sessions;
