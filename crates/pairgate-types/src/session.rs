//! Session count records for `GET /api/sessions`.
//!
//! The upstream reports per-session detail; pairgate only republishes the
//! total, broken down by source. There is a single source today (`api`), so
//! `total` and `breakdown.api` are always equal.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload published by the sessions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionsSummary {
    pub total: u64,
    pub breakdown: SessionsBreakdown,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

/// Per-source session counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionsBreakdown {
    pub api: u64,
}

impl SessionsSummary {
    /// Build a summary stamped with the current time.
    pub fn now(api_total: u64) -> Self {
        Self::at(api_total, Utc::now())
    }

    /// Build a summary stamped with `at`.
    pub fn at(api_total: u64, at: DateTime<Utc>) -> Self {
        Self {
            total: api_total,
            breakdown: SessionsBreakdown { api: api_total },
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Error body for the sessions endpoint: `{ "status": "error", "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionsFailure {
    pub status: String,
    pub message: String,
}

impl SessionsFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Counts read from the body of the upstream `GET /sessions` response.
///
/// Only the top-level counters are read; the per-session detail and any
/// other fields are ignored whatever their shape. A count that is missing,
/// null, negative, fractional or not a number reads as zero (`total`) or
/// `None` (`healthy`). Integral floats such as `7.0` are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamSessions {
    pub total: u64,
    pub healthy: Option<u64>,
}

impl UpstreamSessions {
    /// Read the counters out of a decoded JSON body.
    pub fn from_value(body: &Value) -> Self {
        Self {
            total: body.get("total").and_then(count).unwrap_or(0),
            healthy: body.get("healthy").and_then(count),
        }
    }
}

fn count(value: &Value) -> Option<u64> {
    let number = value.as_number()?;
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}
