//! Query string access for the gateway endpoints.

use serde::Deserialize;

/// All `key=value` pairs of a query string, in order.
///
/// Repeated keys are kept; lookups return the first occurrence, so
/// `?number=1&number=2` reads as `1` instead of being rejected.
#[derive(Debug, Deserialize, Default)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// First value for `key`, if present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
