use serde::{Deserialize, Serialize};

/// Static description of one remote resource: where to fetch it, which JSON
/// field to extract, and which cache slot the result lands in. Built from
/// configuration at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Display-target name shown on the result card ("Activity", "Fact").
    pub label: String,
    pub url: String,
    /// Top-level string property expected in the JSON response body.
    pub json_field: String,
    /// Cache slot key; unique per endpoint.
    pub cache_key: String,
}
