//! Fit analytics events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A try-on event appended to analytics.json.
///
/// Body measurements are stored exactly as submitted; absent ones are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,
    pub tried_on: bool,
    /// When the event was recorded (ISO 8601)
    pub timestamp: String,
}
