//! Seller model for storage.

use crate::models::PlanId;
use serde::{Deserialize, Deserializer, Serialize};

/// Seller record stored in sellers.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Email address (unique key)
    pub email: String,
    /// When the seller first uploaded (ISO 8601); missing or null loads as empty
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub created_at: String,
    /// Number of items uploaded so far
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub items_count: u32,
    /// Plan on record; `None` means no plan
    #[serde(default, deserialize_with = "deserialize_plan")]
    pub current_plan: Option<PlanId>,
    /// End of the paid period (ISO 8601)
    #[serde(default)]
    pub paid_until: Option<String>,
}

impl Seller {
    /// A freshly registered seller on the trial plan.
    pub fn new_trial(email: impl Into<String>, created_at: String) -> Self {
        Self {
            email: email.into(),
            created_at,
            items_count: 0,
            current_plan: Some(PlanId::Trial),
            paid_until: None,
        }
    }
}

/// Read a field that older records may hold as null.
fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read `current_plan`, treating null, "none" and unknown names as no plan.
fn deserialize_plan<'de, D>(deserializer: D) -> Result<Option<PlanId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("trial") => Some(PlanId::Trial),
        Some("basic") => Some(PlanId::Basic),
        Some("pro") => Some(PlanId::Pro),
        _ => None,
    })
}
