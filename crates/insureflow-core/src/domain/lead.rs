use crate::domain::ids::LeadId;
use crate::domain::interaction::Interaction;
use crate::domain::policy::PolicyType;
use crate::domain::status::LeadStatus;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A prospective or current client tracked through the sales pipeline.
///
/// `history` is append-only and owned by the lead; entries are stored in
/// insertion order, which is also chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: LeadStatus,
    pub policy_interest: PolicyType,
    pub estimated_commission: f64,
    pub notes: String,
    pub last_contacted: Option<i64>,
    pub next_follow_up: Option<i64>,
    pub closed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub history: Vec<Interaction>,
}

impl Lead {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        validate_commission(self.estimated_commission)?;
        Ok(())
    }

    /// First whitespace-separated token of the name, used by message
    /// personalization.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

pub fn validate_commission(value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::InvalidCommission(value));
    }
    Ok(value)
}
