use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline stage of a lead. Variant order is the canonical funnel order and
/// drives the dashboard's status distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Appointment,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Appointment,
        LeadStatus::Negotiation,
        LeadStatus::ClosedWon,
        LeadStatus::ClosedLost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New Lead",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Appointment => "Appointment Set",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::ClosedWon => "Policy Sold",
            LeadStatus::ClosedLost => "Lost",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Appointment => "appointment",
            LeadStatus::Negotiation => "negotiation",
            LeadStatus::ClosedWon => "closed_won",
            LeadStatus::ClosedLost => "closed_lost",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LeadStatus::ClosedWon | LeadStatus::ClosedLost)
    }

    /// Statuses whose commission counts toward pipeline value.
    pub fn in_pipeline(&self) -> bool {
        matches!(self, LeadStatus::Negotiation | LeadStatus::Appointment)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        for status in Self::ALL {
            if normalized == status.token() || trimmed.eq_ignore_ascii_case(status.label()) {
                return Ok(status);
            }
        }
        Err(CoreError::InvalidStatus(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::LeadStatus;
    use crate::error::CoreError;

    #[test]
    fn parses_tokens_and_labels() {
        assert_eq!("closed_won".parse::<LeadStatus>().unwrap(), LeadStatus::ClosedWon);
        assert_eq!("closed-won".parse::<LeadStatus>().unwrap(), LeadStatus::ClosedWon);
        assert_eq!("Policy Sold".parse::<LeadStatus>().unwrap(), LeadStatus::ClosedWon);
        assert_eq!("appointment set".parse::<LeadStatus>().unwrap(), LeadStatus::Appointment);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "archived".parse::<LeadStatus>().unwrap_err();
        assert_eq!(err, CoreError::InvalidStatus("archived".to_string()));
    }

    #[test]
    fn all_covers_every_variant_in_funnel_order() {
        assert_eq!(LeadStatus::ALL.len(), 6);
        assert_eq!(LeadStatus::ALL[0], LeadStatus::New);
        assert_eq!(LeadStatus::ALL[5], LeadStatus::ClosedLost);
    }
}
