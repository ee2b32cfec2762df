use insureflow_core::domain::{Lead, LeadStatus, PolicyType};

/// Filter for lead listings. Empty query matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadQuery {
    pub status: Option<LeadStatus>,
    pub policy: Option<PolicyType>,
}

impl LeadQuery {
    pub fn with_status(status: LeadStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_policy(policy: PolicyType) -> Self {
        Self {
            policy: Some(policy),
            ..Self::default()
        }
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        self.status.map_or(true, |status| lead.status == status)
            && self.policy.map_or(true, |policy| lead.policy_interest == policy)
    }
}
