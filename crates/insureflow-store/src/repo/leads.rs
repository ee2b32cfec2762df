use crate::error::{Result, StoreError};
use crate::query::LeadQuery;
use crate::Store;
use insureflow_core::domain::{validate_commission, Lead, LeadId, LeadStatus, PolicyType};
use insureflow_core::CoreError;

#[derive(Debug, Clone)]
pub struct LeadNew {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: LeadStatus,
    pub policy_interest: PolicyType,
    pub estimated_commission: f64,
    pub notes: String,
    pub next_follow_up: Option<i64>,
}

/// Field-level merge for `update`. `next_follow_up` is double-wrapped so the
/// caller can distinguish "leave alone" from "clear".
#[derive(Debug, Clone, Default)]
pub struct LeadUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<LeadStatus>,
    pub policy_interest: Option<PolicyType>,
    pub estimated_commission: Option<f64>,
    pub notes: Option<String>,
    pub next_follow_up: Option<Option<i64>>,
}

impl LeadUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.status.is_none()
            && self.policy_interest.is_none()
            && self.estimated_commission.is_none()
            && self.notes.is_none()
            && self.next_follow_up.is_none()
    }
}

pub struct LeadsRepo<'a> {
    store: &'a Store,
}

impl<'a> LeadsRepo<'a> {
    pub(crate) fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn create(&self, now_utc: i64, input: LeadNew) -> Result<Lead> {
        let lead = Lead {
            id: LeadId::new(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            status: input.status,
            policy_interest: input.policy_interest,
            estimated_commission: input.estimated_commission,
            notes: input.notes,
            last_contacted: None,
            next_follow_up: input.next_follow_up,
            closed_at: (input.status == LeadStatus::ClosedWon).then_some(now_utc),
            created_at: now_utc,
            updated_at: now_utc,
            history: Vec::new(),
        };
        self.insert(lead.clone())?;
        Ok(lead)
    }

    /// Inserts a lead carrying its own id. Used by snapshot restore and
    /// candidate import; rejects collisions without touching the store.
    pub fn insert(&self, lead: Lead) -> Result<()> {
        lead.validate()?;
        self.store.with_state_mut(|state| {
            if state.index.contains_key(&lead.id) {
                return Err(StoreError::DuplicateId(lead.id.to_string()));
            }
            state.index.insert(lead.id, state.leads.len());
            state.leads.push(lead);
            Ok(())
        })
    }

    pub fn get(&self, id: LeadId) -> Result<Option<Lead>> {
        Ok(self
            .store
            .with_state(|state| state.position(id).map(|pos| state.leads[pos].clone())))
    }

    pub fn update(&self, now_utc: i64, id: LeadId, update: LeadUpdate) -> Result<Lead> {
        self.store.with_state_mut(|state| {
            let pos = state
                .position(id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

            // Validate everything up front so a failed update leaves the
            // record untouched.
            if let Some(name) = &update.name {
                if name.trim().is_empty() {
                    return Err(CoreError::EmptyName.into());
                }
            }
            if let Some(value) = update.estimated_commission {
                validate_commission(value)?;
            }

            let lead = &mut state.leads[pos];
            if let Some(name) = update.name {
                lead.name = name;
            }
            if let Some(phone) = update.phone {
                lead.phone = phone;
            }
            if let Some(email) = update.email {
                lead.email = email;
            }
            if let Some(policy) = update.policy_interest {
                lead.policy_interest = policy;
            }
            if let Some(value) = update.estimated_commission {
                lead.estimated_commission = value;
            }
            if let Some(notes) = update.notes {
                lead.notes = notes;
            }
            if let Some(next) = update.next_follow_up {
                lead.next_follow_up = next;
            }
            if let Some(status) = update.status {
                apply_status(lead, status, now_utc);
            }
            lead.updated_at = now_utc;
            Ok(lead.clone())
        })
    }

    /// Current leads matching the query, in insertion order. Restartable:
    /// call again for a fresh pass over current state.
    pub fn list(&self, query: &LeadQuery) -> Vec<Lead> {
        self.store.with_leads(|leads| {
            leads
                .iter()
                .filter(|lead| query.matches(lead))
                .cloned()
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.store.with_leads(|leads| leads.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single place where status transitions land, so the close date stays
/// consistent whether the change came from an edit or a logged call.
pub(crate) fn apply_status(lead: &mut Lead, status: LeadStatus, now_utc: i64) {
    if lead.status == status {
        return;
    }
    lead.status = status;
    if status == LeadStatus::ClosedWon {
        if lead.closed_at.is_none() {
            lead.closed_at = Some(now_utc);
        }
    } else {
        lead.closed_at = None;
    }
}
