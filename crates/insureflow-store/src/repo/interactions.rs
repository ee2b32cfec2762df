use crate::error::{Result, StoreError};
use crate::repo::leads::apply_status;
use crate::Store;
use insureflow_core::domain::{
    Interaction, InteractionId, InteractionKind, Lead, LeadId, LeadStatus,
};
use insureflow_core::rules::{suggest_status, OUTCOME_SENT};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub lead_id: LeadId,
    pub kind: InteractionKind,
    pub occurred_at: i64,
    pub outcome: String,
    pub note: String,
    pub duration_secs: Option<i64>,
}

/// Result of committing a logged interaction. `suggested` carries the
/// advisory transition that was computed from the outcome, whether or not
/// an explicit status overrode it.
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub interaction: Interaction,
    pub lead: Lead,
    pub suggested: Option<LeadStatus>,
}

/// Result of committing a delivered outreach message.
#[derive(Debug, Clone)]
pub struct OutreachRecord {
    pub interaction: Interaction,
    pub lead: Lead,
    pub advanced: bool,
}

pub struct InteractionsRepo<'a> {
    store: &'a Store,
}

impl<'a> InteractionsRepo<'a> {
    pub(crate) fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Appends an interaction to the lead's history and derives the
    /// resulting status: an explicit status always wins, otherwise the
    /// outcome suggestion applies, otherwise the status is unchanged.
    pub fn log(
        &self,
        now_utc: i64,
        entry: LogEntry,
        explicit_status: Option<LeadStatus>,
        next_follow_up: Option<i64>,
    ) -> Result<LogOutcome> {
        self.store.with_state_mut(|state| {
            let pos = state
                .position(entry.lead_id)
                .ok_or_else(|| StoreError::NotFound(entry.lead_id.to_string()))?;
            let lead = &mut state.leads[pos];

            let suggested = suggest_status(&entry.outcome, lead.status);
            let interaction = Interaction {
                id: InteractionId::new(),
                occurred_at: entry.occurred_at,
                created_at: now_utc,
                kind: entry.kind,
                outcome: entry.outcome,
                note: entry.note,
                duration_secs: entry.duration_secs,
            };
            lead.history.push(interaction.clone());
            lead.last_contacted = Some(entry.occurred_at);
            if let Some(next) = next_follow_up {
                lead.next_follow_up = Some(next);
            }
            if let Some(status) = explicit_status.or(suggested) {
                apply_status(lead, status, now_utc);
            }
            lead.updated_at = now_utc;

            Ok(LogOutcome {
                interaction,
                lead: lead.clone(),
                suggested,
            })
        })
    }

    /// Commits a delivered SMS/email: appends a synthetic interaction,
    /// stamps the contact time, and advances a fresh lead to Contacted.
    /// Call this only after the outbound channel reported success.
    pub fn record_outreach(
        &self,
        now_utc: i64,
        lead_id: LeadId,
        kind: InteractionKind,
        content: String,
    ) -> Result<OutreachRecord> {
        self.store.with_state_mut(|state| {
            let pos = state
                .position(lead_id)
                .ok_or_else(|| StoreError::NotFound(lead_id.to_string()))?;
            let lead = &mut state.leads[pos];

            let interaction = Interaction {
                id: InteractionId::new(),
                occurred_at: now_utc,
                created_at: now_utc,
                kind,
                outcome: OUTCOME_SENT.to_string(),
                note: content,
                duration_secs: None,
            };
            lead.history.push(interaction.clone());
            lead.last_contacted = Some(now_utc);
            let advanced = lead.status == LeadStatus::New;
            if advanced {
                apply_status(lead, LeadStatus::Contacted, now_utc);
            }
            lead.updated_at = now_utc;

            Ok(OutreachRecord {
                interaction,
                lead: lead.clone(),
                advanced,
            })
        })
    }
}
