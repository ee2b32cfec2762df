use crate::domain::LeadStatus;

pub const OUTCOME_APPOINTMENT_SET: &str = "Appointment Set";
pub const OUTCOME_NOT_INTERESTED: &str = "Not Interested";
pub const OUTCOME_SPOKE_WITH_LEAD: &str = "Spoke with Lead";

/// Outcome recorded for a delivered SMS/email.
pub const OUTCOME_SENT: &str = "Sent";

/// Call outcomes offered by the interactive surfaces. Outcomes stay free
/// text in the engine; this list is advisory.
pub const CALL_OUTCOMES: [&str; 8] = [
    "No Answer",
    "Left Voicemail",
    "Gatekeeper",
    OUTCOME_SPOKE_WITH_LEAD,
    OUTCOME_APPOINTMENT_SET,
    "Objection: Price",
    "Objection: Timing",
    OUTCOME_NOT_INTERESTED,
];

/// Maps a call outcome to the status it implies, if any. Advisory: the
/// caller decides whether to commit the suggestion or override it.
pub fn suggest_status(outcome: &str, current: LeadStatus) -> Option<LeadStatus> {
    match outcome.trim() {
        OUTCOME_APPOINTMENT_SET => Some(LeadStatus::Appointment),
        OUTCOME_NOT_INTERESTED => Some(LeadStatus::ClosedLost),
        OUTCOME_SPOKE_WITH_LEAD if current == LeadStatus::New => Some(LeadStatus::Contacted),
        _ => None,
    }
}
