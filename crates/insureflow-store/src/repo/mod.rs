pub mod analytics;
pub mod interactions;
pub mod leads;

pub use analytics::AnalyticsView;
pub use interactions::{InteractionsRepo, LogEntry, LogOutcome, OutreachRecord};
pub use leads::{LeadNew, LeadUpdate, LeadsRepo};
