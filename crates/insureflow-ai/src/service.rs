use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A lead suggested by the discovery service, not yet in the pipeline.
/// Field casing matches the JSON schema the service is asked to fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCandidate {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    pub estimated_commission: f64,
}

/// Narrow seam to the text-generation collaborator. The engine and its
/// tests depend on this trait, never on a live network call.
pub trait ScriptService {
    /// Free-form generation; returns Markdown-formatted prose.
    fn generate_text(&self, prompt: &str) -> Result<String>;

    /// Structured generation; an empty or missing payload is an empty
    /// list, not an error.
    fn discover_leads(&self, prompt: &str) -> Result<Vec<LeadCandidate>>;
}
