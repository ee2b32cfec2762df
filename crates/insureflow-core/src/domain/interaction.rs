use crate::domain::ids::InteractionId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Call,
    Sms,
    Email,
}

impl InteractionKind {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionKind::Call => "call",
            InteractionKind::Sms => "sms",
            InteractionKind::Email => "email",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InteractionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(InteractionKind::Call),
            "sms" | "text" => Ok(InteractionKind::Sms),
            "email" => Ok(InteractionKind::Email),
            other => Err(CoreError::InvalidInteractionKind(other.to_string())),
        }
    }
}

/// One logged contact attempt. Immutable once appended to a lead's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    pub occurred_at: i64,
    pub created_at: i64,
    pub kind: InteractionKind,
    pub outcome: String,
    pub note: String,
    pub duration_secs: Option<i64>,
}
