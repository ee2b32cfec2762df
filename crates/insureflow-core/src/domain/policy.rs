use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product line a lead is shopping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    MortgageProtection,
    WholeLife,
    FinalExpense,
    TermLife,
}

impl PolicyType {
    pub const ALL: [PolicyType; 4] = [
        PolicyType::MortgageProtection,
        PolicyType::WholeLife,
        PolicyType::FinalExpense,
        PolicyType::TermLife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PolicyType::MortgageProtection => "Mortgage Protection",
            PolicyType::WholeLife => "Whole Life (Infinite Banking)",
            PolicyType::FinalExpense => "Final Expense",
            PolicyType::TermLife => "Term Life",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            PolicyType::MortgageProtection => "mortgage_protection",
            PolicyType::WholeLife => "whole_life",
            PolicyType::FinalExpense => "final_expense",
            PolicyType::TermLife => "term_life",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PolicyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        for policy in Self::ALL {
            if normalized == policy.token() || trimmed.eq_ignore_ascii_case(policy.label()) {
                return Ok(policy);
            }
        }
        Err(CoreError::InvalidPolicy(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::PolicyType;

    #[test]
    fn parses_tokens_and_labels() {
        assert_eq!(
            "whole_life".parse::<PolicyType>().unwrap(),
            PolicyType::WholeLife
        );
        assert_eq!(
            "Whole Life (Infinite Banking)".parse::<PolicyType>().unwrap(),
            PolicyType::WholeLife
        );
        assert_eq!(
            "term-life".parse::<PolicyType>().unwrap(),
            PolicyType::TermLife
        );
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!("annuity".parse::<PolicyType>().is_err());
    }
}
