use crate::commands::generate::client;
use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{format_money, now_utc, parse_policy};
use anyhow::Result;
use clap::{ArgAction, Args};
use insureflow_ai::prompts::discovery_prompt;
use insureflow_ai::{LeadCandidate, ScriptService};
use insureflow_core::domain::{Lead, LeadStatus, PolicyType};
use insureflow_store::repo::LeadNew;
use tracing::warn;

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Target market, e.g. "Austin, TX"
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub policy: String,
    /// Add every discovered candidate to the pipeline as a new lead
    #[arg(long, action = ArgAction::SetTrue)]
    pub import: bool,
}

pub fn find(ctx: &Context<'_>, args: FindArgs) -> Result<()> {
    if args.city.trim().is_empty() {
        return Err(invalid_input("city cannot be empty"));
    }
    let policy = parse_policy(&args.policy)?;

    let service = client(ctx)?;
    let prompt = discovery_prompt(&args.city, policy);
    let candidates = match service.discover_leads(&prompt) {
        Ok(candidates) => candidates,
        Err(err) => {
            // degraded, not fatal: an empty result keeps the session usable
            warn!(error = %err, transient = err.is_transient(), "lead discovery failed");
            Vec::new()
        }
    };

    if candidates.is_empty() {
        if ctx.json {
            print_json(&candidates)?;
        } else {
            println!("no candidates found");
        }
        return Ok(());
    }

    if args.import {
        let now = now_utc();
        let mut imported: Vec<Lead> = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let lead = ctx
                .store
                .leads()
                .create(now, candidate_to_lead(candidate, policy, &args.city))?;
            imported.push(lead);
        }
        if ctx.json {
            print_json(&imported)?;
        } else {
            for lead in &imported {
                println!("added {} {}", lead.id, lead.name);
            }
        }
        return Ok(());
    }

    if ctx.json {
        print_json(&candidates)?;
        return Ok(());
    }
    for candidate in &candidates {
        println!(
            "{:<20} {:<14} {:<26} {:>8}  {}",
            candidate.name,
            candidate.phone,
            candidate.email,
            format_money(candidate.estimated_commission),
            candidate.notes
        );
    }
    Ok(())
}

/// Sanitizes a discovered candidate into an insertable lead: blank names
/// and broken commission values fall back rather than failing the import.
fn candidate_to_lead(candidate: &LeadCandidate, policy: PolicyType, city: &str) -> LeadNew {
    let name = if candidate.name.trim().is_empty() {
        "Unknown".to_string()
    } else {
        candidate.name.clone()
    };
    let commission = if candidate.estimated_commission.is_finite()
        && candidate.estimated_commission >= 0.0
    {
        candidate.estimated_commission
    } else {
        1000.0
    };
    LeadNew {
        name,
        phone: candidate.phone.clone(),
        email: candidate.email.clone(),
        status: LeadStatus::New,
        policy_interest: policy,
        estimated_commission: commission,
        notes: format!("Source: Auto-Finder ({}). {}", city, candidate.notes),
        next_follow_up: None,
    }
}

#[cfg(test)]
mod tests {
    use super::candidate_to_lead;
    use insureflow_ai::LeadCandidate;
    use insureflow_core::domain::{LeadStatus, PolicyType};

    #[test]
    fn candidate_sanitization_fills_gaps() {
        let candidate = LeadCandidate {
            name: "  ".to_string(),
            phone: "555-0142".to_string(),
            email: "x@example.com".to_string(),
            notes: "New homeowner".to_string(),
            estimated_commission: -10.0,
        };
        let lead = candidate_to_lead(&candidate, PolicyType::MortgageProtection, "Austin, TX");
        assert_eq!(lead.name, "Unknown");
        assert_eq!(lead.estimated_commission, 1000.0);
        assert_eq!(lead.status, LeadStatus::New);
        assert!(lead.notes.starts_with("Source: Auto-Finder (Austin, TX)."));
    }
}
