use crate::commands::{print_json, Context};
use crate::util::now_utc;
use anyhow::Result;
use clap::Args;
use insureflow_core::domain::{Lead, LeadStatus, PolicyType};
use insureflow_store::repo::LeadNew;

/// Populate the store with a small demo pipeline
#[derive(Debug, Args)]
pub struct SeedArgs {}

pub fn seed(ctx: &Context<'_>, _args: SeedArgs) -> Result<()> {
    let now = now_utc();
    let demo: [(&str, &str, &str, LeadStatus, PolicyType, f64, &str); 4] = [
        (
            "Robert Martinez",
            "512-555-0123",
            "robert.m@example.com",
            LeadStatus::New,
            PolicyType::MortgageProtection,
            3500.0,
            "New homeowner, closed 2 weeks ago. 35yo male, non-smoker.",
        ),
        (
            "Sarah Jenkins",
            "512-555-0198",
            "s.jenkins@example.com",
            LeadStatus::Negotiation,
            PolicyType::WholeLife,
            12_000.0,
            "Interested in Infinite Banking concept for small business liquidity.",
        ),
        (
            "Michael Chang",
            "415-555-0876",
            "mchang@example.com",
            LeadStatus::Appointment,
            PolicyType::TermLife,
            1500.0,
            "Looking for basic coverage, cost sensitive.",
        ),
        (
            "Emma Wilson",
            "210-555-3421",
            "emma.w@example.com",
            LeadStatus::ClosedWon,
            PolicyType::MortgageProtection,
            4200.0,
            "Sold full return of premium rider.",
        ),
    ];

    let mut created: Vec<Lead> = Vec::with_capacity(demo.len());
    for (name, phone, email, status, policy, commission, notes) in demo {
        created.push(ctx.store.leads().create(
            now,
            LeadNew {
                name: name.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
                status,
                policy_interest: policy,
                estimated_commission: commission,
                notes: notes.to_string(),
                next_follow_up: None,
            },
        )?);
    }

    if ctx.json {
        print_json(&created)?;
    } else {
        for lead in &created {
            println!("created {} {}", lead.id, lead.name);
        }
        println!("seeded {} demo leads", created.len());
    }
    Ok(())
}
