use crate::commands::{print_json, Context};
use crate::util::{
    now_utc, parse_duration_secs, parse_lead_id, parse_local_timestamp, parse_status,
};
use anyhow::Result;
use clap::Args;
use insureflow_core::domain::{InteractionKind, LeadStatus};
use insureflow_core::dto::InteractionDto;
use insureflow_store::repo::LogEntry;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct LogCallArgs {
    pub id: String,
    #[arg(long)]
    pub outcome: String,
    /// Call length as mm:ss or seconds
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub when: Option<String>,
    /// Explicit status; wins over the outcome suggestion
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub follow_up: Option<String>,
}

#[derive(Debug, Serialize)]
struct LogCallDto {
    interaction: InteractionDto,
    status: LeadStatus,
    suggested_status: Option<LeadStatus>,
}

pub fn log_call(ctx: &Context<'_>, args: LogCallArgs) -> Result<()> {
    let now = now_utc();
    let lead_id = parse_lead_id(&args.id)?;
    let occurred_at = match args.when {
        Some(value) => parse_local_timestamp(&value)?,
        None => now,
    };
    let explicit_status = match args.status {
        Some(raw) => Some(parse_status(&raw)?),
        None => None,
    };
    let next_follow_up = match args.follow_up {
        Some(value) => Some(parse_local_timestamp(&value)?),
        None => None,
    };
    let duration_secs = match args.duration {
        Some(raw) => Some(parse_duration_secs(&raw)?),
        None => None,
    };

    let had_override = explicit_status.is_some();
    let outcome = ctx.store.interactions().log(
        now,
        LogEntry {
            lead_id,
            kind: InteractionKind::Call,
            occurred_at,
            outcome: args.outcome,
            note: args.notes.unwrap_or_default(),
            duration_secs,
        },
        explicit_status,
        next_follow_up,
    )?;

    if ctx.json {
        print_json(&LogCallDto {
            interaction: InteractionDto {
                id: outcome.interaction.id,
                occurred_at: outcome.interaction.occurred_at,
                kind: outcome.interaction.kind.to_string(),
                outcome: outcome.interaction.outcome.clone(),
                note: outcome.interaction.note.clone(),
                duration_secs: outcome.interaction.duration_secs,
            },
            status: outcome.lead.status,
            suggested_status: outcome.suggested,
        })?;
        return Ok(());
    }

    println!("logged call {} for {}", outcome.interaction.id, outcome.lead.name);
    if had_override {
        println!("status: {}", outcome.lead.status);
    } else if outcome.suggested.is_some() {
        println!("status: {} (suggested by outcome)", outcome.lead.status);
    } else {
        println!("status: {} (unchanged)", outcome.lead.status);
    }
    Ok(())
}
