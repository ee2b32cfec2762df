use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{
    format_money, format_timestamp_date, format_timestamp_datetime, now_utc, parse_lead_id,
    parse_local_timestamp, parse_policy, parse_status,
};
use anyhow::Result;
use clap::{ArgAction, Args};
use insureflow_core::domain::{Lead, LeadStatus};
use insureflow_core::dto::{InteractionDto, LeadDetailDto, LeadListItemDto};
use insureflow_store::query::LeadQuery;
use insureflow_store::repo::{LeadNew, LeadUpdate};

#[derive(Debug, Args)]
pub struct AddLeadArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long)]
    pub policy: String,
    #[arg(long)]
    pub commission: f64,
    #[arg(long, default_value = "")]
    pub notes: String,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub follow_up: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditLeadArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub policy: Option<String>,
    #[arg(long)]
    pub commission: Option<f64>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub follow_up: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "follow_up")]
    pub clear_follow_up: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub policy: Option<String>,
}

pub fn add_lead(ctx: &Context<'_>, args: AddLeadArgs) -> Result<()> {
    let now = now_utc();
    let policy = parse_policy(&args.policy)?;
    let status = match args.status {
        Some(raw) => parse_status(&raw)?,
        None => LeadStatus::New,
    };
    let next_follow_up = match args.follow_up {
        Some(value) => Some(parse_local_timestamp(&value)?),
        None => None,
    };

    let lead = ctx.store.leads().create(
        now,
        LeadNew {
            name: args.name,
            phone: args.phone,
            email: args.email,
            status,
            policy_interest: policy,
            estimated_commission: args.commission,
            notes: args.notes,
            next_follow_up,
        },
    )?;

    if ctx.json {
        print_json(&lead)?;
    } else {
        println!("created {} {}", lead.id, lead.name);
    }
    Ok(())
}

pub fn edit_lead(ctx: &Context<'_>, args: EditLeadArgs) -> Result<()> {
    let now = now_utc();
    let id = parse_lead_id(&args.id)?;

    let mut update = LeadUpdate {
        name: args.name,
        phone: args.phone,
        email: args.email,
        notes: args.notes,
        estimated_commission: args.commission,
        ..Default::default()
    };
    if let Some(raw) = args.policy {
        update.policy_interest = Some(parse_policy(&raw)?);
    }
    if let Some(raw) = args.status {
        update.status = Some(parse_status(&raw)?);
    }
    if let Some(raw) = args.follow_up {
        update.next_follow_up = Some(Some(parse_local_timestamp(&raw)?));
    } else if args.clear_follow_up {
        update.next_follow_up = Some(None);
    }

    if update.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let lead = ctx.store.leads().update(now, id, update)?;
    if ctx.json {
        print_json(&lead)?;
    } else {
        println!("updated {} {}", lead.id, lead.name);
    }
    Ok(())
}

pub fn show_lead(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let lead = ctx
        .store
        .leads()
        .get(id)?
        .ok_or_else(|| not_found("lead not found"))?;

    if ctx.json {
        print_json(&detail_dto(&lead))?;
        return Ok(());
    }

    println!("{} {}", lead.id, lead.name);
    println!("status:     {}", lead.status);
    println!("policy:     {}", lead.policy_interest);
    println!("commission: {}", format_money(lead.estimated_commission));
    if !lead.phone.is_empty() {
        println!("phone:      {}", lead.phone);
    }
    if !lead.email.is_empty() {
        println!("email:      {}", lead.email);
    }
    match lead.last_contacted {
        Some(ts) => println!("last contacted: {}", format_timestamp_datetime(ts)),
        None => println!("last contacted: never"),
    }
    if let Some(ts) = lead.next_follow_up {
        println!("next follow-up: {}", format_timestamp_datetime(ts));
    }
    if let Some(ts) = lead.closed_at {
        println!("closed: {}", format_timestamp_date(ts));
    }
    if !lead.notes.is_empty() {
        println!("notes: {}", lead.notes);
    }
    if !lead.history.is_empty() {
        println!("history:");
        for interaction in &lead.history {
            println!(
                "  {}  {:<5} {}{}",
                format_timestamp_datetime(interaction.occurred_at),
                interaction.kind,
                interaction.outcome,
                if interaction.note.is_empty() {
                    String::new()
                } else {
                    format!(" - {}", interaction.note)
                }
            );
        }
    }
    Ok(())
}

pub fn list_leads(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let mut query = LeadQuery::default();
    if let Some(raw) = args.status {
        query.status = Some(parse_status(&raw)?);
    }
    if let Some(raw) = args.policy {
        query.policy = Some(parse_policy(&raw)?);
    }

    let leads = ctx.store.leads().list(&query);

    if ctx.json {
        let items: Vec<LeadListItemDto> = leads.iter().map(list_item_dto).collect();
        print_json(&items)?;
        return Ok(());
    }

    if leads.is_empty() {
        println!("no leads");
        return Ok(());
    }
    for lead in &leads {
        let last = lead
            .last_contacted
            .map(format_timestamp_date)
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{}  {:<20} {:<15} {:<30} {:>10}  last: {}",
            lead.id,
            lead.name,
            lead.status.label(),
            lead.policy_interest.label(),
            format_money(lead.estimated_commission),
            last
        );
    }
    Ok(())
}

pub(crate) fn list_item_dto(lead: &Lead) -> LeadListItemDto {
    LeadListItemDto {
        id: lead.id,
        name: lead.name.clone(),
        phone: lead.phone.clone(),
        status: lead.status,
        policy_interest: lead.policy_interest,
        estimated_commission: lead.estimated_commission,
        last_contacted: lead.last_contacted,
    }
}

pub(crate) fn detail_dto(lead: &Lead) -> LeadDetailDto {
    LeadDetailDto {
        id: lead.id,
        name: lead.name.clone(),
        phone: lead.phone.clone(),
        email: lead.email.clone(),
        status: lead.status,
        policy_interest: lead.policy_interest,
        estimated_commission: lead.estimated_commission,
        notes: lead.notes.clone(),
        last_contacted: lead.last_contacted,
        next_follow_up: lead.next_follow_up,
        closed_at: lead.closed_at,
        created_at: lead.created_at,
        updated_at: lead.updated_at,
        history: lead
            .history
            .iter()
            .map(|interaction| InteractionDto {
                id: interaction.id,
                occurred_at: interaction.occurred_at,
                kind: interaction.kind.to_string(),
                outcome: interaction.outcome.clone(),
                note: interaction.note.clone(),
                duration_secs: interaction.duration_secs,
            })
            .collect(),
    }
}
