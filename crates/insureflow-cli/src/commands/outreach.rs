use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{now_utc, parse_channel, parse_lead_id};
use anyhow::Result;
use clap::Args;
use insureflow_ai::{DeliveryChannel, OutboundChannel, SimulatedChannel};
use insureflow_core::domain::{InteractionKind, LeadId};
use insureflow_core::rules::{personalize, templates_for, MessageTemplate, CALL_OUTCOMES};
use insureflow_store::Store;

#[derive(Debug, Args)]
pub struct SendArgs {
    pub id: String,
    #[arg(long)]
    pub channel: String,
    /// Template id, see `templates`
    #[arg(long, conflicts_with = "message")]
    pub template: Option<String>,
    #[arg(long)]
    pub message: Option<String>,
    /// Email subject; overrides the template subject
    #[arg(long)]
    pub subject: Option<String>,
}

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[arg(long)]
    pub channel: Option<String>,
}

#[derive(Debug, Args)]
pub struct OutcomesArgs {}

pub fn send(ctx: &Context<'_>, args: SendArgs) -> Result<()> {
    let lead_id = parse_lead_id(&args.id)?;
    let channel = parse_channel(&args.channel)?;
    let lead = ctx
        .store
        .leads()
        .get(lead_id)?
        .ok_or_else(|| not_found("lead not found"))?;

    let (subject, body) = match (&args.template, &args.message) {
        (Some(template_id), _) => {
            let template = templates_for(kind_for(channel))
                .iter()
                .find(|template| template.id == template_id.as_str())
                .ok_or_else(|| {
                    invalid_input(format!("unknown {} template: {}", channel, template_id))
                })?;
            let subject = args
                .subject
                .clone()
                .or_else(|| template.subject.map(|raw| personalize(raw, &lead)));
            (subject, personalize(template.body, &lead))
        }
        (None, Some(message)) => (args.subject.clone(), personalize(message, &lead)),
        (None, None) => return Err(invalid_input("provide --template or --message")),
    };

    let content = match (channel, &subject) {
        (DeliveryChannel::Email, Some(subject)) => format!("Subject: {subject}\n\n{body}"),
        _ => body,
    };
    let address = match channel {
        DeliveryChannel::Sms => lead.phone.clone(),
        DeliveryChannel::Email => lead.email.clone(),
    };

    let record = deliver_and_record(
        ctx.store,
        &SimulatedChannel,
        now_utc(),
        lead_id,
        channel,
        &address,
        content,
    )?;

    if ctx.json {
        print_json(&crate::commands::leads::detail_dto(&record.lead))?;
        return Ok(());
    }
    println!("{} sent to {} ({})", channel, record.lead.name, address);
    if record.advanced {
        println!("status advanced to {}", record.lead.status);
    }
    Ok(())
}

/// Delivery first, commit second: the lead record only changes once the
/// transport has accepted the message.
pub(crate) fn deliver_and_record(
    store: &Store,
    transport: &dyn OutboundChannel,
    now_utc: i64,
    lead_id: LeadId,
    channel: DeliveryChannel,
    address: &str,
    content: String,
) -> Result<insureflow_store::repo::OutreachRecord> {
    transport.deliver(channel, address, &content)?;
    Ok(store
        .interactions()
        .record_outreach(now_utc, lead_id, kind_for(channel), content)?)
}

fn kind_for(channel: DeliveryChannel) -> InteractionKind {
    match channel {
        DeliveryChannel::Sms => InteractionKind::Sms,
        DeliveryChannel::Email => InteractionKind::Email,
    }
}

pub fn list_templates(ctx: &Context<'_>, args: TemplatesArgs) -> Result<()> {
    let kinds: Vec<InteractionKind> = match args.channel {
        Some(raw) => vec![kind_for(parse_channel(&raw)?)],
        None => vec![InteractionKind::Sms, InteractionKind::Email],
    };

    if ctx.json {
        let all: Vec<&MessageTemplate> = kinds
            .iter()
            .flat_map(|&kind| templates_for(kind).iter())
            .collect();
        print_json(&all)?;
        return Ok(());
    }

    for kind in kinds {
        println!("{} templates:", kind);
        for template in templates_for(kind) {
            println!("  {:<14} {}", template.id, template.label);
        }
    }
    Ok(())
}

pub fn list_outcomes(ctx: &Context<'_>, _args: OutcomesArgs) -> Result<()> {
    if ctx.json {
        print_json(&CALL_OUTCOMES)?;
        return Ok(());
    }
    for outcome in CALL_OUTCOMES {
        println!("{outcome}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::deliver_and_record;
    use insureflow_ai::error::OutboundError;
    use insureflow_ai::{DeliveryChannel, OutboundChannel};
    use insureflow_core::domain::{Lead, LeadStatus, PolicyType};
    use insureflow_store::repo::LeadNew;
    use insureflow_store::Store;

    struct RejectingChannel;

    impl OutboundChannel for RejectingChannel {
        fn channel_name(&self) -> &'static str {
            "rejecting"
        }

        fn deliver(
            &self,
            _channel: DeliveryChannel,
            _address: &str,
            _content: &str,
        ) -> Result<(), OutboundError> {
            Err(OutboundError::Rejected("carrier unavailable".to_string()))
        }
    }

    fn seeded_store() -> (Store, Lead) {
        let store = Store::new();
        let lead = store
            .leads()
            .create(
                1_700_000_000,
                LeadNew {
                    name: "Robert Martinez".to_string(),
                    phone: "512-555-0123".to_string(),
                    email: "robert.m@example.com".to_string(),
                    status: LeadStatus::New,
                    policy_interest: PolicyType::MortgageProtection,
                    estimated_commission: 3500.0,
                    notes: String::new(),
                    next_follow_up: None,
                },
            )
            .expect("create lead");
        (store, lead)
    }

    #[test]
    fn failed_delivery_commits_nothing() {
        let (store, lead) = seeded_store();
        let result = deliver_and_record(
            &store,
            &RejectingChannel,
            1_700_000_100,
            lead.id,
            DeliveryChannel::Sms,
            &lead.phone,
            "Hi Robert".to_string(),
        );
        assert!(result.is_err());

        let kept = store.leads().get(lead.id).expect("get").expect("exists");
        assert_eq!(kept.status, LeadStatus::New);
        assert!(kept.history.is_empty());
        assert!(kept.last_contacted.is_none());
    }

    #[test]
    fn successful_delivery_advances_and_logs() {
        let (store, lead) = seeded_store();
        let record = deliver_and_record(
            &store,
            &insureflow_ai::SimulatedChannel,
            1_700_000_100,
            lead.id,
            DeliveryChannel::Sms,
            &lead.phone,
            "Hi Robert".to_string(),
        )
        .expect("deliver");
        assert!(record.advanced);
        assert_eq!(record.lead.status, LeadStatus::Contacted);
        assert_eq!(record.lead.history.len(), 1);
    }
}
