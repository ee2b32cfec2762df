use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{parse_lead_id, parse_policy};
use anyhow::Result;
use clap::{ArgAction, Args};
use insureflow_ai::prompts::{
    sales_script_prompt, sop_prompt, ScriptPrompt, DEFAULT_SCRIPT_CONTEXT, PERSONA_OPTIONS,
    SOP_PRESETS, TONE_OPTIONS,
};
use insureflow_ai::{GeminiClient, ScriptService};
use insureflow_core::domain::PolicyType;
use serde_json::json;
use tracing::warn;

const SCRIPT_FALLBACK: &str =
    "## Error\nUnable to generate script at this time. Please check your API configuration.";
const SOP_FALLBACK: &str = "## Error\nUnable to generate this SOP at this time.";

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Lead to tailor the script to; generic training script when omitted
    pub id: Option<String>,
    /// Policy type for a generic script (ignored when a lead is given)
    #[arg(long)]
    pub policy: Option<String>,
    #[arg(long)]
    pub context: Option<String>,
    #[arg(long)]
    pub tone: Option<String>,
    #[arg(long)]
    pub persona: Option<String>,
    /// Objection to rebut instead of a full call script
    #[arg(long)]
    pub objection: Option<String>,
    /// List tone and persona presets and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub list_options: bool,
}

#[derive(Debug, Args)]
pub struct SopArgs {
    /// Free-form SOP topic
    pub topic: Option<String>,
    /// Preset number, see --list
    #[arg(long, conflicts_with = "topic")]
    pub preset: Option<usize>,
    /// List preset procedures and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub list: bool,
}

pub fn script(ctx: &Context<'_>, args: ScriptArgs) -> Result<()> {
    if args.list_options {
        println!("tones:");
        for tone in TONE_OPTIONS {
            println!("  {tone}");
        }
        println!("personas:");
        for persona in PERSONA_OPTIONS {
            println!("  {persona}");
        }
        return Ok(());
    }

    let (lead_name, policy) = match &args.id {
        Some(raw) => {
            let id = parse_lead_id(raw)?;
            let lead = ctx
                .store
                .leads()
                .get(id)?
                .ok_or_else(|| not_found("lead not found"))?;
            (lead.name, lead.policy_interest)
        }
        None => {
            let policy = match &args.policy {
                Some(raw) => parse_policy(raw)?,
                None => PolicyType::WholeLife,
            };
            ("Prospect".to_string(), policy)
        }
    };

    let prompt = sales_script_prompt(&ScriptPrompt {
        lead_name: &lead_name,
        policy,
        context: args.context.as_deref().unwrap_or(DEFAULT_SCRIPT_CONTEXT),
        tone: args.tone.as_deref(),
        persona: args.persona.as_deref(),
        objection: args.objection.as_deref(),
    });

    let content = generate_or_fallback(ctx, &prompt, SCRIPT_FALLBACK)?;
    emit(ctx, &content)
}

pub fn sop(ctx: &Context<'_>, args: SopArgs) -> Result<()> {
    if args.list {
        for (index, preset) in SOP_PRESETS.iter().enumerate() {
            println!("{}. {}", index + 1, preset.title);
        }
        return Ok(());
    }

    let topic = match (args.topic, args.preset) {
        (Some(topic), None) => topic,
        (None, Some(number)) => {
            let preset = number
                .checked_sub(1)
                .and_then(|index| SOP_PRESETS.get(index))
                .ok_or_else(|| {
                    invalid_input(format!(
                        "unknown preset {number} (expected 1..={})",
                        SOP_PRESETS.len()
                    ))
                })?;
            preset.topic.to_string()
        }
        _ => return Err(invalid_input("provide a topic or --preset")),
    };

    let content = generate_or_fallback(ctx, &sop_prompt(&topic), SOP_FALLBACK)?;
    emit(ctx, &content)
}

/// Builds the configured client. Missing or unusable credentials are a user
/// problem and propagate; service failures after that degrade.
pub(crate) fn client(ctx: &Context<'_>) -> Result<GeminiClient> {
    let api_key = ctx.config.resolve_api_key().ok_or_else(|| {
        invalid_input("missing api credential: set GEMINI_API_KEY or [ai].api_key")
    })?;
    GeminiClient::new(api_key, ctx.config.ai.model.clone())
        .map_err(|err| invalid_input(err.to_string()))
}

fn generate_or_fallback(ctx: &Context<'_>, prompt: &str, fallback: &str) -> Result<String> {
    let service = client(ctx)?;
    Ok(match service.generate_text(prompt) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, transient = err.is_transient(), "generation failed");
            fallback.to_string()
        }
    })
}

fn emit(ctx: &Context<'_>, content: &str) -> Result<()> {
    if ctx.json {
        print_json(&json!({ "content": content }))?;
    } else {
        println!("{content}");
    }
    Ok(())
}
