mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{
    completions, dashboard, finder, generate, interactions, leads, outreach, seed, Context,
};
use crate::error::{exit_code_for, report_error};
use insureflow_config as config;
use insureflow_store::snapshot::Snapshot;
use insureflow_store::Store;

#[derive(Debug, Parser)]
#[command(name = "insureflow", version, about = "insureflow CLI")]
struct Cli {
    /// Snapshot file loaded before the command and written back after
    /// mutations; without it state lives for this invocation only
    #[arg(long, global = true)]
    state: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    #[command(name = "add-lead")]
    AddLead(leads::AddLeadArgs),
    #[command(name = "edit-lead")]
    EditLead(leads::EditLeadArgs),
    Show(leads::ShowArgs),
    List(leads::ListArgs),
    #[command(name = "log-call")]
    LogCall(interactions::LogCallArgs),
    Send(outreach::SendArgs),
    Templates(outreach::TemplatesArgs),
    Outcomes(outreach::OutcomesArgs),
    Dashboard(dashboard::DashboardArgs),
    Script(generate::ScriptArgs),
    Sop(generate::SopArgs),
    Find(finder::FindArgs),
    Seed(seed::SeedArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        state,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let store = open_store(state.as_deref())?;
            let ctx = Context {
                store: &store,
                json,
                config: &app_config,
            };
            let mutating = command_mutates(&command);

            match command {
                Command::AddLead(args) => leads::add_lead(&ctx, args),
                Command::EditLead(args) => leads::edit_lead(&ctx, args),
                Command::Show(args) => leads::show_lead(&ctx, args),
                Command::List(args) => leads::list_leads(&ctx, args),
                Command::LogCall(args) => interactions::log_call(&ctx, args),
                Command::Send(args) => outreach::send(&ctx, args),
                Command::Templates(args) => outreach::list_templates(&ctx, args),
                Command::Outcomes(args) => outreach::list_outcomes(&ctx, args),
                Command::Dashboard(args) => dashboard::dashboard(&ctx, args),
                Command::Script(args) => generate::script(&ctx, args),
                Command::Sop(args) => generate::sop(&ctx, args),
                Command::Find(args) => finder::find(&ctx, args),
                Command::Seed(args) => seed::seed(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before store initialization")
                }
            }?;

            if mutating {
                if let Some(path) = &state {
                    Snapshot::from_store(&store)
                        .save_path(path)
                        .with_context(|| format!("write state file {}", path.display()))?;
                }
            }
            Ok(())
        }
    }
}

fn open_store(state: Option<&Path>) -> Result<Store> {
    match state {
        Some(path) if path.exists() => {
            let snapshot = Snapshot::load_path(path)
                .with_context(|| format!("read state file {}", path.display()))?;
            snapshot
                .restore()
                .with_context(|| format!("restore state file {}", path.display()))
        }
        _ => Ok(Store::new()),
    }
}

fn command_mutates(command: &Command) -> bool {
    match command {
        Command::AddLead(_)
        | Command::EditLead(_)
        | Command::LogCall(_)
        | Command::Send(_)
        | Command::Seed(_) => true,
        Command::Find(args) => args.import,
        _ => false,
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
