use anyhow::Result;
use insureflow_config::AppConfig;
use insureflow_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod dashboard;
pub mod finder;
pub mod generate;
pub mod interactions;
pub mod leads;
pub mod outreach;
pub mod seed;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
