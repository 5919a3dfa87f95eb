use crate::config::{LookupSettings, TomlConfig};
use crate::domain::ports::LookupSource;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bamoe-poc")]
#[command(about = "Look up customers and inspect orders")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub source: Option<LookupSource>,

    #[arg(long, global = true, help = "Customer API base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up one or more customers by id
    Customer {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Build a pending order and resolve its customer
    Order {
        #[arg(long)]
        id: String,
        #[arg(long)]
        customer_id: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
}

impl CliConfig {
    /// Reads `--config` when given, then applies the command-line overrides.
    pub fn settings(&self) -> Result<LookupSettings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        Ok(LookupSettings::from_toml(&file).with_overrides(
            self.base_url.clone(),
            self.timeout_seconds,
            self.source,
        ))
    }
}
