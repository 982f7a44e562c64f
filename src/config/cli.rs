use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line surface of the `dhex` binary.
///
/// Arguments backing the service's mandatory fields stay `Option` here so
/// that the service's own validation is what rejects incomplete input, with
/// the field named in the message.
#[derive(Debug, Parser)]
#[command(name = "dhex")]
#[command(about = "Register shipping requests and record status events")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Branch profile TOML supplying argument defaults")]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new shipping request
    Register {
        #[arg(long)]
        receiver: Option<String>,

        #[arg(long)]
        sender: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long, default_value = "0")]
        cost: i64,

        #[arg(long)]
        observation: Option<String>,
    },

    /// Record a status event for a registered request
    Status {
        #[arg(long)]
        request_id: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long, help = "One of: in transit, on hold, delivered, returned")]
        label: Option<String>,

        #[arg(long)]
        observation: Option<String>,
    },
}
