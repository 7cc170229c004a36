use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mic",
    about = "Intercom embed snippets for Moodle pages",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// YAML plugin configuration (app_id, id_verification_secret, enabled)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the embed snippet for a host context
    Embed(EmbedArgs),
    /// Print the identity verification hash for a user
    Hash(HashArgs),
    /// Show the resolved plugin configuration
    Config,
}

#[derive(Args)]
pub struct EmbedArgs {
    /// Host context JSON file, or "-" for stdin
    #[arg(long, default_value = "-")]
    pub context: String,
}

#[derive(Args)]
pub struct HashArgs {
    /// Site shortname
    #[arg(long)]
    pub site: String,

    /// Numeric user id
    #[arg(long)]
    pub user_id: i64,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
