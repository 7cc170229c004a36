mod config;
mod embed;
mod hash;

use crate::argparse::{Cli, Commands};
use crate::CliError;
pub use config::{handle_config_command, write_config};
pub use embed::{handle_embed_command, read_context, write_embed};
pub use hash::{handle_hash_command, identity_hash};
use mic_common::PluginConfig;
use std::error::Error;

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = PluginConfig::load(cli.config.as_deref()).map_err(CliError::ConfigLoad)?;
    log::debug!("Resolved plugin configuration: {:?}", config);

    match cli.command {
        Commands::Embed(args) => handle_embed_command(args, &config),
        Commands::Hash(args) => handle_hash_command(args, &config),
        Commands::Config => handle_config_command(&config),
    }
}
