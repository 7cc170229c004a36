use crate::argparse::HashArgs;
use crate::CliError;
use mic_common::{format_user_identifier, generate_identity_hash, PluginConfig};
use std::io::Write;

pub fn handle_hash_command(
    args: HashArgs,
    config: &PluginConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let hash = identity_hash(&args, config)?;
    writeln!(std::io::stdout(), "{}", hash)?;
    Ok(())
}

/// Same identifier and key the embed snippet uses for `user_hash`.
pub fn identity_hash(
    args: &HashArgs,
    config: &PluginConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    if !config.has_secret() {
        return Err(CliError::MissingSecret.into());
    }
    let identifier = format_user_identifier(&args.site, args.user_id);
    Ok(generate_identity_hash(
        &identifier,
        &config.id_verification_secret,
    )?)
}
