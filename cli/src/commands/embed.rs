use crate::argparse::EmbedArgs;
use crate::CliError;
use anyhow::Context;
use log::{debug, info};
use mic_common::{embed_host_context, PluginConfig};
use std::io::{Read, Write};

pub fn handle_embed_command(
    args: EmbedArgs,
    config: &PluginConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !config.enabled {
        info!("Intercom integration is disabled, nothing to embed");
        return Ok(());
    }
    let json = read_context(&args.context, std::io::stdin()).map_err(CliError::ContextRead)?;
    write_embed(config, &json, std::io::stdout())?;
    Ok(())
}

/// Reads the host context from a file, or from `stdin` when the source is "-".
pub fn read_context<R: Read>(source: &str, mut stdin: R) -> anyhow::Result<String> {
    if source == "-" {
        let mut json = String::new();
        stdin
            .read_to_string(&mut json)
            .context("Failed to read host context from stdin")?;
        Ok(json)
    } else {
        Ok(fs_err::read_to_string(source)?)
    }
}

/// Writes the snippet, if one could be built. Returns whether anything was written.
pub fn write_embed<W: Write>(
    config: &PluginConfig,
    json: &str,
    mut writer: W,
) -> std::io::Result<bool> {
    match embed_host_context(config, json) {
        Some(snippet) => {
            debug!("Embed snippet is {} bytes", snippet.len());
            writeln!(writer, "{}", snippet)?;
            Ok(true)
        }
        None => {
            debug!("No Intercom snippet produced for this context");
            Ok(false)
        }
    }
}
