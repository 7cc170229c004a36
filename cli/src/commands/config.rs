use mic_common::PluginConfig;
use std::io::Write;

pub fn handle_config_command(config: &PluginConfig) -> Result<(), Box<dyn std::error::Error>> {
    write_config(config, std::io::stdout())?;
    Ok(())
}

pub fn write_config<W: Write>(config: &PluginConfig, mut writer: W) -> std::io::Result<()> {
    let secret = if config.has_secret() {
        "<set>"
    } else {
        "<not set>"
    };
    writeln!(writer, "enabled: {}", config.enabled)?;
    writeln!(writer, "app_id: {}", config.app_id)?;
    writeln!(writer, "id_verification_secret: {}", secret)?;
    if !config.is_configured() {
        writeln!(writer, "# Intercom will not be embedded: enable it and set app_id")?;
    }
    Ok(())
}
