pub mod argparse;
pub mod commands;
pub mod utils;

/// Error type for CLI failures
#[derive(Debug)]
pub enum CliError {
    ConfigLoad(anyhow::Error),
    ContextRead(anyhow::Error),
    MissingSecret,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ConfigLoad(e) => {
                write!(
                    f,
                    "Failed to load plugin configuration: {e}\n\nPossible fixes:\n  - Check that the file given with --config exists and is valid YAML\n  - Check INTERCOM_ENABLED is one of 1, 0, true, false\n  - Remove --config to use environment variables only"
                )
            }
            CliError::ContextRead(e) => {
                write!(
                    f,
                    "Failed to read host context: {e}\n\nUse --context <file> to point at a JSON document, or pipe it on stdin with --context -"
                )
            }
            CliError::MissingSecret => {
                write!(
                    f,
                    "No identity verification secret configured. Please set INTERCOM_ID_VERIFICATION_SECRET or add id_verification_secret to the --config file."
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigLoad(e) => Some(e.as_ref()),
            CliError::ContextRead(e) => Some(e.as_ref()),
            CliError::MissingSecret => None,
        }
    }
}
