/// Reasons a snippet could not be built.
///
/// Hosts normally never see this: [`crate::embed_snippet`] logs it and returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    MissingField(&'static str),
    MissingSecret,
    InvalidInput(String),
    Hash(String),
    Serialize(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingField(field) => {
                write!(f, "Required field '{}' is missing or empty", field)
            }
            BuildError::MissingSecret => {
                write!(
                    f,
                    "Identity verification secret is not configured; identified users cannot be embedded without it"
                )
            }
            BuildError::InvalidInput(e) => write!(f, "Invalid host context: {e}"),
            BuildError::Hash(e) => write!(f, "Failed to compute identity hash: {e}"),
            BuildError::Serialize(e) => write!(f, "Failed to serialize widget settings: {e}"),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<serde_json::Error> for BuildError {
    fn from(e: serde_json::Error) -> Self {
        BuildError::InvalidInput(e.to_string())
    }
}
