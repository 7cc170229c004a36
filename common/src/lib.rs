pub mod config;
pub mod context;
pub mod error;
pub mod identity;
pub mod snippet;
pub mod text;

pub use config::PluginConfig;
pub use context::{CourseInfo, CourseRecord, HostContext, SiteInfo, UserInfo};
pub use error::BuildError;
pub use identity::{format_user_identifier, generate_identity_hash, user_identifier};
pub use snippet::{build_snippet, embed_host_context, embed_snippet, EmbedSnippetBuilder};

/// Username the host assigns to its guest account
pub const GUEST_USERNAME: &str = "guest";
pub const PLATFORM_NAME: &str = "Moodle";
pub const ROLE_SEPARATOR: &str = ", ";
pub const WIDGET_URL_BASE: &str = "https://widget.intercom.io/widget/";
