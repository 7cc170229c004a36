use crate::{BuildError, SiteInfo, UserInfo};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Identifier Intercom knows the user by: `<site shortname>-<user id>`.
pub fn format_user_identifier(site_short_name: &str, user_id: i64) -> String {
    format!("{}-{}", site_short_name, user_id)
}

pub fn user_identifier(site: &SiteInfo, user: &UserInfo) -> String {
    format_user_identifier(&site.short_name, user.id)
}

/// Generate HMAC-SHA256 hash for Intercom identity verification.
/// The secret is the HMAC key, the identifier is the message.
pub fn generate_identity_hash(identifier: &str, secret: &str) -> Result<String, BuildError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| BuildError::Hash(e.to_string()))?;
    mac.update(identifier.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
