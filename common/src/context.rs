//! Per-request records supplied by the host platform.

use crate::{BuildError, GUEST_USERNAME};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub short_name: String,
    pub full_name: String,
    pub base_url: String,
    /// Host release string, e.g. "3.9.2+ (Build: 20201016)"
    pub release: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Unix timestamp of the user's first access, if the host has one
    #[serde(default)]
    pub first_access: Option<i64>,
}

impl UserInfo {
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(GUEST_USERNAME)
    }

    /// Exact, case-sensitive match on the username. An absent username is a guest.
    pub fn is_guest(&self) -> bool {
        self.username() == GUEST_USERNAME
    }

    /// First and last name joined by one space, even when either half is empty.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    pub id: i64,
    pub short_name: String,
    /// Already formatted by the host
    pub display_title: String,
    #[serde(default)]
    pub summary_html: Option<String>,
    #[serde(default)]
    pub role_names: Vec<String>,
}

/// Course as the host stores it, before the display title is derived.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    pub id: i64,
    pub short_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Role shortnames the current user holds in this course
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<CourseRecord> for CourseInfo {
    fn from(record: CourseRecord) -> Self {
        let display_title = match record.full_name {
            Some(full_name) if !full_name.is_empty() => full_name,
            _ => record.short_name.clone(),
        };
        CourseInfo {
            id: record.id,
            short_name: record.short_name,
            display_title,
            summary_html: record.summary.filter(|s| !s.is_empty()),
            role_names: record.roles,
        }
    }
}

/// Everything a host hands over for one page render.
#[derive(Debug, Clone, Deserialize)]
pub struct HostContext {
    pub site: SiteInfo,
    pub user: UserInfo,
    #[serde(default)]
    pub course: Option<CourseRecord>,
}

impl HostContext {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_parts(self) -> (SiteInfo, UserInfo, Option<CourseInfo>) {
        (self.site, self.user, self.course.map(CourseInfo::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_username_is_guest() {
        let user = UserInfo {
            id: 1,
            ..UserInfo::default()
        };
        assert_eq!(user.username(), "guest");
        assert!(user.is_guest());
    }

    #[test]
    fn test_guest_check_is_case_sensitive() {
        let user = UserInfo {
            id: 1,
            username: Some("Guest".to_string()),
            ..UserInfo::default()
        };
        assert!(!user.is_guest());
    }

    #[test]
    fn test_display_name_keeps_single_space() {
        let mut user = UserInfo {
            id: 1,
            first_name: Some("Ada".to_string()),
            ..UserInfo::default()
        };
        assert_eq!(user.display_name(), "Ada ");

        user.last_name = Some("Lovelace".to_string());
        assert_eq!(user.display_name(), "Ada Lovelace");

        user.first_name = None;
        assert_eq!(user.display_name(), " Lovelace");
    }

    #[test]
    fn test_course_title_falls_back_to_short_name() {
        let record = CourseRecord {
            id: 7,
            short_name: "BIO101".to_string(),
            full_name: Some(String::new()),
            summary: None,
            roles: vec![],
        };
        let course = CourseInfo::from(record);
        assert_eq!(course.display_title, "BIO101");
    }

    #[test]
    fn test_course_title_prefers_full_name() {
        let record = CourseRecord {
            id: 7,
            short_name: "BIO101".to_string(),
            full_name: Some("Introduction to Biology".to_string()),
            summary: Some(String::new()),
            roles: vec!["student".to_string()],
        };
        let course = CourseInfo::from(record);
        assert_eq!(course.display_title, "Introduction to Biology");
        assert_eq!(course.summary_html, None);
        assert_eq!(course.role_names, vec!["student"]);
    }

    #[test]
    fn test_host_context_from_json_without_course() {
        let json = r#"{
            "site": {"short_name": "demo", "full_name": "Demo", "base_url": "https://x", "release": "3.9"},
            "user": {"id": 42, "username": "ada"}
        }"#;
        let (site, user, course) = HostContext::from_json(json).unwrap().into_parts();
        assert_eq!(site.short_name, "demo");
        assert_eq!(user.id, 42);
        assert_eq!(user.email(), "");
        assert_eq!(user.first_access, None);
        assert!(course.is_none());
    }

    #[test]
    fn test_host_context_null_course() {
        let json = r#"{
            "site": {"short_name": "demo", "full_name": "Demo", "base_url": "https://x", "release": "3.9"},
            "user": {"id": 42},
            "course": null
        }"#;
        let (_, _, course) = HostContext::from_json(json).unwrap().into_parts();
        assert!(course.is_none());
    }

    #[test]
    fn test_host_context_missing_user_id_fails() {
        let json = r#"{
            "site": {"short_name": "demo", "full_name": "Demo", "base_url": "https://x", "release": "3.9"},
            "user": {"username": "ada"}
        }"#;
        let err = HostContext::from_json(json).unwrap_err();
        assert!(matches!(err, BuildError::InvalidInput(_)));
        assert!(err.to_string().contains("id"));
    }
}
