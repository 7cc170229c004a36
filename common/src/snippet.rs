//! Intercom embed snippet generation.
//!
//! The snippet is two inline scripts: one assigning `window.intercomSettings`, and the
//! Intercom bootstrap which loads the widget (or updates an already loaded one).

use crate::identity::{generate_identity_hash, user_identifier};
use crate::text::{course_description, join_roles, script_safe_json};
use crate::{
    BuildError, CourseInfo, HostContext, PluginConfig, SiteInfo, UserInfo, PLATFORM_NAME,
    WIDGET_URL_BASE,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Company<'a> {
    id: &'a str,
    name: &'a str,
    website: &'a str,
}

#[derive(Debug, Serialize)]
struct IdentityFields<'a> {
    moodle_version: String,
    user_id: String,
    username: &'a str,
    name: String,
    email: &'a str,
    user_hash: String,
    created_at: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ActiveCourseFields<'a> {
    active_course_title: &'a str,
    active_course_shortname: &'a str,
    active_course_description: String,
    active_course_id: i64,
    active_course_roles: String,
}

/// Value of `window.intercomSettings`. Field order is the emitted key order.
#[derive(Debug, Serialize)]
struct WidgetSettings<'a> {
    app_id: &'a str,
    company: Company<'a>,
    #[serde(flatten)]
    identity: Option<IdentityFields<'a>>,
    #[serde(flatten)]
    active_course: Option<ActiveCourseFields<'a>>,
}

/// Builds the embed snippet for one page render. Borrows its inputs and never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct EmbedSnippetBuilder<'a> {
    config: &'a PluginConfig,
    site: &'a SiteInfo,
}

impl<'a> EmbedSnippetBuilder<'a> {
    pub fn new(config: &'a PluginConfig, site: &'a SiteInfo) -> Self {
        Self { config, site }
    }

    pub fn build(
        &self,
        user: &UserInfo,
        course: Option<&CourseInfo>,
    ) -> Result<String, BuildError> {
        if self.config.app_id.is_empty() {
            return Err(BuildError::MissingField("app_id"));
        }
        if self.site.short_name.is_empty() {
            return Err(BuildError::MissingField("site.short_name"));
        }

        let company = Company {
            id: &self.site.short_name,
            name: &self.site.full_name,
            website: &self.site.base_url,
        };

        let settings = if user.is_guest() {
            WidgetSettings {
                app_id: &self.config.app_id,
                company,
                identity: None,
                active_course: None,
            }
        } else {
            let identity = self.identity_fields(user)?;
            let active_course = course.map(active_course_fields).transpose()?;
            WidgetSettings {
                app_id: &self.config.app_id,
                company,
                identity: Some(identity),
                active_course,
            }
        };

        let settings_json =
            script_safe_json(&settings).map_err(|e| BuildError::Serialize(e.to_string()))?;
        let bootstrap = bootstrap_script(&self.config.app_id)?;

        Ok(format!(
            "<script>window.intercomSettings = {settings_json};</script>{bootstrap}"
        ))
    }

    /// Like [`Self::build`] but never fails: errors are logged and the embed is omitted.
    pub fn embed(&self, user: &UserInfo, course: Option<&CourseInfo>) -> Option<String> {
        match self.build(user, course) {
            Ok(snippet) => Some(snippet),
            Err(e) => {
                log::warn!("Intercom embed omitted for user {}: {}", user.id, e);
                None
            }
        }
    }

    fn identity_fields<'u>(&self, user: &'u UserInfo) -> Result<IdentityFields<'u>, BuildError> {
        if !self.config.has_secret() {
            return Err(BuildError::MissingSecret);
        }
        let user_id = user_identifier(self.site, user);
        let user_hash = generate_identity_hash(&user_id, &self.config.id_verification_secret)?;

        Ok(IdentityFields {
            moodle_version: format!("{} {}", PLATFORM_NAME, self.site.release),
            user_id,
            username: user.username(),
            name: user.display_name(),
            email: user.email(),
            user_hash,
            created_at: user.first_access,
        })
    }
}

fn active_course_fields(course: &CourseInfo) -> Result<ActiveCourseFields<'_>, BuildError> {
    if course.short_name.is_empty() {
        return Err(BuildError::MissingField("course.short_name"));
    }
    Ok(ActiveCourseFields {
        active_course_title: &course.display_title,
        active_course_shortname: &course.short_name,
        active_course_description: course
            .summary_html
            .as_deref()
            .map(course_description)
            .unwrap_or_default(),
        active_course_id: course.id,
        active_course_roles: join_roles(&course.role_names),
    })
}

/// Intercom's standard loader. When `window.Intercom` is already a function the
/// widget is re-attached and updated in place; otherwise a call queue is installed
/// and the widget script is fetched on page load.
fn bootstrap_script(app_id: &str) -> Result<String, BuildError> {
    let widget_url = script_safe_json(&format!("{WIDGET_URL_BASE}{app_id}"))
        .map_err(|e| BuildError::Serialize(e.to_string()))?;
    Ok(format!(
        "<script>(function(){{var w=window;var ic=w.Intercom;\
if(typeof ic==='function'){{ic('reattach_activator');ic('update',w.intercomSettings);}}\
else{{var d=document;var i=function(){{i.c(arguments);}};i.q=[];i.c=function(args){{i.q.push(args);}};w.Intercom=i;\
var l=function(){{var s=d.createElement('script');s.type='text/javascript';s.async=true;s.src={widget_url};\
var x=d.getElementsByTagName('script')[0];x.parentNode.insertBefore(s,x);}};\
if(w.attachEvent){{w.attachEvent('onload',l);}}else{{w.addEventListener('load',l,false);}}}}}})();</script>"
    ))
}

pub fn build_snippet(
    config: &PluginConfig,
    site: &SiteInfo,
    user: &UserInfo,
    course: Option<&CourseInfo>,
) -> Result<String, BuildError> {
    EmbedSnippetBuilder::new(config, site).build(user, course)
}

pub fn embed_snippet(
    config: &PluginConfig,
    site: &SiteInfo,
    user: &UserInfo,
    course: Option<&CourseInfo>,
) -> Option<String> {
    EmbedSnippetBuilder::new(config, site).embed(user, course)
}

/// Parse a host context document and embed it. Parse failures also yield `None`.
pub fn embed_host_context(config: &PluginConfig, json: &str) -> Option<String> {
    let context = match HostContext::from_json(json) {
        Ok(context) => context,
        Err(e) => {
            log::warn!("Intercom embed omitted: {}", e);
            return None;
        }
    };
    let (site, user, course) = context.into_parts();
    embed_snippet(config, &site, &user, course.as_ref())
}
