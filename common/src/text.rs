use crate::ROLE_SEPARATOR;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static NEWLINE_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static ANGLE_REGEX: OnceLock<Regex> = OnceLock::new();

fn newline_regex() -> &'static Regex {
    NEWLINE_REGEX.get_or_init(|| Regex::new(r"\r|\n").unwrap())
}

// A tag starts with '<' and a name, '/', '!' or '?'; it may run unterminated to the end
fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[A-Za-z/!?][^>]*(?:>|$)").unwrap())
}

fn angle_regex() -> &'static Regex {
    ANGLE_REGEX.get_or_init(|| Regex::new(r"[<>]").unwrap())
}

pub fn strip_newlines(s: &str) -> String {
    newline_regex().replace_all(s, "").into_owned()
}

/// Removes tags, then any '<' or '>' left over from prose such as "1 < 2".
pub fn strip_tags(s: &str) -> String {
    let without_tags = tag_regex().replace_all(s, "");
    angle_regex().replace_all(&without_tags, "").into_owned()
}

/// Plain single-line course description: newlines go first, then markup.
pub fn course_description(summary_html: &str) -> String {
    strip_tags(&strip_newlines(summary_html))
}

pub fn join_roles(roles: &[String]) -> String {
    roles.join(ROLE_SEPARATOR)
}

/// Serialize as JSON that is safe to place inside an inline `<script>` element.
///
/// JSON is valid JavaScript object-literal source. Characters that could end the
/// script element or break a JS string are emitted as `\uXXXX` escapes; they only
/// ever occur inside string values, so the result stays valid JSON.
pub fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(out)
}
