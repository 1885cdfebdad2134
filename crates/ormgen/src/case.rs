//! Deterministic identifier casing.
//!
//! Raw schema names are transformed three ways: structural (type) names via
//! [`struct_name`], serialization tag names via [`json_tag_name`], and the
//! generic style application in [`apply_case_style`]. All transforms are
//! pure functions of their inputs; no locale-dependent behavior.

use crate::opts::{CaseStyle, Config};
use std::sync::OnceLock;

/// Boundary between a non-uppercase character and an uppercase run, used to
/// canonicalize camelCased input back to snake form.
fn camel_boundary() -> &'static regex::Regex {
    static CAMEL_RE: OnceLock<regex::Regex> = OnceLock::new();
    CAMEL_RE
        .get_or_init(|| regex::Regex::new("[^A-Z][A-Z]+").expect("invalid built-in camel regex"))
}

/// Upper-case the first character, leave the rest unchanged.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a name to `snake_case`.
///
/// Already-underscored input is only lower-cased; otherwise an underscore is
/// inserted before each uppercase run. Idempotent: applying it twice equals
/// applying it once.
pub fn to_snake_case(s: &str) -> String {
    let mut name = s.to_string();
    if !name.contains('_') {
        name = camel_boundary()
            .replace_all(&name, |caps: &regex::Captures| {
                let m = &caps[0];
                let split = m.chars().next().map_or(0, char::len_utf8);
                format!("{}_{}", &m[..split], &m[split..])
            })
            .into_owned();
    }
    name.to_lowercase()
}

/// Convert a snake name to `camelCase` (first segment unchanged).
pub fn to_camel_case(s: &str) -> String {
    to_camel_init_case(s, false)
}

/// Convert a snake name to `PascalCase`.
pub fn to_pascal_case(s: &str) -> String {
    to_camel_init_case(s, true)
}

fn to_camel_init_case(name: &str, init_upper: bool) -> String {
    let mut out = String::new();
    for (i, part) in name.split('_').enumerate() {
        if !init_upper && i == 0 {
            out.push_str(part);
            continue;
        }
        if part == "id" {
            out.push_str("ID");
        } else {
            out.push_str(&title_case(part));
        }
    }
    out
}

/// Camel casing for serialization tags: the literal segment `id` renders as
/// `Id` or `ID` depending on `id_uppercase`, independent of the initialism set.
fn to_json_camel_case(name: &str, id_uppercase: bool) -> String {
    let id_str = if id_uppercase { "ID" } else { "Id" };
    let mut out = String::new();
    for (i, part) in name.split('_').enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        if part == "id" {
            out.push_str(id_str);
        } else {
            out.push_str(&title_case(part));
        }
    }
    out
}

/// Apply a validated casing style to a name.
pub fn apply_case_style(name: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::None => name.to_string(),
        CaseStyle::Camel => to_camel_case(name),
        CaseStyle::Pascal => to_pascal_case(name),
        CaseStyle::Snake => to_snake_case(name),
    }
}

/// Serialization tag name for a raw column name.
pub fn json_tag_name(name: &str, cfg: &Config) -> String {
    match cfg.case_style {
        CaseStyle::None => name.to_string(),
        CaseStyle::Camel => to_json_camel_case(name, cfg.id_uppercase),
        CaseStyle::Pascal => to_pascal_case(name),
        CaseStyle::Snake => to_snake_case(name),
    }
}

/// Structural (type) name for a raw table or column name.
///
/// A configured rename override is returned verbatim. Otherwise every
/// non-letter, non-digit character maps to an underscore, segments matching
/// the initialism set are upper-cased wholesale, the rest are title-cased,
/// and a leading digit gets an underscore prefix so the result is a valid
/// identifier.
pub fn struct_name(raw: &str, cfg: &Config) -> String {
    if let Some(renamed) = cfg.rename_for(raw) {
        return renamed.to_string();
    }

    let normalized: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    let mut out = String::new();
    for part in normalized.split('_') {
        if cfg.is_initialism(part) {
            out.push_str(&part.to_uppercase());
        } else {
            out.push_str(&title_case(part));
        }
    }

    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("_{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::Options;
    use std::collections::BTreeMap;

    fn config_with(style: &str, id_uppercase: bool) -> Config {
        Options {
            json_tags_case_style: style.to_string(),
            json_tags_id_uppercase: id_uppercase,
            ..Options::default()
        }
        .build()
        .unwrap()
    }

    #[test]
    fn snake_case_canonicalizes_camel() {
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("createdAt"), "created_at");
        assert_eq!(to_snake_case("UserID"), "user_id");
    }

    #[test]
    fn snake_case_leaves_underscored_input() {
        assert_eq!(to_snake_case("first_name"), "first_name");
        assert_eq!(to_snake_case("First_Name"), "first_name");
    }

    #[test]
    fn snake_case_is_idempotent() {
        for s in ["firstName", "first_name", "UserID", "id", "a1b2"] {
            let once = to_snake_case(s);
            assert_eq!(to_snake_case(&once), once);
        }
    }

    #[test]
    fn camel_and_pascal_styles() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_pascal_case("first_name"), "FirstName");
        assert_eq!(to_pascal_case("user_id"), "UserID");
        assert_eq!(to_camel_case("user_id"), "userID");
    }

    #[test]
    fn json_tag_id_casing_follows_flag() {
        let upper = config_with("camel", true);
        let lower = config_with("camel", false);
        assert_eq!(json_tag_name("user_id", &upper), "userID");
        assert_eq!(json_tag_name("user_id", &lower), "userId");
    }

    #[test]
    fn json_tag_passthrough_when_no_style() {
        let cfg = config_with("", false);
        assert_eq!(json_tag_name("user_id", &cfg), "user_id");
    }

    #[test]
    fn struct_name_basic() {
        let cfg = Config::default();
        assert_eq!(struct_name("users", &cfg), "Users");
        assert_eq!(struct_name("first_name", &cfg), "FirstName");
    }

    #[test]
    fn struct_name_id_is_initialism_by_default() {
        let cfg = Options::default().build().unwrap();
        assert_eq!(struct_name("id", &cfg), "ID");
        assert_eq!(struct_name("user_id", &cfg), "UserID");
    }

    #[test]
    fn struct_name_custom_initialisms() {
        let cfg = Options {
            initialisms: vec!["id".to_string(), "api".to_string(), "URL".to_string()],
            ..Options::default()
        }
        .build()
        .unwrap();
        assert_eq!(struct_name("api_client", &cfg), "APIClient");
        assert_eq!(struct_name("base_url", &cfg), "BaseURL");
    }

    #[test]
    fn struct_name_rename_override_wins() {
        let mut rename = BTreeMap::new();
        rename.insert("users".to_string(), "account_model".to_string());
        let cfg = Options {
            rename,
            ..Options::default()
        }
        .build()
        .unwrap();
        // Override is verbatim: no casing applied.
        assert_eq!(struct_name("users", &cfg), "account_model");
    }

    #[test]
    fn struct_name_normalizes_and_prefixes_digits() {
        let cfg = Config::default();
        assert_eq!(struct_name("user-events.v2", &cfg), "UserEventsV2");
        assert_eq!(struct_name("2fa_codes", &cfg), "_2faCodes");
    }

    #[test]
    fn transform_is_deterministic() {
        let cfg = config_with("camel", true);
        assert_eq!(
            json_tag_name("some_field_id", &cfg),
            json_tag_name("some_field_id", &cfg)
        );
        assert_eq!(struct_name("some_field_id", &cfg), struct_name("some_field_id", &cfg));
    }
}
