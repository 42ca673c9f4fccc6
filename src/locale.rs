use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::data::{EdgeId, NodeId};

/// Language used when neither the url nor the browser yields a usable one.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Localized texts of a single card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeText {
    #[serde(default)]
    pub title: String,
    /// Title with literal `\n` escapes marking the line breaks of the card
    /// label on the canvas.
    #[serde(default)]
    pub wrapped_title: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub more_info: String,
}

/// Localized text of a single relation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeText {
    #[serde(default)]
    pub info: String,
}

/// One language's translation bundle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub nodes: HashMap<NodeId, NodeText>,
    #[serde(default)]
    pub edges: HashMap<EdgeId, EdgeText>,
    /// Free-form UI strings, looked up by dotted key.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// All loaded translation bundles, keyed by language code.
///
/// Empty until the translations file is loaded; replaced wholesale then.
/// Every accessor returns `None` for a missing language or key, so a hole in
/// the content degrades to a placeholder instead of a lookup failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(pub HashMap<String, Bundle>);

impl Translations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.0.contains_key(lang)
    }

    /// Available language codes, sorted.
    pub fn available(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.0.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Display name of a language, e.g. "English" for "en".
    pub fn full_name(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(|b| b.full_name.as_str())
    }

    pub fn node_text(&self, lang: &str, id: &NodeId) -> Option<&NodeText> {
        self.0.get(lang)?.nodes.get(id)
    }

    pub fn edge_info(&self, lang: &str, id: &EdgeId) -> Option<&str> {
        self.0.get(lang)?.edges.get(id).map(|e| e.info.as_str())
    }

    /// Looks up a free-form UI string by dotted key, e.g.
    /// `"selector.filters.major"`.
    pub fn ui(&self, lang: &str, key: &str) -> Option<&str> {
        let bundle = self.0.get(lang)?;
        let mut parts = key.split('.');
        let mut value = bundle.extra.get(parts.next()?)?;
        for part in parts {
            value = value.get(part)?;
        }
        value.as_str()
    }
}

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

fn truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "t")
}

/// Picks the startup language: the `lang` query parameter when it names a
/// loaded bundle, else the browser language truncated to its primary subtag,
/// else `None` (callers fall back to [`FALLBACK_LANGUAGE`]).
pub fn default_language(
    url: &Url,
    browser_lang: Option<&str>,
    translations: &Translations,
) -> Option<String> {
    if let Some(lang) = query_param(url, "lang") {
        if translations.contains(&lang) {
            return Some(lang);
        }
    }

    let primary = browser_lang?.split('-').next()?;
    if translations.contains(primary) {
        return Some(primary.to_string());
    }

    None
}

/// Resolves quiz mode from the url query.
///
/// The `quiz` flag wins when present, with the literal truthy values `1`,
/// `true` and `t` (case sensitive). A `correction` flag with the same truthy
/// set means the opposite. Unspecified means quiz mode on.
pub fn quiz_mode(url: &Url) -> bool {
    if let Some(quiz) = query_param(url, "quiz").filter(|v| !v.is_empty()) {
        return truthy(&quiz);
    }
    if let Some(correction) = query_param(url, "correction").filter(|v| !v.is_empty()) {
        return !truthy(&correction);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translations(langs: &[&str]) -> Translations {
        Translations(
            langs
                .iter()
                .map(|l| ((*l).to_string(), Bundle::default()))
                .collect(),
        )
    }

    fn url(query: &str) -> Url {
        Url::parse(&format!("https://example.org/fresco?{query}")).unwrap()
    }

    #[test]
    fn language_prefers_query_over_browser() {
        let t = translations(&["en", "fr"]);
        assert_eq!(
            default_language(&url("lang=fr"), Some("en-US"), &t),
            Some("fr".to_string())
        );
    }

    #[test]
    fn language_falls_back_to_browser_primary_subtag() {
        let t = translations(&["en", "fr"]);
        assert_eq!(
            default_language(&url("lang=de"), Some("fr-CA"), &t),
            Some("fr".to_string())
        );
        assert_eq!(default_language(&url(""), Some("es"), &t), None);
    }

    #[test]
    fn quiz_flag_truthy_values_are_case_sensitive() {
        assert!(quiz_mode(&url("quiz=1")));
        assert!(quiz_mode(&url("quiz=true")));
        assert!(quiz_mode(&url("quiz=t")));
        assert!(!quiz_mode(&url("quiz=T")));
        assert!(!quiz_mode(&url("quiz=0")));
        assert!(!quiz_mode(&url("quiz=yes")));
    }

    #[test]
    fn correction_flag_inverts() {
        assert!(!quiz_mode(&url("correction=1")));
        assert!(!quiz_mode(&url("correction=true")));
        assert!(quiz_mode(&url("correction=0")));
    }

    #[test]
    fn quiz_defaults_on_and_quiz_wins_over_correction() {
        assert!(quiz_mode(&url("")));
        assert!(quiz_mode(&url("quiz=1&correction=1")));
    }

    #[test]
    fn ui_lookup_walks_dotted_keys() {
        let json = r#"{
            "en": {
                "fullName": "English",
                "selector": { "filters": { "major": "Main causes" } }
            }
        }"#;
        let t: Translations = serde_json::from_str(json).unwrap();
        assert_eq!(t.ui("en", "selector.filters.major"), Some("Main causes"));
        assert_eq!(t.ui("en", "selector.filters.minor"), None);
        assert_eq!(t.ui("fr", "selector.filters.major"), None);
        assert_eq!(t.full_name("en"), Some("English"));
    }

    #[test]
    fn typed_accessors_return_none_for_missing_keys() {
        let json = r#"{
            "en": {
                "fullName": "English",
                "nodes": { "14": { "title": "Sea level rise", "wrappedTitle": "Sea level\\nrise" } },
                "edges": { "2_14": { "info": "Melting ice raises the sea level." } }
            }
        }"#;
        let t: Translations = serde_json::from_str(json).unwrap();

        let text = t.node_text("en", &"14".into()).unwrap();
        assert_eq!(text.title, "Sea level rise");
        assert_eq!(text.wrapped_title, "Sea level\\nrise");
        assert!(t.node_text("en", &"99".into()).is_none());

        assert_eq!(
            t.edge_info("en", &"2_14".into()),
            Some("Melting ice raises the sea level.")
        );
        assert!(t.edge_info("en", &"9_14".into()).is_none());
    }
}
