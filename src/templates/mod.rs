//! Placeholder substitution for the page template
//!
//! Templates are plain HTML with `%%TOKEN_NAME%%` markers. There is no
//! template language beyond that: every marker is replaced by a string, and
//! markers without a value become empty.

use indexmap::{IndexMap, IndexSet};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::content::{md_to_html_opt, PageContent};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"%%([A-Z0-9_]+)%%").unwrap();
}

/// Token receiving the rendered Instagram grid
pub const INSTAGRAM_TOKEN: &str = "INSTAGRAM_ITEMS";

/// Plain scalar fields: (token, content keys in lookup order, default)
const TEXT_FIELDS: &[(&str, &[&str], &str)] = &[
    ("HERO_TITLE", &["hero_title"], ""),
    ("HERO_INTRO", &["hero_intro"], ""),
    ("TICKET_URL", &["ticket_url"], "#"),
    ("ABOUT_TITLE", &["about_title"], ""),
    ("PROFILE_TITLE", &["profile_title", "gunnar_title"], ""),
    ("PROFILE_ROLE_LINE", &["profile_role_line", "gunnar_role_line"], ""),
    ("PROFILE_IMAGE", &["profile_image", "gunnar_image"], ""),
    ("PROFILE_QUOTE", &["profile_quote", "gunnar_quote"], ""),
];

/// Body fields rendered through the paragraph renderer
const HTML_FIELDS: &[(&str, &[&str])] = &[
    ("ABOUT_BODY_HTML", &["about_body"]),
    ("PROFILE_BODY_HTML", &["profile_body", "gunnar_body"]),
];

/// Older templates spell the profile tokens after the person
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("GUNNAR_TITLE", "PROFILE_TITLE"),
    ("GUNNAR_ROLE_LINE", "PROFILE_ROLE_LINE"),
    ("GUNNAR_IMAGE", "PROFILE_IMAGE"),
    ("GUNNAR_QUOTE", "PROFILE_QUOTE"),
    ("GUNNAR_BODY_HTML", "PROFILE_BODY_HTML"),
];

/// Token name to replacement value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placeholders {
    values: IndexMap<String, String>,
}

/// Result of substituting a template
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub html: String,
    /// Tokens found in the template with no value, in first-seen order
    pub unresolved: Vec<String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full token set for the landing page
    pub fn from_content(content: &PageContent, instagram_html: &str) -> Self {
        let mut placeholders = Self::new();

        for (token, keys, default) in TEXT_FIELDS {
            // an empty value falls back to the default, same as a missing one
            let value = content
                .get_any(keys)
                .filter(|v| !v.is_empty())
                .unwrap_or(*default);
            placeholders.insert(*token, value);
        }

        for (token, keys) in HTML_FIELDS {
            placeholders.insert(*token, md_to_html_opt(content.get_any(keys)));
        }

        placeholders.insert(INSTAGRAM_TOKEN, instagram_html);

        for (legacy, token) in LEGACY_ALIASES {
            let value = placeholders.get(token).unwrap_or_default().to_string();
            placeholders.insert(*legacy, value);
        }

        // Remaining fields are reachable under their upper-cased key
        for (key, value) in content.iter() {
            let token = key.to_ascii_uppercase();
            if !is_token_name(&token) || placeholders.contains(&token) {
                continue;
            }
            placeholders.insert(token, value);
        }

        placeholders
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.values.insert(token.into(), value.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.values.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every `%%TOKEN%%` in one pass. Inserted values are not
    /// scanned again.
    pub fn compose(&self, template: &str) -> Composition {
        let mut unresolved = IndexSet::new();

        let html = TOKEN
            .replace_all(template, |caps: &Captures| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => {
                    unresolved.insert(caps[1].to_string());
                    String::new()
                }
            })
            .into_owned();

        for token in &unresolved {
            tracing::warn!("Template token %%{}%% has no value, left empty", token);
        }

        Composition {
            html,
            unresolved: unresolved.into_iter().collect(),
        }
    }
}

/// Substitute placeholders into a template
pub fn compose(template: &str, placeholders: &Placeholders) -> String {
    placeholders.compose(template).html
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
