//! Page content model

use indexmap::IndexMap;
use serde_yaml::Value;

/// Scalar fields of the landing page, in document order.
///
/// Keys are kept exactly as written in the YAML file. Nulls are treated as
/// absent; numbers and booleans are stored in their textual form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    fields: IndexMap<String, String>,
}

impl PageContent {
    /// Build from a parsed YAML mapping, dropping values that are not scalars
    pub fn from_mapping(mapping: IndexMap<String, Value>) -> Self {
        let mut fields = IndexMap::with_capacity(mapping.len());

        for (key, value) in mapping {
            match scalar_to_string(&value) {
                Some(text) => {
                    fields.insert(key, text);
                }
                None if value.is_null() => {}
                None => {
                    tracing::debug!("Ignoring non-scalar content field {:?}", key);
                }
            }
        }

        Self { fields }
    }

    /// Look up a field by its exact key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Look up the first key present among several spellings
    pub fn get_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// Iterate over all fields in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PageContent {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}
