//! Country code enrichment: alpha-2 residence code -> display name.
//! The lookup is injected so tests can substitute a small static table.

use std::collections::HashMap;

use crate::data::iso3166::ISO_3166_ALPHA2;

/// Code -> name mapping service used during enrichment.
pub trait CountryLookup: Send + Sync {
    /// Display name for an alpha-2 code, or `None` when the code is unknown.
    fn name_for_alpha2(&self, code: &str) -> Option<&str>;
}

/// Normalize a code for lookup: trimmed, upper-case ASCII.
fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Built-in ISO 3166-1 registry.
#[derive(Debug, Clone)]
pub struct IsoCountryRegistry {
    by_code: HashMap<&'static str, &'static str>,
}

impl IsoCountryRegistry {
    pub fn new() -> Self {
        Self {
            by_code: ISO_3166_ALPHA2.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl Default for IsoCountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryLookup for IsoCountryRegistry {
    fn name_for_alpha2(&self, code: &str) -> Option<&str> {
        self.by_code.get(normalize_code(code).as_str()).copied()
    }
}

/// Caller-supplied code table.
#[derive(Debug, Clone, Default)]
pub struct StaticCountryTable {
    by_code: HashMap<String, String>,
}

impl StaticCountryTable {
    pub fn new<I, C, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        Self {
            by_code: entries
                .into_iter()
                .map(|(code, name)| (normalize_code(code.as_ref()), name.into()))
                .collect(),
        }
    }
}

impl CountryLookup for StaticCountryTable {
    fn name_for_alpha2(&self, code: &str) -> Option<&str> {
        self.by_code.get(&normalize_code(code)).map(String::as_str)
    }
}

/// Total mapping: the registry name on a hit, the input code unchanged on a miss.
pub fn country_name_or_code(lookup: &dyn CountryLookup, code: &str) -> String {
    match lookup.name_for_alpha2(code) {
        Some(name) => name.to_string(),
        None => {
            tracing::debug!(code, "country code not in registry, keeping raw code");
            code.to_string()
        }
    }
}
