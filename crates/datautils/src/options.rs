use serde::{Deserialize, Serialize};

/// Options for turning identifier tokens into readable phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrettifyOptions {
    /// Tokens with fewer characters than this are returned untouched (default: 3)
    pub min_len: usize,
    /// Separator used when joining several prettified tokens (default: `"; "`)
    pub separator: String,
}

impl Default for PrettifyOptions {
    fn default() -> Self {
        Self {
            min_len: 3,
            separator: String::from("; "),
        }
    }
}

/// Options for link-list curation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    /// Sort the curated links by title using natural ordering
    pub sort: bool,
    /// Relation types to drop (compared case-insensitively)
    pub ignore_rel: Vec<String>,
    /// How titles derived from `rel` are prettified
    pub prettify: PrettifyOptions,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            sort: true,
            ignore_rel: vec![String::from("self")],
            prettify: PrettifyOptions::default(),
        }
    }
}

impl LinkOptions {
    pub(crate) fn ignores(&self, rel: &str) -> bool {
        let rel = rel.to_lowercase();
        self.ignore_rel.iter().any(|r| r.to_lowercase() == rel)
    }
}
