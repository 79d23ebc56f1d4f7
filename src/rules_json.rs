//! Loading rule tables from JSON.
//!
//! # Feature
//!
//! Requires the `rules-json` feature.
//!
//! # Supported Formats
//!
//! ## Array format
//!
//! Keeps declaration order, which matters with [`MatchOrder::Declared`].
//!
//! ```json
//! [
//!   { "prefix": "34", "network": "American Express" },
//!   { "prefix": "644_649", "network": "Discover Card" }
//! ]
//! ```
//!
//! ## Object format (keyed by prefix)
//!
//! Keys are read in sorted order.
//!
//! ```json
//! {
//!   "34": "American Express",
//!   "644_649": "Discover Card"
//! }
//! ```

use crate::error::RuleError;
use crate::network::{MatchOrder, RuleTable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RuleEntry {
    #[serde(alias = "iin")]
    prefix: String,
    network: String,
}

/// JSON rule table loader.
pub struct JsonRuleLoader;

impl JsonRuleLoader {
    /// Loads a rule table from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use cardchecker::network::MatchOrder;
    /// use cardchecker::rules_json::JsonRuleLoader;
    ///
    /// let table = JsonRuleLoader::from_file("networks.json", MatchOrder::MostSpecific)?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, order: MatchOrder) -> Result<RuleTable, RuleError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, order)
    }

    /// Loads a rule table from a reader.
    pub fn from_reader<R: Read>(mut reader: R, order: MatchOrder) -> Result<RuleTable, RuleError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content, order)
    }

    /// Loads a rule table from a JSON string, detecting the format.
    ///
    /// # Example
    ///
    /// ```
    /// use cardchecker::network::MatchOrder;
    /// use cardchecker::rules_json::JsonRuleLoader;
    ///
    /// let table = JsonRuleLoader::parse(
    ///     r#"[{"prefix": "9704", "network": "Napas"}]"#,
    ///     MatchOrder::Declared,
    /// )
    /// .unwrap();
    /// assert_eq!(table.classify("9704000000000000"), Some("Napas"));
    /// ```
    pub fn parse(json: &str, order: MatchOrder) -> Result<RuleTable, RuleError> {
        if json.trim_start().starts_with('[') {
            Self::parse_array(json, order)
        } else {
            Self::parse_object(json, order)
        }
    }

    fn parse_array(json: &str, order: MatchOrder) -> Result<RuleTable, RuleError> {
        let entries: Vec<RuleEntry> = serde_json::from_str(json)?;
        RuleTable::from_specs(
            entries.into_iter().map(|e| (e.prefix, e.network)),
            order,
        )
    }

    fn parse_object(json: &str, order: MatchOrder) -> Result<RuleTable, RuleError> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)?;
        RuleTable::from_specs(entries, order)
    }
}
