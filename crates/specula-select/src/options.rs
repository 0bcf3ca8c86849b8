//! Resolver options
//!
//! Options derive serde so a host application can embed them in its own
//! configuration file.

use serde::{Deserialize, Serialize};

/// Where member lookup searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberLookup {
    /// The carrier's own members, then each ancestor upward
    #[default]
    Hierarchy,
    /// Only the members the carrier declares itself
    DeclaredOnly,
}

/// Options controlling selector resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    /// Member lookup scope
    pub lookup: MemberLookup,
    /// Skip conversion nodes wrapping the selector body
    pub strip_conversions: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            lookup: MemberLookup::Hierarchy,
            strip_conversions: true,
        }
    }
}

impl SelectOptions {
    /// Only consider members declared on the carrier itself
    pub fn declared_only(mut self) -> Self {
        self.lookup = MemberLookup::DeclaredOnly;
        self
    }

    /// Reject selectors whose body is wrapped in a conversion
    pub fn keep_conversions(mut self) -> Self {
        self.strip_conversions = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SelectOptions::default();
        assert_eq!(options.lookup, MemberLookup::Hierarchy);
        assert!(options.strip_conversions);
    }

    #[test]
    fn test_parse_partial_config() {
        let options: SelectOptions =
            serde_json::from_str(r#"{ "lookup": "declared-only" }"#).unwrap();
        assert_eq!(options, SelectOptions::default().declared_only());

        let options: SelectOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SelectOptions::default());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(SelectOptions::default().keep_conversions()).unwrap();
        assert_eq!(json["lookup"], "hierarchy");
        assert_eq!(json["strip_conversions"], false);
    }
}
