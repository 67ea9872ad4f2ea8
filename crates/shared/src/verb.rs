//! Action verbs

use crate::UnknownVerbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The semantic operation requested on a route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum ActionVerb {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl ActionVerb {
    pub const ALL: [ActionVerb; 5] = [
        ActionVerb::Get,
        ActionVerb::Post,
        ActionVerb::Put,
        ActionVerb::Delete,
        ActionVerb::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionVerb::Get => "GET",
            ActionVerb::Post => "POST",
            ActionVerb::Put => "PUT",
            ActionVerb::Delete => "DELETE",
            ActionVerb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for ActionVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActionVerb {
    type Err = UnknownVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ActionVerb::ALL
            .iter()
            .copied()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVerbError {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ActionVerb {
    type Error = UnknownVerbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_get() {
        assert_eq!(ActionVerb::default(), ActionVerb::Get);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("delete".parse::<ActionVerb>().unwrap(), ActionVerb::Delete);
        assert_eq!("Patch".parse::<ActionVerb>().unwrap(), ActionVerb::Patch);
        assert_eq!("POST".parse::<ActionVerb>().unwrap(), ActionVerb::Post);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "HEAD".parse::<ActionVerb>().unwrap_err();
        assert_eq!(err.value, "HEAD");
    }

    #[test]
    fn test_serde_upper_case() {
        assert_eq!(serde_json::to_string(&ActionVerb::Put).unwrap(), "\"PUT\"");
        let verb: ActionVerb = serde_yaml::from_str("DELETE").unwrap();
        assert_eq!(verb, ActionVerb::Delete);
    }

    #[test]
    fn test_deserialize_lower_case() {
        let verbs: Vec<ActionVerb> = serde_yaml::from_str("[get, delete, Patch]").unwrap();
        assert_eq!(verbs, vec![ActionVerb::Get, ActionVerb::Delete, ActionVerb::Patch]);
    }

    #[test]
    fn test_deserialize_unknown_verb_names_value() {
        let err = serde_json::from_str::<ActionVerb>("\"HEAD\"").unwrap_err();
        assert!(err.to_string().contains("'HEAD'"));
    }
}
