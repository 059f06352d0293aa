//! Commercial term types

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of charges an installment schedule is split into
pub const NUM_INSTALLMENTS: u32 = 3;

/// How the total amount is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermType {
    /// One charge at the end of the duration
    Net,
    /// A fixed number of charges spread across the duration
    Installments,
}

impl TermType {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TermType::Net => "net",
            TermType::Installments => "installments",
        }
    }

    /// Returns the number of charges a schedule with these terms contains
    pub fn charge_count(&self) -> usize {
        match self {
            TermType::Net => 1,
            TermType::Installments => NUM_INSTALLMENTS as usize,
        }
    }

    pub fn requires_installments(&self) -> bool {
        matches!(self, TermType::Installments)
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known term type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown term type: {0}")]
pub struct UnknownTermType(pub String);

impl FromStr for TermType {
    type Err = UnknownTermType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "net" => Ok(TermType::Net),
            "installments" => Ok(TermType::Installments),
            _ => Err(UnknownTermType(s.to_string())),
        }
    }
}

/// Deserializes an optional term type, mapping empty or unknown names to `None`
///
/// Leaves the rejection to validation so the caller sees the same message
/// whether the field was absent, blank, or misspelled.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<TermType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
