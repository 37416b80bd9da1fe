use crate::core::errors::LedgerError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// One of the two fixed parties sharing the ledger.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Meyan,
    Kushal,
}

impl Party {
    pub const ALL: [Party; 2] = [Party::Meyan, Party::Kushal];

    /// The counterpart of this party.
    pub fn other(self) -> Party {
        match self {
            Party::Meyan => Party::Kushal,
            Party::Kushal => Party::Meyan,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Party::Meyan => "meyan",
            Party::Kushal => "kushal",
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Party {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meyan" => Ok(Party::Meyan),
            "kushal" => Ok(Party::Kushal),
            other => Err(LedgerError::UnknownParty(other.to_string())),
        }
    }
}
