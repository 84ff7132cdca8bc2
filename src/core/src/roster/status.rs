use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

const HOME_GROWN_LABEL: &str = "HG";
const PLAYER_TO_WATCH_LABEL: &str = "Player To Watch";
const UNKNOWN_LABEL: &str = "Unknown";

/// Scouting status attached to an individual.
///
/// The roster vocabulary is open, but these labels carry meaning for rating
/// and ordering. Anything else is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IndividualStatusType {
    HomeGrown,
    PlayerToWatch,
    Unknown,
    Other(String),
}

impl IndividualStatusType {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();

        if label.eq_ignore_ascii_case(HOME_GROWN_LABEL) {
            IndividualStatusType::HomeGrown
        } else if label.eq_ignore_ascii_case(PLAYER_TO_WATCH_LABEL) {
            IndividualStatusType::PlayerToWatch
        } else if label.eq_ignore_ascii_case(UNKNOWN_LABEL) {
            IndividualStatusType::Unknown
        } else {
            IndividualStatusType::Other(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            IndividualStatusType::HomeGrown => HOME_GROWN_LABEL,
            IndividualStatusType::PlayerToWatch => PLAYER_TO_WATCH_LABEL,
            IndividualStatusType::Unknown => UNKNOWN_LABEL,
            IndividualStatusType::Other(label) => label,
        }
    }

    /// Ordering among equally rated individuals, lower goes first.
    pub fn tie_break_priority(&self) -> u8 {
        match self {
            IndividualStatusType::Unknown => 0,
            IndividualStatusType::PlayerToWatch => 1,
            _ => 2,
        }
    }
}

impl From<String> for IndividualStatusType {
    fn from(label: String) -> Self {
        IndividualStatusType::from_label(&label)
    }
}

impl From<IndividualStatusType> for String {
    fn from(status: IndividualStatusType) -> Self {
        status.label().to_string()
    }
}

impl Display for IndividualStatusType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.label())
    }
}
