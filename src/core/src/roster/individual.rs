use crate::roster::{IndividualBuilder, IndividualStatusType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const MAX_RECOMMENDATION: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub id: u32,
    pub full_name: String,
    /// Free-form position label as entered by scouts, e.g. "CB", "LW/ST".
    pub position: String,
    pub age: u8,
    pub experience: f64,
    #[serde(default)]
    pub statuses: Vec<IndividualStatusType>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Scout recommendation in `0.0..=5.0`.
    #[serde(default)]
    pub recommendation: Option<f64>,
}

impl Individual {
    pub fn builder() -> IndividualBuilder {
        IndividualBuilder::new()
    }

    pub fn has_status(&self, status: &IndividualStatusType) -> bool {
        self.statuses.contains(status)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn tie_break_priority(&self) -> u8 {
        self.statuses
            .iter()
            .map(IndividualStatusType::tie_break_priority)
            .min()
            .unwrap_or(2)
    }
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.full_name, self.position)
    }
}
