use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl FieldPositionGroup {
    /// Outfield groups in distribution order.
    pub const OUTFIELD: [FieldPositionGroup; 3] = [
        FieldPositionGroup::Defender,
        FieldPositionGroup::Midfielder,
        FieldPositionGroup::Forward,
    ];

    pub fn is_goalkeeper(&self) -> bool {
        *self == FieldPositionGroup::Goalkeeper
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            FieldPositionGroup::Goalkeeper => "GK",
            FieldPositionGroup::Defender => "DEF",
            FieldPositionGroup::Midfielder => "MID",
            FieldPositionGroup::Forward => "FWD",
        }
    }
}

impl Display for FieldPositionGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            FieldPositionGroup::Goalkeeper => "Goalkeeper",
            FieldPositionGroup::Defender => "Defender",
            FieldPositionGroup::Midfielder => "Midfielder",
            FieldPositionGroup::Forward => "Forward",
        };
        write!(f, "{}", name)
    }
}
