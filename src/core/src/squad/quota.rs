use crate::{FieldPositionGroup, Individual};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

pub const MIN_GROUP_SIZE: u8 = 5;
pub const MAX_GROUP_SIZE: u8 = 11;

/// Non-playing staff who appear on rosters but are left out of small-sided groups.
pub const STAFF_DENYLIST: &[&str] = &[
    "Head Coach",
    "Assistant Coach",
    "Goalkeeping Coach",
    "Team Manager",
    "Kit Manager",
    "Physio",
    "Performance Analyst",
];

/// Group size in players, always within `5..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupSize(u8);

impl GroupSize {
    pub fn new(size: u8) -> Option<Self> {
        (MIN_GROUP_SIZE..=MAX_GROUP_SIZE)
            .contains(&size)
            .then_some(GroupSize(size))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn capacity(self) -> usize {
        self.0 as usize
    }

    /// Eleven-a-side groups field a goalkeeper.
    pub fn is_full_side(self) -> bool {
        self.0 == MAX_GROUP_SIZE
    }

    pub fn all() -> impl Iterator<Item = GroupSize> {
        (MIN_GROUP_SIZE..=MAX_GROUP_SIZE).map(GroupSize)
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        GroupSize(MIN_GROUP_SIZE)
    }
}

impl Display for GroupSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-a-side", self.0)
    }
}

/// Required members of each position group in a single group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupQuota {
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl GroupQuota {
    pub fn count(&self, group: FieldPositionGroup) -> usize {
        match group {
            FieldPositionGroup::Goalkeeper => self.goalkeepers,
            FieldPositionGroup::Defender => self.defenders,
            FieldPositionGroup::Midfielder => self.midfielders,
            FieldPositionGroup::Forward => self.forwards,
        }
    }

    pub fn outfield_total(&self) -> usize {
        self.defenders + self.midfielders + self.forwards
    }

    /// Interleaves outfield groups while quota remains, e.g. 2/1/2 gives
    /// DEF, MID, FWD, DEF, FWD.
    pub fn distribution_pattern(&self) -> Vec<FieldPositionGroup> {
        let mut remaining = [self.defenders, self.midfielders, self.forwards];
        let mut pattern = Vec::with_capacity(self.outfield_total());

        while remaining.iter().any(|&count| count > 0) {
            for (slot, group) in FieldPositionGroup::OUTFIELD.iter().enumerate() {
                if remaining[slot] > 0 {
                    remaining[slot] -= 1;
                    pattern.push(*group);
                }
            }
        }

        pattern
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExclusionReason {
    NonPlayingStaff,
    GoalkeeperNotRequired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotaPlan {
    pub quota: GroupQuota,
    pub exclude_goalkeepers: bool,
    pub excluded_names: Vec<&'static str>,
}

impl QuotaPlan {
    pub fn is_excluded_name(&self, full_name: &str) -> bool {
        let full_name = full_name.trim();

        self.excluded_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(full_name))
    }

    /// Staff are dropped before classification, goalkeepers after it.
    pub fn exclusion_reason(
        &self,
        individual: &Individual,
        group: FieldPositionGroup,
    ) -> Option<ExclusionReason> {
        if self.is_excluded_name(&individual.full_name) {
            Some(ExclusionReason::NonPlayingStaff)
        } else if self.exclude_goalkeepers && group.is_goalkeeper() {
            Some(ExclusionReason::GoalkeeperNotRequired)
        } else {
            None
        }
    }
}

pub struct QuotaPlanner;

impl QuotaPlanner {
    pub fn plan(size: GroupSize) -> QuotaPlan {
        let (defenders, midfielders, forwards) = match size.get() {
            5 => (2, 1, 2),
            6 => (2, 2, 2),
            7 => (3, 1, 3),
            8 => (3, 2, 3),
            9 => (4, 2, 3),
            _ => (4, 3, 3),
        };

        let full_side = size.is_full_side();

        QuotaPlan {
            quota: GroupQuota {
                goalkeepers: if full_side { 1 } else { 0 },
                defenders,
                midfielders,
                forwards,
            },
            exclude_goalkeepers: !full_side,
            excluded_names: if full_side {
                Vec::new()
            } else {
                STAFF_DENYLIST.to_vec()
            },
        }
    }
}
