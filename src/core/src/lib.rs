pub mod position;
pub mod rating;
pub mod roster;
pub mod squad;
pub mod utils;

pub use position::{FieldPositionGroup, PositionClassifier};
pub use rating::RatingCalculator;
pub use roster::{Individual, IndividualBuilder, IndividualStatusType};
pub use squad::{
    BalanceReport, CategorizedIndividual, ExcludedIndividual, ExclusionReason, Group,
    GroupAllocator, GroupBalancer, GroupQuota, GroupSize, GroupSummary, QuotaPlan,
    QuotaPlanner, SquadPlan, SquadPlanner,
};
pub use utils::*;
