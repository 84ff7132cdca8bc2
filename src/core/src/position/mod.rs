mod classifier;
mod group;

pub use classifier::PositionClassifier;
pub use group::FieldPositionGroup;
