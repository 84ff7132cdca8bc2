mod builder;
mod individual;
mod status;

pub use builder::IndividualBuilder;
pub use individual::Individual;
pub use status::IndividualStatusType;
