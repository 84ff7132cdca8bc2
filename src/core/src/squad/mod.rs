mod allocator;
mod balancer;
mod group;
mod planner;
mod queue;
mod quota;

#[cfg(test)]
pub(crate) mod fixtures;

pub use allocator::*;
pub use balancer::*;
pub use group::*;
pub use planner::*;
pub use queue::{CategoryQueue, CategoryQueues};
pub use quota::*;
