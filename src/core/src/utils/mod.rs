mod statistics;
mod time;

pub use statistics::*;
pub use time::*;
