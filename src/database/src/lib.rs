mod error;
mod generators;
mod loaders;

pub use error::{RosterError, RosterResult};
pub use generators::*;
pub use loaders::*;
