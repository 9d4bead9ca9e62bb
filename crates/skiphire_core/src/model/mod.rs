mod ids;
mod skip;

pub use ids::{SkipId, SkipKey};
pub use skip::{COMPACT_MAX_YARDS, Location, MEDIUM_MAX_YARDS, SizeClass, SkipOption};
