pub mod matches;
pub mod snapshot;

pub use matches::{Match, MatchKind};
pub use snapshot::{Row, Sheet, Snapshot};
