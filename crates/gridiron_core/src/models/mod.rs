pub mod down;
pub mod play;
pub mod snapshot;
pub mod team;

pub use down::{Down, Snap};
pub use play::{PlayCall, PlayOutcome, PlayResult, Role};
pub use snapshot::SituationSnapshot;
pub use team::{Side, TeamStats};
