pub mod matches;
pub mod team;

pub use matches::{Match, MatchState};
pub use team::Team;
