pub mod match_record;
pub mod summary;

pub use match_record::{MatchData, MatchRecord, Participant};
pub use summary::{CreepScore, MatchSummary, Outcome};
