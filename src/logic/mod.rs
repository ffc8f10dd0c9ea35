//! Bracket business logic: seeding, skeleton, result merging, status.

mod builder;
mod merge;
mod seeding;
mod status;

pub use builder::build_bracket;
pub use merge::{apply_period_results, is_period_complete, MergeOutcome};
pub use seeding::select_entrants;
pub use status::bracket_status;
