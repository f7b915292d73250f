//! Page-Local State
//!
//! Data types and the roster state machine. There is no global store; each
//! page owns its own signals over these types.

pub mod roster;
pub mod types;

pub use roster::{Team, TeamDraft, ROSTER_SIZE};
pub use types::{
    sort_heroes, Hero, HeroRef, HeroStats, MatchSummary, Prediction, PredictionRequest,
    SortMetric, TeamComposition,
};
