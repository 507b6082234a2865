pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod optimize;
pub mod pattern;
pub mod reach;
pub mod search;
pub mod time;

pub use analysis::{NumberProfile, PreviewEntry, SequencePreview, analyze_number, sequence_preview};
pub use config::{Config, GridConfig, SearchConfig};
pub use constants::{
    BASE_STEP, DEFAULT_MAX_STEPS, MAX_BEDS, MAX_CHILDREN, MAX_GRID_AXIS, MAX_MAX_STEPS,
    MIN_MAX_STEPS, SECONDS_PER_DAY,
};
pub use error::{CalcError, InputError};
pub use input::{RawInputs, ValidatedInputs, validate_inputs};
pub use optimize::{
    CandidateOutcome, Configuration, OptimizationCandidate, OptimizeRequest, optimize,
};
pub use pattern::{
    Classifier, CustomPattern, PatternKind, PatternQuery, all_matches, classify, classify_by_name,
};
pub use reach::{ReachabilityOutcome, SequenceItem, solve};
pub use search::{PatternMatch, SearchRequest, search};
pub use time::{DayDuration, to_duration};
