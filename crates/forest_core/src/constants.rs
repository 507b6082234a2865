/// Stride settings
pub const BASE_STEP: u64 = 1; // stride = BASE_STEP + children + beds
pub const MAX_CHILDREN: u64 = 4;
pub const MAX_BEDS: u64 = 4;
pub const MAX_GRID_AXIS: u64 = 20; // upper bound for grid.max_children and grid.max_beds

/// Time conversion
pub const SECONDS_PER_DAY: u64 = 270; // 1 day = 4 menit 30 detik
pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Search limits
pub const MIN_MAX_STEPS: u64 = 100;
pub const MAX_MAX_STEPS: u64 = 10_000;
pub const DEFAULT_MAX_STEPS: u64 = 1000;
pub const SEARCH_SAFETY_CAP: usize = 100; // stop collecting after this many matches
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// Optimizer limits
pub const OPTIMIZER_STEP_CAP: u64 = 100; // max_steps used per grid cell
pub const OPTIMIZER_RESULT_LIMIT: usize = 10;

/// Sequence display
pub const SEQUENCE_DISPLAY_STEPS: u64 = 10; // reachability sequence
pub const PREVIEW_STEPS: u64 = 30; // sequence preview
