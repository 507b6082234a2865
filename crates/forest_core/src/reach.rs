use log::debug;
use serde::Serialize;

use crate::constants::SEQUENCE_DISPLAY_STEPS;
use crate::time::{DayDuration, to_duration};

/// One element of the displayed path from start to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceItem {
    Day(u64),
    /// Marks the elided middle of a long path.
    Ellipsis,
}

/// Result of asking whether `target` lies on `start + n * stride`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReachabilityOutcome {
    /// Stride of zero never advances.
    InvalidStride,
    /// Target is already behind the start day.
    PastTarget { nearest_above: u64, n_above: u64 },
    ExactlyReachable {
        n: u64,
        sequence: Vec<SequenceItem>,
        duration: DayDuration,
    },
    ApproximatelyReachable {
        nearest_below: u64,
        nearest_above: u64,
        n_below: u64,
        n_above: u64,
        duration_below: DayDuration,
        duration_above: DayDuration,
        /// target - nearest_below
        gap: u64,
        /// nearest_above - target
        overshoot: u64,
    },
}

impl ReachabilityOutcome {
    /// Step count when the target is exactly reachable.
    pub fn exact_steps(&self) -> Option<u64> {
        match self {
            ReachabilityOutcome::ExactlyReachable { n, .. } => Some(*n),
            _ => None,
        }
    }
}

pub fn solve(start: u64, target: u64, stride: u64) -> ReachabilityOutcome {
    if stride == 0 {
        debug!("solve: stride is zero");
        return ReachabilityOutcome::InvalidStride;
    }
    if target < start {
        debug!("solve: target {} is before start {}", target, start);
        return ReachabilityOutcome::PastTarget {
            nearest_above: start,
            n_above: 0,
        };
    }

    let diff = target - start;
    let n_below = diff / stride;
    let remainder = diff % stride;

    if remainder == 0 {
        debug!("solve: {} -> {} exact in {} steps of {}", start, target, n_below, stride);
        return ReachabilityOutcome::ExactlyReachable {
            n: n_below,
            sequence: exact_sequence(start, target, stride, n_below),
            duration: to_duration(n_below),
        };
    }

    let n_above = n_below + 1;
    let nearest_below = start + n_below * stride;
    // can only exceed u64 when target is within one stride of u64::MAX
    let nearest_above = nearest_below.saturating_add(stride);
    debug!(
        "solve: {} -> {} not exact with stride {}, between {} and {}",
        start, target, stride, nearest_below, nearest_above
    );

    ReachabilityOutcome::ApproximatelyReachable {
        nearest_below,
        nearest_above,
        n_below,
        n_above,
        duration_below: to_duration(n_below),
        duration_above: to_duration(n_above),
        gap: target - nearest_below,
        overshoot: nearest_above - target,
    }
}

/// `start, start+stride, ...` for at most [`SEQUENCE_DISPLAY_STEPS`] steps,
/// then an ellipsis and the target when the path is longer.
fn exact_sequence(start: u64, target: u64, stride: u64, n: u64) -> Vec<SequenceItem> {
    let shown = n.min(SEQUENCE_DISPLAY_STEPS);
    let mut sequence: Vec<SequenceItem> = (0..=shown)
        .map(|i| SequenceItem::Day(start + i * stride))
        .collect();
    if n > SEQUENCE_DISPLAY_STEPS {
        sequence.push(SequenceItem::Ellipsis);
        sequence.push(SequenceItem::Day(target));
    }
    sequence
}
