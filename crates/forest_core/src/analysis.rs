use serde::Serialize;

use crate::constants::PREVIEW_STEPS;
use crate::pattern::{PatternKind, all_matches};

/// Properties of a single day, as shown in its detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberProfile {
    pub value: u64,
    pub digit_count: usize,
    pub is_even: bool,
    pub divisible_by_5: bool,
    pub divisible_by_10: bool,
    pub patterns: Vec<PatternKind>,
}

impl NumberProfile {
    pub fn is_beautiful(&self) -> bool {
        !self.patterns.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|kind| kind.label()).collect()
    }
}

pub fn analyze_number(value: u64) -> NumberProfile {
    NumberProfile {
        value,
        digit_count: value.to_string().len(),
        is_even: value % 2 == 0,
        divisible_by_5: value % 5 == 0,
        divisible_by_10: value % 10 == 0,
        patterns: all_matches(value),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub day: u64,
    pub patterns: Vec<PatternKind>,
}

/// The first days on the way from `start` to `target`, each with its patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequencePreview {
    pub entries: Vec<PreviewEntry>,
    pub target: u64,
    /// More than [`PREVIEW_STEPS`] steps lie between start and target.
    pub truncated: bool,
}

pub fn sequence_preview(start: u64, target: u64, stride: u64, steps: u64) -> SequencePreview {
    if stride == 0 {
        return SequencePreview {
            entries: Vec::new(),
            target,
            truncated: false,
        };
    }

    let entries = (0..=steps.min(PREVIEW_STEPS))
        .map_while(|i| i.checked_mul(stride).and_then(|offset| start.checked_add(offset)))
        .map(|day| PreviewEntry {
            day,
            patterns: all_matches(day),
        })
        .collect();

    SequencePreview {
        entries,
        target,
        truncated: steps > PREVIEW_STEPS,
    }
}
