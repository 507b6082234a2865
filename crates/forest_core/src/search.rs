use std::collections::HashSet;

use log::{debug, trace};
use serde::Serialize;

use crate::constants::{DEFAULT_MAX_STEPS, SEARCH_RESULT_LIMIT, SEARCH_SAFETY_CAP};
use crate::pattern::{Classifier, PatternKind, PatternQuery, all_matches};
use crate::time::{DayDuration, to_duration};

/// Parameters of a forward search for beautiful days.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub start: u64,
    pub stride: u64,
    pub max_steps: u64,
    pub query: PatternQuery,
    pub custom_pattern: Option<String>,
}

impl SearchRequest {
    pub fn new(start: u64, stride: u64, query: PatternQuery) -> Self {
        Self {
            start,
            stride,
            max_steps: DEFAULT_MAX_STEPS,
            query,
            custom_pattern: None,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_pattern = Some(pattern.into());
        self
    }
}

/// A reachable day that satisfies the requested query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub value: u64,
    pub steps_from_start: u64,
    /// Every catalog kind of `value`, in catalog order.
    pub matched_patterns: Vec<PatternKind>,
    pub primary_pattern_name: &'static str,
    pub duration: DayDuration,
}

/// Walks `start + n * stride` for `n = 1..=max_steps` and collects matches,
/// nearest first. At most [`SEARCH_RESULT_LIMIT`] matches are returned.
pub fn search(request: &SearchRequest) -> Vec<PatternMatch> {
    let classifier = Classifier::new(request.query, request.custom_pattern.as_deref());
    search_with(request.start, request.stride, request.max_steps, &classifier)
}

pub(crate) fn search_with(
    start: u64,
    stride: u64,
    max_steps: u64,
    classifier: &Classifier,
) -> Vec<PatternMatch> {
    if stride == 0 {
        debug!("search: stride is zero, nothing to do");
        return Vec::new();
    }

    let mut results: Vec<PatternMatch> = Vec::new();
    let mut seen: HashSet<u64> = HashSet::new();

    for n in 1..=max_steps {
        let Some(day) = n.checked_mul(stride).and_then(|offset| start.checked_add(offset)) else {
            debug!("search: day overflowed at step {}, stopping", n);
            break;
        };
        if seen.contains(&day) {
            continue;
        }

        if classifier.matches(day) {
            trace!("search: day {} matches at step {}", day, n);
            results.push(PatternMatch {
                value: day,
                steps_from_start: n,
                matched_patterns: all_matches(day),
                primary_pattern_name: classifier.primary_name(day),
                duration: to_duration(n),
            });
            seen.insert(day);
        }

        if results.len() >= SEARCH_SAFETY_CAP {
            break;
        }
    }

    debug!(
        "search: start={} stride={} query={} found {} match(es)",
        start,
        stride,
        classifier.query(),
        results.len()
    );

    results.sort_by_key(|m| m.steps_from_start);
    results.truncate(SEARCH_RESULT_LIMIT);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stride_returns_nothing() {
        let req = SearchRequest::new(10, 0, PatternQuery::All);
        assert!(search(&req).is_empty());
    }

    #[test]
    fn test_results_are_ascending_and_on_the_stride() {
        let req = SearchRequest::new(120, 9, PatternQuery::All).with_max_steps(1000);
        let results = search(&req);
        assert!(!results.is_empty());
        assert!(results.len() <= SEARCH_RESULT_LIMIT);
        for pair in results.windows(2) {
            assert!(pair[0].steps_from_start < pair[1].steps_from_start);
        }
        for m in &results {
            assert!(m.value > 120);
            assert_eq!(m.value % 9, 120 % 9);
            assert_eq!(m.value, 120 + m.steps_from_start * 9);
            assert!(!m.matched_patterns.is_empty());
            assert_eq!(m.primary_pattern_name, m.matched_patterns[0].label());
            assert_eq!(m.duration.total_steps, m.steps_from_start);
        }
    }

    #[test]
    fn test_first_match_for_stride_one() {
        // 121 is the first palindrome after 120
        let req = SearchRequest::new(120, 1, PatternQuery::Kind(PatternKind::Palindrome));
        let results = search(&req);
        assert_eq!(results[0].value, 121);
        assert_eq!(results[0].steps_from_start, 1);
        assert_eq!(results[0].primary_pattern_name, "Palindrome");
        assert_eq!(results.len(), SEARCH_RESULT_LIMIT);
    }

    #[test]
    fn test_named_kind_uses_its_label() {
        let req = SearchRequest::new(0, 7, PatternQuery::Kind(PatternKind::LuckyNumber))
            .with_max_steps(10_000);
        let results = search(&req);
        // 777 = 7 * 111, 7777 = 7 * 1111
        let values: Vec<u64> = results.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![777, 7777]);
        assert!(results.iter().all(|m| m.primary_pattern_name == "Lucky Number"));
    }

    #[test]
    fn test_custom_pattern_search() {
        let req = SearchRequest::new(0, 1, PatternQuery::Custom)
            .with_max_steps(100)
            .with_custom_pattern("^9");
        let results = search(&req);
        assert_eq!(results[0].value, 9);
        assert_eq!(results[1].value, 90);
        assert!(results.iter().all(|m| m.primary_pattern_name == "Custom Pattern"));
    }

    #[test]
    fn test_invalid_custom_pattern_finds_nothing() {
        let req = SearchRequest::new(0, 1, PatternQuery::Custom).with_custom_pattern("(");
        assert!(search(&req).is_empty());
    }

    #[test]
    fn test_max_steps_bounds_the_walk() {
        // 100 steps of 1 from 0 reach at most 100
        let req = SearchRequest::new(0, 1, PatternQuery::Kind(PatternKind::CenturyNumber))
            .with_max_steps(100);
        assert!(search(&req).is_empty());
    }

    #[test]
    fn test_overflow_stops_the_walk() {
        let req = SearchRequest::new(u64::MAX - 5, 3, PatternQuery::All);
        let results = search(&req);
        assert!(results.iter().all(|m| m.steps_from_start <= 1));
    }
}
