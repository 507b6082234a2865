//! Plain-text rendering of calculator results.

use forest_core::{
    CandidateOutcome, NumberProfile, OptimizationCandidate, PatternMatch, ReachabilityOutcome,
    SequenceItem, SequencePreview, analyze_number,
};
use std::fmt::Write;

pub fn reachability(outcome: &ReachabilityOutcome, target: u64) -> String {
    let mut out = String::new();
    match outcome {
        ReachabilityOutcome::InvalidStride => {
            let _ = writeln!(out, "Error: effective step must not be 0");
        }
        ReachabilityOutcome::PastTarget { nearest_above, .. } => {
            let _ = writeln!(out, "Target {} is NOT exactly reachable", target);
            let _ = writeln!(
                out,
                "Target is in the past (current day {} is already beyond it)",
                nearest_above
            );
        }
        ReachabilityOutcome::ExactlyReachable {
            n,
            sequence,
            duration,
        } => {
            let _ = writeln!(out, "Target {} is reachable", target);
            let _ = writeln!(out, "Steps (n): {}", n);
            let _ = writeln!(out, "Time needed: {}", duration.formatted);

            let profile = analyze_number(target);
            if profile.is_beautiful() {
                let _ = writeln!(
                    out,
                    "Target is a beautiful number: {}",
                    profile.labels().join(", ")
                );
            }

            let items: Vec<String> = sequence
                .iter()
                .map(|item| match item {
                    SequenceItem::Day(day) => day.to_string(),
                    SequenceItem::Ellipsis => "...".to_string(),
                })
                .collect();
            let _ = writeln!(out, "Sequence: {}", items.join(" -> "));
        }
        ReachabilityOutcome::ApproximatelyReachable {
            nearest_below,
            nearest_above,
            n_below,
            n_above,
            duration_below,
            duration_above,
            gap,
            overshoot,
        } => {
            let _ = writeln!(out, "Target {} is NOT exactly reachable", target);
            let _ = writeln!(
                out,
                "Nearest below: day {} in {} steps ({}), {} days short",
                nearest_below, n_below, duration_below.formatted, gap
            );
            let _ = writeln!(
                out,
                "Nearest above: day {} in {} steps ({}), {} days over",
                nearest_above, n_above, duration_above.formatted, overshoot
            );
        }
    }
    out
}

pub fn matches(matches: &[PatternMatch]) -> String {
    if matches.is_empty() {
        return "No beautiful numbers found within the step limit.\n".to_string();
    }

    let mut out = format!("Found {} beautiful number(s):\n", matches.len());
    for m in matches {
        let all: Vec<&str> = m.matched_patterns.iter().map(|k| k.label()).collect();
        let _ = writeln!(
            out,
            "  day {:<8} n={:<6} {:<16} {:<24} [{}]",
            m.value,
            m.steps_from_start,
            m.primary_pattern_name,
            m.duration.formatted,
            all.join(", ")
        );
    }
    out
}

pub fn candidates(candidates: &[OptimizationCandidate], target: Option<u64>) -> String {
    if candidates.is_empty() {
        return match target {
            Some(t) => format!("No configuration reaches day {} exactly.\n", t),
            None => "No configuration finds a beautiful number within 100 steps.\n".to_string(),
        };
    }

    let mut out = match target {
        Some(t) => format!("Configurations reaching day {}:\n", t),
        None => "Configurations with the nearest beautiful numbers:\n".to_string(),
    };
    for (i, c) in candidates.iter().enumerate() {
        let cfg = &c.configuration;
        let _ = write!(
            out,
            "  #{:<2} children={} beds={} step={} n={}",
            i + 1,
            cfg.children,
            cfg.beds,
            cfg.stride,
            c.score
        );
        match &c.outcome {
            CandidateOutcome::TargetReached { outcome } => {
                if let ReachabilityOutcome::ExactlyReachable { duration, .. } = outcome {
                    let _ = write!(out, " ({})", duration.formatted);
                }
            }
            CandidateOutcome::NearestPattern {
                nearest,
                match_count,
            } => {
                let _ = write!(
                    out,
                    " -> day {} ({}), {} match(es)",
                    nearest.value, nearest.primary_pattern_name, match_count
                );
            }
        }
        out.push('\n');
    }
    out
}

pub fn profile(profile: &NumberProfile) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut out = format!("Number analysis: {}\n", profile.value);
    if profile.is_beautiful() {
        let _ = writeln!(out, "Patterns: {}", profile.labels().join(", "));
    } else {
        let _ = writeln!(out, "No special pattern found.");
    }
    let _ = writeln!(out, "Digits: {}", profile.digit_count);
    let _ = writeln!(out, "Even: {}", yes_no(profile.is_even));
    let _ = writeln!(out, "Divisible by 5: {}", yes_no(profile.divisible_by_5));
    let _ = writeln!(out, "Divisible by 10: {}", yes_no(profile.divisible_by_10));
    out
}

pub fn preview(preview: &SequencePreview) -> String {
    let mut parts: Vec<String> = preview
        .entries
        .iter()
        .map(|e| {
            if e.patterns.is_empty() {
                e.day.to_string()
            } else {
                let ids: Vec<&str> = e.patterns.iter().map(|k| k.id()).collect();
                format!("{}*({})", e.day, ids.join(", "))
            }
        })
        .collect();
    if preview.truncated {
        parts.push(format!("... {}", preview.target));
    }
    format!("{}\n", parts.join(" -> "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_core::{OptimizeRequest, optimize, sequence_preview, solve};

    #[test]
    fn test_exact_report() {
        let text = reachability(&solve(0, 2000, 100), 2000);
        assert!(text.contains("Target 2000 is reachable"));
        assert!(text.contains("Steps (n): 20"));
        assert!(text.contains("Round Number, Century Number"));
        assert!(text.contains("0 -> 100 -> "));
        assert!(text.contains("-> ... -> 2000"));
    }

    #[test]
    fn test_approximate_report() {
        let text = reachability(&solve(839, 1234, 9), 1234);
        assert!(text.contains("NOT exactly reachable"));
        assert!(text.contains("8 days short"));
        assert!(text.contains("1 days over"));
    }

    #[test]
    fn test_empty_reports() {
        assert!(matches(&[]).starts_with("No beautiful numbers"));
        assert!(candidates(&[], Some(5)).contains("day 5"));
    }

    #[test]
    fn test_candidates_report() {
        let cands = optimize(&OptimizeRequest::new(839, Some(1234)));
        let text = candidates(&cands, Some(1234));
        assert!(text.contains("#1  children=0 beds=4 step=5 n=79"));
    }

    #[test]
    fn test_profile_report() {
        let text = profile(&analyze_number(1221));
        assert!(text.contains("Patterns: Palindrome, Mirror Pairs"));
        assert!(text.contains("Even: no"));
    }

    #[test]
    fn test_preview_report() {
        let text = preview(&sequence_preview(120, 123, 1, 3));
        assert_eq!(text, "120 -> 121*(palindrome) -> 122 -> 123*(ascending, stepPattern)\n");
    }
}
