use std::fmt;
use std::str::FromStr;

use log::warn;
use regex::Regex;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{CalcError, Result};

/// Named structural predicates over the decimal form of a day.
///
/// Variant order is catalog order: [`all_matches`] reports kinds in this
/// order and the first one becomes the primary name of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PatternKind {
    SameDigits,     // 1111, 2222
    Ascending,      // 1234, 2345
    Descending,     // 4321, 3210
    Palindrome,     // 1221, 12321
    Alternating,    // 1212, 121212
    DoubleDouble,   // 1122, 112233
    TriplePattern,  // 111222
    StepPattern,    // 1357, 2468
    MirrorPairs,    // 1221, 2112
    RepeatingPairs, // 1313, 2424
    FibonacciLike,  // 1123, 2358
    RoundNumber,    // 1000, 1500
    CenturyNumber,  // 1900, 2000
    LuckyNumber,    // 777, 8888
}

impl PatternKind {
    /// Human-readable label shown next to a match.
    pub fn label(self) -> &'static str {
        use PatternKind::*;
        match self {
            SameDigits => "Digit Sama",
            Ascending => "Urut Naik",
            Descending => "Urut Turun",
            Palindrome => "Palindrome",
            Alternating => "Alternating",
            DoubleDouble => "Double-Double",
            TriplePattern => "Triple Pattern",
            StepPattern => "Step Pattern",
            MirrorPairs => "Mirror Pairs",
            RepeatingPairs => "Repeating Pairs",
            FibonacciLike => "Fibonacci-like",
            RoundNumber => "Round Number",
            CenturyNumber => "Century Number",
            LuckyNumber => "Lucky Number",
        }
    }

    /// Stable identifier, e.g. `"sameDigits"`.
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn matches(self, value: u64) -> bool {
        self.matches_digits(&DecimalDigits::new(value))
    }

    fn matches_digits(self, d: &DecimalDigits) -> bool {
        use PatternKind::*;
        match self {
            SameDigits => is_same_digits(d),
            Ascending => is_run(d, 1),
            Descending => is_run(d, -1),
            Palindrome => is_palindrome(d),
            Alternating => is_alternating(d),
            DoubleDouble => is_double_double(d),
            TriplePattern => is_triple(d),
            StepPattern => is_step(d),
            MirrorPairs => is_mirror_pairs(d),
            RepeatingPairs => is_repeating_pairs(d),
            FibonacciLike => is_fibonacci_like(d),
            RoundNumber => is_round(d.value),
            CenturyNumber => is_century(d.value),
            LuckyNumber => is_lucky(d),
        }
    }

    /// Parses a catalog id, also accepting the older short names
    /// (`fibonacci`, `roundNumbers`, `century`, `lucky`).
    pub fn from_name(name: &str) -> Option<Self> {
        if let Ok(kind) = PatternKind::from_str(name) {
            return Some(kind);
        }
        match name {
            "fibonacci" => Some(PatternKind::FibonacciLike),
            "roundNumbers" => Some(PatternKind::RoundNumber),
            "century" => Some(PatternKind::CenturyNumber),
            "lucky" => Some(PatternKind::LuckyNumber),
            _ => None,
        }
    }
}

/// Which predicate a classification asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternQuery {
    /// Any catalog kind (custom pattern excluded).
    All,
    /// Only the user-supplied regular expression.
    Custom,
    Kind(PatternKind),
}

impl PatternQuery {
    /// Label used as primary name when the query names a single predicate.
    pub fn label(self) -> &'static str {
        match self {
            PatternQuery::All => "Pattern",
            PatternQuery::Custom => "Custom Pattern",
            PatternQuery::Kind(kind) => kind.label(),
        }
    }
}

impl FromStr for PatternQuery {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(PatternQuery::All),
            "custom" | "customRegex" | "customPattern" => Ok(PatternQuery::Custom),
            other => PatternKind::from_name(other)
                .map(PatternQuery::Kind)
                .ok_or_else(|| CalcError::UnknownPattern(other.to_string())),
        }
    }
}

impl fmt::Display for PatternQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternQuery::All => write!(f, "all"),
            PatternQuery::Custom => write!(f, "custom"),
            PatternQuery::Kind(kind) => write!(f, "{}", kind),
        }
    }
}

/// A user-supplied regular expression tested against the decimal string.
///
/// An expression that fails to compile is kept around but never matches.
#[derive(Debug, Clone)]
pub struct CustomPattern {
    regex: Option<Regex>,
}

impl CustomPattern {
    pub fn new(source: &str) -> Self {
        let regex = match Regex::new(source) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Custom pattern '{}' does not compile, ignoring it: {}", source, e);
                None
            }
        };
        Self { regex }
    }

    /// Empty or missing sources count as "no custom pattern".
    pub fn from_option(source: Option<&str>) -> Option<Self> {
        source.filter(|s| !s.is_empty()).map(Self::new)
    }

    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    pub fn is_match(&self, value: u64) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|re| re.is_match(&value.to_string()))
    }
}

/// A query bundled with its compiled custom pattern, reused across a search.
#[derive(Debug, Clone)]
pub struct Classifier {
    query: PatternQuery,
    custom: Option<CustomPattern>,
}

impl Classifier {
    pub fn new(query: PatternQuery, custom: Option<&str>) -> Self {
        Self {
            query,
            custom: CustomPattern::from_option(custom),
        }
    }

    pub fn query(&self) -> PatternQuery {
        self.query
    }

    pub fn matches(&self, value: u64) -> bool {
        match self.query {
            PatternQuery::All => {
                let digits = DecimalDigits::new(value);
                PatternKind::iter().any(|kind| kind.matches_digits(&digits))
            }
            PatternQuery::Custom => self.custom.as_ref().is_some_and(|c| c.is_match(value)),
            PatternQuery::Kind(kind) => kind.matches(value),
        }
    }

    /// Name reported for a value that already matched this classifier.
    pub fn primary_name(&self, value: u64) -> &'static str {
        match self.query {
            PatternQuery::All => all_matches(value)
                .first()
                .map(|kind| kind.label())
                .unwrap_or("Pattern"),
            other => other.label(),
        }
    }
}

/// Tests `value` against a single query.
pub fn classify(value: u64, query: PatternQuery, custom: Option<&str>) -> bool {
    Classifier::new(query, custom).matches(value)
}

/// Like [`classify`] but takes the query by name; unknown names never match.
pub fn classify_by_name(value: u64, name: &str, custom: Option<&str>) -> bool {
    match PatternQuery::from_str(name) {
        Ok(query) => classify(value, query, custom),
        Err(_) => false,
    }
}

/// Every catalog kind `value` satisfies, in catalog order.
pub fn all_matches(value: u64) -> Vec<PatternKind> {
    let digits = DecimalDigits::new(value);
    PatternKind::iter()
        .filter(|kind| kind.matches_digits(&digits))
        .collect()
}

/* ----------------- predicates ----------------- */

struct DecimalDigits {
    value: u64,
    digits: Vec<i8>,
}

impl DecimalDigits {
    fn new(value: u64) -> Self {
        let digits = value.to_string().bytes().map(|b| (b - b'0') as i8).collect();
        Self { value, digits }
    }

    fn len(&self) -> usize {
        self.digits.len()
    }
}

fn is_same_digits(d: &DecimalDigits) -> bool {
    d.len() > 1 && d.digits.iter().all(|&x| x == d.digits[0])
}

/// Each digit differs from the previous one by exactly `delta`.
fn is_run(d: &DecimalDigits, delta: i8) -> bool {
    d.len() > 1 && d.digits.windows(2).all(|w| w[1] - w[0] == delta)
}

fn is_palindrome(d: &DecimalDigits) -> bool {
    d.len() > 1 && d.digits.iter().eq(d.digits.iter().rev())
}

fn is_alternating(d: &DecimalDigits) -> bool {
    if d.len() < 4 || d.len() % 2 != 0 {
        return false;
    }
    let first = &d.digits[..2];
    d.digits.chunks(2).all(|block| block == first)
}

fn is_double_double(d: &DecimalDigits) -> bool {
    let x = &d.digits;
    match x.len() {
        4 => x[0] == x[1] && x[2] == x[3] && x[0] != x[2],
        6 => {
            x[0] == x[1] && x[2] == x[3] && x[4] == x[5] && x[0] != x[2] && x[2] != x[4]
        }
        _ => false,
    }
}

fn is_triple(d: &DecimalDigits) -> bool {
    let x = &d.digits;
    x.len() == 6
        && x[0] == x[1]
        && x[1] == x[2]
        && x[3] == x[4]
        && x[4] == x[5]
        && x[0] != x[3]
}

// Only positive steps of 1..=4 count.
fn is_step(d: &DecimalDigits) -> bool {
    if d.len() < 3 {
        return false;
    }
    let step = d.digits[1] - d.digits[0];
    (1..=4).contains(&step) && d.digits.windows(2).skip(1).all(|w| w[1] - w[0] == step)
}

fn is_mirror_pairs(d: &DecimalDigits) -> bool {
    let x = &d.digits;
    x.len() == 4 && x[0] == x[3] && x[1] == x[2]
}

fn is_repeating_pairs(d: &DecimalDigits) -> bool {
    let x = &d.digits;
    x.len() == 4 && x[0] == x[2] && x[1] == x[3] && x[0] != x[1]
}

fn is_fibonacci_like(d: &DecimalDigits) -> bool {
    d.len() >= 4
        && d
            .digits
            .windows(3)
            .all(|w| w[2] == (w[0] + w[1]) % 10)
}

fn is_round(value: u64) -> bool {
    value >= 100 && (value % 100 == 0 || value % 500 == 0)
}

fn is_century(value: u64) -> bool {
    (1000..=3000).contains(&value) && value % 100 == 0
}

fn is_lucky(d: &DecimalDigits) -> bool {
    d.len() >= 3 && (d.digits.iter().all(|&x| x == 7) || d.digits.iter().all(|&x| x == 8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use PatternKind::*;

    fn is(value: u64, kind: PatternKind) -> bool {
        classify(value, PatternQuery::Kind(kind), None)
    }

    #[test]
    fn test_catalog_samples() {
        assert!(is(2222, SameDigits));
        assert!(!is(232, SameDigits));
        assert!(is(1234, Ascending));
        assert!(is(4321, Descending));
        assert!(is(1221, Palindrome));
        assert!(is(1212, Alternating));
        assert!(is(1122, DoubleDouble));
        assert!(is(111222, TriplePattern));
        assert!(is(1357, StepPattern));
        assert!(is(1221, MirrorPairs));
        assert!(is(1313, RepeatingPairs));
        assert!(is(1123, FibonacciLike));
        assert!(is(1500, RoundNumber));
        assert!(is(2000, CenturyNumber));
        assert!(is(777, LuckyNumber));
    }

    #[test]
    fn test_single_digit_matches_nothing() {
        for v in 0..10 {
            assert!(all_matches(v).is_empty(), "{} should not match", v);
        }
    }

    #[test]
    fn test_length_restrictions() {
        // alternating needs an even length of at least 4
        assert!(!is(121, Alternating));
        assert!(!is(12121, Alternating));
        assert!(is(121212, Alternating));
        // double-double only for 4 or 6 digits
        assert!(is(112233, DoubleDouble));
        assert!(!is(1111, DoubleDouble));
        assert!(!is(11223344, DoubleDouble));
        // triple needs exactly 6
        assert!(!is(111111, TriplePattern));
        assert!(!is(1112, TriplePattern));
        // mirror and repeating pairs need exactly 4
        assert!(!is(12321, MirrorPairs));
        assert!(!is(1111, RepeatingPairs));
        // lucky needs at least 3
        assert!(!is(77, LuckyNumber));
        assert!(is(8888, LuckyNumber));
        assert!(!is(787, LuckyNumber));
        // fibonacci-like needs at least 4
        assert!(!is(112, FibonacciLike));
        assert!(is(2358, FibonacciLike));
    }

    #[test]
    fn test_step_pattern_rejects_descending_and_flat() {
        assert!(is(2468, StepPattern));
        assert!(is(159, StepPattern));
        assert!(!is(1610, StepPattern)); // step 5
        assert!(!is(7531, StepPattern));
        assert!(!is(333, StepPattern));
        assert!(!is(13, StepPattern));
    }

    #[test]
    fn test_round_and_century_bounds() {
        assert!(!is(0, RoundNumber));
        assert!(is(100, RoundNumber));
        assert!(!is(150, RoundNumber));
        assert!(!is(900, CenturyNumber));
        assert!(is(3000, CenturyNumber));
        assert!(!is(3100, CenturyNumber));
        assert!(!is(1050, CenturyNumber));
    }

    #[test]
    fn test_all_matches_in_catalog_order() {
        assert_eq!(all_matches(1221), vec![Palindrome, MirrorPairs]);
        assert_eq!(all_matches(2000), vec![RoundNumber, CenturyNumber]);
        assert_eq!(
            all_matches(7777),
            vec![SameDigits, Palindrome, Alternating, MirrorPairs, LuckyNumber]
        );
    }

    #[test]
    fn test_all_matches_is_idempotent() {
        for v in [0, 12, 1221, 1234, 2000, 123456, 987_654_321] {
            assert_eq!(all_matches(v), all_matches(v));
        }
    }

    #[test]
    fn test_query_all_ignores_custom() {
        assert!(classify(1234, PatternQuery::All, None));
        assert!(!classify(1236, PatternQuery::All, Some("6$")));
        assert!(classify(1236, PatternQuery::Custom, Some("6$")));
    }

    #[test]
    fn test_custom_without_pattern_is_false() {
        assert!(!classify(1111, PatternQuery::Custom, None));
        assert!(!classify(1111, PatternQuery::Custom, Some("")));
    }

    #[test]
    fn test_invalid_custom_pattern_never_matches() {
        let custom = CustomPattern::new("(unclosed");
        assert!(!custom.is_valid());
        assert!(!custom.is_match(1));
        assert!(!classify(1, PatternQuery::Custom, Some("[")));
    }

    #[test]
    fn test_classify_by_name() {
        assert!(classify_by_name(1123, "fibonacciLike", None));
        assert!(classify_by_name(1123, "fibonacci", None));
        assert!(classify_by_name(777, "lucky", None));
        assert!(classify_by_name(4242, "customRegex", Some("^42")));
        assert!(!classify_by_name(1111, "notAPattern", None));
    }

    #[test]
    fn test_query_parsing_round_trips_ids() {
        for kind in PatternKind::iter() {
            let query: PatternQuery = kind.id().parse().unwrap();
            assert_eq!(query, PatternQuery::Kind(kind));
            assert_eq!(query.to_string(), kind.id());
        }
        assert!(matches!(
            "bogus".parse::<PatternQuery>(),
            Err(CalcError::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_primary_name() {
        let all = Classifier::new(PatternQuery::All, None);
        assert_eq!(all.primary_name(1221), "Palindrome");
        assert_eq!(all.primary_name(12), "Urut Naik");
        let custom = Classifier::new(PatternQuery::Custom, Some("1"));
        assert_eq!(custom.primary_name(1), "Custom Pattern");
        let lucky = Classifier::new(PatternQuery::Kind(LuckyNumber), None);
        assert_eq!(lucky.primary_name(777), "Lucky Number");
    }
}
