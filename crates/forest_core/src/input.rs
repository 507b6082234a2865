//! Range checks for raw user input before it reaches the calculators.

use serde::Serialize;

use crate::config::GridConfig;
use crate::constants::{MAX_MAX_STEPS, MIN_MAX_STEPS};
use crate::error::InputError;
use crate::optimize::Configuration;

/// Values as typed by the user, possibly out of range or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInputs {
    pub current_day: i64,
    pub children: i64,
    pub beds: i64,
    pub target_day: Option<i64>,
    pub max_steps: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidatedInputs {
    pub current_day: u64,
    pub configuration: Configuration,
    pub target_day: Option<u64>,
    pub max_steps: u64,
}

/// Checks every field and reports all violations at once.
pub fn validate_inputs(
    raw: &RawInputs,
    grid: &GridConfig,
) -> Result<ValidatedInputs, Vec<InputError>> {
    let mut errors = Vec::new();

    let current_day = non_negative(raw.current_day);
    if current_day.is_none() {
        errors.push(InputError::CurrentDay(raw.current_day));
    }

    let children = bounded(raw.children, grid.max_children);
    if children.is_none() {
        errors.push(InputError::Children {
            value: raw.children,
            max: grid.max_children,
        });
    }

    let beds = bounded(raw.beds, grid.max_beds);
    if beds.is_none() {
        errors.push(InputError::Beds {
            value: raw.beds,
            max: grid.max_beds,
        });
    }

    let target_day = match raw.target_day {
        Some(t) => match non_negative(t) {
            Some(t) => Some(t),
            None => {
                errors.push(InputError::TargetDay(t));
                None
            }
        },
        None => None,
    };

    let max_steps = non_negative(raw.max_steps)
        .filter(|steps| (MIN_MAX_STEPS..=MAX_MAX_STEPS).contains(steps));
    if max_steps.is_none() {
        errors.push(InputError::MaxSteps {
            value: raw.max_steps,
            min: MIN_MAX_STEPS,
            max: MAX_MAX_STEPS,
        });
    }

    match (current_day, children, beds, max_steps) {
        (Some(current_day), Some(children), Some(beds), Some(max_steps)) if errors.is_empty() => {
            Ok(ValidatedInputs {
                current_day,
                configuration: Configuration::new(grid.base_step, children, beds),
                target_day,
                max_steps,
            })
        }
        _ => Err(errors),
    }
}

fn non_negative(value: i64) -> Option<u64> {
    u64::try_from(value).ok()
}

fn bounded(value: i64, max: u64) -> Option<u64> {
    non_negative(value).filter(|v| *v <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawInputs {
        RawInputs {
            current_day: 839,
            children: 2,
            beds: 3,
            target_day: Some(1234),
            max_steps: 1000,
        }
    }

    #[test]
    fn test_valid_inputs_derive_stride() {
        let v = validate_inputs(&raw(), &GridConfig::default()).unwrap();
        assert_eq!(v.current_day, 839);
        assert_eq!(v.configuration.stride, 6);
        assert_eq!(v.target_day, Some(1234));
        assert_eq!(v.max_steps, 1000);
    }

    #[test]
    fn test_absent_target_is_fine() {
        let v = validate_inputs(
            &RawInputs {
                target_day: None,
                ..raw()
            },
            &GridConfig::default(),
        )
        .unwrap();
        assert_eq!(v.target_day, None);
    }

    #[test]
    fn test_edges_are_accepted() {
        let edge = RawInputs {
            current_day: 0,
            children: 4,
            beds: 0,
            target_day: Some(0),
            max_steps: 10_000,
        };
        assert!(validate_inputs(&edge, &GridConfig::default()).is_ok());
        let low = RawInputs {
            max_steps: 100,
            ..edge
        };
        assert!(validate_inputs(&low, &GridConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let bad = RawInputs {
            current_day: -1,
            children: 5,
            beds: -2,
            target_day: Some(-7),
            max_steps: 99,
        };
        let errors = validate_inputs(&bad, &GridConfig::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                InputError::CurrentDay(-1),
                InputError::Children { value: 5, max: 4 },
                InputError::Beds { value: -2, max: 4 },
                InputError::TargetDay(-7),
                InputError::MaxSteps {
                    value: 99,
                    min: 100,
                    max: 10_000
                },
            ]
        );
    }

    #[test]
    fn test_grid_bounds_follow_config() {
        let grid = GridConfig {
            max_children: 6,
            ..GridConfig::default()
        };
        let v = validate_inputs(
            &RawInputs {
                children: 6,
                ..raw()
            },
            &grid,
        )
        .unwrap();
        assert_eq!(v.configuration.stride, 10);
    }

    #[test]
    fn test_only_target_invalid() {
        let errors = validate_inputs(
            &RawInputs {
                target_day: Some(-1),
                ..raw()
            },
            &GridConfig::default(),
        )
        .unwrap_err();
        assert_eq!(errors, vec![InputError::TargetDay(-1)]);
    }
}
