use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("Invalid input: {}", join_input_errors(.0))]
    InvalidInput(Vec<InputError>),
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<Vec<InputError>> for CalcError {
    fn from(errors: Vec<InputError>) -> Self {
        CalcError::InvalidInput(errors)
    }
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    CurrentDay(i64),
    Children { value: i64, max: u64 },
    Beds { value: i64, max: u64 },
    TargetDay(i64),
    MaxSteps { value: i64, min: u64, max: u64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::CurrentDay(v) => write!(f, "current day must be >= 0, got {}", v),
            InputError::Children { value, max } => {
                write!(f, "children must be 0-{}, got {}", max, value)
            }
            InputError::Beds { value, max } => write!(f, "beds must be 0-{}, got {}", max, value),
            InputError::TargetDay(v) => write!(f, "target day must be >= 0, got {}", v),
            InputError::MaxSteps { value, min, max } => {
                write!(f, "max steps must be {}-{}, got {}", min, max, value)
            }
        }
    }
}

fn join_input_errors(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_lists_every_field() {
        let err = CalcError::from(vec![
            InputError::CurrentDay(-1),
            InputError::Beds { value: 9, max: 4 },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("current day must be >= 0, got -1"));
        assert!(msg.contains("beds must be 0-4, got 9"));
    }
}
