use serde::Serialize;

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Real time needed to advance a number of in-game days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDuration {
    pub total_steps: u64,
    pub total_seconds: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// e.g. "1 jam 3 menit 0 detik"; the hours segment is left out when zero
    pub formatted: String,
}

/// Converts a step count into a [`DayDuration`] at [`SECONDS_PER_DAY`] per step.
pub fn to_duration(steps: u64) -> DayDuration {
    let total_seconds = steps.saturating_mul(SECONDS_PER_DAY);
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    let formatted = if hours > 0 {
        format!("{} jam {} menit {} detik", hours, minutes, seconds)
    } else {
        format!("{} menit {} detik", minutes, seconds)
    };

    DayDuration {
        total_steps: steps,
        total_seconds,
        hours,
        minutes,
        seconds,
        formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_omits_hours() {
        let d = to_duration(1);
        assert_eq!(d.total_seconds, 270);
        assert_eq!(d.hours, 0);
        assert_eq!(d.minutes, 4);
        assert_eq!(d.seconds, 30);
        assert_eq!(d.formatted, "4 menit 30 detik");
    }

    #[test]
    fn test_fourteen_steps_crosses_an_hour() {
        let d = to_duration(14);
        assert_eq!(d.total_seconds, 3780);
        assert_eq!((d.hours, d.minutes, d.seconds), (1, 3, 0));
        assert_eq!(d.formatted, "1 jam 3 menit 0 detik");
    }

    #[test]
    fn test_zero_steps() {
        let d = to_duration(0);
        assert_eq!(d.total_seconds, 0);
        assert_eq!(d.formatted, "0 menit 0 detik");
    }
}
