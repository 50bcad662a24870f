//! Planned-vs-actual delay classification.

use std::fmt;

use jiff::{SignedDuration, Timestamp};

/// Clock/network jitter absorbed before a step counts as late or early.
const GRACE: SignedDuration = SignedDuration::from_secs(60);

/// Classification of a step's timing against its planned deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayStatus {
    /// Completed (or running) past the deadline
    Delayed,

    /// Completed before the deadline
    Ahead,

    /// Still pending with time remaining before the deadline
    TimeLeft,

    /// Within the one-minute dead zone around the deadline
    OnTime,

    /// No planned deadline exists for the step
    NoTarget,
}

/// Delay classification with its magnitude.
///
/// The magnitude is always non-negative; the status carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    pub status: DelayStatus,
    pub magnitude: SignedDuration,
}

/// Classifies a step's timing.
///
/// The reference point is `actual` when the step is complete, otherwise
/// `now`, so an unfinished step's delay keeps growing live. A missing
/// `planned` yields [`DelayStatus::NoTarget`], which is distinct from
/// on-time.
pub fn classify(planned: Option<Timestamp>, actual: Option<Timestamp>, now: Timestamp) -> Delay {
    let Some(planned) = planned else {
        return Delay {
            status: DelayStatus::NoTarget,
            magnitude: SignedDuration::ZERO,
        };
    };

    let reference = actual.unwrap_or(now);
    let delta = reference.duration_since(planned);

    let status = if delta > GRACE {
        DelayStatus::Delayed
    } else if delta < -GRACE {
        if actual.is_some() {
            DelayStatus::Ahead
        } else {
            DelayStatus::TimeLeft
        }
    } else {
        DelayStatus::OnTime
    };

    Delay {
        status,
        magnitude: delta.abs(),
    }
}

impl Delay {
    /// Hours/minutes breakdown of the magnitude, e.g. `1h 30m`.
    fn breakdown(&self) -> String {
        let total_minutes = self.magnitude.as_mins();
        format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            DelayStatus::Delayed => write!(f, "delayed by {}", self.breakdown()),
            DelayStatus::Ahead => write!(f, "ahead by {}", self.breakdown()),
            DelayStatus::TimeLeft => write!(f, "{} left", self.breakdown()),
            DelayStatus::OnTime => write!(f, "on time"),
            DelayStatus::NoTarget => write!(f, "no target"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    #[test]
    fn test_late_actual_is_delayed() {
        let planned = ts("2024-01-01T10:00:00Z");
        let actual = ts("2024-01-01T11:30:00Z");
        let delay = classify(Some(planned), Some(actual), actual);

        assert_eq!(delay.status, DelayStatus::Delayed);
        assert_eq!(delay.to_string(), "delayed by 1h 30m");
    }

    #[test]
    fn test_early_actual_is_ahead() {
        let planned = ts("2024-01-01T10:00:00Z");
        let actual = ts("2024-01-01T08:30:00Z");
        let delay = classify(Some(planned), Some(actual), actual);

        assert_eq!(delay.status, DelayStatus::Ahead);
        assert_eq!(delay.to_string(), "ahead by 1h 30m");
    }

    #[test]
    fn test_dead_zone_is_on_time() {
        let planned = ts("2024-01-01T10:00:00Z");
        let actual = ts("2024-01-01T10:00:30Z");
        let delay = classify(Some(planned), Some(actual), actual);

        assert_eq!(delay.status, DelayStatus::OnTime);
        assert_eq!(delay.to_string(), "on time");

        let just_early = ts("2024-01-01T09:59:15Z");
        assert_eq!(
            classify(Some(planned), Some(just_early), just_early).status,
            DelayStatus::OnTime
        );
    }

    #[test]
    fn test_pending_step_measures_time_left() {
        let planned = ts("2024-01-01T12:00:00Z");
        let now = ts("2024-01-01T09:45:00Z");
        let delay = classify(Some(planned), None, now);

        assert_eq!(delay.status, DelayStatus::TimeLeft);
        assert_eq!(delay.to_string(), "2h 15m left");
    }

    #[test]
    fn test_pending_step_delay_grows_live() {
        let planned = ts("2024-01-01T10:00:00Z");
        let now = ts("2024-01-01T13:05:00Z");
        let delay = classify(Some(planned), None, now);

        assert_eq!(delay.status, DelayStatus::Delayed);
        assert_eq!(delay.to_string(), "delayed by 3h 05m");
    }

    #[test]
    fn test_missing_planned_is_no_target() {
        let now = ts("2024-01-01T10:00:00Z");
        let delay = classify(None, None, now);

        assert_eq!(delay.status, DelayStatus::NoTarget);
        assert_eq!(delay.to_string(), "no target");
    }
}
