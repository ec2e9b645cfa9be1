//! Filter run diagnostics: wall-clock timing for each phase.
//!
//! Every call to [`process`](crate::process) collects timing alongside
//! the result so the UI can report how long an apply took.
//!
//! Duration measurements use [`std::time::Duration`]; timestamps are
//! captured via the `web-time` crate, which uses `performance.now()` on
//! WASM and `std::time::Instant` on native. Durations serialize as
//! fractional seconds (`f64`) since `std::time::Duration` does not
//! implement serde traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Timing collected from a single filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDiagnostics {
    /// Time spent decoding the working-copy JPEG.
    #[serde(with = "duration_serde")]
    pub decode: Duration,
    /// Time spent applying the selected filter.
    #[serde(with = "duration_serde")]
    pub filter: Duration,
    /// Time spent encoding the filtered output as JPEG.
    #[serde(with = "duration_serde")]
    pub encode: Duration,
}

impl RunDiagnostics {
    /// Total wall-clock time for the run.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.decode + self.filter + self.encode
    }
}

/// Run a closure, returning its result and elapsed wall-clock time.
pub(crate) fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_phases() {
        let diagnostics = RunDiagnostics {
            decode: Duration::from_millis(5),
            filter: Duration::from_millis(20),
            encode: Duration::from_millis(8),
        };
        assert_eq!(diagnostics.total(), Duration::from_millis(33));
    }

    #[test]
    fn serde_round_trip() {
        let diagnostics = RunDiagnostics {
            decode: Duration::from_micros(1500),
            filter: Duration::from_millis(12),
            encode: Duration::from_micros(900),
        };
        let json = serde_json::to_string(&diagnostics).unwrap();
        let deserialized: RunDiagnostics = serde_json::from_str(&json).unwrap();
        assert_eq!(diagnostics, deserialized);
    }

    #[test]
    fn negative_seconds_fail_to_deserialize() {
        let result: Result<RunDiagnostics, _> =
            serde_json::from_str(r#"{"decode":-1.0,"filter":0.0,"encode":0.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn time_measures_a_closure() {
        let (value, elapsed) = time(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }
}
