//! Opt-in stage timing for the analysis pipeline.
//!
//! Stages wrap their work in [`timed`]. When collection is enabled (via
//! `--timing` or `NSDICE_TIMING`), each call records its wall time in a
//! thread-local buffer that [`collect_report`] drains.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde_json::json;

/// Aggregated stage timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingReport {
    /// One entry per stage name, sorted by name.
    pub stages: Vec<StageTiming>,
}

/// Accumulated time for one named stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTiming {
    pub name: String,
    /// Sum of all recorded runs.
    pub total: Duration,
    /// Slowest single run.
    pub max: Duration,
    pub count: usize,
}

thread_local! {
    static SAMPLES: RefCell<Vec<(String, Duration)>> = const { RefCell::new(Vec::new()) };
}

static TIMING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Returns true when `NSDICE_TIMING` asks for timing collection.
///
/// Truthy values: `1`, `true`, `yes`, `on` (case-insensitive).
#[must_use]
pub fn timing_enabled_from_env() -> bool {
    std::env::var("NSDICE_TIMING")
        .ok()
        .is_some_and(|value| is_truthy(value.as_str()))
}

/// Enable or disable timing collection.
pub fn set_timing_enabled(enabled: bool) {
    TIMING_ENABLED.store(enabled, Ordering::Relaxed);
    if !enabled {
        clear_timings();
    }
}

#[must_use]
pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::Relaxed)
}

/// Drop all samples recorded on this thread.
pub fn clear_timings() {
    SAMPLES.with(|samples| samples.borrow_mut().clear());
}

/// Run `f`, recording its duration under `name` when timing is enabled.
pub fn timed<R>(name: &str, f: impl FnOnce() -> R) -> R {
    if !is_timing_enabled() {
        return f();
    }

    let started = Instant::now();
    let result = f();
    record_sample(name, started.elapsed());
    result
}

/// Drain this thread's samples into a report.
#[must_use]
pub fn collect_report() -> TimingReport {
    let samples = SAMPLES.with(|samples| std::mem::take(&mut *samples.borrow_mut()));

    let mut grouped: BTreeMap<String, StageTiming> = BTreeMap::new();
    for (name, elapsed) in samples {
        let stage = grouped.entry(name.clone()).or_insert_with(|| StageTiming {
            name,
            total: Duration::ZERO,
            max: Duration::ZERO,
            count: 0,
        });
        stage.total += elapsed;
        stage.max = stage.max.max(elapsed);
        stage.count += 1;
    }

    TimingReport {
        stages: grouped.into_values().collect(),
    }
}

impl TimingReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Sum of every stage's total.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.stages.iter().map(|s| s.total).sum()
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let stages = self
            .stages
            .iter()
            .map(|stage| {
                json!({
                    "name": stage.name,
                    "count": stage.count,
                    "total_us": stage.total.as_micros(),
                    "max_us": stage.max.as_micros(),
                })
            })
            .collect::<Vec<_>>();

        json!({ "stages": stages, "total_us": self.total().as_micros() })
    }

    /// Render as a fixed-width table for stderr.
    #[must_use]
    pub fn display_table(&self) -> String {
        use std::fmt::Write as _;

        if self.stages.is_empty() {
            return "No timing samples recorded.".to_string();
        }

        let mut out = String::new();
        out.push_str("stage                 count      total        max\n");
        out.push_str("--------------------------------------------------\n");

        for stage in &self.stages {
            let _ = writeln!(
                out,
                "{:<20} {:>6} {:>10} {:>10}",
                stage.name,
                stage.count,
                format_duration(stage.total),
                format_duration(stage.max)
            );
        }
        let _ = writeln!(out, "{:<20} {:>6} {:>10}", "total", "", format_duration(self.total()));

        out
    }
}

fn record_sample(name: &str, elapsed: Duration) {
    SAMPLES.with(|samples| samples.borrow_mut().push((name.to_string(), elapsed)));
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();

    if micros >= 1_000_000 {
        let secs = micros / 1_000_000;
        let millis = (micros % 1_000_000) / 1_000;
        format!("{secs}.{millis:03}s")
    } else if micros >= 1_000 {
        let millis = micros / 1_000;
        let rem = micros % 1_000;
        format!("{millis}.{rem:03}ms")
    } else {
        format!("{micros}µs")
    }
}

fn is_truthy(value: &str) -> bool {
    ["1", "true", "yes", "on"]
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn timed_does_not_record_when_disabled() {
        let _guard = TEST_GUARD.lock().expect("test guard lock");
        set_timing_enabled(false);

        let value = timed("disabled", || 7_u8);
        assert_eq!(value, 7);
        assert!(collect_report().is_empty());
    }

    #[test]
    fn timed_records_when_enabled() {
        let _guard = TEST_GUARD.lock().expect("test guard lock");
        set_timing_enabled(true);
        clear_timings();

        let value = timed("build", || {
            std::thread::sleep(Duration::from_millis(1));
            42_u8
        });
        assert_eq!(value, 42);

        let report = collect_report();
        assert_eq!(report.stages.len(), 1);
        assert_eq!(report.stages[0].name, "build");
        assert_eq!(report.stages[0].count, 1);
        assert!(report.stages[0].total >= Duration::from_millis(1));

        set_timing_enabled(false);
    }

    #[test]
    fn collect_report_groups_by_stage() {
        let _guard = TEST_GUARD.lock().expect("test guard lock");
        clear_timings();

        record_sample("reduce", Duration::from_micros(3_000));
        record_sample("reduce", Duration::from_micros(1_000));
        record_sample("generate", Duration::from_micros(5_000));

        let report = collect_report();
        let names: Vec<&str> = report.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["generate", "reduce"]);

        let reduce = &report.stages[1];
        assert_eq!(reduce.count, 2);
        assert_eq!(reduce.total, Duration::from_micros(4_000));
        assert_eq!(reduce.max, Duration::from_micros(3_000));
        assert_eq!(report.total(), Duration::from_micros(9_000));
    }

    #[test]
    fn truthy_parser_is_case_insensitive() {
        assert!(is_truthy("TrUe"));
        assert!(is_truthy("1"));
        assert!(is_truthy("YES"));
        assert!(is_truthy("on"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
    }

    #[test]
    fn display_table_and_json_have_expected_fields() {
        let _guard = TEST_GUARD.lock().expect("test guard lock");
        clear_timings();

        record_sample("build", Duration::from_micros(1_500));

        let report = collect_report();
        let table = report.display_table();
        assert!(table.contains("stage"));
        assert!(table.contains("build"));
        assert!(table.contains("1.500ms"));

        let json = report.to_json();
        let stages = json
            .get("stages")
            .and_then(serde_json::Value::as_array)
            .expect("stages array should exist");
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].get("count"), Some(&serde_json::Value::from(1)));
        assert_eq!(json.get("total_us"), Some(&serde_json::Value::from(1_500)));
    }
}
