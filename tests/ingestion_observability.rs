use std::sync::{Arc, Mutex};

use sheet_profiler::ingestion::{
    analyze_from_path, AnalysisContext, AnalysisObserver, AnalysisSeverity, AnalysisStats,
    AnalyzeOptions, CompositeObserver, FileObserver,
};
use sheet_profiler::AnalysisError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<AnalysisStats>>,
    failures: Mutex<Vec<AnalysisSeverity>>,
    alerts: Mutex<Vec<AnalysisSeverity>>,
}

impl AnalysisObserver for RecordingObserver {
    fn on_success(&self, _ctx: &AnalysisContext, stats: AnalysisStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &AnalysisContext, severity: AnalysisSeverity, _error: &AnalysisError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &AnalysisContext, severity: AnalysisSeverity, _error: &AnalysisError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

#[test]
fn observer_receives_success_with_row_and_column_counts() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = AnalyzeOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let _ = analyze_from_path("tests/fixtures/people.csv", &opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![AnalysisStats { rows: 2, columns: 4 }]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = AnalyzeOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Some(AnalysisSeverity::Critical),
        ..Default::default()
    };

    // Missing file -> I/O-backed error -> Critical
    let _ = analyze_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![AnalysisSeverity::Critical]);
    assert_eq!(alerts, vec![AnalysisSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = AnalyzeOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Some(AnalysisSeverity::Critical),
        ..Default::default()
    };

    // Header-only file -> EmptyData -> Error severity -> should not alert
    let _ = analyze_from_path("tests/fixtures/header_only.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![AnalysisSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn composite_observer_fans_out_and_file_observer_appends() {
    let recording = Arc::new(RecordingObserver::default());
    let log_path = std::env::temp_dir().join("sheet_profiler_observer_test.log");
    let _ = std::fs::remove_file(&log_path);

    let opts = AnalyzeOptions {
        observer: Some(Arc::new(CompositeObserver::new(vec![
            recording.clone(),
            Arc::new(FileObserver::new(&log_path)),
        ]))),
        ..Default::default()
    };

    let _ = analyze_from_path("tests/fixtures/people.csv", &opts).unwrap();

    assert_eq!(recording.successes.lock().unwrap().len(), 1);
    let logged = std::fs::read_to_string(&log_path).unwrap();
    assert!(logged.contains("ok format=Csv"));
    assert!(logged.contains("rows=2"));
    let _ = std::fs::remove_file(&log_path);
}
