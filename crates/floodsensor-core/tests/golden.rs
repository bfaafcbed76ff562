use std::fs;
use std::path::Path;

use floodsensor_core::{Record, RecordKind, Report, ScheduleSetting, decode_webhook_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("webhook.json");
    let expected = load_expected_report(dir);

    let mut actual = decode_webhook_file(&input, RecordKind::Auto).expect("decode webhook");
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_reading() {
    run_golden("tests/golden/reading");
}

#[test]
fn golden_settings_interval() {
    run_golden("tests/golden/settings_interval");
}

#[test]
fn golden_settings_daily() {
    run_golden("tests/golden/settings_daily");
}

#[test]
fn golden_settings_monthly() {
    run_golden("tests/golden/settings_monthly");
}

#[test]
fn golden_settings_daily_skips_unset_slots() {
    let report = load_expected_report("tests/golden/settings_daily");
    let Record::Settings(settings) = report.record else {
        panic!("expected settings record");
    };
    let ScheduleSetting::Daily { entries } = settings.schedule else {
        panic!("expected daily schedule");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[1].hour, entries[1].minute), (18, 0));
}

#[test]
fn golden_unix_date_is_normalized() {
    let report = load_expected_report("tests/golden/settings_daily");
    let envelope = report.envelope.expect("envelope");
    assert_eq!(envelope.date.as_deref(), Some("2024-05-01T00:30:00Z"));
}
