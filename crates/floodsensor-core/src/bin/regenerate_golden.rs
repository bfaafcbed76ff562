use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use floodsensor_core::{RecordKind, Report, decode_webhook_file};
use serde_json::Value;

const GOLDEN_ROOT: &str = "tests/golden";
const CASES: [&str; 4] = [
    "reading",
    "settings_interval",
    "settings_daily",
    "settings_monthly",
];

/// Rewrites every `expected_report.json`, or with `--check` reports the
/// cases whose stored report no longer matches the decoder.
fn main() -> ExitCode {
    let check = env::args().skip(1).any(|arg| arg == "--check");
    let mut stale = Vec::new();

    for case in CASES {
        let dir = Path::new(GOLDEN_ROOT).join(case);
        let report = match decode_case(&dir) {
            Ok(report) => report,
            Err(err) => {
                eprintln!("error: {case}: {err}");
                return ExitCode::from(1);
            }
        };
        let outcome = if check {
            compare_case(&dir, &report).map(|fresh| {
                if !fresh {
                    stale.push(case);
                }
            })
        } else {
            write_case(&dir, &report)
        };
        if let Err(err) = outcome {
            eprintln!("error: {case}: {err}");
            return ExitCode::from(1);
        }
    }

    if !stale.is_empty() {
        eprintln!("stale golden reports: {}", stale.join(", "));
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn decode_case(dir: &Path) -> Result<Report, String> {
    decode_webhook_file(&dir.join("webhook.json"), RecordKind::Auto).map_err(|err| err.to_string())
}

fn write_case(dir: &Path, report: &Report) -> Result<(), String> {
    let json = serde_json::to_string(report).map_err(|err| err.to_string())?;
    let output = dir.join("expected_report.json");
    fs::write(&output, json).map_err(|err| format!("failed to write {}: {err}", output.display()))
}

fn compare_case(dir: &Path, report: &Report) -> Result<bool, String> {
    let path = dir.join("expected_report.json");
    let stored = fs::read_to_string(&path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let stored: Value = serde_json::from_str(&stored).map_err(|err| err.to_string())?;
    let current = serde_json::to_value(report).map_err(|err| err.to_string())?;
    Ok(stored == current)
}
