use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use floodsensor_core::{RecordKind, Report};
use glob::glob;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FLOODSENSOR_LOG";
const LISTED_MATCHES: usize = 3;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("FLOODSENSOR_BUILD_COMMIT"),
    ", ",
    env!("FLOODSENSOR_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "floodsensor")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for flood sensor webhook payloads (readings and settings).",
    long_about = None,
    after_help = "Examples:\n  floodsensor webhook decode sensor_data.json -o report.json\n  floodsensor webhook decode sensor_setting.json --stdout --pretty\n  floodsensor payload decode AQQMAFB9RAAASEEAAHxEAABwwFc="
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); FLOODSENSOR_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on webhook JSON documents.
    Webhook {
        #[command(subcommand)]
        command: WebhookCommands,
    },
    /// Operations on bare base64 payloads.
    Payload {
        #[command(subcommand)]
        command: PayloadCommands,
    },
}

#[derive(Subcommand, Debug)]
enum WebhookCommands {
    /// Decode the payload of a webhook file and generate a JSON report.
    #[command(alias = "parse")]
    #[command(
        after_help = "Examples:\n  floodsensor webhook decode sensor_data.json -o report.json\n  floodsensor webhook decode 'uplinks/*.json' --stdout --kind settings"
    )]
    Decode(WebhookDecodeArgs),
}

#[derive(Subcommand, Debug)]
enum PayloadCommands {
    /// Decode base64 payload text and print the JSON report to stdout.
    Decode(PayloadDecodeArgs),
}

#[derive(Args, Debug)]
struct WebhookDecodeArgs {
    /// Path to a webhook .json file (a glob matching one file is accepted)
    input: PathBuf,

    /// Record layout to decode with
    #[arg(long, value_enum, default_value_t = KindArg::Auto)]
    kind: KindArg,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    #[command(flatten)]
    style: JsonStyle,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct PayloadDecodeArgs {
    /// Standard base64 payload text
    payload: String,

    /// Record layout to decode with
    #[arg(long, value_enum, default_value_t = KindArg::Auto)]
    kind: KindArg,

    #[command(flatten)]
    style: JsonStyle,
}

#[derive(Args, Debug, Clone, Copy)]
struct JsonStyle {
    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,
}

impl JsonStyle {
    fn render(self, report: &Report) -> Result<String, CliError> {
        let json = if self.pretty && !self.compact {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        Ok(json.context("JSON serialization failed")?)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    /// Choose by payload length (20: reading, 166: settings)
    Auto,
    Reading,
    Settings,
}

impl From<KindArg> for RecordKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Auto => RecordKind::Auto,
            KindArg::Reading => RecordKind::Reading,
            KindArg::Settings => RecordKind::Settings,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Webhook {
            command: WebhookCommands::Decode(args),
        } => cmd_webhook_decode(args),
        Commands::Payload {
            command: PayloadCommands::Decode(args),
        } => cmd_payload_decode(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }

    fn with_hint(err: anyhow::Error, hint: &str) -> Self {
        Self::new(format!("{:#}", err), Some(hint.to_string()))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_webhook_decode(args: WebhookDecodeArgs) -> Result<(), CliError> {
    let input = resolve_input_path(&args.input)?;
    validate_input_file(&input)?;
    if let Some(report_path) = args.report.as_deref() {
        ensure_report_differs(&input, report_path)?;
    }

    debug!(input = %input.display(), kind = ?args.kind, "decoding webhook");
    let report = floodsensor_core::decode_webhook_file(&input, args.kind.into())
        .context("webhook decode failed")
        .map_err(|err| {
            CliError::with_hint(
                err,
                "check the record kind (--kind) and the payload at device.data.data",
            )
        })?;
    let json = args.style.render(&report)?;

    match args.report {
        None => println!("{}", json),
        Some(path) => {
            write_report(&path, &json)?;
            if !args.quiet {
                eprintln!("OK: report written -> {}", path.display());
            }
        }
    }
    Ok(())
}

fn cmd_payload_decode(args: PayloadDecodeArgs) -> Result<(), CliError> {
    let report = floodsensor_core::decode_payload_text(&args.payload, args.kind.into())
        .context("payload decode failed")
        .map_err(|err| {
            CliError::with_hint(err, "pass standard base64 text of a 20- or 166-byte record")
        })?;
    println!("{}", args.style.render(&report)?);
    Ok(())
}

fn write_report(path: &Path, json: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}

/// Refuses a report path that resolves to the input file. A report directory
/// that does not exist yet cannot hold the input, so it passes.
fn ensure_report_differs(input: &Path, report: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let parent = match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let (Ok(report_dir), Some(file_name)) = (fs::canonicalize(parent), report.file_name()) else {
        return Ok(());
    };
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("report path must differ from input: {}", report.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a webhook .json file".to_string()),
        ));
    }
    let is_json = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a webhook .json file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a webhook .json file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let invalid = |detail: String| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", detail)),
        )
    };
    let mut matches = Vec::new();
    for entry in glob(&pattern).map_err(|err| invalid(err.msg.to_string()))? {
        let path = entry.map_err(|err| invalid(err.to_string()))?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .json file".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let mut listed = matches
                .iter()
                .take(LISTED_MATCHES)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>();
            if count > LISTED_MATCHES {
                listed.push("...".to_string());
            }
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}",
                    pattern,
                    count,
                    listed.join(", ")
                ),
                Some("pass a single webhook file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}
