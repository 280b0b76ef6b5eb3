use std::io::{BufRead, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Question asked when the unit was not chosen on the command line.
pub const KG_PROMPT: &str = "Do you want to convert weight to kilograms (kg)? (yes/no): ";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised. Output goes
/// to stderr so it never mixes with the prompt on stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

/// Map the `--log-level` names (`WARNING`, `CRITICAL`, ...) to tracing directives.
fn normalise_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        other => other.to_lowercase(),
    }
}

// ── Unit prompt ────────────────────────────────────────────────────────────────

/// Ask whether weights should be converted to kilograms.
///
/// Only an answer of `yes` (case-insensitive, surrounding whitespace ignored)
/// enables conversion. Any other answer, or end of input, keeps pounds.
pub fn ask_convert_to_kg<R: BufRead, W: Write>(mut input: R, mut output: W) -> std::io::Result<bool> {
    write!(output, "{}", KG_PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_lowercase() == "yes")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
