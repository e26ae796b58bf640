// tradegen CLI - generate a randomized trading schedule and export it
// as an XLSX workbook.

mod exit_codes;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use tradegen_engine::{search, Accepted, Params};
use tradegen_io::xlsx;

use exit_codes::{EXIT_IO_ERROR, EXIT_SEARCH_EXHAUSTED, EXIT_SUCCESS};

/// Output filename. Fixed by design, like the rest of the schedule
/// parameters; rerun after editing the constants to change it.
const OUTPUT_FILENAME: &str = "trading_schedule.xlsx";

#[derive(Parser)]
#[command(name = "tradegen")]
#[command(about = "Generate a randomized trading schedule under a commission band")]
#[command(version)]
struct Cli {
    /// Suppress the per-account report and confirmation lines
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Print a machine-readable run summary to stdout instead
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli, &Params::default(), Path::new(OUTPUT_FILENAME)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli, params: &Params, output: &Path) -> Result<(), CliError> {
    // Search failure is fatal: nothing gets exported on exhaustion.
    let accepted = search(params).map_err(|e| CliError::exhausted(e.to_string()))?;

    let result = xlsx::export(&accepted.schedule, output).map_err(CliError::io)?;

    if cli.json {
        let summary = RunSummary::from_accepted(&accepted, output);
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::io(format!("JSON error: {e}")))?;
        println!("{}", json);
    } else if !cli.quiet {
        for line in account_report(&accepted) {
            println!("{}", line);
        }
        println!(
            "Schedule saved to {} ({} rows)",
            output.display(),
            result.rows_written
        );
        println!("Accepted after {}.", attempts_phrase(accepted.attempts));
    }

    Ok(())
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_IO_ERROR,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn exhausted(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_SEARCH_EXHAUSTED,
            message: msg.into(),
            hint: Some(
                "widen the commission band or adjust the amount bounds, then re-run".to_string(),
            ),
        }
    }
}

// ── Reporting ───────────────────────────────────────────────────────

/// One line per account: total and commission, commission to 2 decimals.
fn account_report(accepted: &Accepted) -> Vec<String> {
    accepted
        .schedule
        .accounts
        .iter()
        .zip(accepted.totals.iter().zip(&accepted.commissions))
        .map(|(account, (total, commission))| {
            format!("{}: total {}, commission {:.2}", account, total, commission)
        })
        .collect()
}

fn attempts_phrase(attempts: u32) -> String {
    if attempts == 1 {
        "1 attempt".to_string()
    } else {
        format!("{} attempts", attempts)
    }
}

/// Machine-readable run summary for `--json`.
#[derive(Debug, Serialize)]
struct RunSummary {
    output: String,
    attempts: u32,
    accounts: Vec<AccountSummary>,
}

#[derive(Debug, Serialize)]
struct AccountSummary {
    account: String,
    total: u64,
    commission: f64,
}

impl RunSummary {
    fn from_accepted(accepted: &Accepted, output: &Path) -> Self {
        let accounts = accepted
            .schedule
            .accounts
            .iter()
            .zip(accepted.totals.iter().zip(&accepted.commissions))
            .map(|(account, (&total, &commission))| AccountSummary {
                account: account.clone(),
                total,
                commission,
            })
            .collect();

        Self {
            output: output.display().to_string(),
            attempts: accepted.attempts,
            accounts,
        }
    }
}
