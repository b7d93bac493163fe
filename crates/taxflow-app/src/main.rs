//! Taxflow demo CLI
//!
//! Exercises the full core from the terminal: the `demo` subcommand walks
//! a taxpayer through login, the filing wizard, and submission with spoken
//! narration printed to stdout; `refund` evaluates the estimate formula.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use taxflow_app::{AppConfig, TaxApp};
use taxflow_returns::{calculate_refund, Deductions, FilingStatus, Income, PersonalInfo, StepData};
use taxflow_types::{NoticeLevel, Notifier, RouteKey};
use taxflow_voice::ConsoleBackend;

#[derive(Parser)]
#[command(name = "taxflow", version, about = "Taxflow core demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a demo taxpayer through login, filing, and submission
    Demo {
        /// Persist data to this file instead of memory
        #[arg(long)]
        data_file: Option<PathBuf>,
        /// Simulated network delay in milliseconds
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },
    /// Evaluate the refund estimate formula
    Refund {
        /// W-2 wages
        #[arg(long)]
        wages: f64,
        /// Interest income
        #[arg(long, default_value_t = 0.0)]
        interest: f64,
        /// Federal tax withheld
        #[arg(long)]
        withheld: f64,
    },
}

/// Prints notifications the way the UI would toast them
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let tag = match level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Warning => "warn",
            NoticeLevel::Error => "error",
        };
        println!("[toast:{tag}] {message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    taxflow_app::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Demo { data_file, delay_ms } => run_demo(data_file, delay_ms).await,
        Command::Refund {
            wages,
            interest,
            withheld,
        } => {
            let income = Income {
                wages,
                interest_income: interest,
                federal_withheld: withheld,
                ..Income::default()
            };
            println!("Estimated refund: ${}", calculate_refund(&income));
            Ok(())
        }
    }
}

async fn run_demo(data_file: Option<PathBuf>, delay_ms: u64) -> Result<()> {
    let mut config = AppConfig::new()
        .with_network_delay(Duration::from_millis(delay_ms))
        .with_narration_delay(Duration::from_millis(100));
    if let Some(path) = data_file {
        config = config.with_data_file(path);
    }
    let app = TaxApp::with_default_store(
        config,
        Arc::new(ConsoleBackend),
        Arc::new(ConsoleNotifier),
    )?;

    app.start().await?;
    let session = app.login("user@example.com", "password").await?;
    println!("Signed in as {} ({})", session.name, session.role);

    app.navigate(RouteKey::Filing).await;
    let record = app
        .returns()
        .create(session.user_id, app.config().default_tax_year)?;

    app.returns().save_step(
        record.id,
        StepData::Personal(PersonalInfo {
            first_name: "John".to_string(),
            last_name: "Taxpayer".to_string(),
            ssn: "123-45-6789".to_string(),
            date_of_birth: "04/15/1985".to_string(),
            email: session.email.clone(),
            phone: "(555) 123-4567".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip: "90210".to_string(),
            filing_status: FilingStatus::Single,
        }),
    )?;
    app.returns().save_step(
        record.id,
        StepData::Income(Income {
            wages: 50_000.0,
            interest_income: 500.0,
            federal_withheld: 9_000.0,
            ..Income::default()
        }),
    )?;
    let record = app
        .returns()
        .save_step(record.id, StepData::Deductions(Deductions::default()))?;

    if let Some(income) = &record.income {
        println!("Estimated refund: ${}", calculate_refund(income));
    }

    let record = app.returns().submit(record.id).await?;
    println!("Return {} is now {}", record.id, record.status);

    app.logout().await?;
    Ok(())
}
