mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::eligibility::{CheckArgs, CompareArgs};
use commands::loan::{EmiArgs, ScheduleArgs};

/// Loan EMI and eligibility calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan EMI, eligibility and amortization calculations",
    long_about = "A CLI for pricing equal-monthly-installment loans with decimal \
                  precision. Checks eligibility against a monthly salary, prints \
                  amortization schedules and compares the loan product catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Check eligibility for a loan type against a monthly salary
    Check(CheckArgs),
    /// Compare every loan product for the same amount and tenure
    Compare(CompareArgs),
    /// Calculate the equal monthly installment
    Emi(EmiArgs),
    /// Print the month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// List the loan product catalog
    Products,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Check(args) => commands::eligibility::run_check(args),
        Commands::Compare(args) => commands::eligibility::run_compare(args),
        Commands::Emi(args) => commands::loan::run_emi(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Products => commands::loan::run_products(),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
