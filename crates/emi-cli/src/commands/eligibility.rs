use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_core::loan::catalog::LoanType;
use emi_core::loan::comparison::{self, ComparisonInput};
use emi_core::loan::eligibility::{self, EligibilityInput};
use emi_core::loan::presentation::{ComparisonResponse, EligibilityResponse};

use crate::input;

/// Arguments for an eligibility check
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CheckArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly salary
    #[arg(long)]
    pub salary: Option<Decimal>,

    /// Amount to borrow
    #[arg(long, alias = "amount")]
    pub loan_amount: Option<Decimal>,

    /// Loan tenure in months
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// Loan type: personal, home or auto
    #[arg(long, default_value = "personal")]
    pub loan_type: String,

    /// Emit full-precision figures instead of two-decimal strings
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for a catalog comparison
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CompareArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly salary
    #[arg(long)]
    pub salary: Option<Decimal>,

    /// Amount to borrow
    #[arg(long, alias = "amount")]
    pub loan_amount: Option<Decimal>,

    /// Loan tenure in months
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// Emit full-precision figures instead of two-decimal strings
    #[arg(long)]
    pub raw: bool,
}

pub fn run_check(args: CheckArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let check_input: EligibilityInput = match input::read_input(args.input.as_deref())? {
        Some(data) => data,
        None => EligibilityInput {
            salary: args.salary
                .ok_or("--salary is required (or provide --input)")?,
            loan_amount: args.loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            tenure_months: args.tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
            loan_type: args.loan_type.parse::<LoanType>()?,
        },
    };

    let result = eligibility::check_eligibility(&check_input)?;
    if args.raw {
        return Ok(serde_json::to_value(result)?);
    }
    Ok(serde_json::to_value(result.map(|r| EligibilityResponse::from(&r)))?)
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let compare_input: ComparisonInput = match input::read_input(args.input.as_deref())? {
        Some(data) => data,
        None => ComparisonInput {
            salary: args.salary
                .ok_or("--salary is required (or provide --input)")?,
            loan_amount: args.loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            tenure_months: args.tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
        },
    };

    let result = comparison::compare_loan_products(&compare_input)?;
    if args.raw {
        return Ok(serde_json::to_value(result)?);
    }
    Ok(serde_json::to_value(result.map(|r| ComparisonResponse::from(&r)))?)
}
