use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use emi_core::loan::amortization;
use emi_core::loan::catalog::{loan_products, LoanType};
use emi_core::loan::emi::LoanRequest;
use emi_core::loan::presentation::present_schedule;
use emi_core::to_money_string;

use crate::input;

/// Loan terms shared by the installment and schedule commands
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EmiArgs {
    /// Path to JSON input file with principal, annual_rate_percent and tenure_months
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long, alias = "loan-amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 12 for 12%); overrides --loan-type
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Price at the catalog rate for this loan type
    #[arg(long, default_value = "personal")]
    pub loan_type: String,

    /// Loan tenure in months
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub terms: EmiArgs,

    /// Emit full-precision rows instead of two-decimal strings
    #[arg(long)]
    pub raw: bool,
}

fn loan_request(args: &EmiArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    if let Some(request) = input::read_input::<LoanRequest>(args.input.as_deref())? {
        return Ok(request);
    }

    let annual_rate_percent = match args.rate {
        Some(rate) => rate,
        None => args.loan_type.parse::<LoanType>()?.annual_rate_percent(),
    };

    Ok(LoanRequest::new(
        args.principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate_percent,
        args.tenure_months
            .ok_or("--tenure-months is required (or provide --input)")?,
    ))
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = loan_request(&args)?;
    let emi = request.monthly_installment()?;
    let total_payment = emi
        .checked_mul(Decimal::from(request.tenure_months))
        .ok_or("total payment overflowed decimal range")?;

    Ok(json!({
        "principal": request.principal.to_string(),
        "annual_rate_percent": request.annual_rate_percent.to_string(),
        "tenure_months": request.tenure_months,
        "emi": to_money_string(emi),
        "total_payment": to_money_string(total_payment),
        "total_interest": to_money_string(total_payment - request.principal),
    }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = loan_request(&args.terms)?;
    let emi = request.monthly_installment()?;
    let schedule = amortization::compute_amortization_schedule(
        request.principal,
        request.annual_rate_percent,
        request.tenure_months,
        emi,
    )?;

    if args.raw {
        return Ok(serde_json::to_value(schedule)?);
    }
    Ok(serde_json::to_value(present_schedule(&schedule))?)
}

pub fn run_products() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(loan_products())?)
}
