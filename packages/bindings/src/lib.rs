use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Serialize;

use emi_core::loan::{amortization, catalog, comparison, eligibility, emi};
use emi_core::Money;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[napi]
pub fn check_eligibility(input_json: String) -> NapiResult<String> {
    let input: eligibility::EligibilityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = eligibility::check_eligibility(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_loan_products(input_json: String) -> NapiResult<String> {
    let input: comparison::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = comparison::compare_loan_products(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loan arithmetic
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct InstallmentOutput {
    monthly_installment: Money,
    total_payment: Money,
    total_interest: Money,
}

#[napi]
pub fn compute_emi(input_json: String) -> NapiResult<String> {
    let request: emi::LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let monthly_installment = request.monthly_installment().map_err(to_napi_error)?;
    let total_payment = monthly_installment
        .checked_mul(Decimal::from(request.tenure_months))
        .ok_or_else(|| to_napi_error("total payment overflowed decimal range"))?;

    let output = InstallmentOutput {
        monthly_installment,
        total_payment,
        total_interest: total_payment - request.principal,
    };
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let request: emi::LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let installment = request.monthly_installment().map_err(to_napi_error)?;
    let schedule = amortization::compute_amortization_schedule(
        request.principal,
        request.annual_rate_percent,
        request.tenure_months,
        installment,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_products() -> NapiResult<String> {
    serde_json::to_string(catalog::loan_products()).map_err(to_napi_error)
}
