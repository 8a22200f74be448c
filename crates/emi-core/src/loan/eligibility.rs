//! Salary-based eligibility for a single loan product.
//!
//! A borrower qualifies when the monthly installment is at most 40% of the
//! stated monthly salary. The check always returns the full EMI breakdown
//! and schedule, eligible or not.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan::amortization::{compute_amortization_schedule, AmortizationRow};
use crate::loan::catalog::LoanType;
use crate::loan::emi::{ensure_positive, overflow, LoanRequest};
use crate::types::{to_money_string, with_metadata, ComputationOutput, Money, Percent};
use crate::LoanResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest share of monthly salary an installment may take.
pub const MAX_EMI_TO_SALARY: Decimal = dec!(0.4);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityInput {
    /// Monthly salary.
    pub salary: Money,
    pub loan_amount: Money,
    pub tenure_months: u32,
    pub loan_type: LoanType,
}

/// Installment figures for one loan and one salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    pub monthly_installment: Money,
    /// Installment times tenure.
    pub total_payment: Money,
    /// Total payment less principal.
    pub total_interest: Money,
    pub eligible: bool,
}

impl EmiResult {
    pub fn compute(request: &LoanRequest, salary: Money) -> LoanResult<Self> {
        let monthly_installment = request.monthly_installment()?;
        let total_payment = monthly_installment
            .checked_mul(Decimal::from(request.tenure_months))
            .ok_or_else(|| overflow("total payment"))?;

        Ok(EmiResult {
            monthly_installment,
            total_payment,
            total_interest: total_payment - request.principal,
            eligible: is_eligible(monthly_installment, salary),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityOutput {
    pub loan_type: LoanType,
    pub annual_rate_percent: Percent,
    #[serde(flatten)]
    pub summary: EmiResult,
    /// 40% of salary.
    pub max_installment: Money,
    pub message: String,
    pub amortization_schedule: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Highest installment the salary supports.
pub fn max_installment(salary: Money) -> Money {
    salary * MAX_EMI_TO_SALARY
}

/// Inclusive: an installment of exactly 40% of salary qualifies.
pub fn is_eligible(monthly_installment: Money, salary: Money) -> bool {
    monthly_installment <= max_installment(salary)
}

pub fn eligibility_message(eligible: bool, monthly_installment: Money) -> String {
    let emi = to_money_string(monthly_installment);
    if eligible {
        format!("Congrats! You are eligible. Your EMI is ₹{emi} per month.")
    } else {
        format!("Sorry, you are not eligible. EMI of ₹{emi} exceeds 40% of your salary.")
    }
}

/// Price the requested loan type, test it against salary and build its
/// amortization schedule.
pub fn check_eligibility(
    input: &EligibilityInput,
) -> LoanResult<ComputationOutput<EligibilityOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    ensure_positive("salary", input.salary)?;

    let product = input.loan_type.product();
    let request = LoanRequest::new(
        input.loan_amount,
        product.annual_rate_percent,
        input.tenure_months,
    );
    request.validate()?;

    if !product.allows_tenure(input.tenure_months) {
        warnings.push(format!(
            "Requested tenure of {} months exceeds the {} maximum of {} months.",
            input.tenure_months, product.name, product.max_tenure_months
        ));
    }

    let summary = EmiResult::compute(&request, input.salary)?;
    let amortization_schedule = compute_amortization_schedule(
        request.principal,
        request.annual_rate_percent,
        request.tenure_months,
        summary.monthly_installment,
    )?;

    let output = EligibilityOutput {
        loan_type: input.loan_type,
        annual_rate_percent: product.annual_rate_percent,
        max_installment: max_installment(input.salary),
        message: eligibility_message(summary.eligible, summary.monthly_installment),
        summary,
        amortization_schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "loan_type": input.loan_type.as_str(),
        "annual_rate_percent": product.annual_rate_percent.to_string(),
        "compounding": "monthly",
        "max_emi_to_salary": MAX_EMI_TO_SALARY.to_string(),
    });

    Ok(with_metadata(
        "Reducing-balance EMI with salary affordability test",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoanError;
    use rust_decimal_macros::dec;

    fn personal_one_year() -> EligibilityInput {
        EligibilityInput {
            salary: dec!(10_000),
            loan_amount: dec!(100_000),
            tenure_months: 12,
            loan_type: LoanType::Personal,
        }
    }

    #[test]
    fn test_boundary_is_eligible() {
        assert!(is_eligible(dec!(4000), dec!(10_000)));
        assert!(!is_eligible(dec!(4000.01), dec!(10_000)));
    }

    #[test]
    fn test_personal_loan_not_eligible() {
        let out = check_eligibility(&personal_one_year()).unwrap();
        let r = &out.result;
        assert!(!r.summary.eligible);
        assert_eq!(r.max_installment, dec!(4000));
        assert_eq!(to_money_string(r.summary.monthly_installment), "8884.88");
        assert_eq!(to_money_string(r.summary.total_payment), "106618.55");
        assert_eq!(to_money_string(r.summary.total_interest), "6618.55");
        assert_eq!(
            r.message,
            "Sorry, you are not eligible. EMI of ₹8884.88 exceeds 40% of your salary."
        );
        assert_eq!(r.amortization_schedule.len(), 12);
    }

    #[test]
    fn test_high_salary_is_eligible() {
        let mut input = personal_one_year();
        input.salary = dec!(25_000);
        let out = check_eligibility(&input).unwrap();
        assert!(out.result.summary.eligible);
        assert_eq!(
            out.result.message,
            "Congrats! You are eligible. Your EMI is ₹8884.88 per month."
        );
    }

    #[test]
    fn test_uses_rate_of_requested_loan_type() {
        let mut input = personal_one_year();
        input.loan_type = LoanType::Home;
        let out = check_eligibility(&input).unwrap();
        assert_eq!(out.result.annual_rate_percent, dec!(8));
        assert!(out.result.summary.monthly_installment < dec!(8884));
    }

    #[test]
    fn test_tenure_above_product_max_warns_but_computes() {
        let mut input = personal_one_year();
        input.tenure_months = 48;
        let out = check_eligibility(&input).unwrap();
        assert_eq!(out.result.amortization_schedule.len(), 48);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("maximum of 24 months"));
    }

    #[test]
    fn test_rejects_non_positive_salary() {
        let mut input = personal_one_year();
        input.salary = Decimal::ZERO;
        let err = check_eligibility(&input).unwrap_err();
        assert!(matches!(err, LoanError::InvalidInput { ref field, .. } if field == "salary"));
    }

    #[test]
    fn test_rejects_negative_loan_amount() {
        let mut input = personal_one_year();
        input.loan_amount = dec!(-100);
        let err = check_eligibility(&input).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_flattened_serialization() {
        let out = check_eligibility(&personal_one_year()).unwrap();
        let json = serde_json::to_value(&out.result).unwrap();
        assert_eq!(json["eligible"], serde_json::json!(false));
        assert_eq!(json["loan_type"], serde_json::json!("personal"));
        assert!(json.get("monthly_installment").is_some());
        assert!(json.get("summary").is_none());
    }
}
