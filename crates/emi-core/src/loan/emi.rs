//! Equal monthly installment (EMI) for a fully amortizing, monthly
//! compounding loan:
//!
//! ```text
//! r   = annual_rate_percent / 12 / 100
//! EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! A zero rate has no closed form (the denominator vanishes) and is priced
//! as a straight-line repayment `P / n`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::types::{Money, Percent, Rate};
use crate::LoanResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_SCALE: Decimal = dec!(100);

/// Longest tenure any surface accepts (100 years). Bounds the size of a
/// generated schedule.
pub const MAX_TENURE_MONTHS: u32 = 1200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Terms of a single loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub tenure_months: u32,
}

impl LoanRequest {
    pub fn new(principal: Money, annual_rate_percent: Percent, tenure_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_months,
        }
    }

    pub fn validate(&self) -> LoanResult<()> {
        validate_terms(self.principal, self.annual_rate_percent, self.tenure_months)
    }

    pub fn monthly_rate(&self) -> Rate {
        monthly_rate(self.annual_rate_percent)
    }

    pub fn monthly_installment(&self) -> LoanResult<Money> {
        compute_emi(self.principal, self.annual_rate_percent, self.tenure_months)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert a quoted annual percentage into the per-month decimal rate.
pub fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / MONTHS_PER_YEAR / PERCENT_SCALE
}

/// Monthly installment that repays `principal` over `tenure_months`.
pub fn compute_emi(
    principal: Money,
    annual_rate_percent: Percent,
    tenure_months: u32,
) -> LoanResult<Money> {
    validate_terms(principal, annual_rate_percent, tenure_months)?;

    let rate = monthly_rate(annual_rate_percent);
    let periods = Decimal::from(tenure_months);

    if rate.is_zero() {
        return Ok(principal / periods);
    }

    let growth = (Decimal::ONE + rate)
        .checked_powi(i64::from(tenure_months))
        .ok_or_else(|| overflow("compounding factor (1 + r)^n"))?;

    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        // Rate too small to register after n periods at 28 digits.
        return Ok(principal / periods);
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| overflow("installment"))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub(crate) fn validate_terms(
    principal: Money,
    annual_rate_percent: Percent,
    tenure_months: u32,
) -> LoanResult<()> {
    ensure_positive("principal", principal)?;
    if annual_rate_percent < Decimal::ZERO {
        return Err(LoanError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    validate_tenure(tenure_months)
}

pub(crate) fn ensure_positive(field: &str, value: Money) -> LoanResult<()> {
    if value <= Decimal::ZERO {
        return Err(LoanError::InvalidInput {
            field: field.into(),
            reason: "Must be a positive number.".into(),
        });
    }
    Ok(())
}

pub(crate) fn validate_tenure(tenure_months: u32) -> LoanResult<()> {
    if tenure_months == 0 {
        return Err(LoanError::InvalidInput {
            field: "tenure_months".into(),
            reason: "Tenure must be at least one month.".into(),
        });
    }
    if tenure_months > MAX_TENURE_MONTHS {
        return Err(LoanError::InvalidInput {
            field: "tenure_months".into(),
            reason: format!("Tenure cannot exceed {MAX_TENURE_MONTHS} months."),
        });
    }
    Ok(())
}

pub(crate) fn overflow(context: &str) -> LoanError {
    LoanError::ComputationFault(format!("{context} overflowed decimal range"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_rate_from_percent() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
    }

    #[test]
    fn test_emi_personal_loan_one_year() {
        // 100k at 12% for 12 months: r = 1%, EMI ~ 8884.8789
        let emi = compute_emi(dec!(100_000), dec!(12), 12).unwrap();
        assert!(
            (emi - dec!(8884.8789)).abs() < dec!(0.0001),
            "EMI should be ~8884.8789, got {emi}"
        );
    }

    #[test]
    fn test_emi_single_month_repays_principal_plus_interest() {
        // n = 1: EMI = P * (1 + r)
        let emi = compute_emi(dec!(1000), dec!(12), 1).unwrap();
        assert_eq!(emi.round_dp(10), dec!(1010));
    }

    #[test]
    fn test_emi_zero_rate_is_straight_line() {
        let emi = compute_emi(dec!(1200), Decimal::ZERO, 12).unwrap();
        assert_eq!(emi, dec!(100));
    }

    #[test]
    fn test_emi_total_never_below_principal() {
        for (p, r, n) in [
            (dec!(1), dec!(0.5), 1),
            (dec!(50_000), dec!(8), 60),
            (dec!(2_500_000), dec!(10), 360),
            (dec!(999.99), dec!(36), 7),
        ] {
            let emi = compute_emi(p, r, n).unwrap();
            assert!(emi > Decimal::ZERO);
            assert!(
                emi * Decimal::from(n) >= p,
                "total {} below principal {p} for r={r}, n={n}",
                emi * Decimal::from(n)
            );
        }
    }

    #[test]
    fn test_emi_is_deterministic() {
        let a = compute_emi(dec!(345_678.9), dec!(10), 36).unwrap();
        let b = compute_emi(dec!(345_678.9), dec!(10), 36).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_emi_rejects_non_positive_principal() {
        let err = compute_emi(dec!(-100), dec!(12), 12).unwrap_err();
        assert!(matches!(err, LoanError::InvalidInput { ref field, .. } if field == "principal"));
        assert!(compute_emi(Decimal::ZERO, dec!(12), 12).is_err());
    }

    #[test]
    fn test_emi_rejects_negative_rate() {
        let err = compute_emi(dec!(1000), dec!(-1), 12).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_emi_rejects_bad_tenure() {
        assert!(compute_emi(dec!(1000), dec!(12), 0).is_err());
        assert!(compute_emi(dec!(1000), dec!(12), MAX_TENURE_MONTHS + 1).is_err());
        assert!(compute_emi(dec!(1000), dec!(12), MAX_TENURE_MONTHS).is_ok());
    }

    #[test]
    fn test_emi_overflow_is_a_fault_not_a_panic() {
        // 1000% p.a. compounds past the decimal range well before 1200 months
        let err = compute_emi(dec!(1000), dec!(1000), MAX_TENURE_MONTHS).unwrap_err();
        assert!(matches!(err, LoanError::ComputationFault(_)));
    }

    #[test]
    fn test_loan_request_delegates() {
        let req = LoanRequest::new(dec!(100_000), dec!(12), 12);
        assert!(req.validate().is_ok());
        assert_eq!(req.monthly_rate(), dec!(0.01));
        assert_eq!(
            req.monthly_installment().unwrap(),
            compute_emi(dec!(100_000), dec!(12), 12).unwrap()
        );
    }
}
