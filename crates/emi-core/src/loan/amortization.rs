//! Month-by-month amortization of a level-installment loan.
//!
//! Each month accrues interest on the opening balance and the rest of the
//! installment retires principal. Balances are carried at full precision;
//! rounding is left to presentation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::loan::emi::{monthly_rate, overflow, validate_terms};
use crate::types::{Money, Percent};
use crate::LoanResult;

/// Residual below which the closing balance of the last month is treated as
/// fully repaid.
const FINAL_BALANCE_TOLERANCE: Decimal = dec!(0.01);

/// A single row in the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number (1-indexed)
    pub month: u32,
    /// Part of the installment that retires principal
    pub principal_paid: Money,
    /// Interest accrued on the opening balance
    pub interest_paid: Money,
    /// Balance after this month's installment, never negative
    pub remaining_balance: Money,
}

/// Build the schedule for a loan repaid by `monthly_installment` each month.
///
/// Returns exactly `tenure_months` rows. When `monthly_installment` is the
/// EMI for the same terms, the last row closes at zero.
pub fn compute_amortization_schedule(
    principal: Money,
    annual_rate_percent: Percent,
    tenure_months: u32,
    monthly_installment: Money,
) -> LoanResult<Vec<AmortizationRow>> {
    validate_terms(principal, annual_rate_percent, tenure_months)?;
    if monthly_installment < Decimal::ZERO {
        return Err(LoanError::InvalidInput {
            field: "monthly_installment".into(),
            reason: "Installment cannot be negative.".into(),
        });
    }

    let rate = monthly_rate(annual_rate_percent);
    let mut schedule = Vec::with_capacity(tenure_months as usize);
    let mut balance = principal;

    for month in 1..=tenure_months {
        let interest = balance
            .checked_mul(rate)
            .ok_or_else(|| overflow("monthly interest"))?;
        let principal_paid = monthly_installment
            .checked_sub(interest)
            .ok_or_else(|| overflow("principal repayment"))?;
        balance = balance
            .checked_sub(principal_paid)
            .ok_or_else(|| overflow("running balance"))?;

        if balance < Decimal::ZERO {
            balance = Decimal::ZERO;
        }
        if month == tenure_months && balance < FINAL_BALANCE_TOLERANCE {
            balance = Decimal::ZERO;
        }

        schedule.push(AmortizationRow {
            month,
            principal_paid,
            interest_paid: interest,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}

/// Sum of principal retired across a schedule.
pub fn total_principal_paid(schedule: &[AmortizationRow]) -> Money {
    schedule.iter().map(|row| row.principal_paid).sum()
}

/// Sum of interest accrued across a schedule.
pub fn total_interest_paid(schedule: &[AmortizationRow]) -> Money {
    schedule.iter().map(|row| row.interest_paid).sum()
}
