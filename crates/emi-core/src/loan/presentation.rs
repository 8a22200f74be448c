//! Wire shapes consumed by the web form: money as two-decimal strings,
//! camelCase keys.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::loan::amortization::AmortizationRow;
use crate::loan::catalog::LoanType;
use crate::loan::comparison::{ComparisonOutput, ProductComparison};
use crate::loan::eligibility::EligibilityOutput;
use crate::types::to_money_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub principal: String,
    pub interest: String,
    pub balance: String,
}

impl From<&AmortizationRow> for ScheduleEntry {
    fn from(row: &AmortizationRow) -> Self {
        ScheduleEntry {
            month: row.month,
            principal: to_money_string(row.principal_paid),
            interest: to_money_string(row.interest_paid),
            balance: to_money_string(row.remaining_balance),
        }
    }
}

pub fn present_schedule(schedule: &[AmortizationRow]) -> Vec<ScheduleEntry> {
    schedule.iter().map(ScheduleEntry::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub eligible: bool,
    pub emi: String,
    pub total_payment: String,
    pub total_interest: String,
    pub message: String,
    pub amortization_schedule: Vec<ScheduleEntry>,
}

impl From<&EligibilityOutput> for EligibilityResponse {
    fn from(out: &EligibilityOutput) -> Self {
        EligibilityResponse {
            eligible: out.summary.eligible,
            emi: to_money_string(out.summary.monthly_installment),
            total_payment: to_money_string(out.summary.total_payment),
            total_interest: to_money_string(out.summary.total_interest),
            message: out.message.clone(),
            amortization_schedule: present_schedule(&out.amortization_schedule),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub id: u32,
    pub name: String,
    pub loan_type: LoanType,
    /// Percent per annum, as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_rate: Decimal,
    pub max_tenure: u32,
    pub eligible: bool,
    pub emi: Option<String>,
    pub total_payment: Option<String>,
    pub total_interest: Option<String>,
    pub message: String,
}

impl From<&ProductComparison> for ComparisonEntry {
    fn from(c: &ProductComparison) -> Self {
        ComparisonEntry {
            id: c.product.id,
            name: c.product.name.to_string(),
            loan_type: c.product.loan_type,
            interest_rate: c.product.annual_rate_percent,
            max_tenure: c.product.max_tenure_months,
            eligible: c.eligible,
            emi: c.monthly_installment.map(to_money_string),
            total_payment: c.total_payment.map(to_money_string),
            total_interest: c.total_interest.map(to_money_string),
            message: c.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub comparison: Vec<ComparisonEntry>,
}

impl From<&ComparisonOutput> for ComparisonResponse {
    fn from(out: &ComparisonOutput) -> Self {
        ComparisonResponse {
            comparison: out.products.iter().map(ComparisonEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::comparison::{compare_loan_products, ComparisonInput};
    use crate::loan::eligibility::{check_eligibility, EligibilityInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_eligibility_wire_shape() {
        let out = check_eligibility(&EligibilityInput {
            salary: dec!(10_000),
            loan_amount: dec!(100_000),
            tenure_months: 12,
            loan_type: LoanType::Personal,
        })
        .unwrap();
        let resp = EligibilityResponse::from(&out.result);
        assert_eq!(resp.emi, "8884.88");

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["totalPayment"], "106618.55");
        assert_eq!(json["totalInterest"], "6618.55");
        let first = &json["amortizationSchedule"][0];
        assert_eq!(first["month"], 1);
        assert_eq!(first["principal"], "7884.88");
        assert_eq!(first["interest"], "1000.00");
        assert_eq!(first["balance"], "92115.12");
        assert_eq!(json["amortizationSchedule"][11]["balance"], "0.00");
    }

    #[test]
    fn test_comparison_wire_shape() {
        let out = compare_loan_products(&ComparisonInput {
            salary: dec!(10_000),
            loan_amount: dec!(100_000),
            tenure_months: 48,
        })
        .unwrap();
        let json = serde_json::to_value(ComparisonResponse::from(&out.result)).unwrap();
        let home = &json["comparison"][1];
        assert_eq!(home["name"], "Home Loan");
        assert_eq!(home["loanType"], "home");
        assert_eq!(home["interestRate"], 8.0);
        assert_eq!(home["maxTenure"], 60);
        assert!(home["emi"].is_string());

        let auto = &json["comparison"][2];
        assert!(auto["emi"].is_null());
        assert_eq!(auto["message"], "Not eligible (max tenure: 36 months)");
    }
}
