//! Request bodies as the web form sends them. Fields are kept as raw JSON
//! so a missing value, a string where a number belongs, and a negative
//! number all surface as the same validation error instead of a serde
//! message.

use std::str::FromStr;

use emi_core::loan::catalog::LoanType;
use emi_core::loan::comparison::ComparisonInput;
use emi_core::loan::eligibility::EligibilityInput;
use emi_core::LoanError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    pub salary: Option<Value>,
    pub loan_amount: Option<Value>,
    pub tenure_months: Option<Value>,
    pub loan_type: Option<Value>,
}

impl EligibilityRequest {
    /// Numeric fields are checked before the loan type, so a request that
    /// is wrong in both ways reports the numeric problem.
    pub fn into_input(self) -> Result<EligibilityInput, Error> {
        let salary = positive_number("salary", self.salary.as_ref())?;
        let loan_amount = positive_number("loanAmount", self.loan_amount.as_ref())?;
        let tenure_months = whole_months(self.tenure_months.as_ref())?;
        let loan_type = loan_type(self.loan_type.as_ref())?;

        Ok(EligibilityInput {
            salary,
            loan_amount,
            tenure_months,
            loan_type,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    pub salary: Option<Value>,
    pub loan_amount: Option<Value>,
    pub tenure_months: Option<Value>,
}

impl ComparisonRequest {
    pub fn into_input(self) -> Result<ComparisonInput, Error> {
        Ok(ComparisonInput {
            salary: positive_number("salary", self.salary.as_ref())?,
            loan_amount: positive_number("loanAmount", self.loan_amount.as_ref())?,
            tenure_months: whole_months(self.tenure_months.as_ref())?,
        })
    }
}

fn invalid(field: &str, reason: &str) -> Error {
    Error::Loan(LoanError::InvalidInput {
        field: field.to_owned(),
        reason: reason.to_owned(),
    })
}

fn positive_number(field: &str, value: Option<&Value>) -> Result<Decimal, Error> {
    let number = match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Null) | None => return Err(invalid(field, "missing")),
        Some(_) => return Err(invalid(field, "not a number")),
    };

    let parsed = Decimal::from_str(&number)
        .or_else(|_| Decimal::from_scientific(&number))
        .map_err(|_| invalid(field, "outside the supported range"))?;

    if parsed <= Decimal::ZERO {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(parsed)
}

fn whole_months(value: Option<&Value>) -> Result<u32, Error> {
    let months = positive_number("tenureMonths", value)?;
    if !months.fract().is_zero() {
        return Err(invalid("tenureMonths", "must be a whole number of months"));
    }
    months
        .to_u32()
        .ok_or_else(|| invalid("tenureMonths", "outside the supported range"))
}

fn loan_type(value: Option<&Value>) -> Result<LoanType, Error> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.parse::<LoanType>()?),
        Some(Value::Null) | Some(Value::String(_)) | None => Err(invalid("loanType", "missing")),
        Some(other) => Err(Error::Loan(LoanError::InvalidLoanType(other.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn request(body: Value) -> EligibilityRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let input = request(json!({
            "salary": 10000,
            "loanAmount": 100000.5,
            "tenureMonths": 12,
            "loanType": "home"
        }))
        .into_input()
        .unwrap();
        assert_eq!(input.salary, dec!(10000));
        assert_eq!(input.loan_amount, dec!(100000.5));
        assert_eq!(input.tenure_months, 12);
        assert_eq!(input.loan_type, LoanType::Home);
    }

    #[test]
    fn test_numeric_string_rejected() {
        let err = request(json!({
            "salary": "10000",
            "loanAmount": 1000,
            "tenureMonths": 12,
            "loanType": "home"
        }))
        .into_input()
        .unwrap_err();
        assert_eq!(err.public_message(), crate::error::INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_fractional_tenure_rejected() {
        let err = request(json!({
            "salary": 10000,
            "loanAmount": 1000,
            "tenureMonths": 12.5,
            "loanType": "home"
        }))
        .into_input()
        .unwrap_err();
        assert!(matches!(err, Error::Loan(LoanError::InvalidInput { ref field, .. }) if field == "tenureMonths"));
    }

    #[test]
    fn test_missing_loan_type_is_invalid_input() {
        let err = request(json!({ "salary": 1, "loanAmount": 1, "tenureMonths": 1 }))
            .into_input()
            .unwrap_err();
        assert_eq!(err.public_message(), crate::error::INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_numeric_problem_reported_before_loan_type() {
        let err = request(json!({
            "salary": 0,
            "loanAmount": 1,
            "tenureMonths": 1,
            "loanType": "student"
        }))
        .into_input()
        .unwrap_err();
        assert_eq!(err.public_message(), crate::error::INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_unknown_loan_type() {
        let err = request(json!({
            "salary": 1,
            "loanAmount": 1,
            "tenureMonths": 1,
            "loanType": "student"
        }))
        .into_input()
        .unwrap_err();
        assert_eq!(err.public_message(), crate::error::INVALID_LOAN_TYPE_MESSAGE);
    }

    #[test]
    fn test_exponent_numbers() {
        let input = ComparisonRequest {
            salary: Some(json!(1e5)),
            loan_amount: Some(json!(2.5e4)),
            tenure_months: Some(json!(24)),
        }
        .into_input()
        .unwrap();
        assert_eq!(input.salary, dec!(100000));
        assert_eq!(input.loan_amount, dec!(25000));
    }

    #[test]
    fn test_huge_number_out_of_range() {
        let err = ComparisonRequest {
            salary: Some(json!(1e300)),
            loan_amount: Some(json!(1)),
            tenure_months: Some(json!(1)),
        }
        .into_input()
        .unwrap_err();
        assert_eq!(err.public_message(), crate::error::INVALID_INPUT_MESSAGE);
    }
}
