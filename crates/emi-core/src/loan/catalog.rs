//! Compiled-in loan product catalog.
//!
//! Each loan type maps to exactly one product. Rates are quoted in percent
//! per annum and tenures in months; neither is configurable at runtime.

use std::fmt;
use std::str::FromStr;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::types::Percent;

/// Loan types accepted on every surface, keyed by their lowercase wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Personal,
    Home,
    Auto,
}

impl LoanType {
    pub const ALL: [LoanType; 3] = [LoanType::Personal, LoanType::Home, LoanType::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Personal => "personal",
            LoanType::Home => "home",
            LoanType::Auto => "auto",
        }
    }

    /// The catalog entry backing this loan type.
    pub fn product(&self) -> &'static LoanProduct {
        match self {
            LoanType::Personal => &LOAN_PRODUCTS[0],
            LoanType::Home => &LOAN_PRODUCTS[1],
            LoanType::Auto => &LOAN_PRODUCTS[2],
        }
    }

    pub fn annual_rate_percent(&self) -> Percent {
        self.product().annual_rate_percent
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(LoanType::Personal),
            "home" => Ok(LoanType::Home),
            "auto" => Ok(LoanType::Auto),
            other => Err(LoanError::InvalidLoanType(other.to_string())),
        }
    }
}

/// A static catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanProduct {
    pub id: u32,
    pub loan_type: LoanType,
    pub name: &'static str,
    pub annual_rate_percent: Percent,
    pub max_tenure_months: u32,
}

impl LoanProduct {
    pub fn allows_tenure(&self, tenure_months: u32) -> bool {
        tenure_months <= self.max_tenure_months
    }
}

pub static LOAN_PRODUCTS: [LoanProduct; 3] = [
    LoanProduct {
        id: 1,
        loan_type: LoanType::Personal,
        name: "Personal Loan",
        annual_rate_percent: dec!(12),
        max_tenure_months: 24,
    },
    LoanProduct {
        id: 2,
        loan_type: LoanType::Home,
        name: "Home Loan",
        annual_rate_percent: dec!(8),
        max_tenure_months: 60,
    },
    LoanProduct {
        id: 3,
        loan_type: LoanType::Auto,
        name: "Auto Loan",
        annual_rate_percent: dec!(10),
        max_tenure_months: 36,
    },
];

pub fn loan_products() -> &'static [LoanProduct] {
    &LOAN_PRODUCTS
}
