pub mod eligibility;
pub mod loan;
