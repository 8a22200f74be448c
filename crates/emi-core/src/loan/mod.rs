//! Equal-monthly-installment loans: installment, amortization, eligibility
//! against salary, and comparison across the product catalog.

pub mod amortization;
pub mod catalog;
pub mod comparison;
pub mod eligibility;
pub mod emi;
pub mod presentation;
