pub mod check_eligibility;
pub mod compare_loans;
pub mod index;
pub mod loan_products;
pub mod version;
