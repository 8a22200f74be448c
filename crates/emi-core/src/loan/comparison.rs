//! Side-by-side pricing of one loan request against every catalog product.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan::catalog::{loan_products, LoanProduct};
use crate::loan::eligibility::{max_installment, EmiResult, MAX_EMI_TO_SALARY};
use crate::loan::emi::{ensure_positive, validate_tenure, LoanRequest};
use crate::types::{to_money_string, with_metadata, ComputationOutput, Money};
use crate::LoanResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// Monthly salary.
    pub salary: Money,
    pub loan_amount: Money,
    pub tenure_months: u32,
}

/// Outcome for one product. Figures are absent when the requested tenure
/// is longer than the product allows.
#[derive(Debug, Clone, Serialize)]
pub struct ProductComparison {
    #[serde(flatten)]
    pub product: LoanProduct,
    pub eligible: bool,
    pub monthly_installment: Option<Money>,
    pub total_payment: Option<Money>,
    pub total_interest: Option<Money>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonOutput {
    pub max_installment: Money,
    pub products: Vec<ProductComparison>,
    /// Cheapest eligible product by total interest, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_product_id: Option<u32>,
}

/// Price the request against each catalog product with that product's own
/// rate and tenure limit.
pub fn compare_loan_products(
    input: &ComparisonInput,
) -> LoanResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    ensure_positive("salary", input.salary)?;
    ensure_positive("loan_amount", input.loan_amount)?;
    validate_tenure(input.tenure_months)?;

    let products = loan_products()
        .iter()
        .map(|product| compare_product(product, input))
        .collect::<LoanResult<Vec<_>>>()?;

    let best_product_id = products
        .iter()
        .filter(|c| c.eligible)
        .filter_map(|c| c.total_interest.map(|interest| (interest, c.product.id)))
        .min_by_key(|(interest, _)| *interest)
        .map(|(_, id)| id);

    let output = ComparisonOutput {
        max_installment: max_installment(input.salary),
        products,
        best_product_id,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "catalog_size": loan_products().len(),
        "compounding": "monthly",
        "max_emi_to_salary": MAX_EMI_TO_SALARY.to_string(),
    });

    Ok(with_metadata(
        "Catalog comparison of reducing-balance EMI",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

fn compare_product(product: &LoanProduct, input: &ComparisonInput) -> LoanResult<ProductComparison> {
    if !product.allows_tenure(input.tenure_months) {
        return Ok(ProductComparison {
            product: product.clone(),
            eligible: false,
            monthly_installment: None,
            total_payment: None,
            total_interest: None,
            message: format!(
                "Not eligible (max tenure: {} months)",
                product.max_tenure_months
            ),
        });
    }

    let request = LoanRequest::new(
        input.loan_amount,
        product.annual_rate_percent,
        input.tenure_months,
    );
    let summary = EmiResult::compute(&request, input.salary)?;

    let message = if summary.eligible {
        "Eligible".to_string()
    } else {
        format!(
            "Not eligible (EMI ₹{} exceeds 40% salary)",
            to_money_string(summary.monthly_installment)
        )
    };

    Ok(ProductComparison {
        product: product.clone(),
        eligible: summary.eligible,
        monthly_installment: Some(summary.monthly_installment),
        total_payment: Some(summary.total_payment),
        total_interest: Some(summary.total_interest),
        message,
    })
}
