use actix_web::{get, web, Responder};
use emi_core::loan::catalog::loan_products;
use rust_decimal::Decimal;
use serde::Serialize;

#[get("/loan-products")]
pub async fn index() -> impl Responder {
    let products = loan_products()
        .iter()
        .map(|p| Product {
            id: p.id,
            name: p.name,
            loan_type: p.loan_type.as_str(),
            interest_rate: p.annual_rate_percent,
            max_tenure: p.max_tenure_months,
        })
        .collect::<Vec<_>>();

    web::Json(Response { products })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub loan_type: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_rate: Decimal,
    pub max_tenure: u32,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub products: Vec<Product>,
}
