use actix_web::{post, web, HttpResponse};
use emi_core::loan::comparison;
use emi_core::loan::presentation::ComparisonResponse;

use crate::{error::Error, types::ComparisonRequest};

#[post("/compare-loans")]
pub async fn index(
    body: web::Json<ComparisonRequest>,
) -> Result<HttpResponse, Error> {
    let input = body.into_inner().into_input()?;
    let output = comparison::compare_loan_products(&input)?;

    Ok(HttpResponse::Ok().json(ComparisonResponse::from(&output.result)))
}
