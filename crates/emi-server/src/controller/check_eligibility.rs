use actix_web::{post, web, HttpResponse};
use emi_core::loan::eligibility;
use emi_core::loan::presentation::EligibilityResponse;
use tracing::debug;

use crate::{error::Error, types::EligibilityRequest};

#[post("/check-eligibility")]
pub async fn index(
    body: web::Json<EligibilityRequest>,
) -> Result<HttpResponse, Error> {
    let input = body.into_inner().into_input()?;
    let output = eligibility::check_eligibility(&input)?;

    for warning in &output.warnings {
        debug!("{}", warning);
    }

    Ok(HttpResponse::Ok().json(EligibilityResponse::from(&output.result)))
}
