use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use emi_core::LoanError;
use serde::Serialize;
use std::io::Error as IO_ERROR;
use thiserror::Error;
use tracing::{error, warn};
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please provide positive numbers for salary, loan amount, tenure, and select loan type.";
pub const INVALID_LOAN_TYPE_MESSAGE: &str =
    "Invalid loan type. Choose from personal, home, or auto.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Internal server error. Please try again later.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    Loan(#[from] LoanError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),
}

#[derive(Debug, Serialize)]
pub struct MessageResponse<'a> {
    pub message: &'a str,
}

impl Error {
    /// Fixed client-facing text; internals never leave the process.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::Loan(LoanError::InvalidLoanType(_)) => INVALID_LOAN_TYPE_MESSAGE,
            Error::Loan(LoanError::InvalidInput { .. }) | Error::InvalidBody(_) => {
                INVALID_INPUT_MESSAGE
            }
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Loan(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Server error: {}", self);
        } else {
            warn!("Rejected request: {}", self);
        }

        HttpResponse::build(status).json(MessageResponse {
            message: self.public_message(),
        })
    }
}
