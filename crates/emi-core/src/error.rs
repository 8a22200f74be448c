use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid loan type '{0}': choose from personal, home, or auto")]
    InvalidLoanType(String),

    #[error("Computation fault: {0}")]
    ComputationFault(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl LoanError {
    /// Errors caused by the caller's input rather than by the engine.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LoanError::InvalidInput { .. } | LoanError::InvalidLoanType(_)
        )
    }
}

impl From<serde_json::Error> for LoanError {
    fn from(e: serde_json::Error) -> Self {
        LoanError::SerializationError(e.to_string())
    }
}
