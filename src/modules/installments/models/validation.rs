use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Reasons contract terms cannot produce a schedule
///
/// All variants are user-input errors and are fixed by correcting the terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("total amount is required and must be greater than zero")]
    MissingTotalAmount,

    #[error("monthly payment is required and must be greater than zero")]
    MissingMonthlyPayment,

    #[error("start date is required")]
    MissingStartDate,

    #[error("billing day must be between 1 and 31, got {0}")]
    InvalidBillingDay(u32),
}

impl ValidationError {
    /// Stable machine-readable name of the failure
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingTotalAmount => "MissingTotalAmount",
            Self::MissingMonthlyPayment => "MissingMonthlyPayment",
            Self::MissingStartDate => "MissingStartDate",
            Self::InvalidBillingDay(_) => "InvalidBillingDay",
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
