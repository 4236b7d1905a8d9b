//! Error Types for Investment Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),

    #[error("Invalid {field} choice: {value} (expected 1-3)")]
    InvalidChoice {
        field: &'static str,
        value: String,
    },

    #[error("Unknown goal: {0} (expected 1-5)")]
    InvalidGoal(String),

    #[error("At least one goal is required")]
    NoGoals,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdvisorError {
    /// Whether re-asking the same question could fix this error
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AdvisorError::InvalidNumber(_)
                | AdvisorError::NegativeAmount(_)
                | AdvisorError::InvalidChoice { .. }
                | AdvisorError::InvalidGoal(_)
                | AdvisorError::NoGoals
        )
    }
}
