use thiserror::Error;

use crate::domain::{Amount, ExpenseId, ParseAmountError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        source: ParseAmountError,
    },

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Amount),

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),
}
