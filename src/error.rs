//! Recoverable errors caused by what the user typed.
//!
//! These are reported on the console and the menu loop carries on. Anything
//! else reaching the loop is a storage failure and ends the program.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputError {
    /// A required piece of text was blank after trimming.
    #[error("{0} cannot be empty.")]
    Empty(&'static str),

    #[error("Please enter a valid number.")]
    NotANumber,

    #[error("Invalid category number.")]
    OutOfRange,

    #[error("Amount must be a valid number.")]
    InvalidAmount,

    #[error("Target must be positive.")]
    NonPositiveTarget,

    /// A sum or difference of stored amounts left the representable range.
    #[error("Amounts are too large to add up. Correct or delete the oversized records.")]
    AmountOverflow,

    #[error("Category '{0}' already exists.")]
    DuplicateCategory(String),

    #[error("You have entered an invalid number. Please try again.")]
    UnknownMenuOption,
}
