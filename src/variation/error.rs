//! Error types for the variation engine.

use thiserror::Error;

/// Errors that can abort a variation computation.
///
/// There is no partial output: any error discards the variant set being
/// built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariationError {
    /// A rewrite was invoked on a word its matcher accepted, but no
    /// qualifying rewrite position exists.
    ///
    /// This is a programming-invariant failure, not a user error: the rule's
    /// matcher and rewrite have drifted apart and the catalog must be fixed.
    /// It is not retried and not recoverable.
    #[error("rule `{rule}` accepted `{word}` but no rewrite position qualifies")]
    RuleContractViolation {
        /// The word the rewrite was invoked on.
        word: String,
        /// Name of the offending rule.
        rule: String,
    },

    /// The input word is empty or not ASCII lowercase letters.
    #[error("invalid word `{0}`: expected non-empty ASCII lowercase letters")]
    InvalidWord(String),
}

/// A specialized `Result` type for variation operations.
pub type Result<T> = std::result::Result<T, VariationError>;
