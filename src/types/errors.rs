use std::num::ParseIntError;
use thiserror::Error;

/// Errors produced while parsing a time change token.
#[derive(Debug, Error)]
pub enum ChangeParseError {
    /// The token is too short to be a change at all (needs at least one digit
    /// and one unit tag). Callers typically treat this as "try another
    /// interpretation" rather than as malformed input.
    #[error("not a time change: '{token}'")]
    NotAChange { token: String },
    /// A quantity was not followed by a unit tag before the token ran out.
    #[error("invalid time change syntax: no unit tag after '{token}'")]
    MissingUnit { token: String },
    /// The text before a unit tag is not a valid signed integer.
    #[error("invalid quantity '{digits}': {source}")]
    InvalidQuantity {
        digits: String,
        #[source]
        source: ParseIntError,
    },
}
