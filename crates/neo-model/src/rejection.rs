use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a raw ID was rejected by the validator.
///
/// The `Display` strings are a fixed contract: they appear verbatim in the
/// `Error` column of the error report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The cell was empty (or whitespace only) after trimming.
    Empty,
    /// The value contains at least one non-digit character.
    NonNumeric,
    /// The value is all digits but not exactly 8 of them.
    WrongLength { actual: usize },
    /// Eight digits, but the first one is not `0`.
    MissingLeadingZero,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty ID"),
            Self::NonNumeric => f.write_str("Contains non-numeric characters"),
            Self::WrongLength { actual } => {
                write!(f, "Wrong length: {actual} digits (expected 8)")
            }
            Self::MissingLeadingZero => f.write_str("Does not start with 0"),
        }
    }
}

/// One rejected input row: its 1-based position in the surviving sequence,
/// the raw value as read, and the reason it failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionRecord {
    pub row: usize,
    pub raw: String,
    pub reason: RejectionReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_messages_are_stable() {
        assert_eq!(RejectionReason::Empty.to_string(), "Empty ID");
        assert_eq!(
            RejectionReason::NonNumeric.to_string(),
            "Contains non-numeric characters"
        );
        assert_eq!(
            RejectionReason::WrongLength { actual: 6 }.to_string(),
            "Wrong length: 6 digits (expected 8)"
        );
        assert_eq!(
            RejectionReason::MissingLeadingZero.to_string(),
            "Does not start with 0"
        );
    }
}
