use std::fmt;

use crate::ModelError;

/// A canonical uNID: the letter `u` followed by exactly 7 decimal digits.
///
/// Values are only produced from 8-digit source IDs whose leading `0` has
/// been replaced by `u`, so two distinct valid source IDs can never collapse
/// into the same uNID. Ordering is plain lexicographic string order, which
/// is the order the primary report lists identifiers in.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Unid(String);

impl Unid {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if !is_canonical(&value) {
            return Err(ModelError::InvalidUnid(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Unid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_canonical(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('u') else {
        return false;
    };
    digits.len() == 7 && digits.chars().all(|ch| ch.is_ascii_digit())
}
