//! Per-value validation and canonicalization of raw IDs.

use neo_model::{RejectionReason, Unid};

/// Expected digit count of a raw source ID.
pub const RAW_ID_DIGITS: usize = 8;

/// Validate one raw cell value and convert it to canonical uNID form.
///
/// The rules run in order and the first failure wins:
///
/// 1. trim surrounding whitespace;
/// 2. empty after trim;
/// 3. any non-digit character;
/// 4. digit count other than 8;
/// 5. first digit not `0`.
///
/// A valid 8-digit ID maps to `u` plus its trailing 7 digits. The function
/// is total: every input yields either a uNID or a rejection reason, never
/// a panic.
pub fn validate_unid(raw: &str) -> Result<Unid, RejectionReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RejectionReason::Empty);
    }
    if !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(RejectionReason::NonNumeric);
    }
    let digits = trimmed.chars().count();
    if digits != RAW_ID_DIGITS {
        return Err(RejectionReason::WrongLength { actual: digits });
    }
    let Some(rest) = trimmed.strip_prefix('0') else {
        return Err(RejectionReason::MissingLeadingZero);
    };
    let canonical = format!("u{rest}");
    // Shape is guaranteed by the checks above.
    Ok(Unid::new(canonical).expect("validated uNID shape"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_leading_zero_ids() {
        assert_eq!(validate_unid("00123456").unwrap().as_str(), "u0123456");
        assert_eq!(validate_unid("09999999").unwrap().as_str(), "u9999999");
    }

    #[test]
    fn trims_before_validating() {
        assert_eq!(validate_unid("  00123456 ").unwrap().as_str(), "u0123456");
    }

    #[test]
    fn rejects_in_rule_order() {
        assert_eq!(validate_unid("   "), Err(RejectionReason::Empty));
        assert_eq!(validate_unid("1234567A"), Err(RejectionReason::NonNumeric));
        // Non-numeric wins over length for mixed short values.
        assert_eq!(validate_unid("12a"), Err(RejectionReason::NonNumeric));
        assert_eq!(
            validate_unid("012345"),
            Err(RejectionReason::WrongLength { actual: 6 })
        );
        assert_eq!(
            validate_unid("012345678"),
            Err(RejectionReason::WrongLength { actual: 9 })
        );
        assert_eq!(
            validate_unid("12345678"),
            Err(RejectionReason::MissingLeadingZero)
        );
    }
}
