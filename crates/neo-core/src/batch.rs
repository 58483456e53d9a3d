//! Batch processing of one input column: split, validate, reduce.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use neo_model::{ProcessingResult, RejectionRecord, Unid};

use crate::section::surviving_rows;
use crate::validate::validate_unid;

/// Run the full in-memory pipeline over one raw column.
///
/// Every surviving row lands on exactly one side of the result: a uNID in
/// the accepted set or a record in the rejection list. Duplicate uNIDs
/// from distinct rows collapse silently; rejections keep input order and
/// carry the 1-based ordinal of their surviving row.
pub fn process_rows(column: &[String]) -> ProcessingResult {
    let rows = surviving_rows(column);
    let mut accepted: BTreeSet<Unid> = BTreeSet::new();
    let mut rejected: Vec<RejectionRecord> = Vec::new();
    for row in &rows {
        // Raw values are personal IDs; only surface them at trace level.
        trace!(row = row.ordinal, raw = %row.value, "validating row");
        match validate_unid(&row.value) {
            Ok(unid) => {
                accepted.insert(unid);
            }
            Err(reason) => rejected.push(RejectionRecord {
                row: row.ordinal,
                raw: row.value.clone(),
                reason,
            }),
        }
    }
    debug!(
        surviving = rows.len(),
        accepted = accepted.len(),
        rejected = rejected.len(),
        "column processed"
    );
    ProcessingResult {
        accepted: accepted.into_iter().collect(),
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_model::RejectionReason;

    fn column(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn duplicates_collapse_silently() {
        let result = process_rows(&column(&["00012345", "00012345", "00054321"]));
        let accepted: Vec<&str> = result.accepted.iter().map(Unid::as_str).collect();
        assert_eq!(accepted, vec!["u0012345", "u0054321"]);
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn accepted_set_is_sorted_ascending() {
        let result = process_rows(&column(&["00999999", "00123456"]));
        let accepted: Vec<&str> = result.accepted.iter().map(Unid::as_str).collect();
        assert_eq!(accepted, vec!["u0123456", "u0999999"]);
    }

    #[test]
    fn processing_is_idempotent() {
        let input = column(&["uNID", "00123456", "bogus", "00999999", "00123456"]);
        let first = process_rows(&input);
        let second = process_rows(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_column_matches_expected_partition() {
        let input = column(&[
            "uNID",
            "00123456",
            "1234567A",
            "012345",
            "00999999",
            "Not Started",
            "00111111",
        ]);
        let result = process_rows(&input);

        let accepted: Vec<&str> = result.accepted.iter().map(Unid::as_str).collect();
        assert_eq!(accepted, vec!["u0123456", "u0999999"]);

        assert_eq!(result.rejected.len(), 2);
        assert_eq!(result.rejected[0].row, 2);
        assert_eq!(result.rejected[0].raw, "1234567A");
        assert_eq!(result.rejected[0].reason, RejectionReason::NonNumeric);
        assert_eq!(result.rejected[1].row, 3);
        assert_eq!(result.rejected[1].raw, "012345");
        assert_eq!(
            result.rejected[1].reason,
            RejectionReason::WrongLength { actual: 6 }
        );
    }
}
