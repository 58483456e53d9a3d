//! Section-break detection and row filtering.
//!
//! Input sheets carry a trailing section of rows that must not be
//! processed ("Rehire" notices, "Not Started" entries). The break is
//! detected by substring match against the raw column before any other
//! filtering, exactly as the legacy sheets rely on.

use neo_model::RawRow;

/// Sentinel substrings that mark the start of the excluded trailing
/// section. Matched case-insensitively anywhere in the cell.
///
/// TODO: confirm with intake whether other sentinel phrasings ("Rehired",
/// "No Start") occur in the wild before widening this list.
pub const SECTION_SENTINELS: [&str; 2] = ["rehire", "not start"];

/// The column header token; removed wherever it appears in the valid
/// section.
pub const HEADER_TOKEN: &str = "unid";

/// True when a cell marks the start of the excluded trailing section.
pub fn is_section_break(value: &str) -> bool {
    let lower = value.to_lowercase();
    SECTION_SENTINELS
        .iter()
        .any(|sentinel| lower.contains(sentinel))
}

/// Truncate the column at the first section break and drop header and
/// blank entries, assigning 1-based ordinals over the survivors.
///
/// Blank here means the empty string a missing cell reads as; a
/// whitespace-only cell survives so the validator can report it as an
/// empty ID rather than losing it silently.
pub fn surviving_rows(column: &[String]) -> Vec<RawRow> {
    let valid = match column.iter().position(|value| is_section_break(value)) {
        Some(break_index) => &column[..break_index],
        None => column,
    };
    valid
        .iter()
        .filter(|value| !value.is_empty())
        .filter(|value| !value.eq_ignore_ascii_case(HEADER_TOKEN))
        .enumerate()
        .map(|(index, value)| RawRow {
            ordinal: index + 1,
            value: value.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn truncates_at_first_sentinel() {
        let rows = surviving_rows(&column(&["00012345", "Rehire Notice", "00054321"]));
        let values: Vec<&str> = rows.iter().map(|row| row.value.as_str()).collect();
        assert_eq!(values, vec!["00012345"]);
    }

    #[test]
    fn keeps_whole_column_without_sentinel() {
        let rows = surviving_rows(&column(&["00012345", "00054321"]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn sentinels_match_case_insensitively() {
        assert!(is_section_break("NOT STARTED"));
        assert!(is_section_break("rehire - see HR"));
        assert!(!is_section_break("00123456"));
    }

    #[test]
    fn header_and_blank_rows_are_removed_before_numbering() {
        let rows = surviving_rows(&column(&["uNID", "", "00123456", "UNID", "00054321"]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ordinal, 1);
        assert_eq!(rows[0].value, "00123456");
        assert_eq!(rows[1].ordinal, 2);
        assert_eq!(rows[1].value, "00054321");
    }

    #[test]
    fn padded_header_token_is_not_the_header() {
        // Only an exact (case-insensitive) match is the header; a padded
        // cell stays in the sequence and the validator rejects it.
        let rows = surviving_rows(&column(&[" uNID ", "00123456"]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, " uNID ");
        assert_eq!(
            crate::validate::validate_unid(&rows[0].value),
            Err(neo_model::RejectionReason::NonNumeric)
        );
    }

    #[test]
    fn whitespace_only_cells_survive() {
        let rows = surviving_rows(&column(&["  ", "00123456"]));
        assert_eq!(rows[0].value, "  ");
        assert_eq!(rows[1].ordinal, 2);
    }
}
