//! Best-effort numeric cell parsing.
//!
//! Cells are never an error: anything that does not read as a finite number
//! is treated as an absent value.

/// Literal label some `p_country` cells carry in front of the number.
pub const DOMESTIC_PREFIX: &str = "Contact ";

/// Parses a cell as a float and rounds it (ties to even) to an integer.
pub fn parse_rank(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round_ties_even();
    // i64::MAX as f64 is 2^63, which itself does not fit
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}

/// Parses the domestic percentile, stripping the `Contact ` label if present.
///
/// Negative ranks are rejected so every retained percentile is non-negative.
pub fn parse_domestic_percentile(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    let numeric = trimmed.strip_prefix(DOMESTIC_PREFIX).unwrap_or(trimmed);
    parse_rank(numeric).filter(|p| *p >= 0)
}
