//! Fallback substitution for missing source values
//!
//! Every place a variably populated field is read funnels through this
//! module, so the substitution policy cannot drift between call sites.

/// Literal substituted wherever the source omits a value.
pub const UNKNOWN: &str = "unknown";

/// First element of `values`, or [`UNKNOWN`] when the list is empty.
#[must_use]
pub fn first_or_unknown(values: &[String]) -> String {
    nth_or_unknown(values, 0)
}

/// Element at `index`, or [`UNKNOWN`] when the list is too short.
#[must_use]
pub fn nth_or_unknown(values: &[String], index: usize) -> String {
    values
        .get(index)
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_populated_list() {
        let values = vec!["晴れ".to_string(), "くもり".to_string()];
        assert_eq!(first_or_unknown(&values), "晴れ");
    }

    #[test]
    fn first_of_empty_list_is_unknown() {
        assert_eq!(first_or_unknown(&[]), UNKNOWN);
    }

    #[test]
    fn nth_within_bounds() {
        let values = vec!["19".to_string(), "9".to_string()];
        assert_eq!(nth_or_unknown(&values, 1), "9");
    }

    #[test]
    fn nth_past_end_is_unknown() {
        let values = vec!["19".to_string()];
        assert_eq!(nth_or_unknown(&values, 1), UNKNOWN);
    }
}
