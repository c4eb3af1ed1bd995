//! Shared utility functions for AQD crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date format used by the measurement dataset: "DD-MM-YYYY"
    pub const DATE_FORMAT: &str = "%d-%m-%Y";

    /// Format a NaiveDate as "DD-MM-YYYY"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "DD-MM-YYYY" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Parse a date string in "DD-MM-YYYY" format, returning None on failure.
    pub fn parse_date_opt(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "15-06-2023");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_iso_order() {
            assert!(parse_date("2023-06-15").is_err());
            assert!(parse_date_opt("2023-06-15").is_none());
        }

        #[test]
        fn test_parse_rejects_impossible_day() {
            assert!(parse_date_opt("31-02-2023").is_none());
            assert!(parse_date_opt("").is_none());
        }

        #[test]
        fn test_parse_trims_whitespace() {
            let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
            assert_eq!(parse_date_opt(" 02-01-2023 "), Some(date));
        }
    }
}

/// Numeric helpers shared by the aggregation code
pub mod numbers {
    /// Round a value to `places` decimal places. Exact ties go to the even
    /// digit, so 40.125 rounds to 40.12.
    pub fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor).round_ties_even() / factor
    }

    /// Round a value to 2 decimal places, the precision used for display.
    pub fn round2(value: f64) -> f64 {
        round_to(value, 2)
    }

    /// Arithmetic mean of the values, or None when there are none.
    pub fn mean<I>(values: I) -> Option<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Quantile of an already sorted slice using linear interpolation
    /// between closest ranks. `q` is clamped to [0, 1].
    pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
        if sorted.is_empty() {
            return None;
        }
        let q = q.clamp(0.0, 1.0);
        let pos = q * (sorted.len() - 1) as f64;
        let lower = pos.floor() as usize;
        let upper = pos.ceil() as usize;
        let weight = pos - lower as f64;
        Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
    }

}
