//! Shared utility functions for the dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Format a date as "MM/DD", the label used on time axes.
    pub fn format_month_day(date: &NaiveDate) -> String {
        date.format("%m/%d").to_string()
    }

    /// Day ordinal used to place dates on a continuous axis.
    pub fn day_number(date: &NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-01-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_other_formats() {
            assert!(parse_date("01/15/2024").is_err());
            assert!(parse_date("").is_err());
        }

        #[test]
        fn test_month_day() {
            let date = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
            assert_eq!(format_month_day(&date), "02/03");
        }

        #[test]
        fn test_day_number_steps_by_day() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
            let next = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
            assert_eq!(day_number(&next) - day_number(&date), 1.0);
        }
    }
}

/// Number formatting in the en-US style used by tooltips and axes.
pub mod numbers {
    /// Insert `,` separators into a run of ASCII digits.
    fn group_digits(digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Format with a fixed number of decimals and thousands separators.
    ///
    /// `format_grouped(12000.0, 0)` is `"12,000"`.
    pub fn format_grouped(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };
        let mut out = String::new();
        // "-0" is printed as "0"
        if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&group_digits(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    /// Locale-style formatting: grouping plus at most three fraction digits,
    /// trailing zeros dropped. `locale(1234.5)` is `"1,234.5"`.
    pub fn locale(value: f64) -> String {
        let formatted = format_grouped(value, 3);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }

    /// Decimal places needed to tell apart ticks spaced `step` apart.
    pub fn precision_for_step(step: f64) -> usize {
        if step == 0.0 || !step.is_finite() {
            return 0;
        }
        let exponent = step.abs().log10().floor();
        if exponent >= 0.0 {
            0
        } else {
            (-exponent) as usize
        }
    }

    /// Plain number with at most `max_decimals` decimals, trailing zeros
    /// dropped, no grouping: `trimmed(2.8000000001, 3)` is `"2.8"`.
    pub fn trimmed(value: f64, max_decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let s = format!("{:.*}", max_decimals, value);
        let s = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s.as_str()
        };
        if s == "-0" {
            "0".to_string()
        } else {
            s.to_string()
        }
    }

    /// Compact number for SVG attributes: at most three decimals, no
    /// trailing zeros, no negative zero.
    pub fn svg_number(value: f64) -> String {
        if !value.is_finite() {
            return "0".to_string();
        }
        trimmed(value, 3)
    }

}

/// Label helpers for dataset and field names.
pub mod text {
    /// Upper-case the first character: `"sales"` -> `"Sales"`.
    pub fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Upper-case the first letter of every word.
    pub fn title_case(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut prev_is_word = false;
        for c in s.chars() {
            let is_word = c.is_alphanumeric() || c == '_';
            if is_word && !prev_is_word {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            prev_is_word = is_word;
        }
        out
    }

    /// Human-readable form of a snake_case key: `"sales_data"` -> `"Sales Data"`.
    pub fn humanize(key: &str) -> String {
        title_case(&key.replace('_', " "))
    }

    /// Upper-case form of a snake_case key: `"page_views"` -> `"PAGE VIEWS"`.
    pub fn shout(key: &str) -> String {
        key.replace('_', " ").to_uppercase()
    }

}
