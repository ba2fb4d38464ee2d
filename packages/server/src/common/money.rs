//! Currency helpers.
//!
//! All prices and earnings in this crate are carried as integer US cents
//! (`i64`). Conversion to a display string happens only at the edges.

/// Format an amount of cents as a dollar string, e.g. `12345` -> `"$123.45"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_dollars() {
        assert_eq!(format_cents(5000), "$50.00");
    }

    #[test]
    fn formats_sub_dollar_amounts() {
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_cents(-199), "-$1.99");
    }
}
