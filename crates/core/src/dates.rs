use chrono::NaiveDate;

/// Formats a date the Brazilian way, matching the output workbook's
/// DD/MM/YYYY column format.
pub fn format_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a date cell leniently. Day-first formats are tried before
/// month-first since the source ledgers are Brazilian exports.
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in &[
        "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%y",
    ] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    // Datetime cells serialized as text ("2024-01-15 00:00:00").
    if let Some((date_part, _)) = s.split_once(' ') {
        return parse_flexible(date_part);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_brazilian_slash_format() {
        assert_eq!(
            parse_flexible("15/01/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn parses_iso_format() {
        assert_eq!(
            parse_flexible("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn day_first_wins_over_month_first() {
        // 03/04 is April 3rd in a Brazilian export, not March 4th.
        assert_eq!(
            parse_flexible("03/04/2024"),
            NaiveDate::from_ymd_opt(2024, 4, 3)
        );
    }

    #[test]
    fn parses_datetime_text() {
        assert_eq!(
            parse_flexible("2024-01-15 00:00:00"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_flexible("not-a-date"), None);
        assert_eq!(parse_flexible(""), None);
    }

    #[test]
    fn formats_br() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_br(date), "05/01/2024");
    }
}
