/// Utilities for date, money and weight formatting in list rows

/// Format an ISO or SQL datetime to DD.MM.YY HH:MM (no century, no seconds)
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.24 14:02"
pub fn format_short_datetime(datetime_str: &str) -> String {
    const SHORT: &str = "%d.%m.%y %H:%M";
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format(SHORT).to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S") {
        return dt.format(SHORT).to_string();
    }
    datetime_str.to_string()
}

/// Current time as RFC 3339, the format the server stores `deleted_at` in
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Prices come in cents
/// Example: 12345 -> "123.45"
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Weights come in grams
/// Example: 1250 -> "1.25"
pub fn format_grams_as_kg(grams: f64) -> String {
    format!("{:.2}", grams / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_datetime() {
        assert_eq!(format_short_datetime("2024-03-15T14:02:26.123Z"), "15.03.24 14:02");
        assert_eq!(format_short_datetime("2024-12-31 23:59:59"), "31.12.24 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_short_datetime("invalid"), "invalid");
        assert_eq!(format_short_datetime(""), "");
    }

    #[test]
    fn test_money_and_weight() {
        assert_eq!(format_cents(12345), "123.45");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(-250), "-2.50");
        assert_eq!(format_grams_as_kg(1250.0), "1.25");
    }
}
