/// Add thousands separators to a whole number of pounds
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format whole pounds, e.g. `£1,234`
pub fn format_pounds(value: i64) -> String {
    let formatted = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-£{}", formatted)
    } else {
        format!("£{}", formatted)
    }
}

/// Format a catalog price, showing pence only when there are any
pub fn format_price(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format_pounds(rounded as i64)
    } else {
        let sign = if rounded < 0.0 { "-" } else { "" };
        let abs = rounded.abs();
        let pounds = abs.trunc() as u64;
        let pence = ((abs - abs.trunc()) * 100.0).round() as u64;
        format!("{}£{}.{:02}", sign, group_thousands(pounds), pence)
    }
}

/// Format a VAT rate without a trailing `.0`
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{:.1}%", value)
    }
}

/// "1 day" / "14 days"
pub fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pounds() {
        assert_eq!(format_pounds(0), "£0");
        assert_eq!(format_pounds(334), "£334");
        assert_eq!(format_pounds(1234), "£1,234");
        assert_eq!(format_pounds(-45), "-£45");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(278.0), "£278");
        assert_eq!(format_price(278.5), "£278.50");
        assert_eq!(format_price(1999.99), "£1,999.99");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(20.0), "20%");
        assert_eq!(format_percent(17.5), "17.5%");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(14), "14 days");
    }
}
