use num_format::{Locale, ToFormattedString as _};

/// Display formatting for amount text and the balance indicator.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user locale. Grouping is presentation-only: rows keep the
/// raw digits, and parsing strips the separators again.

/// Insert thousands separators into raw amount text, preserving whatever
/// fractional digits the user typed. Non-numeric text comes back unchanged.
pub fn group_amount_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut parts = text.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("");
    let fractional_part = parts.next();
    let grouped = match integer_part.parse::<i64>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) if integer_part.is_empty() => String::new(),
        Err(_) => return text.to_string(),
    };
    match fractional_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// Text for the persistent difference indicator: the absolute debit/credit
/// gap, rounded to cents as a whole and grouped. Rounding the full value
/// keeps the carry when the fraction rounds up to a whole unit.
pub fn format_difference(difference: f64) -> String {
    let rounded = format!("{:.2}", difference.abs());
    let mut parts = rounded.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("0");
    let fraction = parts.next().unwrap_or("00");
    let grouped = integer_part
        .parse::<i64>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| integer_part.to_string());
    if fraction == "00" {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_and_keeps_fraction() {
        assert_eq!(group_amount_text("1234567"), "1,234,567");
        assert_eq!(group_amount_text("1234.5"), "1,234.5");
        assert_eq!(group_amount_text(""), "");
        assert_eq!(group_amount_text(".5"), ".5");
    }

    #[test]
    fn difference_is_absolute_and_grouped() {
        assert_eq!(format_difference(-1200.0), "1,200");
        assert_eq!(format_difference(200.25), "200.25");
    }

    #[test]
    fn difference_rounding_carries_into_the_integer_part() {
        assert_eq!(format_difference(0.999), "1");
        assert_eq!(format_difference(-0.999), "1");
        assert_eq!(format_difference(1234.999), "1,235");
        assert_eq!(format_difference(200.994), "200.99");
    }
}
