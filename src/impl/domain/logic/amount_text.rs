/// Raw amount-text handling for the grid's debit/credit columns.
///
/// Rows store the digits the user typed; thousands separators only exist at
/// the presentation layer and are stripped before parsing.

/// Keep digits and the first decimal point, silently discarding everything
/// else (letters, signs, further points, separators).
pub fn sanitize_amount_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_point => {
                seen_point = true;
                out.push(c);
            }
            _ => {}
        }
    }
    out
}

/// Parse sanitized (or display-formatted) amount text. Commas are stripped;
/// empty or unparsable text counts as zero, matching the grid's "blank means
/// no amount" semantics.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned = text.replace(',', "");
    cleaned.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_discards_invalid_characters() {
        assert_eq!(sanitize_amount_input("1,234.50"), "1234.50");
        assert_eq!(sanitize_amount_input("12a3-4"), "1234");
        assert_eq!(sanitize_amount_input("1.2.3"), "1.23");
        assert_eq!(sanitize_amount_input(""), "");
    }

    #[test]
    fn parse_strips_separators_and_defaults_to_zero() {
        assert_eq!(parse_amount("1,000"), 1000.0);
        assert_eq!(parse_amount("250.75"), 250.75);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("."), 0.0);
    }
}
