//! Money Formatting
//!
//! Whole-unit amounts grouped by thousands, the way `toLocaleString()`
//! renders integers for the browser's language.

/// Languages that group thousands with `.`
const DOT_GROUPING: &[&str] = &["es", "pt", "de", "it", "nl", "id", "tr", "da"];

/// Thousands separator for a BCP 47 language tag such as `es-CO`
pub fn thousands_separator(language: &str) -> char {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if DOT_GROUPING.contains(&primary.as_str()) {
        '.'
    } else {
        ','
    }
}

pub fn group_thousands(amount: u64, separator: char) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// `$15.000`
pub fn format_price(amount: u64, separator: char) -> String {
    format!("${}", group_thousands(amount, separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(32000, ','), "32,000");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_separator_by_language() {
        assert_eq!(thousands_separator("es-CO"), '.');
        assert_eq!(thousands_separator("pt_BR"), '.');
        assert_eq!(thousands_separator("DE"), '.');
        assert_eq!(thousands_separator("en-US"), ',');
        assert_eq!(thousands_separator(""), ',');
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(15000, '.'), "$15.000");
    }
}
