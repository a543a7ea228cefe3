//! Number formatting utilities for tables

/// Format a number with a thousands separator (space) and the given
/// number of decimal places
///
/// # Examples
///
/// ```rust,ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value), // 2 decimal places by default
    };

    // Split the integer and fractional parts
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a space every 3 digits, counting from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Format a money value with 2 decimal places and a thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Format an integer value with a thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Render a digit-only amount string with thousands grouping
///
/// Empty input renders as empty. The separator is a space, never a digit,
/// so stripping non-digits from the display form restores the stored value.
pub fn format_amount(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales_entry::aggregate::sanitize_amount;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(""), "");
        assert_eq!(format_amount("5"), "5");
        assert_eq!(format_amount("1234"), "1 234");
        assert_eq!(format_amount("1234567"), "1 234 567");
    }

    #[test]
    fn test_format_amount_round_trips_through_sanitize() {
        let stored = "1234567";
        let displayed = format_amount(stored);
        assert_eq!(sanitize_amount(&displayed), stored);
    }
}
