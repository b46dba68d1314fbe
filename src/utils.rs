pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f64>().unwrap_or(fallback)
}

/// Format a multiplier without trailing zeros ("1×", "1.25×").
pub fn format_multiplier(value: f64) -> String {
    format!("{}×", (value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_input() {
        assert_eq!(parse_f64_input(" 1.75 ", 1.0), 1.75);
        assert_eq!(parse_f64_input("", 2.0), 2.0);
        assert_eq!(parse_f64_input("fast", 0.5), 0.5);
    }

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(1.0), "1×");
        assert_eq!(format_multiplier(0.25), "0.25×");
        assert_eq!(format_multiplier(2.5), "2.5×");
    }
}
