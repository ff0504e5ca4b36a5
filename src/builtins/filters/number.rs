/// Formatters operating on numbers

/// Highest precision `number` accepts, anything above is clamped.
const MAX_PRECISION: usize = 20;

/// Parses the text as a float and prints it back, with `precision` decimals
/// when given. Text that isn't a number comes back unchanged.
pub fn number(s: &str, precision: Option<usize>) -> String {
    let num = match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return s.to_string(),
    };

    match precision {
        Some(p) => format!("{:.*}", p.min(MAX_PRECISION), num),
        None if num.fract() == 0.0 && num.abs() < 1e15 => format!("{}", num as i64),
        None => num.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_precision() {
        assert_eq!(number("3.14159", Some(2)), "3.14");
        assert_eq!(number("2", Some(1)), "2.0");
        assert_eq!(number(" 12.4 ", Some(0)), "12");
    }

    #[test]
    fn test_number_without_precision() {
        assert_eq!(number("3.50", None), "3.5");
        assert_eq!(number("2023", None), "2023");
        assert_eq!(number("-0.25", None), "-0.25");
    }

    #[test]
    fn test_number_passes_text_through() {
        assert_eq!(number("forthcoming", Some(2)), "forthcoming");
        assert_eq!(number("", None), "");
        assert_eq!(number("inf", None), "inf");
    }
}
