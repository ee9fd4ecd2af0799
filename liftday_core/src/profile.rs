//! User profile editing helpers.
//!
//! Height has a dual representation: stored as total inches, displayed and
//! edited as a feet'inches" string. Numeric text fields coerce parse
//! failures to 0 rather than rejecting input.

/// Default height fallback when no prior value exists (6'0")
pub const DEFAULT_HEIGHT_INCHES: u32 = 72;

/// Format a height in total inches as feet'inches"
///
/// `format_height(72)` yields `6'0"`.
pub fn format_height(total_inches: u32) -> String {
    let feet = total_inches / 12;
    let inches = total_inches % 12;
    format!("{}'{}\"", feet, inches)
}

/// Parse a feet'inches" string into total inches
///
/// Accepts the form produced by `format_height` (e.g. `6'0"`). On parse
/// failure the current height is kept, or 72 inches when there is none.
pub fn parse_height(input: &str, current: Option<u32>) -> u32 {
    parse_height_exact(input).unwrap_or_else(|| current.unwrap_or(DEFAULT_HEIGHT_INCHES))
}

fn parse_height_exact(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    let (feet_part, rest) = trimmed.split_once('\'')?;
    let inches_part = rest.strip_suffix('"')?;

    let feet: u32 = feet_part.trim().parse().ok()?;
    let inches: u32 = inches_part.trim().parse().ok()?;

    Some(feet * 12 + inches)
}

/// Coerce a numeric text field to a number, treating parse failure as 0
///
/// Used for the weight, reps and age edit fields.
pub fn coerce_number(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(72), "6'0\"");
        assert_eq!(format_height(65), "5'5\"");
        assert_eq!(format_height(0), "0'0\"");
        assert_eq!(format_height(11), "0'11\"");
    }

    #[test]
    fn test_parse_height() {
        assert_eq!(parse_height("6'0\"", None), 72);
        assert_eq!(parse_height("5'11\"", None), 71);
        assert_eq!(parse_height(" 6'2\" ", None), 74);
    }

    #[test]
    fn test_height_roundtrip() {
        // Exact round-trip for every height expressible as feet'inches"
        for inches in 0..=120 {
            let formatted = format_height(inches);
            assert_eq!(parse_height(&formatted, None), inches, "height {}", inches);
        }
    }

    #[test]
    fn test_parse_height_invalid_falls_back() {
        assert_eq!(parse_height("tall", Some(68)), 68);
        assert_eq!(parse_height("tall", None), DEFAULT_HEIGHT_INCHES);
        assert_eq!(parse_height("6'", Some(70)), 70);
        assert_eq!(parse_height("", None), DEFAULT_HEIGHT_INCHES);
        assert_eq!(parse_height("6'x\"", Some(70)), 70);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("25"), 25);
        assert_eq!(coerce_number(" 8 "), 8);
        assert_eq!(coerce_number("abc"), 0);
        assert_eq!(coerce_number(""), 0);
        assert_eq!(coerce_number("-5"), 0);
    }
}
