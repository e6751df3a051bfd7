//! Parser for human formatted release figures.
//!
//! Grammar, applied after removing every `,` and `%`:
//! ```text
//! value  := number suffix?
//! suffix := "K" (x1e3) | "M" (x1e6) | "B" (x1e9)
//! ```
//! Suffixes are uppercase only. Surrounding whitespace is ignored.

use crate::error::MagnitudeError;

fn suffix_scale(c: char) -> Option<f64> {
    match c {
        'K' => Some(1e3),
        'M' => Some(1e6),
        'B' => Some(1e9),
        _ => None,
    }
}

/// Parse `"105K"`, `"3.2%"`, `"1,250.5"`, `"-0.3B"` into a plain number.
pub fn parse_magnitude(raw: &str) -> Result<f64, MagnitudeError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '%').collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(MagnitudeError::Empty);
    }

    let (number, scale) = match cleaned.chars().last().and_then(suffix_scale) {
        Some(scale) => (cleaned[..cleaned.len() - 1].trim_end(), scale),
        None => (cleaned, 1.0),
    };

    let parsed: f64 = number
        .parse()
        .map_err(|_| MagnitudeError::NotANumber(raw.to_string()))?;

    let value = parsed * scale;
    if !value.is_finite() {
        return Err(MagnitudeError::NotFinite(raw.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_percent_values() {
        assert_eq!(parse_magnitude("3.2%"), Ok(3.2));
        assert_eq!(parse_magnitude("-0.1%"), Ok(-0.1));
        assert_eq!(parse_magnitude("1,250.5"), Ok(1250.5));
        assert_eq!(parse_magnitude(" 52.1 "), Ok(52.1));
    }

    #[test]
    fn suffixes_scale_the_prefix() {
        assert_eq!(parse_magnitude("105K"), Ok(105_000.0));
        assert_eq!(parse_magnitude("1.5M"), Ok(1_500_000.0));
        assert_eq!(parse_magnitude("-2B"), Ok(-2_000_000_000.0));
    }

    #[test]
    fn lowercase_suffix_is_not_a_suffix() {
        assert_eq!(
            parse_magnitude("105k"),
            Err(MagnitudeError::NotANumber("105k".into()))
        );
    }

    #[test]
    fn malformed_inputs_are_errors() {
        assert_eq!(parse_magnitude(""), Err(MagnitudeError::Empty));
        assert_eq!(parse_magnitude("%"), Err(MagnitudeError::Empty));
        assert!(matches!(parse_magnitude("K"), Err(MagnitudeError::NotANumber(_))));
        assert!(matches!(parse_magnitude("N/A"), Err(MagnitudeError::NotANumber(_))));
        assert!(matches!(parse_magnitude("1.2.3"), Err(MagnitudeError::NotANumber(_))));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(parse_magnitude("inf"), Err(MagnitudeError::NotFinite(_))));
        assert!(matches!(parse_magnitude("NaN"), Err(MagnitudeError::NotFinite(_))));
    }
}
