//! CSS lengths: a number with a unit, e.g. `4px`, `1.5rem`, `50%`.

use std::fmt;

/// A CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Rem,
    Em,
    /// Percentage of the containing block.
    Percent,
    /// Viewport width percentage.
    Vw,
    /// Viewport height percentage.
    Vh,
}

impl Unit {
    /// The suffix written after the number.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
        }
    }

    fn from_suffix(s: &str) -> Option<Unit> {
        match s {
            "px" => Some(Unit::Px),
            "rem" => Some(Unit::Rem),
            "em" => Some(Unit::Em),
            "%" => Some(Unit::Percent),
            "vw" => Some(Unit::Vw),
            "vh" => Some(Unit::Vh),
            _ => None,
        }
    }
}

/// A length value with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a length in pixels.
    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Create a length in root ems.
    pub fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    /// Create a length in ems.
    pub fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }

    /// Create a length as a percentage.
    pub fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// Parse `"<number><unit>"`, e.g. `"14px"`, `"-0.5rem"`, `"50%"`.
    ///
    /// Returns `None` for anything else, including unitless numbers.
    pub fn parse(input: &str) -> Option<Length> {
        let input = input.trim();
        let split = input
            .char_indices()
            .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && *c == '-')))
            .map(|(i, _)| i)?;
        let (number, suffix) = input.split_at(split);
        let unit = Unit::from_suffix(suffix)?;
        let value: f64 = number.parse().ok()?;
        Some(Length::new(value, unit))
    }

    /// The same length with its sign flipped.
    pub fn negate(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

/// Format a number the way CSS expects: no trailing `.0` on whole numbers.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_display() {
        assert_eq!(Length::px(4.0).to_string(), "4px");
        assert_eq!(Length::px(2.5).to_string(), "2.5px");
    }

    #[test]
    fn test_other_units_display() {
        assert_eq!(Length::rem(1.5).to_string(), "1.5rem");
        assert_eq!(Length::em(40.0).to_string(), "40em");
        assert_eq!(Length::percent(50.0).to_string(), "50%");
        assert_eq!(Length::new(100.0, Unit::Vw).to_string(), "100vw");
        assert_eq!(Length::new(80.0, Unit::Vh).to_string(), "80vh");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Length::parse("14px"), Some(Length::px(14.0)));
        assert_eq!(Length::parse("-0.5rem"), Some(Length::rem(-0.5)));
        assert_eq!(Length::parse("50%"), Some(Length::percent(50.0)));
    }

    #[test]
    fn test_parse_rejects_non_lengths() {
        assert_eq!(Length::parse("12"), None);
        assert_eq!(Length::parse("red"), None);
        assert_eq!(Length::parse("12pt"), None);
        assert_eq!(Length::parse(""), None);
    }

    #[test]
    fn test_negate() {
        assert_eq!(Length::px(8.0).negate().to_string(), "-8px");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1.25), "1.25");
    }
}
