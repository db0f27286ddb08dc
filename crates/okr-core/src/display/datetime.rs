//! Date display utilities.
//!
//! Deadlines are calendar dates with no time zone. They print in the long
//! form a date picker shows, e.g. `October 19th, 2026`.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a civil `Date` that formats it as `Month Dth, YYYY`.
pub struct LongDate<'a>(pub &'a Date);

impl LongDate<'_> {
    fn ordinal_suffix(day: i8) -> &'static str {
        match (day % 10, day % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        }
    }
}

impl fmt::Display for LongDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0.day();
        write!(
            f,
            "{} {}{}, {}",
            self.0.strftime("%B"),
            day,
            Self::ordinal_suffix(day),
            self.0.year()
        )
    }
}

/// Formats an optional deadline, falling back to the picker's placeholder.
pub struct Deadline<'a>(pub Option<&'a Date>);

impl fmt::Display for Deadline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", LongDate(date)),
            None => write!(f, "Pick a date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_long_date_suffixes() {
        assert_eq!(LongDate(&date(2026, 10, 1)).to_string(), "October 1st, 2026");
        assert_eq!(LongDate(&date(2026, 10, 2)).to_string(), "October 2nd, 2026");
        assert_eq!(LongDate(&date(2026, 10, 3)).to_string(), "October 3rd, 2026");
        assert_eq!(LongDate(&date(2026, 10, 11)).to_string(), "October 11th, 2026");
        assert_eq!(LongDate(&date(2026, 10, 12)).to_string(), "October 12th, 2026");
        assert_eq!(LongDate(&date(2026, 10, 22)).to_string(), "October 22nd, 2026");
        assert_eq!(LongDate(&date(2027, 2, 23)).to_string(), "February 23rd, 2027");
        assert_eq!(LongDate(&date(2026, 12, 31)).to_string(), "December 31st, 2026");
    }

    #[test]
    fn test_deadline_placeholder() {
        assert_eq!(Deadline(None).to_string(), "Pick a date");
        assert_eq!(
            Deadline(Some(&date(2026, 3, 4))).to_string(),
            "March 4th, 2026"
        );
    }
}
