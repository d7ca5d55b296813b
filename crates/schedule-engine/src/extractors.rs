// Numeric extraction from human-readable calculation notes
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WEEKLY_RE: Regex =
        Regex::new(r"(?:£\s*)?(\d+(?:\.\d{1,2})?)\s*(?:per|a|each|/)\s*week").unwrap();
    static ref PER_YEAR_RE: Regex =
        Regex::new(r"(?:£\s*)?(\d+(?:\.\d{1,2})?)\s*(?:per|a|each|/)\s*(?:year|annum)").unwrap();
    static ref ANNUAL_RE: Regex =
        Regex::new(r"annual(?:ised)?(?:\s+cost)?(?:\s+of)?\s*£?\s*(\d+(?:\.\d{1,2})?)").unwrap();
}

/// Extracts a weekly amount stated in a calculation note, e.g.
/// "£4.25 per week" or "4.25/week".
pub fn extract_weekly_amount(note: &str) -> Option<f64> {
    let note_lower = note.to_lowercase();
    WEEKLY_RE
        .captures(&note_lower)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Extracts an annual amount stated in a calculation note, e.g.
/// "annual cost £221.00" or "£221.00 a year ÷ 52".
pub fn extract_annual_amount(note: &str) -> Option<f64> {
    let note_lower = note.to_lowercase();
    for re in [&*PER_YEAR_RE, &*ANNUAL_RE] {
        if let Some(value) = re
            .captures(&note_lower)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
        {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_weekly_amount() {
        assert_eq!(extract_weekly_amount("£4.25 per week"), Some(4.25));
        assert_eq!(extract_weekly_amount("charged at 1.25/week"), Some(1.25));
        assert_eq!(extract_weekly_amount("£3.75 a week across the scheme"), Some(3.75));
        assert_eq!(extract_weekly_amount("annual cost £221.00"), None);
    }

    #[test]
    fn test_extract_annual_amount() {
        assert_eq!(extract_annual_amount("annual cost £221.00 ÷ 52"), Some(221.0));
        assert_eq!(extract_annual_amount("£65.00 a year ÷ 52"), Some(65.0));
        assert_eq!(extract_annual_amount("£195.00 per annum"), Some(195.0));
        assert_eq!(extract_annual_amount("£4.25 per week"), None);
    }

    #[test]
    fn test_weekly_takes_both_forms_in_one_note() {
        let note = "annual cost £221.00 ÷ 52 = £4.25 per week";
        assert_eq!(extract_weekly_amount(note), Some(4.25));
        assert_eq!(extract_annual_amount(note), Some(221.0));
    }
}
