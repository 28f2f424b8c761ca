//! Conversion of extracted date strings into form date components.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::form::DateFields;

lazy_static! {
    // Day/month/year with any separator that survives normalization. The
    // body is matched in normalized form, where "24/10/1985" has become
    // "24 10 1985", but raw separators are accepted too.
    static ref DATE_COMPONENTS: Regex =
        Regex::new(r"(\d{1,2})[\s/.\-](\d{1,2})[\s/.\-](\d{2,4})").unwrap();
}

/// Split an extracted date string into zero-padded form components.
///
/// Two-digit years are assumed to be 20xx. Returns None when the string does
/// not look like a day/month/year sequence at all.
pub fn parse_extracted_date(text: &str) -> Option<DateFields> {
    let captures = DATE_COMPONENTS.captures(text)?;

    let jour = format!("{:0>2}", &captures[1]);
    let mois = format!("{:0>2}", &captures[2]);
    let annee = if captures[3].len() == 2 {
        format!("20{}", &captures[3])
    } else {
        captures[3].to_string()
    };

    Some(DateFields { jour, mois, annee })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_space_separated_normalized_dates() {
        let date = parse_extracted_date("24 10 1985").unwrap();
        assert_eq!(date.formatted(), "24/10/1985");
    }

    #[test]
    fn parses_raw_separators() {
        assert_eq!(parse_extracted_date("24/10/1985").unwrap().formatted(), "24/10/1985");
        assert_eq!(parse_extracted_date("24.10.1985").unwrap().formatted(), "24/10/1985");
        assert_eq!(parse_extracted_date("24-10-1985").unwrap().formatted(), "24/10/1985");
    }

    #[test]
    fn zero_pads_single_digit_components() {
        assert_eq!(parse_extracted_date("5 3 1985").unwrap().formatted(), "05/03/1985");
    }

    #[test]
    fn two_digit_years_are_assumed_2000s() {
        assert_eq!(parse_extracted_date("24 10 85").unwrap().formatted(), "24/10/2085");
    }

    #[test]
    fn non_date_text_returns_none() {
        assert_eq!(parse_extracted_date("a paris"), None);
        assert_eq!(parse_extracted_date(""), None);
    }
}
