use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for airline designator codes
    /// Must be exactly two uppercase ASCII letters
    /// - Valid: "DL", "AA", "SU"
    /// - Invalid: "dl", "Dl", "D1", "DLX", "D", ""
    pub static ref AIRLINE_CODE_REGEX: Regex = Regex::new(r"^[A-Z]{2}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airline_code_regex_valid() {
        assert!(AIRLINE_CODE_REGEX.is_match("DL"));
        assert!(AIRLINE_CODE_REGEX.is_match("AA"));
        assert!(AIRLINE_CODE_REGEX.is_match("ZZ"));
    }

    #[test]
    fn test_airline_code_regex_invalid() {
        assert!(!AIRLINE_CODE_REGEX.is_match("dl")); // lowercase
        assert!(!AIRLINE_CODE_REGEX.is_match("Dl")); // mixed case
        assert!(!AIRLINE_CODE_REGEX.is_match("D1")); // digit
        assert!(!AIRLINE_CODE_REGEX.is_match("DLX")); // too long
        assert!(!AIRLINE_CODE_REGEX.is_match("D")); // too short
        assert!(!AIRLINE_CODE_REGEX.is_match("")); // empty
        assert!(!AIRLINE_CODE_REGEX.is_match("D ")); // space
        assert!(!AIRLINE_CODE_REGEX.is_match("ÄÖ")); // non-ascii
        assert!(!AIRLINE_CODE_REGEX.is_match("DL\n")); // trailing newline
    }
}
