use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for URL slugs (categories, sub-categories, blogs)
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "living-room", "sofa3", "summer-sale-2024"
    /// - Invalid: "-sofa", "sofa-", "living--room", "Sofa", "living_room"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for short machine codes (warehouses, channels, contracts)
    /// Uppercase letters, digits, hyphens and underscores
    /// - Valid: "IST-01", "WEB", "KVKK_V2"
    /// - Invalid: "ist-01", "-WEB", "WEB CHANNEL"
    pub static ref CODE_REGEX: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9_-]*$").unwrap();

    /// Regex for phone numbers: optional leading "+", then 7-15 digits
    /// - Valid: "+905551112233", "05551112233"
    /// - Invalid: "555-111", "phone", "+90 555"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{7,15}$").unwrap();
}

/// Rejects values that are empty once surrounding whitespace is trimmed.
///
/// Services store trimmed text, so `length(min = 1)` alone lets `"   "`
/// through as an empty string.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Must not be blank".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("living-room"));
        assert!(SLUG_REGEX.is_match("sofa3"));
        assert!(SLUG_REGEX.is_match("summer-sale-2024"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-sofa")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("sofa-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("living--room")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Sofa")); // uppercase
        assert!(!SLUG_REGEX.is_match("living_room")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_code_regex() {
        assert!(CODE_REGEX.is_match("IST-01"));
        assert!(CODE_REGEX.is_match("WEB"));
        assert!(CODE_REGEX.is_match("KVKK_V2"));
        assert!(!CODE_REGEX.is_match("ist-01"));
        assert!(!CODE_REGEX.is_match("-WEB"));
        assert!(!CODE_REGEX.is_match("WEB CHANNEL"));
    }

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_REGEX.is_match("+905551112233"));
        assert!(PHONE_REGEX.is_match("05551112233"));
        assert!(!PHONE_REGEX.is_match("555-111"));
        assert!(!PHONE_REGEX.is_match("+90 555"));
        assert!(!PHONE_REGEX.is_match("123"));
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Sofa").is_ok());
        assert!(not_blank("  Sofa ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }
}
