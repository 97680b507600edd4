/// Keywords that mark a page as "Your Money or Your Life" material.
pub const YMYL_KEYWORDS: [&str; 8] = [
    "health",
    "finance",
    "investment",
    "disease",
    "legal",
    "bank",
    "loan",
    "prescription",
];

/// Case-insensitive substring match, so "banking" hits "bank".
pub fn is_sensitive_topic(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let text_lower = text.to_lowercase();
    YMYL_KEYWORDS
        .iter()
        .any(|keyword| text_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_multiple_keywords() {
        assert!(is_sensitive_topic("I took out a bank loan"));
    }

    #[test]
    fn test_empty_text_is_not_sensitive() {
        assert!(!is_sensitive_topic(""));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(is_sensitive_topic("BANKING info"));
        assert!(is_sensitive_topic("Paralegal services"));
        assert!(is_sensitive_topic("HealthCare"));
    }

    #[test]
    fn test_unrelated_text() {
        assert!(!is_sensitive_topic("A recipe for sourdough bread and jam."));
    }
}
