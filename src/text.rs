/// True iff the text is absent, empty, or whitespace-only.
pub fn is_none_or_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

pub fn not_none_or_blank(text: Option<&str>) -> bool {
    !is_none_or_blank(text)
}

/// Collapses blank text to `None`; non-blank text passes through untouched.
pub fn none_if_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_none_or_blank() {
        assert!(is_none_or_blank(None));
        assert!(is_none_or_blank(Some("")));
        assert!(is_none_or_blank(Some("  ")));
        assert!(is_none_or_blank(Some("\t\n")));
        assert!(!is_none_or_blank(Some("a")));
        assert!(!is_none_or_blank(Some(" a ")));
    }

    #[test]
    fn test_not_none_or_blank() {
        assert!(not_none_or_blank(Some("a")));
        assert!(!not_none_or_blank(None));
        assert!(!not_none_or_blank(Some("   ")));
    }

    #[test]
    fn test_none_if_blank() {
        assert_eq!(none_if_blank(None), None);
        assert_eq!(none_if_blank(Some("")), None);
        assert_eq!(none_if_blank(Some("  ")), None);
        assert_eq!(none_if_blank(Some(" a ")), Some(" a "));
    }
}
