// src/services/tags.rs

/// Longest tag name the tags table accepts
pub const MAX_TAG_LEN: usize = 100;

/// Split a comma-separated tag string
///
/// Entries are trimmed, empty ones dropped, duplicates collapsed keeping
/// the first occurrence. Tags longer than MAX_TAG_LEN are cut at a char
/// boundary.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let tag: String = part.trim().chars().take(MAX_TAG_LEN).collect();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_dedupes() {
        assert_eq!(parse_tags(" sea, blue ,sea,, "), vec!["sea", "blue"]);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(parse_tags("Sea,sea"), vec!["Sea", "sea"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_parse_truncates_long_tags() {
        let long = "é".repeat(150);
        let tags = parse_tags(&long);
        assert_eq!(tags[0].chars().count(), MAX_TAG_LEN);
    }
}
