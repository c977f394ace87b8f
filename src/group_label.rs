use regex::Regex;
use std::sync::OnceLock;

// Ortholog group labels look like OG0001234. The digits are optional.
pub const GROUP_LABEL_PATTERN: &str = "OG[0-9]*";

fn group_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GROUP_LABEL_PATTERN).expect("group label pattern is valid"))
}

/// Returns the leftmost group label anywhere in `path`, directories included.
pub fn find_group_label(path: &str) -> Option<&str> {
    group_label_regex().find(path).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_group_label() {
        assert_eq!(find_group_label("dummy/OG1234.fasta"), Some("OG1234"));
        assert_eq!(find_group_label("OG0000017_aligned.fa"), Some("OG0000017"));
        assert_eq!(find_group_label("groups/OG.fasta"), Some("OG"));
        assert_eq!(find_group_label("tests/data/no_label.fasta"), None);
        // Case sensitive
        assert_eq!(find_group_label("og1234.fasta"), None);
    }

    #[test]
    fn test_leftmost_match_wins() {
        assert_eq!(find_group_label("run_OG7/OG1234.fasta"), Some("OG7"));
        assert_eq!(find_group_label("LOGS/OG12.fa"), Some("OG"));
    }
}
