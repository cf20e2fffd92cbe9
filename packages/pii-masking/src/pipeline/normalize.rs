use lazy_static::lazy_static;
use regex::Regex;

/// Separator that replaces every run of spaces.
pub const SPACE_SEPARATOR: &str = "/";

lazy_static! {
    // Half-width (U+0020) and full-width (U+3000) spaces
    static ref SPACE_RUN_REGEX: Regex = Regex::new("[ \u{3000}]+").unwrap();
}

/// Collapse every run of half-width or full-width spaces into a single `/`.
///
/// Analyzers segment raw Japanese whitespace inconsistently, so a visible
/// boundary marker is substituted before analysis.
pub fn normalize(text: &str) -> String {
    SPACE_RUN_REGEX
        .replace_all(text, SPACE_SEPARATOR)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_space() {
        assert_eq!(normalize("東京\u{3000}都庁"), "東京/都庁");
    }

    #[test]
    fn test_mixed_run_becomes_one_separator() {
        assert_eq!(normalize("山田 \u{3000}  太郎"), "山田/太郎");
        assert_eq!(normalize("  先頭と末尾  "), "/先頭と末尾/");
    }

    #[test]
    fn test_other_whitespace_untouched() {
        assert_eq!(normalize("一行目\n二行目\tタブ"), "一行目\n二行目\tタブ");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("a  b\u{3000}\u{3000}c");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }
}
