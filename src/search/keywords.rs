//! Keyword list preparation.

use crate::error::{Error, Result};

/// Split a raw keyword string on `separator`, trimming each piece and
/// dropping blanks. Order and duplicates are kept.
pub fn split_keywords(raw: &str, separator: char) -> Vec<String> {
    normalize_keywords(raw.split(separator))
}

/// Trim keywords and drop the ones that become empty.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Normalize keywords and require at least one to survive.
///
/// The scanner accepts an empty list; callers that must reject it use this.
pub fn require_keywords<I, S>(keywords: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keywords = normalize_keywords(keywords);
    if keywords.is_empty() {
        return Err(Error::EmptyKeywordSet);
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_width_comma() {
        let keywords = split_keywords("北京， 上海 ，，广州", '，');
        assert_eq!(keywords, vec!["北京", "上海", "广州"]);
    }

    #[test]
    fn test_ascii_comma_is_not_a_separator_by_default() {
        let keywords = split_keywords("北京,上海", '，');
        assert_eq!(keywords, vec!["北京,上海"]);
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(split_keywords("a，a", '，'), vec!["a", "a"]);
    }

    #[test]
    fn test_require_keywords() {
        assert!(matches!(
            require_keywords(["  ", ""]),
            Err(Error::EmptyKeywordSet)
        ));
        assert_eq!(require_keywords([" x "]).unwrap(), vec!["x"]);
    }
}
