//! Country name validation and Wikipedia article title normalization

use crate::OutlineError;

/// Turn a user supplied country name into a Wikipedia article title.
///
/// Surrounding whitespace is trimmed and inner whitespace runs become a single
/// `_`, so `" United  States "` becomes `"United_States"`. Blank input is
/// rejected with [`OutlineError::EmptyInput`].
pub fn normalize_country(raw: &str) -> Result<String, OutlineError> {
    let words: Vec<&str> = raw.split_whitespace().collect();

    if words.is_empty() {
        return Err(OutlineError::EmptyInput);
    }

    Ok(words.join("_"))
}

/// Join a wiki base URL and an already percent-encoded article title
pub fn article_url(base: &str, encoded_title: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), encoded_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_country_single_word() {
        assert_eq!(normalize_country("Vanuatu").unwrap(), "Vanuatu");
    }

    #[test]
    fn test_normalize_country_trims_and_joins() {
        assert_eq!(
            normalize_country("  United   States ").unwrap(),
            "United_States"
        );
        assert_eq!(
            normalize_country("Papua\tNew Guinea").unwrap(),
            "Papua_New_Guinea"
        );
    }

    #[test]
    fn test_normalize_country_keeps_case() {
        assert_eq!(normalize_country("côte d'Ivoire").unwrap(), "côte_d'Ivoire");
    }

    #[test]
    fn test_normalize_country_empty() {
        assert_eq!(normalize_country(""), Err(OutlineError::EmptyInput));
        assert_eq!(normalize_country("   \n"), Err(OutlineError::EmptyInput));
    }

    #[test]
    fn test_article_url() {
        assert_eq!(
            article_url("https://en.wikipedia.org/wiki", "Vanuatu"),
            "https://en.wikipedia.org/wiki/Vanuatu"
        );
        assert_eq!(
            article_url("https://en.wikipedia.org/wiki/", "Fiji"),
            "https://en.wikipedia.org/wiki/Fiji"
        );
    }
}
