/// Whether a relative post date such as `"3 months ago"` marks the posting as very old.
///
/// Postings one month old or more are stale; so are postings measured in years.
/// A leading `a`/`an` counts as one. Anything unparsable is treated as fresh.
pub fn is_very_old(posted_ago: &str) -> bool {
    let lower = posted_ago.trim().to_lowercase();
    if !(lower.contains("month") || lower.contains("year")) {
        return false;
    }

    leading_count(&lower).is_some_and(|n| n >= 1)
}

fn leading_count(text: &str) -> Option<u32> {
    match text.split_whitespace().next()? {
        "a" | "an" => Some(1),
        token => token.trim_end_matches('+').parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_stale() {
        assert!(is_very_old("1 month ago"));
        assert!(is_very_old("3 months ago"));
        assert!(is_very_old("11 Months ago"));
    }

    #[test]
    fn article_counts_as_one() {
        assert!(is_very_old("a month ago"));
        assert!(is_very_old("a year ago"));
    }

    #[test]
    fn years_are_stale() {
        assert!(is_very_old("2 years ago"));
    }

    #[test]
    fn recent_postings_are_fresh() {
        assert!(!is_very_old("3 days ago"));
        assert!(!is_very_old("2 weeks ago"));
        assert!(!is_very_old("5 hours ago"));
        assert!(!is_very_old("Just now"));
        assert!(!is_very_old(""));
    }

    #[test]
    fn zero_months_is_fresh() {
        assert!(!is_very_old("0 months ago"));
    }

    #[test]
    fn unparsable_count_is_fresh() {
        assert!(!is_very_old("several months ago"));
        assert!(!is_very_old("month ago"));
    }

    #[test]
    fn plus_suffix_is_accepted() {
        assert!(is_very_old("30+ months ago"));
    }
}
