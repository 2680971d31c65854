const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Case-insensitive substring test against the twelve month names.
///
/// This is a plain string match, not a date detector: "Mayflower" counts as a
/// hit for "may". That behavior is intentional.
pub fn contains_month(title: &str) -> bool {
    let title = title.to_lowercase();
    MONTHS.iter().any(|month| title.contains(month))
}

#[cfg(test)]
mod tests {
    use super::{contains_month, MONTHS};

    #[test]
    fn every_month_is_detected_in_any_casing() {
        for month in MONTHS {
            let lower = format!("best deals in {}", month);
            let upper = format!("BEST DEALS IN {}", month.to_uppercase());
            let mut chars = month.chars();
            let capitalised = format!(
                "Best deals in {}{}",
                chars.next().unwrap().to_uppercase(),
                chars.as_str()
            );

            assert!(contains_month(&lower), "missed lowercase {}", month);
            assert!(contains_month(&upper), "missed uppercase {}", month);
            assert!(contains_month(&capitalised), "missed capitalised {}", month);
        }
    }

    #[test]
    fn titles_without_a_month_are_rejected() {
        assert!(!contains_month("Top Rewards Cards"));
        assert!(!contains_month(""));
        assert!(!contains_month("Jan Feb Mar shorthand does not count"));
    }

    #[test]
    fn embedded_month_substrings_count_as_hits() {
        // String match by design, so proper nouns embedding a month still hit.
        assert!(contains_month("The Mayflower Hotel"));
        assert!(contains_month("Marching band supplies"));
    }
}
