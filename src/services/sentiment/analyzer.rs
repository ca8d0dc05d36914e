use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::SentimentLabel;

/// Scores at or above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Compound polarity of `text` in `[-1.0, 1.0]`.
///
/// VADER: word valences from the full VADER lexicon, adjusted for boosters,
/// negation, ALL-CAPS emphasis, "but" contrast and punctuation emphasis,
/// then normalized. Empty text scores 0.
pub fn score(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let analyzer = SentimentIntensityAnalyzer::new();
    analyzer
        .polarity_scores(text)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
        .clamp(-1.0, 1.0)
}

/// Maps a compound score to a label using the fixed thresholds
pub fn classify(score: f64) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(text: &str, expected: f64) {
        let actual = score(text);
        assert!(
            (actual - expected).abs() < 1e-3,
            "{text:?}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.05), SentimentLabel::Positive);
        assert_eq!(classify(0.049), SentimentLabel::Neutral);
        assert_eq!(classify(-0.05), SentimentLabel::Negative);
        assert_eq!(classify(-0.049), SentimentLabel::Neutral);
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
        assert_eq!(classify(1.0), SentimentLabel::Positive);
        assert_eq!(classify(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_empty_and_neutral_text_score_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("The film runs two hours."), 0.0);
    }

    #[test]
    fn test_reference_compound_scores() {
        // Compound scores published with the VADER lexicon
        assert_close("The book was good.", 0.4404);
        assert_close("VADER is smart, handsome, and funny.", 0.8316);
        assert_close("A really bad, horrible book.", -0.8211);
    }

    #[test]
    fn test_plainly_negative_reviews() {
        let s = score("The villain killed everyone and the war ruined it");
        assert_eq!(classify(s), SentimentLabel::Negative);
        assert_eq!(classify(score("No. Just no.")), SentimentLabel::Negative);
        assert_eq!(
            classify(score("Terrible, boring and a waste of time")),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_polarity() {
        assert!(score("The movie was great") > POSITIVE_THRESHOLD);
        assert!(score("The movie was terrible") < NEGATIVE_THRESHOLD);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(score("The movie was not great") < 0.0);
        assert!(score("I didn't like it") < 0.0);
    }

    #[test]
    fn test_boosters_intensify_and_dampen() {
        let plain = score("The acting was good");
        assert!(score("The acting was very good") > plain);
        assert!(score("The acting was slightly good") < plain);
        assert!(score("The acting was very bad") < score("The acting was bad"));
    }

    #[test]
    fn test_caps_emphasis_in_mixed_case() {
        assert!(score("The movie was GREAT") > score("The movie was great"));
        // all caps text carries no differential
        assert_eq!(score("THE MOVIE WAS GREAT"), score("the movie was great"));
    }

    #[test]
    fn test_exclamation_emphasis() {
        let plain = score("Great movie");
        assert!(score("Great movie!") > plain);
        assert_eq!(score("Great movie!!!!"), score("Great movie!!!!!!!!"));
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        assert!(score("The acting was good but the ending was awful") < NEGATIVE_THRESHOLD);
        assert!(score("The ending was awful but the acting was good") > POSITIVE_THRESHOLD);
    }

    #[test]
    fn test_score_is_bounded() {
        let text = "great great great amazing wonderful best love perfect superb!!!!";
        let s = score(text);
        assert!(s <= 1.0 && s > 0.9);
        let s = score("worst awful terrible horrible garbage trash abysmal");
        assert!(s >= -1.0 && s < -0.9);
    }
}
