use crate::domain::{extract_area, Area, OpeningHours, PriceRange};
use crate::synthesis::facts::{
    hours_summary, price_descriptor, rating_descriptor, rating_intro, review_magnitude,
    seed_sentence, HOURS_CHECK, HOURS_CONTINUOUS, HOURS_WEEKDAYS,
};

fn hours(lines: &[&str]) -> OpeningHours {
    OpeningHours {
        weekday_text: lines.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn extract_area_takes_first_match_in_scan_order() {
    assert_eq!(extract_area("3 Church Road, Formby"), Area::Formby);
    assert_eq!(extract_area("Station Approach, Hightown"), Area::Hightown);
    // Crosby appears first in the text but Freshfield is earlier in the list.
    assert_eq!(extract_area("Crosby Road, Freshfield"), Area::Freshfield);
    assert_eq!(extract_area("Moss Lane, Altcar"), Area::Altcar);
}

#[test]
fn extract_area_defaults_to_formby() {
    assert_eq!(extract_area(""), Area::Formby);
    assert_eq!(extract_area("somewhere else entirely"), Area::Formby);
    // Matching is case-sensitive on the proper noun.
    assert_eq!(extract_area("crosby road"), Area::Formby);
}

#[test]
fn area_keys_round_trip() {
    for area in Area::ALL {
        assert_eq!(Area::from_key(area.key()), Some(area));
        assert!(!area.label().is_empty());
    }
    assert_eq!(Area::from_key("HIGHTOWN"), Some(Area::Hightown));
    assert_eq!(Area::from_key("atlantis"), None);
}

#[test]
fn rating_descriptor_first_threshold_wins() {
    assert_eq!(rating_descriptor(None), "");
    assert_eq!(rating_descriptor(Some(5.0)), "one of the highest-rated in Formby");
    assert_eq!(rating_descriptor(Some(4.8)), "one of the highest-rated in Formby");
    assert_eq!(rating_descriptor(Some(4.79)), "consistently highly rated");
    assert_eq!(rating_descriptor(Some(4.2)), "very well regarded by visitors and locals");
    assert_eq!(rating_descriptor(Some(3.8)), "well established and popular");
    assert_eq!(rating_descriptor(Some(3.0)), "a well-known local choice");
    assert_eq!(rating_descriptor(Some(0.0)), "a well-known local choice");
}

#[test]
fn review_magnitude_bands() {
    assert_eq!(review_magnitude(None), None);
    assert_eq!(review_magnitude(Some(0)), None);
    assert_eq!(review_magnitude(Some(20)), None);
    assert_eq!(review_magnitude(Some(21)).as_deref(), Some("dozens of Google reviews"));
    assert_eq!(review_magnitude(Some(99)).as_deref(), Some("dozens of Google reviews"));
    assert_eq!(review_magnitude(Some(100)).as_deref(), Some("100 Google reviews"));
    assert_eq!(review_magnitude(Some(499)).as_deref(), Some("499 Google reviews"));
    assert_eq!(review_magnitude(Some(500)).as_deref(), Some("over 500 Google reviews"));
    assert_eq!(review_magnitude(Some(1_234)).as_deref(), Some("over 1200 Google reviews"));
}

#[test]
fn review_magnitude_rounds_620_down_to_600() {
    let phrase = review_magnitude(Some(620)).unwrap();
    assert_eq!(phrase, "over 600 Google reviews");
    assert!(!phrase.contains("620"));
}

#[test]
fn rating_intro_needs_a_quotable_rating() {
    assert_eq!(rating_intro(None, Some(900)), "");
    assert_eq!(rating_intro(Some(3.9), Some(900)), "");
    assert_eq!(
        rating_intro(Some(4.6), Some(620)),
        "With over 600 Google reviews averaging 4.6 out of 5"
    );
    assert_eq!(
        rating_intro(Some(4.2), Some(150)),
        "Rated 4.2/5 across 150 Google reviews"
    );
    assert_eq!(rating_intro(Some(4.7), Some(5)), "Rated 4.7/5 on Google");
    assert_eq!(rating_intro(Some(4.0), None), "Rated 4.0/5 on Google");
}

#[test]
fn price_descriptor_covers_every_tier() {
    assert_eq!(price_descriptor(None), "");
    for tier in [
        PriceRange::Budget,
        PriceRange::Moderate,
        PriceRange::Upscale,
        PriceRange::Luxury,
    ] {
        assert!(!price_descriptor(Some(tier)).is_empty());
    }
    assert_eq!(price_descriptor(Some(PriceRange::Budget)), "budget-friendly prices");
}

#[test]
fn price_symbols_parse() {
    assert_eq!(PriceRange::from_symbol("££"), Some(PriceRange::Moderate));
    assert_eq!(PriceRange::from_symbol(" ££££ "), Some(PriceRange::Luxury));
    assert_eq!(PriceRange::from_symbol("$$"), None);
    assert!(PriceRange::Budget < PriceRange::Luxury);
}

#[test]
fn hours_summary_patterns() {
    assert_eq!(hours_summary(None), "");
    assert_eq!(hours_summary(Some(&hours(&[]))), "");
    assert_eq!(
        hours_summary(Some(&hours(&["Monday: Open 24 hours", "Tuesday: Open 24 hours"]))),
        HOURS_CONTINUOUS
    );
    assert_eq!(
        hours_summary(Some(&hours(&["Monday: 9:00 AM – 5:00 PM"]))),
        HOURS_WEEKDAYS
    );
    assert_eq!(hours_summary(Some(&hours(&["Monday: Closed"]))), HOURS_CHECK);
    assert_eq!(hours_summary(Some(&hours(&["Saturday: 10:00 AM – 2:00 PM"]))), HOURS_CHECK);
}

#[test]
fn seed_sentence_strips_one_trailing_full_stop() {
    assert_eq!(seed_sentence(None), None);
    assert_eq!(seed_sentence(Some("   ")), None);
    assert_eq!(seed_sentence(Some(".")), None);
    assert_eq!(
        seed_sentence(Some(" Cosy tearoom by the station. ")).as_deref(),
        Some("Cosy tearoom by the station")
    );
    assert_eq!(seed_sentence(Some("Wait for it...")).as_deref(), Some("Wait for it.."));
}
