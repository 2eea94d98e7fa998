use crate::catalog::filter::{matches_query, search};
use crate::catalog::ranking::rank;
use crate::domain::{extract_area, Category, Listing, ListingTier, PriceRange};
use crate::synthesis::compose;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn tier() -> impl Strategy<Value = ListingTier> {
    prop_oneof![
        Just(ListingTier::Premium),
        Just(ListingTier::Featured),
        Just(ListingTier::Standard),
        Just(ListingTier::Unrecognized),
    ]
}

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Restaurants),
        Just(Category::Cafes),
        Just(Category::Pubs),
        Just(Category::Accommodation),
        Just(Category::Shopping),
        Just(Category::Activities),
        Just(Category::NatureWalks),
        Just(Category::Beaches),
        "[a-z]{3,8}".prop_map(|s| Category::from_slug(&s)),
    ]
}

fn price() -> impl Strategy<Value = Option<PriceRange>> {
    proptest::option::of(prop_oneof![
        Just(PriceRange::Budget),
        Just(PriceRange::Moderate),
        Just(PriceRange::Upscale),
        Just(PriceRange::Luxury),
    ])
}

prop_compose! {
    fn listing()(
        slug in "[a-z][a-z0-9-]{0,20}",
        name in "[A-Za-z][A-Za-z ']{0,20}",
        category in category(),
        address in prop_oneof![
            Just(String::new()),
            "[A-Za-z0-9 ,]{0,30}",
            Just("4 Green Lane, Hightown".to_string()),
            Just("Crosby Road, Freshfield".to_string()),
        ],
        rating in proptest::option::of(0.0f64..=5.0),
        review_count in proptest::option::of(0i64..5_000),
        price_range in price(),
        tier in tier(),
        seed in proptest::option::of("[A-Za-z ,]{0,40}\\.?"),
        generated in proptest::option::of("[A-Za-z .]{0,60}"),
        phone in proptest::option::of("0[0-9]{10}"),
        website in proptest::option::of(Just("https://example.com".to_string())),
    ) -> Listing {
        Listing {
            address,
            rating,
            review_count,
            price_range,
            listing_tier: tier,
            seed_description: seed,
            generated_description: generated,
            phone,
            website,
            ..Listing::new(format!("id-{slug}"), slug, name, category)
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn compose_is_deterministic(l in listing()) {
        prop_assert_eq!(compose(&l), compose(&l.clone()));
    }

    #[test]
    fn compose_has_at_least_three_paragraphs(l in listing()) {
        let text = compose(&l);
        let paras: Vec<_> = text.split("\n\n").collect();
        prop_assert!(paras.len() >= 3 && paras.len() <= 5, "{}", text);
        prop_assert!(paras.iter().all(|p| !p.trim().is_empty()));
    }

    #[test]
    fn compose_ignores_other_listings(a in listing(), b in listing()) {
        let alone = compose(&a);
        let _ = compose(&b);
        prop_assert_eq!(compose(&a), alone);
    }

    #[test]
    fn ranking_is_idempotent(ls in proptest::collection::vec(listing(), 0..25)) {
        let once = rank(ls);
        let twice = rank(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn premium_always_first(ls in proptest::collection::vec(listing(), 0..25)) {
        let ranked = rank(ls);
        let first_non_premium = ranked
            .iter()
            .position(|l| l.listing_tier != ListingTier::Premium)
            .unwrap_or(ranked.len());
        prop_assert!(ranked[first_non_premium..]
            .iter()
            .all(|l| l.listing_tier != ListingTier::Premium));
    }

    #[test]
    fn higher_rating_never_ranks_lower(
        ls in proptest::collection::vec(listing(), 1..15),
        pick in any::<prop::sample::Index>(),
        bump in 0.0f64..=5.0,
    ) {
        let mut ls = ls;
        for (k, l) in ls.iter_mut().enumerate() {
            l.id = format!("n{k}");
        }
        let i = pick.index(ls.len());
        let subject_id = ls[i].id.clone();
        let position = |ls: Vec<Listing>| {
            rank(ls).iter().position(|l| l.id == subject_id).unwrap()
        };

        let before = position(ls.clone());
        let mut raised = ls;
        let old = raised[i].rating.unwrap_or(0.0);
        raised[i].rating = Some((old + bump).min(5.0));
        let after = position(raised);
        prop_assert!(after <= before, "moved from {} to {}", before, after);
    }

    #[test]
    fn blank_search_is_identity(
        ls in proptest::collection::vec(listing(), 0..15),
        blank in "[ \t]{0,4}",
    ) {
        prop_assert_eq!(search(ls.clone(), &blank), ls);
    }

    #[test]
    fn search_keeps_exactly_the_matches(
        ls in proptest::collection::vec(listing(), 0..15),
        q in "[a-z]{1,3}",
    ) {
        let kept = search(ls.clone(), &format!("  {}  ", q.to_uppercase()));
        let expected: Vec<Listing> = ls.into_iter().filter(|l| matches_query(l, &q)).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn extract_area_is_total(address in ".{1,60}") {
        prop_assert!(!extract_area(&address).label().is_empty());
    }
}
