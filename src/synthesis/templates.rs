// src/synthesis/templates.rs

//! Static fragment pools, one bank per generator.
//!
//! Every fragment is a plain function of [`Facts`]. Opener, middle and closer
//! fragments must never render to an empty string.

use super::facts::Facts;
use crate::domain::Category;

pub type Fragment = fn(&Facts) -> String;

pub struct TemplateBank {
    pub generator: &'static str,
    pub openers: &'static [Fragment],
    pub rating: &'static [Fragment],
    pub seed: &'static [Fragment],
    pub middles: &'static [Fragment],
    pub closers: &'static [Fragment],
}

/// Bank used for a category. Unknown categories use the activities bank.
pub fn bank_for(category: &Category) -> &'static TemplateBank {
    match category {
        Category::Restaurants => &RESTAURANT,
        Category::Cafes => &CAFE,
        Category::Pubs => &PUB,
        Category::Accommodation => &ACCOMMODATION,
        Category::Shopping => &SHOPPING,
        Category::Activities => &ACTIVITIES,
        Category::NatureWalks => &NATURE_WALK,
        Category::Beaches => &BEACH,
        Category::Other(_) => &ACTIVITIES,
    }
}

pub static ALL_BANKS: [&TemplateBank; 8] = [
    &RESTAURANT,
    &CAFE,
    &PUB,
    &ACCOMMODATION,
    &SHOPPING,
    &ACTIVITIES,
    &NATURE_WALK,
    &BEACH,
];

// ---------------------------------------------------------------------------
// Shared clauses
// ---------------------------------------------------------------------------

/// "At <price>, it" or "It".
fn price_lead(f: &Facts) -> String {
    if f.price.is_empty() {
        "It".to_string()
    } else {
        format!("At {}, it", f.price)
    }
}

/// "<hours>. " or "".
fn hours_lead(f: &Facts) -> String {
    if f.hours.is_empty() {
        String::new()
    } else {
        format!("{}. ", f.hours)
    }
}

fn phone_clause(f: &Facts, render: fn(&str, &str) -> String) -> String {
    f.phone
        .as_deref()
        .map(|phone| render(&f.name, phone))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Restaurants
// ---------------------------------------------------------------------------

pub static RESTAURANT: TemplateBank = TemplateBank {
    generator: "restaurant",
    openers: &[
        |f| format!("{} has earned a firm following in {}, and it's easy to see why.", f.name, f.area_name()),
        |f| format!("For anyone searching for a great meal in {}, {} is a name that comes up time and again.", f.area_name(), f.name),
        |f| format!("{} is a well-established favourite in {}.", f.name, f.area_context()),
        |f| format!("If you're looking for somewhere to eat in Formby, {} is well worth considering.", f.name),
        |f| format!("Tucked into {}, {} is the kind of place visitors return to again and again.", f.area_context(), f.name),
    ],
    rating: &[
        |f| format!("{}, {} is {}, a testament to the kitchen's consistency.", f.rating_intro, f.name, f.rating_text),
        |f| format!("{}, it's clear that {} knows how to keep its customers happy.", f.rating_intro, f.name),
    ],
    seed: &[
        |f| format!("{}, making it a versatile choice whether you're after a quick bite or a longer meal.", f.seed_text()),
        |f| format!("{}. That blend of quality and character is exactly what keeps people coming back.", f.seed_text()),
    ],
    middles: &[
        |f| format!("{} strikes the balance between quality and accessibility that a village like Formby does well. Whether you're a visitor or a regular, the welcome feels genuine.", price_lead(f)),
        |f| format!("What sets {0} apart is the attention to detail: the kind of place where things are done properly. Formby's restaurant scene punches well above its weight for a village this size, and {0} is a big part of why.", f.name),
        |f| format!("Formby attracts a lot of day visitors from Liverpool and Manchester, and {} is exactly the kind of spot that justifies the drive.", f.name),
        |f| {
            let price = if f.price.is_empty() {
                String::new()
            } else {
                format!(", and at {}, it makes for an easy choice", f.price)
            };
            format!("The team takes obvious pride in what they serve{price}. There's a reliability here that's hard to fake.")
        },
    ],
    closers: &[
        |f| format!(
            "{}It's worth booking ahead at weekends when the dining room fills up quickly. {}",
            hours_lead(f),
            if f.has_website() { "Check the website for the latest menus and reservation options." } else { "Call ahead to check availability." }
        ),
        |f| {
            let lead = if f.hours.is_empty() {
                "Worth checking the opening hours above".to_string()
            } else {
                format!("It's {}", f.hours.to_lowercase())
            };
            format!("{lead} before you make the trip. {}", phone_clause(f, |_, phone| format!("You can reach them on {phone}.")))
        },
        |f| format!(
            "Located in {}, {} is convenient whether you're in the village for the day or heading back from the National Trust beach. {}",
            f.area_context(),
            f.name,
            if f.has_website() { "Visit their website for up-to-date menus." } else { "" }
        ),
        |f| format!("{} is one of those restaurants that locals tend to keep to themselves, but once you've been, you'll understand the loyalty.", f.name),
    ],
};

// ---------------------------------------------------------------------------
// Cafes
// ---------------------------------------------------------------------------

pub static CAFE: TemplateBank = TemplateBank {
    generator: "cafe",
    openers: &[
        |f| format!("{} is a welcome find for anyone in search of good coffee and a proper break in {}.", f.name, f.area_name()),
        |f| format!("For a relaxed coffee stop after a walk through the pinewoods or a morning on the beach, {} ticks all the right boxes.", f.name),
        |f| format!("{} has become something of a local institution in {}: the kind of cafe you end up returning to every time you're nearby.", f.name, f.area_name()),
        |f| format!("Sometimes a good cafe is all you need, and {} in {} has been delivering exactly that to locals and visitors alike.", f.name, f.area_name()),
    ],
    rating: &[
        |f| format!("{}, it's one of the more consistently well-reviewed cafes in the Formby area.", f.rating_intro),
        |f| format!("{}, guests single out the quality of the coffee and the unhurried atmosphere.", f.rating_intro),
    ],
    seed: &[
        |f| format!("{}. After a morning at the National Trust reserve, that's a difficult combination to resist.", f.seed_text()),
        |f| format!("{}: the kind of simple pleasures that make a good cafe worth seeking out.", f.seed_text()),
    ],
    middles: &[
        |f| format!("Formby has no shortage of cafes, but {} stands out for its commitment to doing things well. Good coffee, proper food, and staff who seem to genuinely enjoy what they do.", f.name),
        |f| format!("Whether you're stopping in before a day exploring the pinewoods and beach, or taking a break mid-afternoon, {} offers exactly the kind of restorative pause a good visit deserves.", f.name),
        |f| format!("There's something particularly satisfying about finding a great cafe in a village like Formby, and {} fits that description well.", f.name),
    ],
    closers: &[
        |f| format!("{}It's popular at peak times, so expect a short wait on sunny weekend mornings when the National Trust car park is full.", hours_lead(f)),
        |f| format!("{} is the kind of cafe that makes {} feel like a neighbourhood worth knowing. Easy to recommend.", f.name, f.area_name()),
        |f| format!(
            "For visitors exploring Formby, {} makes a strong case as a pit-stop worth planning around. {}",
            f.name,
            if f.has_website() { "Check their website for opening times." } else { "" }
        ),
    ],
};

// ---------------------------------------------------------------------------
// Pubs
// ---------------------------------------------------------------------------

pub static PUB: TemplateBank = TemplateBank {
    generator: "pub",
    openers: &[
        |f| format!("{} is one of {}'s most popular spots for a drink, with a loyal local following that speaks for itself.", f.name, f.area_name()),
        |f| format!("Whether you're after a quiet pint after a coastal walk or somewhere to settle in for the evening, {} is a reliable choice.", f.name),
        |f| format!("{} has carved out a reputation as one of the better pubs in {}.", f.name, f.area_context()),
        |f| format!("For an evening out in {}, {} is a name that locals and visitors alike keep coming back to.", f.area_name(), f.name),
    ],
    rating: &[
        |f| format!("{}, it's clearly doing something right.", f.rating_intro),
        |f| format!("{}, {} has built a reputation as one of the more dependable pubs in the village.", f.rating_intro, f.name),
    ],
    seed: &[
        |f| format!("{}. That's a hard combination to beat for a post-walk pint.", f.seed_text()),
        |f| format!("{}, and the atmosphere tends to reflect that.", f.seed_text()),
    ],
    middles: &[
        |f| format!("Formby has a solid pub scene for a village its size, and {} holds its own comfortably. The kind of place where you can settle in for the evening without feeling rushed.", f.name),
        |f| format!("A lot of Formby's pubs do food, and {} is a good example of one that takes both sides seriously. Worth knowing about whether you're after a meal or just a drink.", f.name),
        |f| format!("Post-beach and post-pinewoods pints are something of a Formby tradition, and {} is well placed to benefit. Dog-friendly, by all accounts.", f.name),
    ],
    closers: &[
        |f| format!(
            "{}At weekends it can get busy, so arrive early if you want a good seat. {}",
            hours_lead(f),
            phone_clause(f, |name, phone| format!("You can reach {name} on {phone}."))
        ),
        |f| format!("{} is one of those places that's easy to walk past and easy to stay in: the mark of a good local pub.", f.name),
        |f| format!("Worth knowing about for any visit to {}, whether you're here for the day or staying overnight.", f.area_name()),
    ],
};

// ---------------------------------------------------------------------------
// Accommodation
// ---------------------------------------------------------------------------

pub static ACCOMMODATION: TemplateBank = TemplateBank {
    generator: "accommodation",
    openers: &[
        |f| format!("{} offers a comfortable base for exploring Formby, the National Trust pinewoods, and the wider Sefton Coast.", f.name),
        |f| format!("For visitors planning a stay in {}, {} is a well-regarded option that combines convenience with character.", f.area_name(), f.name),
        |f| format!("{} puts you within easy reach of Formby Beach, the red squirrel reserve, and the village's restaurants and pubs.", f.name),
        |f| format!("Situated in {}, {} is a practical and appealing choice for exploring the Sefton Coast.", f.area_context(), f.name),
    ],
    rating: &[
        |f| format!("{}, {} has earned a strong reputation for the quality of its accommodation and welcome.", f.rating_intro, f.name),
        |f| format!("{}, guests consistently praise the comfort and convenient location.", f.rating_intro),
    ],
    seed: &[
        |f| format!("{}. For many guests, that's exactly what they're looking for in a Formby stay.", f.seed_text()),
        |f| format!("{}: the sort of combination that makes it easy to settle in and relax.", f.seed_text()),
    ],
    middles: &[
        |f| format!("{} represents solid value for the Sefton Coast, particularly during busy summer weekends when accommodation in the area books up quickly.", price_lead(f)),
        |_| "Formby is an easy drive from Liverpool and Manchester, making it a natural choice for a short break. Staying overnight rather than doing a day trip means you can properly explore the pinewoods and beach without rushing.".to_string(),
        |f| format!("The National Trust reserve, Formby Beach, and the village itself are all within easy reach. It's a quiet corner of the north-west that visitors tend to return to, and {} gives them somewhere comfortable to do that.", f.name),
    ],
    closers: &[
        |f| {
            let tail = if f.has_website() {
                "Visit the website for availability and rates.".to_string()
            } else if let Some(phone) = f.phone.as_deref() {
                format!("Call {phone} to check availability.")
            } else {
                "Book early to avoid disappointment.".to_string()
            };
            format!("Formby accommodation books up fast on sunny summer weekends. {tail}")
        },
        |f| format!(
            "{} is popular with both first-time visitors and those returning for another season on the Sefton Coast. {}",
            f.name,
            if f.has_website() { "Book directly through the website for the best rates." } else { "" }
        ),
        |f| format!("For anyone visiting Formby, {} is well placed to make the most of what this stretch of the Lancashire coast has to offer.", f.name),
    ],
};

// ---------------------------------------------------------------------------
// Shopping
// ---------------------------------------------------------------------------

pub static SHOPPING: TemplateBank = TemplateBank {
    generator: "shopping",
    openers: &[
        |f| format!("{} is a well-established presence on the Formby shopping scene, attracting a steady stream of locals and visitors.", f.name),
        |f| format!("Formby's shopping offer stretches along Chapel Lane and the surrounding streets, and {} is a good example of what the village has to offer.", f.name),
        |f| format!("For anyone browsing {}, {} is one worth knowing about.", f.area_name(), f.name),
        |f| format!("{} has built a loyal customer base in {} through a combination of good product and reliable service.", f.name, f.area_name()),
    ],
    rating: &[
        |f| format!("{}, {} has built a reputation that speaks for itself in a competitive independent retail environment.", f.rating_intro, f.name),
    ],
    seed: &[
        |f| format!("{}. In a village with a strong independent retail culture, that kind of offer stands out.", f.seed_text()),
        |f| format!("{}, which has helped it carve out a loyal following in {}.", f.seed_text(), f.area_name()),
    ],
    middles: &[
        |f| format!("Formby's shopping is concentrated along Chapel Lane and Three Tuns Lane, a mix of independents and familiar names that rewards a proper browse. {} is part of what gives the village its retail character.", f.name),
        |f| format!("Whether you're a local or a visitor, {} offers the kind of experience that's increasingly hard to find online: knowledgeable staff, quality products, and the satisfaction of shopping somewhere that genuinely cares.", f.name),
        |f| format!("There are a couple of good charity shops on the high street too, if you're the kind of person who can't walk past one. But {} is one of the independent names worth seeking out.", f.name),
    ],
    closers: &[
        |f| {
            let tail = if f.has_website() {
                "Browse online at their website, or visit in person for the full experience.".to_string()
            } else if let Some(phone) = f.phone.as_deref() {
                format!("Call ahead on {phone} to check stock or opening times.")
            } else {
                "Drop in and have a look around.".to_string()
            };
            format!("{}{tail}", hours_lead(f))
        },
        |f| format!("{} is the kind of local retailer that gives {} its character. Easy to recommend.", f.name, f.area_name()),
        |_| "Worth a visit for anyone browsing Formby village, whether you're a local or spending the day after a walk through the pinewoods.".to_string(),
    ],
};

// ---------------------------------------------------------------------------
// Activities (also the default generator)
// ---------------------------------------------------------------------------

pub static ACTIVITIES: TemplateBank = TemplateBank {
    generator: "activities",
    openers: &[
        |f| format!("For visitors looking to get more out of their time in {}, {} offers exactly the kind of experience the area does well.", f.area_name(), f.name),
        |f| format!("{} is one of the more interesting options for anyone wanting to go beyond the beach and pinewoods in Formby.", f.name),
        |f| format!("Formby and the Sefton Coast offer a surprising range of leisure activities, and {} is one of the better options in the area.", f.name),
    ],
    rating: &[
        |f| format!("{}, {} has earned a strong reputation among locals and visitors alike.", f.rating_intro, f.name),
    ],
    seed: &[|f| format!("{}.", f.seed_text())],
    middles: &[
        |f| format!("The area around Formby, with its coastline, dunes, pinewoods and rural countryside inland, lends itself naturally to outdoor leisure. {} makes the most of that geography.", f.name),
        |f| format!("Whether you're travelling as a couple, a family, or a group, {} offers something a bit different from the usual beach and walk combination that Formby is known for.", f.name),
        |f| format!("Formby is easy to reach from Liverpool and Manchester, making it a popular destination for day trips. {} gives visitors another compelling reason to make the journey.", f.name),
    ],
    closers: &[
        |f| {
            let lead = if f.has_website() {
                "Visit their website for details on what's available, pricing and how to book.".to_string()
            } else if let Some(phone) = f.phone.as_deref() {
                format!("Call {phone} to find out what's on offer and to make a booking.")
            } else {
                "See the details above for contact information.".to_string()
            };
            format!("{lead} Booking ahead is recommended at busy times.")
        },
        |f| format!("{} is one of those Formby finds that tends to surprise people. Well worth adding to the itinerary.", f.name),
    ],
};

// ---------------------------------------------------------------------------
// Nature walks
// ---------------------------------------------------------------------------

pub static NATURE_WALK: TemplateBank = TemplateBank {
    generator: "nature-walk",
    openers: &[
        |f| format!("{} is one of the natural highlights of the Sefton Coast, a place where the scale and quiet of the Lancashire coastline really hits home.", f.name),
        |f| format!("The Sefton Coast is one of the most significant stretches of coastline in England, and {} is one of the best places to experience it properly.", f.name),
        |f| format!("Formby's greatest draws are its natural spaces, and {} is a fine example of what makes this stretch of coast worth the visit.", f.name),
    ],
    rating: &[
        |f| format!("{}, {} is clearly doing something right, though in this case it's largely nature's doing.", f.rating_intro, f.name),
    ],
    seed: &[|f| format!("{}.", f.seed_text())],
    middles: &[
        |f| format!("The National Trust manages a large section of the Formby coastline, protecting rare habitats including the red squirrel reserve, the ancient pinewoods, and the dune systems that stretch north towards Ainsdale. {} sits within or close to this remarkable landscape.", f.name),
        |f| format!("The Sefton Coast supports an extraordinary range of wildlife, from the famous red squirrel colony to natterjack toads, rare orchids, and migratory birds. {} gives visitors a way into this landscape at its best.", f.name),
        |f| format!("The pinewoods and dunes around Formby are a genuine antidote to city life: wide open, quiet, and surprisingly wild for somewhere so close to Liverpool and Manchester. {} is part of that experience.", f.name),
    ],
    closers: &[
        |f| format!("{} is best visited early morning, particularly for wildlife. Parking via the National Trust app (L37 1YH) is strongly recommended as the car parks fill quickly on sunny days. NT members park free.", f.name),
        |f| format!("Whether you're a first-time visitor or a regular, {} is one of those places that looks different every season. Worth coming back for.", f.name),
        |f| format!(
            "Easily reached from the National Trust car park on Victoria Road, Formby (L37 1YH). Dogs welcome on leads in the reserve. {}",
            f.website.as_deref().unwrap_or("")
        ),
    ],
};

// ---------------------------------------------------------------------------
// Beaches
// ---------------------------------------------------------------------------

pub static BEACH: TemplateBank = TemplateBank {
    generator: "beach",
    openers: &[
        |f| format!("{} is one of the natural highlights of the Sefton Coast, a beach where the scale and emptiness of the Lancashire coastline really hits home.", f.name),
        |f| format!("Formby Beach is one of the finest stretches of sand in the north-west of England, and {} is the heart of it.", f.name),
        |f| format!("Few things sum up Formby better than a walk along {}, where wide beaches meet open sky and the dunes stretch as far as you can see.", f.name),
    ],
    rating: &[
        |f| format!("{}, {} is clearly delivering what visitors come for, which in this case is mostly nature's doing.", f.rating_intro, f.name),
    ],
    seed: &[|f| format!("{}.", f.seed_text())],
    middles: &[
        |_| "The beach at Formby is wide, clean, and backed by dramatic sand dunes that separate it from the National Trust pinewoods behind. The walk from the car park through the pines to the beach takes about 15 minutes, and the moment you come over the dunes onto the open sand is genuinely worth it.".to_string(),
        |_| "Dogs are welcome on Formby Beach year-round with no seasonal restrictions, one of the reasons local dog owners are so fond of the place. The beach is wide enough that it rarely feels crowded, even on busy summer days.".to_string(),
        |_| "The dunes and coastal habitat around Formby Beach are managed by the National Trust and form part of a nationally important nature reserve. The beach itself is backed by the red squirrel pinewoods, and most visitors do both in the same morning.".to_string(),
    ],
    closers: &[
        |_| "Park at the National Trust car park, Victoria Road, Formby (L37 1YH). Book via the NT app before you leave, as there's no signal on site and the car parks fill quickly on sunny days. Free for NT members.".to_string(),
        |_| "There's no lifeguard service at Formby Beach, so be aware of tides: the beach shelves gradually and the tide can come in faster than it looks. Check tide times before heading out for a long walk.".to_string(),
        |_| "Formby Beach is best at low to mid tide when the full width of the sand is accessible. On a clear day the views across the Irish Sea towards the Lake District are genuinely spectacular.".to_string(),
    ],
};
