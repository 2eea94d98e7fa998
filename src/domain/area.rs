// src/domain/area.rs

use serde::{Deserialize, Serialize};

/// Sub-areas of the guide's patch. `Formby` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Formby,
    Freshfield,
    Hightown,
    Ainsdale,
    Crosby,
    Lydiate,
    Altcar,
}

/// Scan order for `extract_area`. The order matters: an address mentioning
/// both "Freshfield" and "Crosby" is labelled Freshfield.
const SCAN_ORDER: [Area; 6] = [
    Area::Freshfield,
    Area::Hightown,
    Area::Ainsdale,
    Area::Crosby,
    Area::Lydiate,
    Area::Altcar,
];

/// First known area name found in `address`, else Formby.
pub fn extract_area(address: &str) -> Area {
    SCAN_ORDER
        .iter()
        .copied()
        .find(|area| address.contains(area.label()))
        .unwrap_or(Area::Formby)
}

impl Area {
    /// Every area, in the order offered as filter options.
    pub const ALL: [Area; 7] = [
        Area::Formby,
        Area::Freshfield,
        Area::Hightown,
        Area::Ainsdale,
        Area::Crosby,
        Area::Lydiate,
        Area::Altcar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Area::Formby => "Formby",
            Area::Freshfield => "Freshfield",
            Area::Hightown => "Hightown",
            Area::Ainsdale => "Ainsdale",
            Area::Crosby => "Crosby",
            Area::Lydiate => "Lydiate",
            Area::Altcar => "Altcar",
        }
    }

    /// URL/query key, e.g. `freshfield`.
    pub fn key(self) -> &'static str {
        match self {
            Area::Formby => "formby",
            Area::Freshfield => "freshfield",
            Area::Hightown => "hightown",
            Area::Ainsdale => "ainsdale",
            Area::Crosby => "crosby",
            Area::Lydiate => "lydiate",
            Area::Altcar => "altcar",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Area::ALL
            .iter()
            .copied()
            .find(|a| a.key().eq_ignore_ascii_case(key))
    }

    /// Longer phrase used in prose, e.g. "Hightown, the small coastal village ...".
    pub fn context(self) -> &'static str {
        match self {
            Area::Freshfield => {
                "Freshfield, the quiet residential neighbourhood just south of Formby village"
            }
            Area::Hightown => {
                "Hightown, the small coastal village at the southern end of the Sefton Coast"
            }
            Area::Ainsdale => "Ainsdale, a coastal village just north of Formby",
            Area::Crosby => "Crosby, a short drive south down the coast",
            Area::Formby | Area::Lydiate | Area::Altcar => "Formby village",
        }
    }
}
