use serde::{Deserialize, Serialize};

/// Fallback name for a code missing from the table. The five-axis/two-pole
/// domain yields exactly 32 codes and the table covers all of them, so this
/// only surfaces if the table is edited down.
pub const UNKNOWN_ARCHETYPE: &str = "Unknown Archetype";

/// Derived archetype: the five-letter code plus its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub code: String,
    pub name: String,
}

/// Every possible five-letter code, one letter per axis in fixed order
/// (Equity, Libertarian, Progressive, Secular, Globalism), mapped to its
/// archetype name. Order here groups by economic pole, then descends
/// through the remaining axes.
pub const ARCHETYPES: [(&str, &str); 32] = [
    ("ELPSG", "The Utopian"),
    ("ELPSN", "The Communard"),
    ("ELPRG", "The Reformer"),
    ("ELPRN", "The Shepherd"),
    ("ELCSG", "The Mediator"),
    ("ELCSN", "The Homesteader"),
    ("ELCRG", "The Missionary"),
    ("ELCRN", "The Pastoralist"),
    ("EAPSG", "The Vanguard"),
    ("EAPSN", "The Commissar"),
    ("EAPRG", "The Revivalist"),
    ("EAPRN", "The Preacher"),
    ("EACSG", "The Technocrat"),
    ("EACSN", "The Stalwart"),
    ("EACRG", "The Communitarian"),
    ("EACRN", "The Patriarch"),
    ("FLPSG", "The Innovator"),
    ("FLPSN", "The Maverick"),
    ("FLPRG", "The Entrepreneur"),
    ("FLPRN", "The Frontiersman"),
    ("FLCSG", "The Industrialist"),
    ("FLCSN", "The Minarchist"),
    ("FLCRG", "The Merchant"),
    ("FLCRN", "The Pioneer"),
    ("FAPSG", "The Modernizer"),
    ("FAPSN", "The Strongman"),
    ("FAPRG", "The Paternalist"),
    ("FAPRN", "The Moralist"),
    ("FACSG", "The Magnate"),
    ("FACSN", "The Enforcer"),
    ("FACRG", "The Traditionalist"),
    ("FACRN", "The Crusader"),
];

/// Look up the archetype name for a five-letter code.
pub fn archetype_name(code: &str) -> Option<&'static str> {
    ARCHETYPES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}
