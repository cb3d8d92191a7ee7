//! Profile labels. The strings are used verbatim as protocol keys and in
//! stored results, so they must never change.

pub const CHEMICAL_INTERFERENCE: &str = "chemical-interference";
pub const INFLAMMATORY_FIRE: &str = "inflammatory-fire";

/// Key of the combined profile in [`PROFILE_MAPPING`].
pub const TOXIC_OVERWHELMED: &str = "toxic-overwhelmed";

pub const TOXIC_AND_OVERWHELMED: &str = "Profile 7: Toxic and Overwhelmed";

/// Label used when the winning section has no mapped profile.
pub const FALLBACK_PROFILE: &str = "Profile Assessment Complete";

/// Section id (or combined key) → profile label.
pub const PROFILE_MAPPING: [(&str, &str); 7] = [
    ("adrenal-exhaustion", "Profile 1: Depleted High Achiever"),
    ("hormonal-chaos", "Profile 2: Hormonal Roller Coaster"),
    (CHEMICAL_INTERFERENCE, "Profile 3: Medicated and Struggling"),
    (INFLAMMATORY_FIRE, "Profile 4: Inflamed and Exhausted"),
    ("blood-sugar-chaos", "Profile 5: Sugar-Burning Crash Queen"),
    ("sleep-disruption", "Profile 6: Sleep-Deprived Zombie"),
    (TOXIC_OVERWHELMED, TOXIC_AND_OVERWHELMED),
];

pub fn profile_for_section(section_id: &str) -> Option<&'static str> {
    PROFILE_MAPPING
        .iter()
        .find(|(key, _)| *key == section_id)
        .map(|(_, label)| *label)
}

/// Every profile label, in numbering order.
pub fn all_profiles() -> impl Iterator<Item = &'static str> {
    PROFILE_MAPPING.iter().map(|(_, label)| *label)
}
