use serde::Serialize;

/// Recommendation bundle for one profile. Static content compiled into the
/// binary, so every field borrows `'static` data.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolBundle {
    pub profile: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub supplements: &'static [SupplementRecommendation],
    pub lifestyle: &'static [LifestyleCategory],
    pub timeline: &'static [TimelineMilestone],
    pub optional: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SupplementRecommendation {
    pub name: &'static str,
    pub dosage: &'static str,
    pub purpose: &'static str,
    pub timing: &'static str,
    pub benefits: &'static str,
}

impl SupplementRecommendation {
    /// One-line form used in reports, e.g. "EMBER: 2 capsules with breakfast".
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.dosage)
    }
}

/// A named group of lifestyle changes ("sleep", "stress", ...).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LifestyleCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineMilestone {
    pub week: u32,
    pub expectation: &'static str,
}
