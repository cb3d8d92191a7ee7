use std::sync::LazyLock;

use ember_core::models::assessment::{Question, Section};

/// Number of questions in every standard section.
pub const QUESTIONS_PER_SECTION: usize = 8;

/// The seven-section wellness questionnaire, in catalog order.
///
/// Catalog order is significant: when two sections tie for the highest
/// score, the one listed first decides the profile.
pub fn assessment_sections() -> &'static [Section] {
    static SECTIONS: LazyLock<Vec<Section>> = LazyLock::new(|| {
        vec![
            build_section(
                "hormonal-chaos",
                "Hormonal Chaos",
                &[
                    ("hc-1", "I experience mood swings or irritability"),
                    ("hc-2", "My periods are irregular or unpredictable"),
                    ("hc-3", "I have trouble losing weight despite diet and exercise"),
                    ("hc-4", "I feel anxious or overwhelmed frequently"),
                    ("hc-5", "I have low libido or sexual dysfunction"),
                    ("hc-6", "I experience hot flashes or night sweats"),
                    ("hc-7", "I have difficulty concentrating or brain fog"),
                    ("hc-8", "I feel emotionally unstable or cry easily"),
                ],
            ),
            build_section(
                "adrenal-exhaustion",
                "Adrenal Exhaustion",
                &[
                    ("ae-1", "I feel tired even after a full night of sleep"),
                    ("ae-2", "I need caffeine to get through the day"),
                    ("ae-3", "I feel overwhelmed by daily tasks"),
                    ("ae-4", "I have difficulty handling stress"),
                    ("ae-5", "I feel exhausted by 3-4 PM"),
                    ("ae-6", "I crave salty or sweet foods"),
                    ("ae-7", "I feel like I'm always \"running on empty\""),
                    ("ae-8", "I get sick frequently or take longer to recover"),
                ],
            ),
            build_section(
                "cellular-starvation",
                "Cellular Starvation",
                &[
                    ("cs-1", "I feel weak or shaky if I don't eat regularly"),
                    ("cs-2", "I have cold hands and feet"),
                    ("cs-3", "My hair is thinning or falling out"),
                    ("cs-4", "I have brittle or ridged nails"),
                    ("cs-5", "I feel like my metabolism is slow"),
                    ("cs-6", "I have trouble maintaining body temperature"),
                    ("cs-7", "I feel tired after eating"),
                    ("cs-8", "I have digestive issues or constipation"),
                ],
            ),
            build_section(
                "sleep-disruption",
                "Sleep Disruption",
                &[
                    ("sd-1", "I have trouble falling asleep"),
                    ("sd-2", "I wake up frequently during the night"),
                    ("sd-3", "I wake up feeling unrefreshed"),
                    ("sd-4", "I rely on sleep aids or melatonin"),
                    ("sd-5", "My mind races when I try to sleep"),
                    ("sd-6", "I snore or have sleep apnea symptoms"),
                    ("sd-7", "I wake up too early and can't fall back asleep"),
                    ("sd-8", "I feel like I never get quality sleep"),
                ],
            ),
            build_section(
                "chemical-interference",
                "Chemical Interference",
                &[
                    ("ci-1", "I am sensitive to chemicals, perfumes, or cleaners"),
                    ("ci-2", "I have multiple allergies or intolerances"),
                    ("ci-3", "I take multiple prescription medications"),
                    ("ci-4", "I have autoimmune symptoms or conditions"),
                    ("ci-5", "I react poorly to supplements or medications"),
                    ("ci-6", "I live in a polluted or toxic environment"),
                    ("ci-7", "I have had negative reactions to vaccines or drugs"),
                    ("ci-8", "I feel worse when exposed to WiFi or electronics"),
                ],
            ),
            build_section(
                "inflammatory-fire",
                "Inflammatory Fire",
                &[
                    ("if-1", "I have joint pain or stiffness"),
                    ("if-2", "I experience headaches or migraines"),
                    ("if-3", "I have skin issues like rashes or eczema"),
                    ("if-4", "I have digestive inflammation or IBD"),
                    ("if-5", "I feel puffy or retain water"),
                    ("if-6", "I have chronic pain conditions"),
                    ("if-7", "I get frequent infections"),
                    ("if-8", "I feel like my body is \"on fire\" internally"),
                ],
            ),
            build_section(
                "blood-sugar-chaos",
                "Blood Sugar Chaos",
                &[
                    ("bsc-1", "I experience energy crashes after meals"),
                    ("bsc-2", "I crave sugar or carbohydrates frequently"),
                    ("bsc-3", "I feel shaky or irritable when hungry"),
                    ("bsc-4", "I need to eat every 2-3 hours"),
                    ("bsc-5", "I have been told I'm pre-diabetic or diabetic"),
                    ("bsc-6", "I gain weight easily around my midsection"),
                    ("bsc-7", "I feel tired or sleepy after eating"),
                    ("bsc-8", "I have difficulty losing weight"),
                ],
            ),
        ]
    });
    &SECTIONS
}

/// Look up a section by id.
pub fn section(id: &str) -> Option<&'static Section> {
    assessment_sections().iter().find(|s| s.id == id)
}

/// Total number of questions across the catalog.
pub fn question_count() -> usize {
    assessment_sections().iter().map(|s| s.questions.len()).sum()
}

fn build_section(id: &str, title: &str, questions: &[(&str, &str)]) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        questions: questions
            .iter()
            .map(|(id, text)| Question {
                id: id.to_string(),
                text: text.to_string(),
            })
            .collect(),
    }
}
