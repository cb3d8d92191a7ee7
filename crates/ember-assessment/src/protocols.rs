//! Protocol content keyed by profile label.
//!
//! Static recommendation bundles, one per profile. The lookup is by exact
//! label; anything else has no recommendation.

use ember_core::models::protocol::{
    LifestyleCategory, ProtocolBundle, SupplementRecommendation, TimelineMilestone,
};

use crate::error::AssessmentError;

/// Weeks to follow the core protocol before reaching for optional support.
pub const OPTIONAL_SUPPORT_AFTER: &str = "2-4 weeks";

/// Protocol bundle for an exact profile label.
pub fn lookup(profile: &str) -> Option<&'static ProtocolBundle> {
    all_protocols().iter().copied().find(|p| p.profile == profile)
}

/// Like [`lookup`], for callers that treat a missing bundle as an error.
pub fn require(profile: &str) -> Result<&'static ProtocolBundle, AssessmentError> {
    lookup(profile).ok_or_else(|| AssessmentError::UnknownProfile(profile.to_string()))
}

/// Every bundle, in profile numbering order.
pub fn all_protocols() -> &'static [&'static ProtocolBundle] {
    static ALL: [&ProtocolBundle; 7] = [
        &DEPLETED_HIGH_ACHIEVER,
        &HORMONAL_ROLLER_COASTER,
        &MEDICATED_AND_STRUGGLING,
        &INFLAMED_AND_EXHAUSTED,
        &SUGAR_BURNING_CRASH_QUEEN,
        &SLEEP_DEPRIVED_ZOMBIE,
        &TOXIC_AND_OVERWHELMED,
    ];
    &ALL
}

static DEPLETED_HIGH_ACHIEVER: ProtocolBundle = ProtocolBundle {
    profile: "Profile 1: Depleted High Achiever",
    description: "Your adrenal system is running on empty from chronic stress and perfectionism. This comprehensive protocol focuses on rebuilding your stress resilience while supporting sustainable energy production.",
    detailed_description: "High achievers often push through exhaustion, creating a cycle of stress hormone depletion. Your body needs specific nutrients to rebuild adrenal function and support healthy cortisol patterns.",
    supplements: &[
        SupplementRecommendation {
            name: "EMBER",
            dosage: "2 capsules with breakfast",
            purpose: "Cellular foundation and mitochondrial support",
            timing: "Morning with food",
            benefits: "Supports energy production at the cellular level, contains adaptogenic herbs for stress resilience",
        },
        SupplementRecommendation {
            name: "STEADY",
            dosage: "1 capsule morning and evening",
            purpose: "Stress resilience and cortisol regulation",
            timing: "Morning and evening with food",
            benefits: "Helps regulate stress response, supports healthy sleep-wake cycles",
        },
        SupplementRecommendation {
            name: "CHARGE",
            dosage: "1 capsule with lunch",
            purpose: "Sustained energy without crashes",
            timing: "Midday with meal",
            benefits: "Provides B-vitamins and adaptogens for sustained energy production",
        },
    ],
    lifestyle: &[
        LifestyleCategory {
            name: "sleep",
            items: &[
                "Set firm bedtime allowing 8+ hours sleep with room at 65-68°F",
                "Create a wind-down routine starting 1 hour before bed",
                "Use blackout curtains or eye mask for complete darkness",
                "Keep bedroom for sleep only - no work materials",
            ],
        },
        LifestyleCategory {
            name: "stress",
            items: &[
                "Say \"no\" to one commitment this week and delegate one task",
                "Practice the \"good enough\" rule - not everything needs to be perfect",
                "Schedule one 20-minute \"do nothing\" break daily",
                "Try the 4-7-8 breathing technique when feeling overwhelmed",
            ],
        },
        LifestyleCategory {
            name: "nutrition",
            items: &[
                "Take actual lunch breaks away from your desk",
                "Eat protein within 1 hour of waking to stabilize blood sugar",
                "Have a protein snack if you experience energy dips",
                "Avoid caffeine after 2 PM to protect sleep quality",
            ],
        },
        LifestyleCategory {
            name: "movement",
            items: &[
                "10-minute walk outside or 5-minute breathing break every afternoon",
                "Gentle stretching or yoga before bed",
                "Take stairs instead of elevators when possible",
                "Park farther away to add movement to your day",
            ],
        },
    ],
    timeline: &[
        TimelineMilestone {
            week: 1,
            expectation: "Focus on sleep optimization and saying no to one commitment",
        },
        TimelineMilestone {
            week: 2,
            expectation: "Add stress-reduction practices and protein timing",
        },
        TimelineMilestone {
            week: 4,
            expectation: "Should notice improved energy stability",
        },
        TimelineMilestone {
            week: 8,
            expectation: "Significant improvement in stress resilience and energy",
        },
    ],
    optional: &[
        "B-complex vitamin for persistent low energy",
        "Rhodiola (200-400mg) if you prefer it over ashwagandha",
        "Magnesium glycinate (400mg) before bed for deeper sleep",
    ],
};

static HORMONAL_ROLLER_COASTER: ProtocolBundle = ProtocolBundle {
    profile: "Profile 2: Hormonal Roller Coaster",
    description: "Your hormonal fluctuations are creating chaos in your energy, mood, and libido. This protocol provides targeted support for hormone balance throughout your entire cycle.",
    detailed_description: "Hormonal imbalances often stem from stress, poor nutrition timing, and lack of cycle awareness. Supporting your body's natural rhythms while providing targeted nutrients can restore balance.",
    supplements: &[
        SupplementRecommendation {
            name: "EMBER",
            dosage: "2 capsules with breakfast",
            purpose: "Comprehensive hormone support",
            timing: "Morning with food",
            benefits: "Contains hormone-balancing herbs and nutrients that support healthy estrogen and progesterone levels",
        },
        SupplementRecommendation {
            name: "STEADY",
            dosage: "1 capsule daily (increase to 2 during luteal phase)",
            purpose: "Mood stability and PMS support",
            timing: "Morning, add evening dose days 22-28",
            benefits: "Helps manage mood swings, supports healthy stress response during hormonal fluctuations",
        },
        SupplementRecommendation {
            name: "CHARGE",
            dosage: "1 capsule with breakfast",
            purpose: "Consistent energy throughout cycle",
            timing: "Morning with food",
            benefits: "Provides B-vitamins crucial for hormone production and energy metabolism",
        },
    ],
    lifestyle: &[
        LifestyleCategory {
            name: "tracking",
            items: &[
                "Track your cycle and energy patterns for 3 months using an app",
                "Note mood, energy, sleep quality, and libido daily",
                "Track when you feel most creative and productive",
                "Record any PMS symptoms and their severity",
            ],
        },
        LifestyleCategory {
            name: "cyclical",
            items: &[
                "Schedule demanding tasks during days 8-21 (follicular/ovulation)",
                "Plan rest and self-care during days 22-28 (luteal phase)",
                "Allow for more carbohydrates during luteal phase",
                "Reduce intense exercise during menstruation",
            ],
        },
        LifestyleCategory {
            name: "selfcare",
            items: &[
                "Take Epsom salt baths 2-3 times per week",
                "Practice gentle self-massage with essential oils",
                "Prioritize warm, cooked foods during menstruation",
                "Create cozy evening routines during luteal phase",
            ],
        },
        LifestyleCategory {
            name: "nutrition",
            items: &[
                "Focus on anti-inflammatory foods especially during luteal phase",
                "Include healthy fats at every meal for hormone production",
                "Eat protein within 1 hour of waking",
                "Minimize sugar and processed foods during PMS week",
            ],
        },
    ],
    timeline: &[
        TimelineMilestone {
            week: 1,
            expectation: "Begin cycle tracking and supplement routine",
        },
        TimelineMilestone {
            week: 4,
            expectation: "Should notice some mood stability improvements",
        },
        TimelineMilestone {
            week: 12,
            expectation: "Significant improvements in PMS and energy patterns",
        },
        TimelineMilestone {
            week: 24,
            expectation: "Hormonal patterns should be much more balanced",
        },
    ],
    optional: &[
        "DIM (100-200mg) to support estrogen metabolism",
        "Evening primrose oil (1000mg) for hormone balance",
        "Extra magnesium during luteal phase (400-600mg)",
        "Vitex (400mg) for progesterone support if needed",
    ],
};

static MEDICATED_AND_STRUGGLING: ProtocolBundle = ProtocolBundle {
    profile: "Profile 3: Medicated and Struggling",
    description: "Your chemical interference score suggests you need support while managing medications and reducing toxic burden.",
    detailed_description: "Many medications can interfere with libido and energy by depleting nutrients, affecting liver function, or disrupting hormonal balance. This protocol supports your body while you work with medications.",
    supplements: &[
        SupplementRecommendation {
            name: "EMBER",
            dosage: "2 capsules morning and evening",
            purpose: "Comprehensive support and nutrient repletion",
            timing: "Morning and evening with food",
            benefits: "Replaces nutrients depleted by medications, supports liver detoxification pathways",
        },
        SupplementRecommendation {
            name: "STEADY",
            dosage: "1 capsule twice daily",
            purpose: "Natural stress response support",
            timing: "Morning and evening with food",
            benefits: "Supports natural stress resilience when medications may interfere with normal responses",
        },
        SupplementRecommendation {
            name: "CHARGE",
            dosage: "1 capsule with lunch",
            purpose: "Cellular energy and mitochondrial support",
            timing: "Midday with meal",
            benefits: "Supports energy production when medications may cause fatigue",
        },
    ],
    lifestyle: &[
        LifestyleCategory {
            name: "medical",
            items: &[
                "Work with your doctor to discuss medication timing to minimize sexual side effects",
                "Ask about medication holidays or dose reductions when appropriate",
                "Consider working with functional medicine doctor alongside conventional doctor",
                "Keep a medication and symptom diary to track patterns",
            ],
        },
        LifestyleCategory {
            name: "detox",
            items: &[
                "Increase water intake by 16-32oz to your daily target",
                "Include cruciferous vegetables 3-4 times per week for liver support",
                "Add fiber-rich foods to support elimination",
                "Consider gentle lymphatic drainage massage",
            ],
        },
        LifestyleCategory {
            name: "nutrition",
            items: &[
                "Take supplements at least 2 hours away from medications unless directed otherwise",
                "Focus on nutrient-dense whole foods to replace what medications deplete",
                "Avoid grapefruit if on medications that interact with it",
                "Consider meal timing to optimize medication absorption",
            ],
        },
        LifestyleCategory {
            name: "support",
            items: &[
                "Find a healthcare team that understands medication effects on sexuality",
                "Join support groups for people managing similar health conditions",
                "Communicate openly with your partner about medication effects",
                "Practice stress reduction as medications can increase stress on the body",
            ],
        },
    ],
    timeline: &[
        TimelineMilestone {
            week: 1,
            expectation: "Begin detox support and nutrient repletion",
        },
        TimelineMilestone {
            week: 4,
            expectation: "Should notice some improvement in energy levels",
        },
        TimelineMilestone {
            week: 8,
            expectation: "Liver function support should be helping with detoxification",
        },
        TimelineMilestone {
            week: 16,
            expectation: "Work with doctor to assess if any medication adjustments are possible",
        },
    ],
    optional: &[
        "CoQ10 if on statins, B-complex if on metformin/birth control",
        "Vitamin D3 (2000-4000 IU) if on antidepressants",
        "Milk thistle (200mg) for additional liver support",
        "Probiotics if on medications affecting gut health",
    ],
};

static INFLAMED_AND_EXHAUSTED: ProtocolBundle = ProtocolBundle {
    profile: "Profile 4: Inflamed and Exhausted",
    description: "Your inflammatory fire score indicates you need comprehensive anti-inflammatory support and gentle healing approach.",
    detailed_description: "Chronic inflammation creates a cascade of problems including hormonal disruption, energy depletion, and immune dysfunction. This protocol focuses on reducing inflammation while supporting cellular repair.",
    supplements: &[
        SupplementRecommendation {
            name: "EMBER",
            dosage: "2 capsules daily with meals",
            purpose: "Anti-inflammatory support and cellular repair",
            timing: "Morning and evening with food",
            benefits: "Contains powerful anti-inflammatory compounds and antioxidants to reduce systemic inflammation",
        },
        SupplementRecommendation {
            name: "STEADY",
            dosage: "1 capsule twice daily",
            purpose: "Stress-related inflammation management",
            timing: "Morning and evening with food",
            benefits: "Helps break the stress-inflammation cycle that perpetuates chronic inflammation",
        },
        SupplementRecommendation {
            name: "CHARGE",
            dosage: "1 capsule daily",
            purpose: "Cellular repair and energy support",
            timing: "Morning with food",
            benefits: "Supports mitochondrial function and cellular repair processes",
        },
    ],
    lifestyle: &[
        LifestyleCategory {
            name: "nutrition",
            items: &[
                "Remove \"Big 3\" inflammatory foods for 30 days: sugar, processed foods, excess caffeine",
                "Add bone broth or collagen-rich foods to meals",
                "Focus on colorful anti-inflammatory foods (berries, leafy greens, fatty fish)",
                "Consider an elimination diet to identify personal triggers",
            ],
        },
        LifestyleCategory {
            name: "movement",
            items: &[
                "Focus on gentle movement only until inflammation reduces (yoga, walking)",
                "Avoid high-intensity exercise until inflammation is under control",
                "Try restorative yoga or gentle stretching daily",
                "Swimming in warm water can be soothing for inflamed joints",
            ],
        },
        LifestyleCategory {
            name: "stress",
            items: &[
                "Stress reduction is absolutely critical - make it your #1 priority",
                "Practice daily meditation or deep breathing exercises",
                "Consider therapy or counseling to address chronic stress patterns",
                "Create boundaries to protect your energy and reduce stressors",
            ],
        },
        LifestyleCategory {
            name: "healing",
            items: &[
                "Focus on sleep quality over quantity initially",
                "Consider working with functional medicine practitioner for advanced gut testing",
                "Try infrared sauna or warm baths to support detoxification",
                "Practice self-compassion as healing takes time",
            ],
        },
    ],
    timeline: &[
        TimelineMilestone {
            week: 1,
            expectation: "Begin anti-inflammatory diet and gentle movement",
        },
        TimelineMilestone {
            week: 4,
            expectation: "Should notice reduction in pain and better sleep",
        },
        TimelineMilestone {
            week: 8,
            expectation: "Energy levels should start improving",
        },
        TimelineMilestone {
            week: 16,
            expectation: "Significant reduction in inflammatory symptoms",
        },
    ],
    optional: &[
        "Remove full \"Big 8\": gluten, dairy, sugar, corn, soy, eggs, nuts, nightshades",
        "Omega-3 fatty acids (2-3g daily)",
        "Curcumin with black pepper (500-1000mg)",
        "L-glutamine (5g twice daily), Probiotics (50+ billion CFU daily)",
    ],
};

static SUGAR_BURNING_CRASH_QUEEN: ProtocolBundle = ProtocolBundle {
    profile: "Profile 5: Sugar-Burning Crash Queen",
    description: "Your blood sugar chaos score shows you need metabolic support and blood sugar stabilization strategies.",
    detailed_description: "Blood sugar instability creates a roller coaster of energy, mood, and hormone disruption. Stabilizing blood sugar is foundational to restoring energy and hormonal balance.",
    supplements: &[
        SupplementRecommendation {
            name: "EMBER",
            dosage: "2 capsules with breakfast",
            purpose: "Metabolic support and insulin sensitivity",
            timing: "Morning with food",
            benefits: "Contains nutrients that support healthy glucose metabolism and insulin function",
        },
        SupplementRecommendation {
            name: "STEADY",
            dosage: "1 capsule daily",
            purpose: "Stress-related blood sugar management",
            timing: "Morning with food",
            benefits: "Helps manage cortisol levels that can cause blood sugar swings",
        },
        SupplementRecommendation {
            name: "CHARGE",
            dosage: "1 capsule with lunch",
            purpose: "Stable energy without crashes",
            timing: "Midday with meal",
            benefits: "Supports sustained energy production and prevents afternoon crashes",
        },
    ],
    lifestyle: &[
        LifestyleCategory {
            name: "nutrition",
            items: &[
                "Never eat carbohydrates alone - always pair with protein and fat",
                "Eat within 1 hour of waking, then every 3-4 hours maximum",
                "Stop eating 3 hours before bed, eat largest meals earlier in day",
                "Never skip meals, even if not hungry",
            ],
        },
        LifestyleCategory {
            name: "emergency",
            items: &[
                "Always carry protein snacks (nuts, seeds, hard-boiled eggs)",
                "For severe crashes: 1 tablespoon almond butter with cinnamon",
                "Keep blood sugar emergency kit: protein bar, nuts, apple with nut butter",
                "Learn to recognize early warning signs of blood sugar drops",
            ],
        },
        LifestyleCategory {
            name: "planning",
            items: &[
                "Plan all meals and snacks in advance",
                "Prepare emergency snacks for travel or busy days",
                "Track blood sugar patterns with food to identify triggers",
                "Consider continuous glucose monitoring for detailed insights",
            ],
        },
        LifestyleCategory {
            name: "hydration",
            items: &[
                "Drink water before feeling thirsty to prevent dehydration crashes",
                "Avoid sugary drinks that cause blood sugar spikes",
                "Try herbal teas between meals for sustained hydration",
                "Add electrolytes if experiencing frequent crashes",
            ],
        },
    ],
    timeline: &[
        TimelineMilestone {
            week: 1,
            expectation: "Focus on meal timing and protein pairing",
        },
        TimelineMilestone {
            week: 2,
            expectation: "Should notice fewer energy crashes",
        },
        TimelineMilestone {
            week: 4,
            expectation: "Energy levels should be more stable throughout the day",
        },
        TimelineMilestone {
            week: 8,
            expectation: "Blood sugar patterns should be significantly improved",
        },
    ],
    optional: &[
        "Chromium (200-400mcg with meals)",
        "Alpha lipoic acid (300mg twice daily)",
        "Cinnamon extract (500mg with carbohydrate-containing meals)",
    ],
};

static SLEEP_DEPRIVED_ZOMBIE: ProtocolBundle = ProtocolBundle {
    profile: "Profile 6: Sleep-Deprived Zombie",
    description: "Your sleep disruption score indicates you need comprehensive sleep support and circadian rhythm restoration.",
    detailed_description: "Poor sleep creates a cascade of hormonal disruptions affecting cortisol, growth hormone, and sex hormones. Restoring healthy sleep patterns is crucial for energy and libido restoration.",
    supplements: &[
        SupplementRecommendation {
            name: "EMBER",
            dosage: "1 capsule with breakfast, 1 capsule with dinner",
            purpose: "Circadian rhythm support",
            timing: "Morning and early evening with food",
            benefits: "Contains nutrients that support healthy sleep-wake cycles and hormone production",
        },
        SupplementRecommendation {
            name: "STEADY",
            dosage: "1 capsule 2 hours before bed",
            purpose: "Sleep quality and relaxation",
            timing: "2 hours before bedtime",
            benefits: "Promotes relaxation and helps calm the nervous system for better sleep",
        },
        SupplementRecommendation {
            name: "CHARGE",
            dosage: "1 capsule with breakfast only",
            purpose: "Morning energy without evening disruption",
            timing: "Morning with food only",
            benefits: "Provides energizing nutrients without interfering with sleep",
        },
    ],
    lifestyle: &[
        LifestyleCategory {
            name: "environment",
            items: &[
                "Room temperature 65-68°F with blackout curtains or eye mask",
                "White noise machine or earplugs for consistent sound environment",
                "Remove all electronics from bedroom or use airplane mode",
                "Invest in comfortable mattress and pillows that support good alignment",
            ],
        },
        LifestyleCategory {
            name: "routine",
            items: &[
                "Same sleep/wake time every day, including weekends",
                "Create a wind-down routine starting 1-2 hours before bed",
                "No screens in bedroom, use blue light blockers if must use devices in evening",
                "Try reading, gentle stretching, or meditation before bed",
            ],
        },
        LifestyleCategory {
            name: "timing",
            items: &[
                "No caffeine after 2 PM, exercise earlier in the day",
                "Finish eating at least 3 hours before bedtime",
                "Get morning sunlight exposure within 30 minutes of waking",
                "Dim lights in the evening to signal bedtime to your body",
            ],
        },
        LifestyleCategory {
            name: "troubleshooting",
            items: &[
                "Consider sleep study if snoring or breathing issues persist",
                "Track sleep patterns to identify what helps vs. hurts",
                "Address racing thoughts with journaling or brain dump before bed",
                "If you can't fall asleep in 20 minutes, get up and do a quiet activity",
            ],
        },
    ],
    timeline: &[
        TimelineMilestone {
            week: 1,
            expectation: "Focus on sleep environment and routine",
        },
        TimelineMilestone {
            week: 2,
            expectation: "Should notice easier time falling asleep",
        },
        TimelineMilestone {
            week: 4,
            expectation: "Sleep quality and morning energy should improve",
        },
        TimelineMilestone {
            week: 8,
            expectation: "Circadian rhythm should be well-established",
        },
    ],
    optional: &[
        "Melatonin (0.5-3mg) 30 minutes before desired sleep time",
        "Magnesium glycinate (400-600mg before bed)",
        "L-theanine (200mg) if mind races at bedtime",
    ],
};

static TOXIC_AND_OVERWHELMED: ProtocolBundle = ProtocolBundle {
    profile: "Profile 7: Toxic and Overwhelmed",
    description: "Your combined chemical interference and inflammatory fire scores indicate you need gentle detox support and environmental modifications.",
    detailed_description: "Chemical toxins can overwhelm your body's natural detoxification systems, leading to hormonal disruption and chronic inflammation. This protocol supports gentle detoxification while reducing toxic burden.",
    supplements: &[
        SupplementRecommendation {
            name: "EMBER",
            dosage: "Start with 1 capsule, gradually increase to 2 daily",
            purpose: "Gentle detox support and cellular protection",
            timing: "With meals, start slowly",
            benefits: "Supports liver detoxification pathways and provides antioxidant protection",
        },
        SupplementRecommendation {
            name: "STEADY",
            dosage: "1 capsule twice daily",
            purpose: "Stress resilience during detoxification",
            timing: "Morning and evening with food",
            benefits: "Supports the nervous system during the stress of detoxification",
        },
        SupplementRecommendation {
            name: "CHARGE",
            dosage: "1 capsule daily",
            purpose: "Cellular energy during healing",
            timing: "Morning with food",
            benefits: "Provides energy for cellular repair and detoxification processes",
        },
    ],
    lifestyle: &[
        LifestyleCategory {
            name: "immediate",
            items: &[
                "Switch to non-toxic cleaning products immediately",
                "Use glass containers instead of plastic for food storage",
                "Filter your water if possible",
                "Replace synthetic fragrances with essential oils or fragrance-free products",
            ],
        },
        LifestyleCategory {
            name: "nutrition",
            items: &[
                "Choose organic foods when possible, especially \"Dirty Dozen\" list",
                "Support liver with cruciferous vegetables and sulfur-rich foods",
                "Increase fiber intake to support elimination",
                "Stay well-hydrated to support kidney function",
            ],
        },
        LifestyleCategory {
            name: "gentle",
            items: &[
                "Go slowly with all changes - support your body's natural detox pathways",
                "Focus on gentle movement and stress reduction",
                "Don't overwhelm your system with aggressive detox protocols",
                "Listen to your body and rest when needed",
            ],
        },
        LifestyleCategory {
            name: "professional",
            items: &[
                "Work with practitioner experienced in environmental illness",
                "Consider testing for heavy metals or chemical burden",
                "May need specific detox protocols based on your toxic load",
                "Consider mold testing if you suspect environmental mold exposure",
            ],
        },
    ],
    timeline: &[
        TimelineMilestone {
            week: 1,
            expectation: "Begin environmental changes and gentle supplement support",
        },
        TimelineMilestone {
            week: 4,
            expectation: "Should notice some improvement in energy and mental clarity",
        },
        TimelineMilestone {
            week: 8,
            expectation: "Detoxification pathways should be better supported",
        },
        TimelineMilestone {
            week: 16,
            expectation: "Significant improvement in symptoms related to toxic burden",
        },
    ],
    optional: &[
        "NAC (600mg) and milk thistle (300mg) for extra liver support",
        "Sauna or hot baths 2-3 times per week if tolerated",
        "Glutathione support if working with a practitioner",
        "Activated charcoal (away from supplements) for acute exposure",
    ],
};
