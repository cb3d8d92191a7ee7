use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One day of protocol tracking. At most one entry exists per date.
///
/// `completion_score` is derived from the four sub-records and is
/// recomputed on every save; a value read from storage is never trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailyEntry {
    pub id: Uuid,
    pub date: Date,
    #[serde(default)]
    pub morning_routine: MorningRoutine,
    #[serde(default)]
    pub meal_plan: MealPlan,
    #[serde(default)]
    pub wellness_metrics: WellnessMetrics,
    #[serde(default)]
    pub evening_reflection: EveningReflection,
    #[serde(default)]
    pub completion_score: u8,
    #[serde(rename = "created_at")]
    pub created_at: jiff::Timestamp,
    #[serde(rename = "updated_at")]
    pub updated_at: jiff::Timestamp,
}

impl DailyEntry {
    /// A fresh entry for `date`, seeded with the planner's starting values.
    pub fn new(date: Date, now: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            morning_routine: MorningRoutine::seeded(),
            meal_plan: MealPlan::seeded(),
            wellness_metrics: WellnessMetrics::seeded(),
            evening_reflection: EveningReflection::seeded(),
            completion_score: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_morning_routine(self, morning_routine: MorningRoutine) -> Self {
        Self {
            morning_routine,
            ..self
        }
    }

    pub fn with_meal_plan(self, meal_plan: MealPlan) -> Self {
        Self { meal_plan, ..self }
    }

    pub fn with_wellness_metrics(self, wellness_metrics: WellnessMetrics) -> Self {
        Self {
            wellness_metrics,
            ..self
        }
    }

    pub fn with_evening_reflection(self, evening_reflection: EveningReflection) -> Self {
        Self {
            evening_reflection,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SupplementTime {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SupplementIntake {
    pub name: String,
    pub taken: bool,
    pub dosage: String,
    pub time: SupplementTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MorningRoutine {
    pub supplements: Vec<SupplementIntake>,
    /// Glasses of water.
    pub water_intake: u32,
    pub exercise: bool,
    pub exercise_type: Option<String>,
    /// Minutes.
    pub exercise_duration: Option<u32>,
    pub meditation: bool,
    /// Minutes.
    pub meditation_duration: Option<u32>,
    /// 1–10, 0 when unrated.
    pub mood_rating: u8,
    /// 1–10, 0 when unrated.
    pub energy_level: u8,
}

impl MorningRoutine {
    pub fn seeded() -> Self {
        Self {
            mood_rating: 5,
            energy_level: 5,
            ..Self::default()
        }
    }

    pub fn any_supplement_taken(&self) -> bool {
        self.supplements.iter().any(|s| s.taken)
    }

    pub fn with_supplement(mut self, supplement: SupplementIntake) -> Self {
        self.supplements.push(supplement);
        self
    }

    pub fn with_water_intake(self, water_intake: u32) -> Self {
        Self {
            water_intake,
            ..self
        }
    }

    pub fn with_exercise(self, exercise_type: impl Into<String>, minutes: u32) -> Self {
        Self {
            exercise: true,
            exercise_type: Some(exercise_type.into()),
            exercise_duration: Some(minutes),
            ..self
        }
    }

    pub fn with_meditation(self, minutes: u32) -> Self {
        Self {
            meditation: true,
            meditation_duration: Some(minutes),
            ..self
        }
    }

    pub fn with_mood(self, mood_rating: u8) -> Self {
        Self {
            mood_rating,
            ..self
        }
    }

    pub fn with_energy(self, energy_level: u8) -> Self {
        Self {
            energy_level,
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Meal {
    pub planned: String,
    pub actual: Option<String>,
    pub protocol_aligned: bool,
    pub hunger_before: u8,
    pub satiety_after: u8,
}

impl Meal {
    pub fn seeded() -> Self {
        Self {
            hunger_before: 5,
            satiety_after: 5,
            ..Self::default()
        }
    }

    pub fn planned(planned: impl Into<String>, protocol_aligned: bool) -> Self {
        Self {
            planned: planned.into(),
            protocol_aligned,
            ..Self::seeded()
        }
    }

    pub fn is_planned(&self) -> bool {
        !self.planned.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Snack {
    pub name: String,
    pub time: String,
    pub protocol_aligned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Vec<Snack>,
    pub hunger_levels: Vec<u8>,
    pub satiety_levels: Vec<u8>,
}

impl MealPlan {
    pub fn seeded() -> Self {
        Self {
            breakfast: Meal::seeded(),
            lunch: Meal::seeded(),
            dinner: Meal::seeded(),
            ..Self::default()
        }
    }

    pub fn named_meals(&self) -> [&Meal; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    pub fn any_protocol_aligned(&self) -> bool {
        self.named_meals().iter().any(|meal| meal.protocol_aligned)
    }

    pub fn with_breakfast(self, breakfast: Meal) -> Self {
        Self { breakfast, ..self }
    }

    pub fn with_lunch(self, lunch: Meal) -> Self {
        Self { lunch, ..self }
    }

    pub fn with_dinner(self, dinner: Meal) -> Self {
        Self { dinner, ..self }
    }

    pub fn with_snack(mut self, snack: Snack) -> Self {
        self.snacks.push(snack);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Symptom {
    pub name: String,
    pub severity: u8,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct WellnessMetrics {
    pub sleep_quality: u8,
    pub sleep_hours: f64,
    pub stress_level: u8,
    pub symptoms: Vec<Symptom>,
    pub cycle_day: Option<u8>,
    pub cycle_phase: Option<CyclePhase>,
}

impl WellnessMetrics {
    pub fn seeded() -> Self {
        Self {
            sleep_quality: 5,
            sleep_hours: 8.0,
            stress_level: 5,
            ..Self::default()
        }
    }

    pub fn with_sleep(self, sleep_quality: u8, sleep_hours: f64) -> Self {
        Self {
            sleep_quality,
            sleep_hours,
            ..self
        }
    }

    pub fn with_stress(self, stress_level: u8) -> Self {
        Self {
            stress_level,
            ..self
        }
    }

    pub fn with_symptom(mut self, symptom: Symptom) -> Self {
        self.symptoms.push(symptom);
        self
    }

    pub fn with_cycle(self, day: u8, phase: CyclePhase) -> Self {
        Self {
            cycle_day: Some(day),
            cycle_phase: Some(phase),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct EveningReflection {
    pub daily_wins: Vec<String>,
    pub challenges: Vec<String>,
    pub tomorrow_intentions: Vec<String>,
    pub gratitude: Vec<String>,
    /// Free slider, 0–100. Not derived.
    pub overall_wellness: u8,
}

impl EveningReflection {
    pub fn seeded() -> Self {
        Self {
            overall_wellness: 50,
            ..Self::default()
        }
    }

    pub fn with_win(mut self, win: impl Into<String>) -> Self {
        self.daily_wins.push(win.into());
        self
    }

    pub fn with_challenge(mut self, challenge: impl Into<String>) -> Self {
        self.challenges.push(challenge.into());
        self
    }

    pub fn with_intention(mut self, intention: impl Into<String>) -> Self {
        self.tomorrow_intentions.push(intention.into());
        self
    }

    pub fn with_gratitude(mut self, gratitude: impl Into<String>) -> Self {
        self.gratitude.push(gratitude.into());
        self
    }

    pub fn with_overall_wellness(self, overall_wellness: u8) -> Self {
        Self {
            overall_wellness,
            ..self
        }
    }
}
