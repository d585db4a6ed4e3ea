//! Weekly Plan Builder
//!
//! Builds the 7-day mileage distribution and focus assignments from the
//! formatted training paces. Construction runs in three fixed steps:
//! - base week (6 training days, Sunday rest, Saturday takes the residual)
//! - training-day adjustment (5/6/7 days)
//! - phase adjustment (BASE, STRENGTH, PEAK, TAPER)
//!
//! Key principles:
//! - Entries always stay in calendar order Monday..Sunday
//! - Outside TAPER, the seven percent shares sum to 1.0
//! - The builder owns the plan exclusively; rendering only reads it

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::request::PlanError;
use crate::paces::FormattedPaces;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// TAPER cuts every day's volume by 40%.
const TAPER_VOLUME_FACTOR: f64 = 0.6;

/// Long-run share used only if the residual computation ever comes up empty.
const LONG_RUN_FALLBACK_SHARE: f64 = 0.28;

/// Share of weekly volume granted to the Sunday run on 7-day schedules.
const CAPPED_SUNDAY_SHARE: f64 = 0.05;

const REST_DAY: &str = "Rest Day";

/// Calendar order of the week, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Display name for a weekday.
pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
/// Training Phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    /// Easy volume and controlled fartlek speed work
    Base,
    /// Threshold and tempo volume, longer repeats
    Strength,
    /// Race-pace intervals, highest volume
    Peak,
    /// Reduced volume ahead of a race
    Taper,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Base => "BASE",
            Phase::Strength => "STRENGTH",
            Phase::Peak => "PEAK",
            Phase::Taper => "TAPER",
        }
    }

    /// One-line coaching note shown above the schedule.
    pub fn note(self) -> &'static str {
        match self {
            Phase::Base => {
                "Focus on Easy effort and building distance. Speed work is controlled Fartlek."
            }
            Phase::Strength => {
                "Focus on Threshold and Tempo volume. Speed work introduces longer repeats (e.g., 1000s)."
            }
            Phase::Peak => {
                "Focus on Race Pace (Intervals) and maintenance. Highest volume week."
            }
            Phase::Taper => {
                "Focus on rest and reduced volume (~40% reduction). Keep strides sharp."
            }
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
/// Training Days
// ---------------------------------------------------------------------------

/// Supported training-day counts. Anything else is rejected during input
/// validation rather than silently passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingDays {
    Five,
    Six,
    Seven,
}

impl TrainingDays {
    pub fn from_count(count: i64) -> Result<Self, PlanError> {
        match count {
            5 => Ok(TrainingDays::Five),
            6 => Ok(TrainingDays::Six),
            7 => Ok(TrainingDays::Seven),
            other => Err(PlanError::TrainingDaysRange(other)),
        }
    }

    pub fn count(self) -> u8 {
        match self {
            TrainingDays::Five => 5,
            TrainingDays::Six => 6,
            TrainingDays::Seven => 7,
        }
    }
}

// ---------------------------------------------------------------------------
/// Day Plan
// ---------------------------------------------------------------------------

/// One day of the weekly plan. Mutable during construction, read-only once
/// the builder returns.
#[derive(Debug, Clone)]
pub struct DayPlan {
    pub day: Weekday,
    pub focus: String,
    pub percent: f64,
    pub is_run: bool,
}

// ---------------------------------------------------------------------------
/// Weekly Plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct WeeklyPlan {
    days: [DayPlan; 7],
}

impl WeeklyPlan {
    /// Build the full weekly plan for the given day count and phase.
    pub fn build(paces: &FormattedPaces, training_days: TrainingDays, phase: Phase) -> Self {
        let mut plan = Self::base_week(paces);
        plan.apply_training_days(paces, training_days);
        plan.apply_phase(paces, phase);
        plan
    }

    /// Step 1: the 6-training-day base week. Saturday's long run takes the
    /// residual share so the seven percents sum to 1.0.
    fn base_week(paces: &FormattedPaces) -> Self {
        let days = [
            DayPlan {
                day: Weekday::Mon,
                focus: format!("Easy Run ({}/mile) + Core/Strides", paces.easy_long),
                percent: 0.17,
                is_run: true,
            },
            DayPlan {
                day: Weekday::Tue,
                focus: format!(
                    "Threshold Repeats (e.g., 4 x 1 mile @ {}/mile) + Bands",
                    paces.threshold
                ),
                percent: 0.18,
                is_run: true,
            },
            DayPlan {
                day: Weekday::Wed,
                focus: format!("Easy/Recovery Run ({}/mile) + Core/Strides", paces.easy_long),
                percent: 0.17,
                is_run: true,
            },
            DayPlan {
                day: Weekday::Thu,
                focus: format!("Tempo Run ({}/mile) + Bands", paces.tempo),
                percent: 0.17,
                is_run: true,
            },
            DayPlan {
                day: Weekday::Fri,
                focus: format!("Easy Run ({}/mile) + Core/Strides", paces.easy_long),
                percent: 0.18,
                is_run: true,
            },
            DayPlan {
                day: Weekday::Sat,
                focus: format!("Long Run ({}/mile)", paces.easy_long),
                percent: 0.0,
                is_run: true,
            },
            DayPlan {
                day: Weekday::Sun,
                focus: REST_DAY.to_string(),
                percent: 0.0,
                is_run: false,
            },
        ];

        let mut plan = Self { days };
        let assigned: f64 = plan.days.iter().map(|d| d.percent).sum();
        let residual = 1.0 - assigned;
        plan.day_mut(Weekday::Sat).percent = if residual > 0.0 {
            residual
        } else {
            LONG_RUN_FALLBACK_SHARE
        };
        plan
    }

    /// Step 2: adjust the base week for the requested training-day count.
    fn apply_training_days(&mut self, paces: &FormattedPaces, training_days: TrainingDays) {
        match training_days {
            TrainingDays::Five => {
                // Thursday's run moves to Friday; Thursday becomes the second
                // rest day and its 0.17 share is spread over Mon/Wed/Sat.
                let thursday_focus = self.day(Weekday::Thu).focus.clone();
                self.day_mut(Weekday::Fri).focus = thursday_focus;

                let thursday = self.day_mut(Weekday::Thu);
                thursday.focus = REST_DAY.to_string();
                thursday.percent = 0.0;
                thursday.is_run = false;

                self.day_mut(Weekday::Mon).percent += 0.05;
                self.day_mut(Weekday::Wed).percent += 0.05;
                self.day_mut(Weekday::Sat).percent += 0.07;
            }
            TrainingDays::Six => {}
            TrainingDays::Seven => {
                // Sunday becomes a short, capped easy run paid for out of the
                // long run.
                let sunday = self.day_mut(Weekday::Sun);
                sunday.focus = format!(
                    "Chill Run ({}/mile) - no more than 5% volume",
                    paces.easy_long
                );
                sunday.percent = CAPPED_SUNDAY_SHARE;
                sunday.is_run = true;

                self.day_mut(Weekday::Sat).percent -= CAPPED_SUNDAY_SHARE;
            }
        }
    }

    /// Step 3: retarget the quality days for the phase, or cut volume for
    /// TAPER. Runs after the day-count adjustment.
    fn apply_phase(&mut self, paces: &FormattedPaces, phase: Phase) {
        match phase {
            Phase::Base => {
                self.day_mut(Weekday::Tue).focus = format!(
                    "Light Fartlek (e.g., 5 x 2 min hard @ {}/mile) + Bands",
                    paces.interval
                );
                self.day_mut(Weekday::Thu).focus =
                    format!("Tempo Run (short duration) @ {}/mile + Bands", paces.tempo);
            }
            Phase::Strength => {
                self.day_mut(Weekday::Tue).focus = format!(
                    "Threshold Repeats (e.g., 4 x 1000m @ {}/mile) + Bands",
                    paces.threshold
                );
                self.day_mut(Weekday::Thu).focus = format!(
                    "Longer Tempo Run (e.g., 4 miles @ {}/mile) + Bands",
                    paces.tempo
                );
            }
            Phase::Peak => {
                self.day_mut(Weekday::Tue).focus = format!(
                    "Intervals (e.g., 6 x 800m @ {}/mile) + Bands",
                    paces.interval
                );
                self.day_mut(Weekday::Thu).focus = format!(
                    "Threshold Repeats (e.g., 3 x 1 mile @ {}/mile) + Bands",
                    paces.threshold
                );
            }
            Phase::Taper => {
                let replacements = [
                    ("Long Run", "Shortened Long Run"),
                    ("Threshold", "Strides Only (4x100m)"),
                    ("Tempo", "Very Easy Run"),
                ];

                for day in self.days.iter_mut() {
                    day.percent *= TAPER_VOLUME_FACTOR;

                    // Independent keyword checks against the pre-taper focus;
                    // the last match in this order wins.
                    let replacement = replacements
                        .iter()
                        .filter(|(keyword, _)| day.focus.contains(*keyword))
                        .last();

                    if let Some((_, focus)) = replacement {
                        day.focus = focus.to_string();
                    }
                }
            }
        }
    }

    /// The seven day plans in calendar order, Monday first.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.num_days_from_monday() as usize]
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DayPlan {
        &mut self.days[day.num_days_from_monday() as usize]
    }

    /// Sum of the seven percent shares; 1.0 for non-TAPER plans.
    pub fn total_percent(&self) -> f64 {
        self.days.iter().map(|d| d.percent).sum()
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
