//! Rendered schedule rows
//!
//! The read-only output handed to the UI: one row per day, a TOTAL summary
//! row restating the key paces, and the phase note line. Rendering the rows
//! into table elements is the frontend's job.

use serde::Serialize;

use crate::paces::FormattedPaces;
use crate::plan::{day_label, Phase, WeeklyPlan};

/// ---------------------------------------------------------------------------
/// Schedule Rows
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRow {
  pub day: String,
  pub focus: String,
  pub mileage: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedSchedule {
  /// "Phase: BASE. <coaching note>"
  pub phase_note: String,

  /// One row per day, Monday..Sunday
  pub rows: Vec<ScheduleRow>,

  /// Summary row: accumulated mileage plus the Easy/Tempo/Threshold paces
  pub total: ScheduleRow,
}

impl RenderedSchedule {
  /// Materialize the finished plan into renderable rows.
  pub fn build(
    plan: &WeeklyPlan,
    paces: &FormattedPaces,
    weekly_mileage: f64,
    phase: Phase,
  ) -> Self {
    let mut total_mileage = 0.0;
    let mut rows = Vec::with_capacity(plan.days().len());

    for day in plan.days() {
      let miles = round_tenth(weekly_mileage * day.percent);
      if day.percent > 0.0 {
        total_mileage += miles;
      }
      rows.push(ScheduleRow {
        day: day_label(day.day).to_string(),
        focus: day.focus.clone(),
        mileage: format_mileage(miles),
      });
    }

    let total = ScheduleRow {
      day: "TOTAL".to_string(),
      focus: format!(
        "Target Paces (per mile): Easy: {} | Tempo: {} | Threshold: {}",
        paces.easy_long, paces.tempo, paces.threshold
      ),
      mileage: format!("{:.1} miles", total_mileage),
    };

    Self {
      phase_note: format!("Phase: {}. {}", phase, phase.note()),
      rows,
      total,
    }
  }

  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// Round to one decimal place; day mileages display and total at this
/// precision.
fn round_tenth(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

fn format_mileage(miles: f64) -> String {
  if miles > 0.0 {
    format!("{:.1} miles", miles)
  } else {
    "0 miles".to_string()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::paces::PaceSet;
  use crate::plan::TrainingDays;

  fn render(weekly_mileage: f64, training_days: TrainingDays, phase: Phase) -> RenderedSchedule {
    let paces = PaceSet::from_race_time("20:00".parse().unwrap()).formatted();
    let plan = WeeklyPlan::build(&paces, training_days, phase);
    RenderedSchedule::build(&plan, &paces, weekly_mileage, phase)
  }

  #[test]
  fn test_base_schedule_rows() {
    let schedule = render(30.0, TrainingDays::Six, Phase::Base);

    assert_eq!(schedule.rows.len(), 7);
    assert_eq!(schedule.rows[0].day, "Monday");
    assert_eq!(schedule.rows[0].mileage, "5.1 miles");
    assert_eq!(schedule.rows[1].mileage, "5.4 miles");
    assert_eq!(schedule.rows[5].day, "Saturday");
    assert_eq!(schedule.rows[5].mileage, "3.9 miles");
  }

  #[test]
  fn test_rest_day_renders_zero_miles() {
    let schedule = render(30.0, TrainingDays::Six, Phase::Base);
    let sunday = &schedule.rows[6];

    assert_eq!(sunday.day, "Sunday");
    assert_eq!(sunday.focus, "Rest Day");
    assert_eq!(sunday.mileage, "0 miles");
  }

  #[test]
  fn test_total_row_sums_displayed_mileage() {
    let schedule = render(30.0, TrainingDays::Six, Phase::Base);

    // 5.1 + 5.4 + 5.1 + 5.1 + 5.4 + 3.9
    assert_eq!(schedule.total.day, "TOTAL");
    assert_eq!(schedule.total.mileage, "30.0 miles");
  }

  #[test]
  fn test_total_row_restates_key_paces() {
    let schedule = render(30.0, TrainingDays::Six, Phase::Base);

    assert_eq!(
      schedule.total.focus,
      "Target Paces (per mile): Easy: 7:36 | Tempo: 6:53 | Threshold: 6:40"
    );
  }

  #[test]
  fn test_phase_note_line() {
    let schedule = render(30.0, TrainingDays::Six, Phase::Base);
    assert_eq!(
      schedule.phase_note,
      "Phase: BASE. Focus on Easy effort and building distance. Speed work is controlled Fartlek."
    );
  }

  #[test]
  fn test_taper_total_is_sixty_percent() {
    let schedule = render(30.0, TrainingDays::Six, Phase::Taper);
    assert_eq!(
      schedule.total.mileage, "18.0 miles",
      "taper should schedule 60% of the 30-mile week"
    );
  }

  #[test]
  fn test_seven_day_schedule_has_no_rest_row() {
    let schedule = render(40.0, TrainingDays::Seven, Phase::Strength);

    let sunday = &schedule.rows[6];
    assert!(sunday.focus.starts_with("Chill Run"));
    assert_eq!(sunday.mileage, "2.0 miles"); // 40 × 0.05
  }

  #[test]
  fn test_mileage_rounds_to_one_decimal() {
    // 23 × 0.17 = 3.91 → 3.9; 23 × 0.18 = 4.14 → 4.1
    let schedule = render(23.0, TrainingDays::Six, Phase::Base);
    assert_eq!(schedule.rows[0].mileage, "3.9 miles");
    assert_eq!(schedule.rows[1].mileage, "4.1 miles");
  }

  #[test]
  fn test_json_shape() {
    let schedule = render(30.0, TrainingDays::Six, Phase::Base);
    let json = schedule.to_json();

    assert!(json.contains("\"phase_note\""), "got {}", json);
    assert!(json.contains("\"rows\""));
    assert!(json.contains("\"Monday\""));
    assert!(json.contains("\"TOTAL\""));
  }
}
