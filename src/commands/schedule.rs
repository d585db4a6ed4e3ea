//! Tauri commands for schedule generation
//!
//! Thin adapters between the frontend and the calculation pipeline. All
//! validation failures are surfaced as the command error string; nothing is
//! computed after a failure.

use crate::models::request::RaceTime;
use crate::models::{PlanRequest, RenderedSchedule};
use crate::paces::{FormattedPaces, PaceSet};
use crate::plan::WeeklyPlan;

/// Form defaults for the schedule generated on application load.
#[tauri::command]
pub fn default_plan_request() -> PlanRequest {
  PlanRequest::default()
}

/// Preview the training paces for a 5K time without building a schedule.
#[tauri::command]
pub fn calculate_paces(five_k_time: String) -> Result<FormattedPaces, String> {
  let race_time: RaceTime = five_k_time.parse().map_err(|e| e.to_string())?;
  Ok(PaceSet::from_race_time(race_time).formatted())
}

/// Run the full pipeline: validate, derive paces, build the weekly plan,
/// and materialize the rows the frontend renders.
#[tauri::command]
pub fn generate_schedule(request: PlanRequest) -> Result<RenderedSchedule, String> {
  let input = request.validate().map_err(|e| e.to_string())?;

  let paces = PaceSet::from_race_time(input.race_time).formatted();
  let plan = WeeklyPlan::build(&paces, input.training_days, input.phase);
  let schedule = RenderedSchedule::build(&plan, &paces, input.weekly_mileage, input.phase);

  println!(
    "Generated {} schedule: {} training days, {} weekly miles",
    input.phase,
    input.training_days.count(),
    input.weekly_mileage
  );

  Ok(schedule)
}
