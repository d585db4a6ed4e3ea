//! Plan request validation
//!
//! Raw form values from the UI arrive as a `PlanRequest`; everything the
//! pipeline computes with is the validated `PlanInput`. Validation failures
//! are reported to the caller before any plan is computed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::{Phase, TrainingDays};

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
  #[error("invalid 5K time {0:?}: expected MM:SS")]
  TimeFormat(String),

  #[error("5K time must be greater than zero")]
  TimeRange,

  #[error("weekly mileage must be a positive number, got {0}")]
  MileageRange(f64),

  #[error("unsupported training day count {0}: expected 5, 6, or 7")]
  TrainingDaysRange(i64),
}

/// ---------------------------------------------------------------------------
/// Race Time
/// ---------------------------------------------------------------------------

/// A 5K effort in total seconds. Parsed once from "MM:SS" input and
/// immutable afterwards; always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceTime(f64);

impl RaceTime {
  pub fn from_seconds(total_seconds: f64) -> Result<Self, PlanError> {
    if !total_seconds.is_finite() || total_seconds <= 0.0 {
      return Err(PlanError::TimeRange);
    }
    Ok(Self(total_seconds))
  }

  pub fn as_seconds(self) -> f64 {
    self.0
  }
}

impl std::str::FromStr for RaceTime {
  type Err = PlanError;

  /// Parse "MM:SS". The input must split into exactly two numeric
  /// components; anything else is a format error, a non-positive total a
  /// range error.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let format_err = || PlanError::TimeFormat(s.to_string());

    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 2 {
      return Err(format_err());
    }

    let minutes: f64 = parts[0].trim().parse().map_err(|_| format_err())?;
    let seconds: f64 = parts[1].trim().parse().map_err(|_| format_err())?;
    if !minutes.is_finite() || !seconds.is_finite() {
      return Err(format_err());
    }

    Self::from_seconds(minutes * 60.0 + seconds)
  }
}

/// ---------------------------------------------------------------------------
/// Plan Request (raw UI payload)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
  pub weekly_mileage: f64,
  pub training_phase: Phase,
  pub five_k_time: String,
  pub training_days: i64,
}

impl Default for PlanRequest {
  /// Form defaults used for the schedule rendered on application load.
  fn default() -> Self {
    Self {
      weekly_mileage: 30.0,
      training_phase: Phase::Base,
      five_k_time: "20:00".to_string(),
      training_days: 6,
    }
  }
}

impl PlanRequest {
  /// Validate every field, returning the typed input the pipeline runs on.
  pub fn validate(&self) -> Result<PlanInput, PlanError> {
    let race_time: RaceTime = self.five_k_time.parse()?;

    if !self.weekly_mileage.is_finite() || self.weekly_mileage <= 0.0 {
      return Err(PlanError::MileageRange(self.weekly_mileage));
    }

    let training_days = TrainingDays::from_count(self.training_days)?;

    Ok(PlanInput {
      race_time,
      weekly_mileage: self.weekly_mileage,
      training_days,
      phase: self.training_phase,
    })
  }
}

/// A fully validated request; constructing one is the only way into the
/// plan pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PlanInput {
  pub race_time: RaceTime,
  pub weekly_mileage: f64,
  pub training_days: TrainingDays,
  pub phase: Phase,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
