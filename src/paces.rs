//! Training pace derivation from 5K race fitness
//!
//! This module computes the named training paces from a runner's 5K time.
//! The plan builder consumes the formatted paces; nothing here branches on
//! phase or day count.

use serde::{Deserialize, Serialize};

use crate::models::request::RaceTime;

/// ---------------------------------------------------------------------------
/// Constants
/// ---------------------------------------------------------------------------

/// 5K distance in miles
pub const FIVE_K_MILES: f64 = 3.107;

/// ---------------------------------------------------------------------------
/// Pace Names
/// ---------------------------------------------------------------------------

/// Named training intensities, each a fixed multiplier of 5K race pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceName {
  EasyLong,  // easy/recovery and long runs
  Tempo,     // held for 20-40 min
  Threshold, // 5-15 min repeats
  Interval,  // 800m-1000m repeats
  Repeat,    // 200m-400m repeats
}

impl PaceName {
  /// All pace names, slowest to fastest.
  pub const ALL: [PaceName; 5] = [
    PaceName::EasyLong,
    PaceName::Tempo,
    PaceName::Threshold,
    PaceName::Interval,
    PaceName::Repeat,
  ];

  /// Multiplier relative to 5K race pace, per common coaching tables.
  pub fn factor(self) -> f64 {
    match self {
      PaceName::EasyLong => 1.18,
      PaceName::Tempo => 1.07,
      PaceName::Threshold => 1.035,
      PaceName::Interval => 0.98,
      PaceName::Repeat => 0.88,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Pace Set
/// ---------------------------------------------------------------------------

/// One pace per name, in seconds per mile. Derived entirely from the race
/// time and immutable once computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaceSet {
  pub easy_long: f64,
  pub tempo: f64,
  pub threshold: f64,
  pub interval: f64,
  pub repeat: f64,
}

impl PaceSet {
  /// Compute all training paces from a validated 5K time.
  pub fn from_race_time(race_time: RaceTime) -> Self {
    // 5K pace in seconds per mile at current fitness
    let base = race_time.as_seconds() / FIVE_K_MILES;

    Self {
      easy_long: base * PaceName::EasyLong.factor(),
      tempo: base * PaceName::Tempo.factor(),
      threshold: base * PaceName::Threshold.factor(),
      interval: base * PaceName::Interval.factor(),
      repeat: base * PaceName::Repeat.factor(),
    }
  }

  pub fn get(&self, name: PaceName) -> f64 {
    match name {
      PaceName::EasyLong => self.easy_long,
      PaceName::Tempo => self.tempo,
      PaceName::Threshold => self.threshold,
      PaceName::Interval => self.interval,
      PaceName::Repeat => self.repeat,
    }
  }

  /// Format every pace as "M:SS" for display and focus-text embedding.
  pub fn formatted(&self) -> FormattedPaces {
    FormattedPaces {
      easy_long: format_pace(self.easy_long),
      tempo: format_pace(self.tempo),
      threshold: format_pace(self.threshold),
      interval: format_pace(self.interval),
      repeat: format_pace(self.repeat),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Pace Formatting
/// ---------------------------------------------------------------------------

/// The "M:SS" display form of a pace set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedPaces {
  pub easy_long: String,
  pub tempo: String,
  pub threshold: String,
  pub interval: String,
  pub repeat: String,
}

/// Convert seconds per mile to "M:SS". Rounds the total to a whole second
/// before splitting; splitting first could display a 60 in the seconds slot.
pub fn format_pace(pace_seconds: f64) -> String {
  let total = pace_seconds.round() as i64;
  let minutes = total / 60;
  let seconds = total % 60;
  format!("{}:{:02}", minutes, seconds)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
