//! Daily Targets
//!
//! Per-day unit targets for one task. All seven days are always present.

use serde::{Deserialize, Serialize};

use crate::day::DayOfWeek;

/// Targets are entered in half-unit steps
pub const UNIT_STEP: f64 = 0.5;

/// Clamp to a non-negative, finite value on the half-unit grid
pub fn snap_units(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value / UNIT_STEP).round() * UNIT_STEP
}

/// Parse a raw grid input; anything unparseable counts as zero
pub fn parse_units(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(snap_units).unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyTargets {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl DailyTargets {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, day: DayOfWeek) -> f64 {
        match day {
            DayOfWeek::Monday => self.monday,
            DayOfWeek::Tuesday => self.tuesday,
            DayOfWeek::Wednesday => self.wednesday,
            DayOfWeek::Thursday => self.thursday,
            DayOfWeek::Friday => self.friday,
            DayOfWeek::Saturday => self.saturday,
            DayOfWeek::Sunday => self.sunday,
        }
    }

    /// Set one day, leaving the other six untouched
    pub fn set(&mut self, day: DayOfWeek, value: f64) {
        let value = snap_units(value);
        let slot = match day {
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
        };
        *slot = value;
    }

    pub fn with(mut self, day: DayOfWeek, value: f64) -> Self {
        self.set(day, value);
        self
    }

    pub fn total(&self) -> f64 {
        DayOfWeek::ALL.iter().map(|day| self.get(*day)).sum()
    }

    pub fn is_zero(&self) -> bool {
        DayOfWeek::ALL.iter().all(|day| self.get(*day) == 0.0)
    }
}

/// One-decimal display used by the target grid and the recap table
pub fn format_units(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_only_touches_one_day() {
        let mut targets = DailyTargets::zero().with(DayOfWeek::Friday, 2.0);
        targets.set(DayOfWeek::Monday, 1.5);
        assert_eq!(targets.monday, 1.5);
        assert_eq!(targets.friday, 2.0);
        for day in [DayOfWeek::Tuesday, DayOfWeek::Wednesday, DayOfWeek::Thursday, DayOfWeek::Saturday, DayOfWeek::Sunday] {
            assert_eq!(targets.get(day), 0.0);
        }
    }

    #[test]
    fn test_total() {
        let targets = DailyTargets::zero()
            .with(DayOfWeek::Monday, 2.0)
            .with(DayOfWeek::Tuesday, 1.0);
        assert_eq!(targets.total(), 3.0);
        assert_eq!(format_units(targets.total()), "3.0");
    }

    #[test]
    fn test_values_are_snapped_and_clamped() {
        assert_eq!(snap_units(-3.0), 0.0);
        assert_eq!(snap_units(f64::NAN), 0.0);
        assert_eq!(snap_units(1.3), 1.5);
        assert_eq!(snap_units(1.2), 1.0);
        assert_eq!(parse_units(" 2.5 "), 2.5);
        assert_eq!(parse_units("abc"), 0.0);
        assert_eq!(parse_units(""), 0.0);
    }

    #[test]
    fn test_partial_json_is_fully_populated() {
        let targets: DailyTargets = serde_json::from_str(r#"{"monday": 1.5}"#).unwrap();
        assert_eq!(targets.monday, 1.5);
        assert_eq!(targets.sunday, 0.0);

        let json = serde_json::to_value(DailyTargets::zero()).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 7);
    }
}
