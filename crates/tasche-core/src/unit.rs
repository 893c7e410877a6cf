//! Unit Duration
//!
//! The atomic time block every target and actual is counted in.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum UnitDuration {
    TenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoHours,
}

impl UnitDuration {
    pub const ALL: [UnitDuration; 4] = [
        UnitDuration::TenMinutes,
        UnitDuration::ThirtyMinutes,
        UnitDuration::OneHour,
        UnitDuration::TwoHours,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            UnitDuration::TenMinutes => 10,
            UnitDuration::ThirtyMinutes => 30,
            UnitDuration::OneHour => 60,
            UnitDuration::TwoHours => 120,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UnitDuration::TenMinutes => "10分",
            UnitDuration::ThirtyMinutes => "30分",
            UnitDuration::OneHour => "1時間",
            UnitDuration::TwoHours => "2時間",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UnitDuration::TenMinutes => "For short tasks",
            UnitDuration::ThirtyMinutes => "Standard work block",
            UnitDuration::OneHour => "Focused session",
            UnitDuration::TwoHours => "Deep work",
        }
    }
}

impl TryFrom<u32> for UnitDuration {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        UnitDuration::ALL
            .into_iter()
            .find(|unit| unit.minutes() == minutes)
            .ok_or_else(|| format!("unsupported unit duration: {} minutes", minutes))
    }
}

impl From<UnitDuration> for u32 {
    fn from(unit: UnitDuration) -> u32 {
        unit.minutes()
    }
}
