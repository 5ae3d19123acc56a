//! Horizontal timeline layout.
//!
//! Visits are drawn on a fixed 08:00–20:00 axis. A visit's block starts at
//! `(start − 08:00) / 720 min` and is `duration / 720 min` wide, both as
//! percentages. Nothing is clamped: a visit before opening gets a negative
//! offset and one running past closing extends beyond 100%. Clipping is a
//! rendering concern.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};

use super::error::SalonError;
use super::models::{format_time, parse_time, LogicalAppointment};

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePosition {
    pub left_percent: f64,
    pub width_percent: f64,
}

/// One visit placed on the axis
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSlot {
    pub visit: LogicalAppointment,
    pub position: TimelinePosition,
    pub end_time: NaiveTime,
}

/// The displayed range of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineWindow {
    pub start_hour: u32,
    pub hours: u32,
}

impl Default for TimelineWindow {
    fn default() -> Self {
        Self { start_hour: 8, hours: 12 }
    }
}

impl TimelineWindow {
    fn start_minutes(&self) -> i64 {
        i64::from(self.start_hour) * 60
    }

    fn length_minutes(&self) -> f64 {
        f64::from(self.hours * 60)
    }

    /// Left offset and width of a block, as unclamped percentages of the window
    pub fn position(&self, start: NaiveTime, duration: u32) -> TimelinePosition {
        let start_minutes = i64::from(minutes_since_midnight(start));
        let length = self.length_minutes();

        TimelinePosition {
            left_percent: (start_minutes - self.start_minutes()) as f64 / length * 100.0,
            width_percent: f64::from(duration) / length * 100.0,
        }
    }

    /// Same as [`position`](Self::position) for an `HH:MM` string
    pub fn position_for(&self, start: &str, duration: u32) -> Result<TimelinePosition, SalonError> {
        Ok(self.position(parse_time(start)?, duration))
    }

    /// Labels for the hour lines: `08:00` up to the last full hour before closing
    pub fn hour_markers(&self) -> Vec<String> {
        (self.start_hour..self.start_hour + self.hours)
            .map(|hour| format!("{:02}:00", hour % 24))
            .collect()
    }

    /// Lay out the visits that fall on `date`, keeping their order
    pub fn layout_day(&self, date: NaiveDate, visits: &[LogicalAppointment]) -> Vec<TimelineSlot> {
        visits
            .iter()
            .filter(|visit| visit.date == date)
            .map(|visit| TimelineSlot {
                visit: visit.clone(),
                position: self.position(visit.time, visit.duration),
                end_time: end_time(visit.time, visit.duration),
            })
            .collect()
    }
}

pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Start plus duration, wrapping past midnight
pub fn end_time(start: NaiveTime, duration: u32) -> NaiveTime {
    // NaiveTime addition wraps around midnight
    start + Duration::minutes(i64::from(duration % MINUTES_PER_DAY))
}

/// `HH:MM` end time for an `HH:MM` start
pub fn end_time_for(start: &str, duration: u32) -> Result<String, SalonError> {
    Ok(format_time(end_time(parse_time(start)?, duration)))
}
