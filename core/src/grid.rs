// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The half-hour grid a displayed day is divided into.

use std::fmt::{self, Display};

use jiff::civil::Time;

use crate::Error;

/// Width of a slot, in minutes.
pub const SLOT_MINUTES: i16 = 30;

const MINUTES_PER_DAY: i16 = 24 * 60;

/// A half-hour interval of a day, identified by its start time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TimeSlot {
    hour: i8,
    minute: i8,
}

impl TimeSlot {
    /// The slot starting at the given time, if it is half-hour aligned.
    pub fn new(hour: i8, minute: i8) -> Option<Self> {
        let aligned = (0..24).contains(&hour) && (minute == 0 || minute == 30);
        aligned.then_some(Self { hour, minute })
    }

    /// The slot containing the given time of day, flooring to the half hour.
    pub fn containing(time: Time) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute() / 30 * 30,
        }
    }

    /// The hour of the slot start, 0 to 23.
    pub fn hour(&self) -> i8 {
        self.hour
    }

    /// The minute of the slot start, either 0 or 30.
    pub fn minute(&self) -> i8 {
        self.minute
    }

    /// The start time of the slot.
    pub fn start(&self) -> Time {
        Time::constant(self.hour, self.minute, 0, 0)
    }

    /// The 24-hour matching key, e.g. `17:30`.
    pub fn key(&self) -> String {
        format!("{}:{:02}", self.hour, self.minute)
    }

    /// The 12-hour display label, e.g. `5:30 PM`.
    pub fn label(&self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        format!("{}:{:02} {}", hour, self.minute, meridiem)
    }

    fn minutes_of_day(&self) -> i16 {
        i16::from(self.hour) * 60 + i16::from(self.minute)
    }

    fn from_minutes_of_day(minutes: i16) -> Self {
        let minutes = minutes.rem_euclid(MINUTES_PER_DAY);
        Self {
            hour: (minutes / 60) as i8,
            minute: (minutes % 60) as i8,
        }
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// The ordered slots of a displayed day, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    first: TimeSlot,
    last: TimeSlot,
}

impl Default for TimeGrid {
    /// 07:00 to 20:00, 27 slots.
    fn default() -> Self {
        Self {
            first: TimeSlot { hour: 7, minute: 0 },
            last: TimeSlot {
                hour: 20,
                minute: 0,
            },
        }
    }
}

impl TimeGrid {
    /// Creates a grid from its first to its last slot start.
    pub fn new(start: Time, end: Time) -> Result<Self, Error> {
        let first = aligned_slot(start)?;
        let last = aligned_slot(end)?;
        if first > last {
            return Err(Error::InvalidGrid(format!(
                "start {first} is after end {last}"
            )));
        }
        Ok(Self { first, last })
    }

    /// The first slot of the grid.
    pub fn first(&self) -> TimeSlot {
        self.first
    }

    /// The last slot of the grid.
    pub fn last(&self) -> TimeSlot {
        self.last
    }

    /// Number of slots in the grid.
    pub fn len(&self) -> usize {
        let span = self.last.minutes_of_day() - self.first.minutes_of_day();
        (span / SLOT_MINUTES) as usize + 1
    }

    /// A grid always holds at least one slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of the slot within the grid, if it is shown.
    pub fn position(&self, slot: TimeSlot) -> Option<usize> {
        (self.first..=self.last)
            .contains(&slot)
            .then(|| ((slot.minutes_of_day() - self.first.minutes_of_day()) / SLOT_MINUTES) as usize)
    }

    /// The slots in display order.
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> + use<> {
        let first = self.first.minutes_of_day();
        (0..self.len()).map(move |i| {
            TimeSlot::from_minutes_of_day(first + (i as i16) * SLOT_MINUTES)
        })
    }
}

fn aligned_slot(time: Time) -> Result<TimeSlot, Error> {
    if time.second() != 0 || time.subsec_nanosecond() != 0 {
        return Err(Error::InvalidGrid(format!(
            "{time} is not on a minute boundary"
        )));
    }
    TimeSlot::new(time.hour(), time.minute())
        .ok_or_else(|| Error::InvalidGrid(format!("{time} is not on a half-hour boundary")))
}
