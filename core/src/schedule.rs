// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::{Event, TimeGrid, TimeSlot};

/// The events of one day, placed into the slots of a grid.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DaySchedule<'a> {
    /// The displayed date.
    pub date: Date,

    /// One row per grid slot, in display order.
    pub rows: Vec<SlotRow<'a>>,

    /// Events on the displayed date that start outside the grid.
    pub outside_grid: Vec<&'a Event>,
}

/// A grid slot and the events starting in it, in input order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SlotRow<'a> {
    /// The slot of this row.
    pub slot: TimeSlot,

    /// Events starting within the slot.
    pub events: Vec<&'a Event>,
}

impl DaySchedule<'_> {
    /// Number of events placed into a slot.
    pub fn placed(&self) -> usize {
        self.rows.iter().map(|row| row.events.len()).sum()
    }
}

/// Places each event into the slot its start falls in.
///
/// An event belongs to `date` when its start, seen in `tz`, falls on that date.
/// Only the start is considered, so an event spanning several slots is listed
/// once, in its first slot.
pub fn match_slots<'a>(
    date: Date,
    tz: &TimeZone,
    events: &'a [Event],
    grid: &TimeGrid,
) -> DaySchedule<'a> {
    let mut rows: Vec<SlotRow<'a>> = grid
        .slots()
        .map(|slot| SlotRow {
            slot,
            events: Vec::new(),
        })
        .collect();
    let mut outside_grid = Vec::new();

    for event in events {
        let start = event.start.with_time_zone(tz.clone());
        if start.date() != date {
            continue;
        }

        let slot = TimeSlot::containing(start.time());
        match grid.position(slot).and_then(|i| rows.get_mut(i)) {
            Some(row) => row.events.push(event),
            None => {
                tracing::debug!(title = %event.title, %slot, "event starts outside the grid");
                outside_grid.push(event);
            }
        }
    }

    DaySchedule {
        date,
        rows,
        outside_grid,
    }
}
