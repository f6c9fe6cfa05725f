// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::{Color, Colorize};
use dayplan_core::{DaySchedule, SlotRow};

use crate::event_formatter::parse_hex_color;
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};
use crate::util::ArgOutputFormat;

/// Renders a day as one `label | titles` row per slot.
#[derive(Debug)]
pub struct ScheduleFormatter {
    format: ArgOutputFormat,
}

impl ScheduleFormatter {
    pub fn new() -> Self {
        Self {
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, schedule: &'a DaySchedule<'a>) -> Display<'a> {
        Display {
            schedule,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    schedule: &'a DaySchedule<'a>,
    formatter: &'a ScheduleFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(self.schedule).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                let columns = [SlotColumn::Label, SlotColumn::Titles];
                let style = TableStyleBasic::new().with_separator(" | ");
                write!(f, "{}", Table::new(style, &columns, &self.schedule.rows))?;

                let outside = &self.schedule.outside_grid;
                if !outside.is_empty() {
                    let titles: Vec<_> = outside.iter().map(|e| e.title.as_str()).collect();
                    let note = format!(
                        "{} event(s) outside the grid: {}",
                        outside.len(),
                        titles.join(", ")
                    );
                    write!(f, "\n\n{}", note.yellow())?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SlotColumn {
    Label,
    Titles,
}

impl<'e> TableColumn<SlotRow<'e>> for SlotColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SlotColumn::Label => "Time",
            SlotColumn::Titles => "Events",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a SlotRow<'e>) -> Cow<'a, str> {
        match self {
            SlotColumn::Label => row.slot.label().into(),
            SlotColumn::Titles => row
                .events
                .iter()
                .map(|e| e.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
                .into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            SlotColumn::Label => PaddingDirection::Right,
            SlotColumn::Titles => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &SlotRow<'e>) -> Option<Color> {
        match self {
            // The first event decides the color of a shared slot
            SlotColumn::Titles => row
                .events
                .first()
                .and_then(|e| e.color.as_deref())
                .and_then(parse_hex_color),
            SlotColumn::Label => None,
        }
    }
}
