// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::Color;
use dayplan_core::Event;
use jiff::tz::TimeZone;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{ArgOutputFormat, format_time_span};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new(tz: TimeZone) -> Self {
        Self {
            columns: vec![
                EventColumn::TimeSpan(tz),
                EventColumn::Title,
                EventColumn::Id,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.events)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new().with_header(true), columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    /// Start and end, seen in the viewer's time zone
    TimeSpan(TimeZone),
    Title,
    Id,
}

impl TableColumn<Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::TimeSpan(_) => "Time",
            EventColumn::Title => "Title",
            EventColumn::Id => "ID",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            EventColumn::TimeSpan(tz) => format_time_span(
                &event.start.with_time_zone(tz.clone()),
                &event.end.with_time_zone(tz.clone()),
            )
            .into(),
            EventColumn::Title => event.title.as_str().into(),
            EventColumn::Id => event.id.as_deref().unwrap_or("-").into(),
        }
    }

    fn color(&self, event: &Event) -> Option<Color> {
        match self {
            EventColumn::Title => event.color.as_deref().and_then(parse_hex_color),
            _ => None,
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}

/// Parses `#rrggbb` into a true color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#').filter(|h| h.len() == 6)?;
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
