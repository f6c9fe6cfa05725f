// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime, Time};
use jiff::{ToSpan, Zoned};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

/// Parses `YYYY-MM-DD HH:MM`, or `HH:MM` for today, in the zone of `now`.
pub fn parse_datetime(now: &Zoned, dt: &str) -> Result<Zoned, String> {
    let dt = dt.trim();
    if let Ok(dt) = DateTime::strptime(DATETIME_FORMAT, dt) {
        to_zoned(now, dt)
    } else if let Ok(time) = Time::strptime(TIME_FORMAT, dt) {
        // If the input is just a time, we assume it's today
        to_zoned(now, now.date().to_datetime(time))
    } else {
        Err(format!(
            "Invalid date format '{dt}'. Expected format: YYYY-MM-DD HH:MM or HH:MM"
        ))
    }
}

/// Parses a start and an end, where a bare `HH:MM` end falls on the start day,
/// or the next day if it is earlier than the start time.
///
/// NOTE: Don't assert that the start is before the end, the planner validates that.
pub fn parse_datetime_range(now: &Zoned, start: &str, end: &str) -> Result<(Zoned, Zoned), String> {
    let start = parse_datetime(now, start)?;
    let end = end.trim();
    if let Ok(time) = Time::strptime(TIME_FORMAT, end) {
        let delta = if start.time() <= time { 0 } else { 1 };
        let date = start
            .date()
            .checked_add(delta.days())
            .map_err(|e| format!("Invalid end date: {e}"))?;
        let end = to_zoned(&start, date.to_datetime(time))?;
        Ok((start, end))
    } else {
        let end = parse_datetime(now, end)?;
        Ok((start, end))
    }
}

/// Parses a display date as `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday`.
pub fn parse_date(today: Date, date: &str) -> Result<Date, String> {
    let date = date.trim();
    let offset = match date {
        "today" => Some(0),
        "tomorrow" => Some(1),
        "yesterday" => Some(-1),
        _ => None,
    };
    match offset {
        Some(days) => today
            .checked_add(days.days())
            .map_err(|e| format!("Invalid date: {e}")),
        None => Date::strptime(DATE_FORMAT, date).map_err(|_| {
            format!("Invalid date '{date}'. Expected format: YYYY-MM-DD, today, tomorrow or yesterday")
        }),
    }
}

pub fn format_datetime(dt: &Zoned) -> String {
    dt.strftime(DATETIME_FORMAT).to_string()
}

/// Formats a time span, omitting the end date when it matches the start date.
pub fn format_time_span(start: &Zoned, end: &Zoned) -> String {
    if start.date() == end.date() {
        format!(
            "{}~{}",
            start.strftime(DATETIME_FORMAT),
            end.strftime(TIME_FORMAT)
        )
    } else {
        format!(
            "{}~{}",
            start.strftime(DATETIME_FORMAT),
            end.strftime(DATETIME_FORMAT)
        )
    }
}

fn to_zoned(now: &Zoned, dt: DateTime) -> Result<Zoned, String> {
    dt.to_zoned(now.time_zone().clone())
        .map_err(|e| format!("Invalid local time {dt}: {e}"))
}
