// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use dayplan_core::{Config, Event, EventDraft, Planner, Recurrence, TimeGrid};

use crate::common::FakeStore;

/// Parses an RFC 3339 instant into a UTC zoned datetime.
///
/// # Example
///
/// ```ignore
/// let start = utc("2024-06-12T17:00:00Z");
/// ```
#[must_use]
pub fn utc(s: &str) -> Zoned {
    s.parse::<Timestamp>()
        .expect("valid RFC 3339 instant")
        .to_zoned(TimeZone::UTC)
}

/// Creates a draft owned by `user-1`.
///
/// # Arguments
///
/// * `title` - Title of the draft
/// * `start` - RFC 3339 start instant
/// * `end` - RFC 3339 end instant
/// * `recurrence` - How the draft repeats
#[must_use]
pub fn test_draft(title: &str, start: &str, end: &str, recurrence: Recurrence) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        start: utc(start),
        end: utc(end),
        owner_id: "user-1".to_string(),
        color: Some("#2196f3".to_string()),
        recurrence,
    }
}

/// Creates a persisted one hour event owned by `user-1`.
#[must_use]
pub fn test_event(id: &str, title: &str, start: &str) -> Event {
    let start = utc(start);
    Event {
        id: Some(id.to_string()),
        title: title.to_string(),
        end: start.checked_add(jiff::Span::new().hours(1)).expect("in range"),
        start,
        owner_id: "user-1".to_string(),
        color: None,
    }
}

/// Creates a planner over the store, using the default grid and UTC.
#[must_use]
pub fn test_planner(store: FakeStore) -> Planner<FakeStore> {
    Planner::new(store, TimeGrid::default(), TimeZone::UTC)
}

/// Creates a configuration for `user-1` stored under `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        timezone: Some("UTC".to_string()),
        ..Config::new("user-1")
    }
}
