// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for displaying a day through the planner.

use jiff::civil;
use jiff::tz::TimeZone;

use dayplan_core::{Planner, TimeGrid};

use crate::common::{FakeStore, test_event, test_planner};

#[tokio::test]
async fn day_schedule_shows_only_the_selected_date() {
    // Arrange
    let store = FakeStore::with_events(vec![
        test_event("1", "Tuesday", "2024-06-18T20:00:00Z"),
        test_event("2", "Thursday", "2024-06-20T20:00:00Z"),
    ]);
    let planner = test_planner(store);
    let events = planner.load_events("user-1").await.unwrap();

    // Act
    let schedule = planner.day_schedule(civil::date(2024, 6, 18), &events);

    // Assert
    let placed: Vec<_> = schedule
        .rows
        .iter()
        .flat_map(|r| r.events.iter().map(move |e| (r.slot.label(), e.title.as_str())))
        .collect();
    assert_eq!(placed, [("8:00 PM".to_string(), "Tuesday")]);
}

#[tokio::test]
async fn day_schedule_floors_into_the_containing_slot() {
    // Arrange
    let store = FakeStore::with_events(vec![test_event("1", "Call", "2024-06-18T17:15:00Z")]);
    let planner = test_planner(store);
    let events = planner.load_events("user-1").await.unwrap();

    // Act
    let schedule = planner.day_schedule(civil::date(2024, 6, 18), &events);

    // Assert
    let row = schedule
        .rows
        .iter()
        .find(|r| !r.events.is_empty())
        .unwrap();
    assert_eq!(row.slot.key(), "17:00");
}

#[tokio::test]
async fn day_schedule_uses_the_planner_grid_and_zone() {
    // Arrange
    let store = FakeStore::with_events(vec![test_event("1", "Standup", "2024-06-18T13:30:00Z")]);
    let grid = TimeGrid::new(civil::time(8, 0, 0, 0), civil::time(12, 0, 0, 0)).unwrap();
    let planner = Planner::new(store, grid, TimeZone::fixed(jiff::tz::offset(-4)));
    let events = planner.load_events("user-1").await.unwrap();

    // Act
    let schedule = planner.day_schedule(civil::date(2024, 6, 18), &events);

    // Assert
    assert_eq!(schedule.rows.len(), 9);
    let row = schedule
        .rows
        .iter()
        .find(|r| !r.events.is_empty())
        .unwrap();
    assert_eq!(row.slot.key(), "9:30");
}
