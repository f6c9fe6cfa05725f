// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for creating events through the planner.

use std::collections::BTreeSet;

use dayplan_core::{Error, Recurrence, ValidationError, WEEKLY_OCCURRENCES};

use crate::common::{FakeStore, StoreCall, test_draft, test_planner, utc};

#[tokio::test]
async fn create_single_event_goes_through_single_insert() {
    // Arrange
    let planner = test_planner(FakeStore::default());
    let draft = test_draft(
        "Dentist",
        "2024-06-12T09:00:00Z",
        "2024-06-12T10:00:00Z",
        Recurrence::None,
    );

    // Act
    let created = planner.create_event(draft.clone()).await.unwrap();

    // Assert
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id.as_deref(), Some("fake-1"));
    assert_eq!(created[0].title, "Dentist");
    assert_eq!(
        planner.store().calls(),
        [StoreCall::Create(draft.to_event())]
    );
}

#[tokio::test]
async fn create_weekly_submits_one_batch_of_sixteen() {
    // Arrange
    let planner = test_planner(FakeStore::default());
    let draft = test_draft(
        "Gym",
        "2024-06-12T17:00:00Z",
        "2024-06-12T19:00:00Z",
        Recurrence::Weekly,
    );

    // Act
    let created = planner.create_event(draft).await.unwrap();

    // Assert
    assert_eq!(created.len() as i64, WEEKLY_OCCURRENCES);
    assert_eq!(created[1].start, utc("2024-06-19T17:00:00Z"));
    assert_eq!(created[1].end, utc("2024-06-19T19:00:00Z"));
    assert_eq!(created[15].start, utc("2024-09-25T17:00:00Z"));

    let calls = planner.store().calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        StoreCall::CreateMany(batch) => assert_eq!(batch, &created),
        other => panic!("expected a bulk insert, got {other:?}"),
    }
    assert_eq!(planner.store().events().len(), 16);
}

#[tokio::test]
async fn create_daily_and_monthly_are_single_events() {
    // Arrange
    let planner = test_planner(FakeStore::default());
    let monthly = Recurrence::Monthly {
        days_of_month: BTreeSet::from([1, 15]),
    };

    // Act
    for recurrence in [Recurrence::Daily, monthly] {
        let draft = test_draft(
            "Review",
            "2024-06-12T09:00:00Z",
            "2024-06-12T09:30:00Z",
            recurrence,
        );
        let created = planner.create_event(draft).await.unwrap();
        assert_eq!(created.len(), 1);
    }

    // Assert
    let calls = planner.store().calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| matches!(c, StoreCall::Create(_))));
}

#[tokio::test]
async fn create_reports_partial_bulk_failure() {
    // Arrange
    let planner = test_planner(FakeStore::dropping(3));
    let draft = test_draft(
        "Gym",
        "2024-06-12T17:00:00Z",
        "2024-06-12T19:00:00Z",
        Recurrence::Weekly,
    );

    // Act
    let result = planner.create_event(draft).await;

    // Assert
    assert!(matches!(
        result,
        Err(Error::PartialBulkFailure {
            expected: 16,
            created: 13
        })
    ));
}

#[tokio::test]
async fn create_rejects_invalid_drafts_before_the_store() {
    // Arrange
    let planner = test_planner(FakeStore::default());
    let mut backwards = test_draft(
        "Backwards",
        "2024-06-12T10:00:00Z",
        "2024-06-12T09:00:00Z",
        Recurrence::Weekly,
    );
    let mut orphan = test_draft(
        "Orphan",
        "2024-06-12T09:00:00Z",
        "2024-06-12T10:00:00Z",
        Recurrence::None,
    );
    orphan.owner_id = String::new();
    let mut painted = orphan.clone();
    painted.owner_id = "user-1".to_string();
    painted.color = Some("red".to_string());

    // Act
    let backwards_result = planner.create_event(backwards.clone()).await;
    backwards.end = backwards.start.clone();
    let zero_result = planner.create_event(backwards).await;
    let orphan_result = planner.create_event(orphan).await;
    let painted_result = planner.create_event(painted).await;

    // Assert
    assert!(matches!(
        backwards_result,
        Err(Error::Validation(ValidationError::EndNotAfterStart { .. }))
    ));
    assert!(matches!(
        zero_result,
        Err(Error::Validation(ValidationError::EndNotAfterStart { .. }))
    ));
    assert!(matches!(
        orphan_result,
        Err(Error::Validation(ValidationError::MissingOwner))
    ));
    assert!(matches!(
        painted_result,
        Err(Error::Validation(ValidationError::InvalidColor(_)))
    ));
    assert!(planner.store().calls().is_empty());
}

#[tokio::test]
async fn created_occurrences_can_be_appended_to_the_caller_list() {
    // Arrange
    let planner = test_planner(FakeStore::default());
    let mut shown = planner.load_events("user-1").await.unwrap();
    let draft = test_draft(
        "Gym",
        "2024-06-12T17:00:00Z",
        "2024-06-12T19:00:00Z",
        Recurrence::Weekly,
    );

    // Act
    shown.extend(planner.create_event(draft).await.unwrap());
    let schedule = planner.day_schedule(jiff::civil::date(2024, 6, 19), &shown);

    // Assert
    assert_eq!(schedule.placed(), 1);
    let row = schedule
        .rows
        .iter()
        .find(|r| r.slot.key() == "17:00")
        .unwrap();
    assert_eq!(row.events[0].title, "Gym");
}
