// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A scriptable event store that records every call it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use dayplan_core::{Error, Event, EventStore};

/// A call received by [`FakeStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List(String),
    Create(Event),
    CreateMany(Vec<Event>),
}

/// In-memory store with scripted failure modes.
#[derive(Debug, Default)]
pub struct FakeStore {
    events: Mutex<Vec<Event>>,
    calls: Mutex<Vec<StoreCall>>,

    /// When set, listing returns no result.
    pub no_result: bool,

    /// Number of records a bulk insert silently drops.
    pub bulk_shortfall: u64,
}

impl FakeStore {
    /// Creates a store preloaded with events.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    /// Creates a store whose list call returns no result.
    pub fn returning_no_result() -> Self {
        Self {
            no_result: true,
            ..Self::default()
        }
    }

    /// Creates a store whose bulk insert reports `shortfall` fewer records.
    pub fn dropping(shortfall: u64) -> Self {
        Self {
            bulk_shortfall: shortfall,
            ..Self::default()
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Every event currently held.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EventStore for FakeStore {
    async fn list_events(&self, owner_id: &str) -> Result<Option<Vec<Event>>, Error> {
        self.record(StoreCall::List(owner_id.to_string()));
        if self.no_result {
            return Ok(None);
        }

        let events = self.events.lock().unwrap();
        Ok(Some(
            events
                .iter()
                .filter(|e| e.owner_id == owner_id)
                .cloned()
                .collect(),
        ))
    }

    async fn create_event(&self, event: Event) -> Result<Event, Error> {
        self.record(StoreCall::Create(event.clone()));
        let mut events = self.events.lock().unwrap();
        let created = Event {
            id: Some(format!("fake-{}", events.len() + 1)),
            ..event
        };
        events.push(created.clone());
        Ok(created)
    }

    async fn create_events(&self, batch: Vec<Event>) -> Result<u64, Error> {
        self.record(StoreCall::CreateMany(batch.clone()));
        let keep = batch.len().saturating_sub(self.bulk_shortfall as usize);
        let mut events = self.events.lock().unwrap();
        for event in batch.into_iter().take(keep) {
            let id = format!("fake-{}", events.len() + 1);
            events.push(Event {
                id: Some(id),
                ..event
            });
        }
        Ok(keep as u64)
    }
}
