// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{Error, Event};

/// Gateway to wherever events are persisted.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events owned by the user, unfiltered by date, in insertion order.
    ///
    /// Returns `Ok(None)` when the backend produced no result at all, which is
    /// different from a user without events.
    async fn list_events(&self, owner_id: &str) -> Result<Option<Vec<Event>>, Error>;

    /// Inserts a single event and returns it with its assigned id.
    async fn create_event(&self, event: Event) -> Result<Event, Error>;

    /// Inserts a batch of events, returning the number of records created.
    async fn create_events(&self, events: Vec<Event>) -> Result<u64, Error>;
}
