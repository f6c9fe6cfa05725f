// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use tokio::fs;

use crate::localdb::LocalDb;
use crate::{
    Config, DaySchedule, Error, Event, EventDraft, EventStore, TimeGrid, expand, match_slots,
};

/// Day planner core, tying the store to expansion and slot matching.
///
/// The planner keeps no list of events. Callers own the list they display and
/// append the occurrences returned by [`Planner::create_event`], or reload it
/// with [`Planner::load_events`].
#[derive(Debug, Clone)]
pub struct Planner<S: EventStore = LocalDb> {
    store: S,
    grid: TimeGrid,
    tz: TimeZone,
}

impl Planner<LocalDb> {
    /// Opens the planner on the sqlite store described by the configuration.
    pub async fn open(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;
        let grid = config.time_grid()?;
        let tz = config.time_zone()?;
        prepare(&config).await?;

        let db = LocalDb::open(config.state_dir.as_deref()).await?;
        Ok(Self::new(db, grid, tz))
    }

    /// Closes the underlying database.
    pub async fn close(self) -> Result<(), Error> {
        self.store.close().await
    }
}

impl<S: EventStore> Planner<S> {
    /// Creates a planner over any event store.
    pub fn new(store: S, grid: TimeGrid, tz: TimeZone) -> Self {
        Self { store, grid, tz }
    }

    /// The current time in the viewer's time zone.
    pub fn now(&self) -> Zoned {
        Zoned::now().with_time_zone(self.tz.clone())
    }

    /// Today's date in the viewer's time zone.
    pub fn today(&self) -> Date {
        self.now().date()
    }

    /// The grid days are displayed in.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// The viewer's time zone.
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// The store events are persisted in.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// A one hour draft for the owner, starting at the next half hour.
    pub fn default_event_draft(&self, owner_id: &str) -> Result<EventDraft, Error> {
        EventDraft::starting_next_slot(&self.now(), owner_id)
    }

    /// Loads every event of the owner.
    ///
    /// Fails with [`Error::Fetch`] when the store returns no result. An owner
    /// without events yields an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn load_events(&self, owner_id: &str) -> Result<Vec<Event>, Error> {
        match self.store.list_events(owner_id).await? {
            Some(events) => {
                tracing::debug!(count = events.len(), "loaded events");
                Ok(events)
            }
            None => {
                tracing::warn!("store returned no result");
                Err(Error::Fetch)
            }
        }
    }

    /// Validates, expands and persists a draft.
    ///
    /// Returns the created occurrences in chronological order. A single event
    /// carries the id assigned by the store, occurrences of a bulk insert do
    /// not, since the store only reports how many were created.
    #[tracing::instrument(skip_all, fields(title = %draft.title, recurrence = %draft.recurrence.kind()))]
    pub async fn create_event(&self, draft: EventDraft) -> Result<Vec<Event>, Error> {
        draft.validate()?;
        let mut events = expand(&draft)?;

        if events.len() == 1 {
            let created = self.store.create_event(events.remove(0)).await?;
            tracing::info!(id = created.id.as_deref().unwrap_or_default(), "created event");
            return Ok(vec![created]);
        }

        let expected = events.len() as u64;
        let created = self.store.create_events(events.clone()).await?;
        if created != expected {
            tracing::warn!(expected, created, "bulk insert created fewer events");
            return Err(Error::PartialBulkFailure { expected, created });
        }

        tracing::info!(count = created, "created recurring events");
        Ok(events)
    }

    /// Places the events into the grid for the date, seen in the viewer's zone.
    pub fn day_schedule<'a>(&self, date: Date, events: &'a [Event]) -> DaySchedule<'a> {
        match_slots(date, &self.tz, events, &self.grid)
    }
}

async fn prepare(config: &Config) -> Result<(), Error> {
    if let Some(parent) = &config.state_dir {
        tracing::debug!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent).await.map_err(|e| {
            Error::Config(format!(
                "Failed to create state directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}
