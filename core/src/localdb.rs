// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod events;


use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use crate::localdb::events::{EventRecord, Events};
use crate::{Error, Event, EventStore};

/// File name of the database inside the state directory.
pub const DB_FILENAME: &str = "dayplan.db";

/// Each in-memory database gets its own shared-cache name, so every pooled
/// connection sees the same data while separate instances stay isolated.
static IN_MEMORY_DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Event store backed by a sqlite database.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    events: Events,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `state_dir` is `None`, it opens an in-memory database.
    pub async fn open(state_dir: Option<&Path>) -> Result<Self, Error> {
        let options = if let Some(dir) = state_dir {
            let filename = dir.join(DB_FILENAME);
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
        } else {
            let db_id = IN_MEMORY_DB_COUNTER.fetch_add(1, Ordering::SeqCst);
            tracing::info!(db_id, "connecting to in-memory SQLite database");
            SqliteConnectOptions::new()
                .filename(format!("file:memdb_{db_id}:?mode=memory&cache=shared"))
                .in_memory(true)
                .shared_cache(true)
                .create_if_missing(true)
        };

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        tracing::debug!("running database migrations");
        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        let events = Events::new(pool.clone());
        Ok(LocalDb { pool, events })
    }

    pub async fn close(self) -> Result<(), Error> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl EventStore for LocalDb {
    async fn list_events(&self, owner_id: &str) -> Result<Option<Vec<Event>>, Error> {
        let records = self.events.list_by_owner(owner_id).await?;
        tracing::debug!(owner_id, count = records.len(), "loaded events");

        let events = records
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(events))
    }

    async fn create_event(&self, event: Event) -> Result<Event, Error> {
        let id = Uuid::new_v4().to_string();
        let record = EventRecord::from_event(&id, &event);
        self.events.insert(&record).await?;
        tracing::debug!(id = %id, "created event");

        Ok(Event {
            id: Some(id),
            ..event
        })
    }

    async fn create_events(&self, events: Vec<Event>) -> Result<u64, Error> {
        let records: Vec<_> = events
            .iter()
            .map(|event| EventRecord::from_event(&Uuid::new_v4().to_string(), event))
            .collect();
        let created = self.events.insert_all(&records).await?;
        tracing::debug!(expected = records.len(), created, "created events in bulk");
        Ok(created)
    }
}
