// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use sqlx::SqlitePool;

use crate::Event;

#[derive(Debug, Clone)]
pub struct Events {
    pool: SqlitePool,
}

impl Events {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, event: &EventRecord) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO events (id, owner_id, title, start_at, end_at, color)
VALUES (?, ?, ?, ?, ?, ?);
";

        let result = sqlx::query(SQL)
            .bind(&event.id)
            .bind(&event.owner_id)
            .bind(&event.title)
            .bind(&event.start_at)
            .bind(&event.end_at)
            .bind(&event.color)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Inserts all records in a single transaction, nothing is kept on failure.
    pub async fn insert_all(&self, events: &[EventRecord]) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO events (id, owner_id, title, start_at, end_at, color)
VALUES (?, ?, ?, ?, ?, ?);
";

        let mut tx = self.pool.begin().await?;
        let mut affected = 0;
        for event in events {
            affected += sqlx::query(SQL)
                .bind(&event.id)
                .bind(&event.owner_id)
                .bind(&event.title)
                .bind(&event.start_at)
                .bind(&event.end_at)
                .bind(&event.color)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;

        Ok(affected)
    }

    pub async fn get(&self, id: &str) -> Result<Option<EventRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, owner_id, title, start_at, end_at, color
FROM events
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Events of the owner, in insertion order.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<EventRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, owner_id, title, start_at, end_at, color
FROM events
WHERE owner_id = ?
ORDER BY rowid ASC;
";

        sqlx::query_as(SQL)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM events;";

        let row: (i64,) = sqlx::query_as(SQL).fetch_one(&self.pool).await?;
        Ok(row.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EventRecord {
    id: String,
    owner_id: String,
    title: String,
    start_at: String,
    end_at: String,
    color: Option<String>,
}

impl EventRecord {
    /// Builds a record under the given id, ignoring any id on the event.
    pub fn from_event(id: &str, event: &Event) -> Self {
        Self {
            id: id.to_string(),
            owner_id: event.owner_id.clone(),
            title: event.title.clone(),
            start_at: event.start.to_string(),
            end_at: event.end.to_string(),
            color: event.color.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = sqlx::Error;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        Ok(Event {
            start: parse_zoned(&record.start_at)?,
            end: parse_zoned(&record.end_at)?,
            id: Some(record.id),
            title: record.title,
            owner_id: record.owner_id,
            color: record.color,
        })
    }
}

fn parse_zoned(s: &str) -> Result<Zoned, sqlx::Error> {
    s.parse::<Zoned>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
