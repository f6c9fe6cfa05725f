// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors produced by the planner core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store returned no result when listing events.
    #[error("Failed to fetch events")]
    Fetch,

    /// The draft was rejected before reaching the store.
    #[error("Invalid event: {0}")]
    Validation(#[from] ValidationError),

    /// A bulk insert created fewer records than were submitted.
    #[error("Bulk insert created {created} of {expected} events")]
    PartialBulkFailure {
        /// Number of events submitted in the batch
        expected: u64,
        /// Number of events the store reported as created
        created: u64,
    },

    /// Date arithmetic left the supported civil range.
    #[error("Date out of range: {0}")]
    DateOutOfRange(#[source] jiff::Error),

    /// The time grid bounds are not usable.
    #[error("Invalid time grid: {0}")]
    InvalidGrid(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to migrate the database schema.
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Reasons a draft is rejected at the create boundary.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The owner identifier is empty or blank.
    #[error("owner is required")]
    MissingOwner,

    /// The end is not strictly after the start.
    #[error("end ({end}) must be after start ({start})")]
    EndNotAfterStart {
        /// The start as given
        start: String,
        /// The end as given
        end: String,
    },

    /// The color is not a `#rrggbb` hex string.
    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
}
