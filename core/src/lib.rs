// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of dayplan, a half-hour day planner.
//!
//! Drafts are validated and expanded into concrete events by the recurrence
//! expander, persisted through an [`EventStore`], and placed into the slots of
//! a [`TimeGrid`] when a day is displayed.

mod config;
mod error;
mod event;
mod grid;
mod localdb;
mod planner;
mod recurrence;
mod schedule;
mod store;

pub use crate::config::{APP_NAME, Config, ConfigTime, GridConfig, expand_path, get_config_dir};
pub use crate::error::{Error, ValidationError};
pub use crate::event::{Event, EventDraft};
pub use crate::grid::{SLOT_MINUTES, TimeGrid, TimeSlot};
pub use crate::localdb::{DB_FILENAME, LocalDb};
pub use crate::planner::Planner;
pub use crate::recurrence::{Recurrence, RecurrenceKind, WEEKLY_OCCURRENCES, expand};
pub use crate::schedule::{DaySchedule, SlotRow, match_slots};
pub use crate::store::EventStore;
