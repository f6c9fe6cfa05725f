// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expansion of recurring drafts into independent occurrences.
//!
//! A recurrence only exists on a draft. Expanding it yields plain [`Event`]s
//! that keep no link to a series, so each one is edited or deleted on its own.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use jiff::ToSpan;

use crate::{Error, Event, EventDraft};

/// Number of occurrences a weekly draft expands to.
pub const WEEKLY_OCCURRENCES: i64 = 16;

/// How a draft repeats when it is created.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Recurrence {
    /// A single event.
    #[default]
    None,

    /// Every day. Created as a single event.
    Daily,

    /// Same weekday and wall-clock time for [`WEEKLY_OCCURRENCES`] weeks.
    Weekly,

    /// Selected days of the month. Created as a single event.
    ///
    /// The selected days are kept on the draft but not used for expansion.
    Monthly {
        /// Days of the month, 1 to 31.
        days_of_month: BTreeSet<u8>,
    },
}

impl Recurrence {
    /// The kind of this recurrence, without any day selectors.
    pub fn kind(&self) -> RecurrenceKind {
        match self {
            Recurrence::None => RecurrenceKind::None,
            Recurrence::Daily => RecurrenceKind::Daily,
            Recurrence::Weekly => RecurrenceKind::Weekly,
            Recurrence::Monthly { .. } => RecurrenceKind::Monthly,
        }
    }
}

impl From<RecurrenceKind> for Recurrence {
    fn from(kind: RecurrenceKind) -> Self {
        match kind {
            RecurrenceKind::None => Recurrence::None,
            RecurrenceKind::Daily => Recurrence::Daily,
            RecurrenceKind::Weekly => Recurrence::Weekly,
            RecurrenceKind::Monthly => Recurrence::Monthly {
                days_of_month: BTreeSet::new(),
            },
        }
    }
}

/// The kind of a recurrence, as written in configuration and on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RecurrenceKind {
    /// Does not repeat.
    #[default]
    None,

    /// Repeats daily.
    Daily,

    /// Repeats weekly.
    Weekly,

    /// Repeats monthly.
    Monthly,
}

const KIND_NONE: &str = "none";
const KIND_DAILY: &str = "daily";
const KIND_WEEKLY: &str = "weekly";
const KIND_MONTHLY: &str = "monthly";

impl AsRef<str> for RecurrenceKind {
    fn as_ref(&self) -> &str {
        match self {
            RecurrenceKind::None => KIND_NONE,
            RecurrenceKind::Daily => KIND_DAILY,
            RecurrenceKind::Weekly => KIND_WEEKLY,
            RecurrenceKind::Monthly => KIND_MONTHLY,
        }
    }
}

impl Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RecurrenceKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KIND_NONE => Ok(RecurrenceKind::None),
            KIND_DAILY => Ok(RecurrenceKind::Daily),
            KIND_WEEKLY => Ok(RecurrenceKind::Weekly),
            KIND_MONTHLY => Ok(RecurrenceKind::Monthly),
            _ => Err(format!("Unknown recurrence: {value}")),
        }
    }
}

/// Expands a draft into the events to persist.
///
/// Weekly drafts yield [`WEEKLY_OCCURRENCES`] events, every other recurrence
/// yields the draft itself. None of the returned events has an id.
pub fn expand(draft: &EventDraft) -> Result<Vec<Event>, Error> {
    let prototype = draft.to_event();
    match &draft.recurrence {
        Recurrence::Weekly => expand_weekly(&prototype),
        Recurrence::None | Recurrence::Daily | Recurrence::Monthly { .. } => Ok(vec![prototype]),
    }
}

/// Both bounds are shifted by whole calendar days in their own time zone, so
/// the wall-clock time survives DST transitions.
fn expand_weekly(prototype: &Event) -> Result<Vec<Event>, Error> {
    (0..WEEKLY_OCCURRENCES)
        .map(|i| {
            let offset = (7 * i).days();
            let start = prototype
                .start
                .checked_add(offset)
                .map_err(Error::DateOutOfRange)?;
            let end = prototype
                .end
                .checked_add(offset)
                .map_err(Error::DateOutOfRange)?;
            Ok(Event {
                start,
                end,
                ..prototype.clone()
            })
        })
        .collect()
}
