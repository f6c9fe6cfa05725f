// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{ToSpan, Zoned};

use crate::{Error, Recurrence, ValidationError};

/// A calendar event owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// The identifier assigned by the store.
    /// It will be `None` until the event has been persisted.
    pub id: Option<String>,

    /// The display title of the event.
    pub title: String,

    /// The start date and time of the event.
    pub start: Zoned,

    /// The end date and time of the event.
    pub end: Zoned,

    /// The identifier of the owning user.
    pub owner_id: String,

    /// The display color of the event, if any.
    pub color: Option<String>,
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone)]
pub struct EventDraft {
    /// The display title of the event.
    pub title: String,

    /// The start date and time of the event.
    pub start: Zoned,

    /// The end date and time of the event.
    pub end: Zoned,

    /// The identifier of the owning user.
    pub owner_id: String,

    /// The display color of the event, as `#rrggbb`.
    pub color: Option<String>,

    /// How the draft repeats, only consulted when it is created.
    pub recurrence: Recurrence,
}

impl EventDraft {
    /// Creates a one hour draft starting at the next 00 or 30 minute.
    pub fn starting_next_slot(now: &Zoned, owner_id: impl Into<String>) -> Result<Self, Error> {
        let start = if now.minute() < 30 {
            now.with().minute(30)
        } else {
            now.checked_add(1.hour())
                .map_err(Error::DateOutOfRange)?
                .with()
                .minute(0)
        }
        .second(0)
        .subsec_nanosecond(0)
        .build()
        .map_err(Error::DateOutOfRange)?;
        let end = start.checked_add(1.hour()).map_err(Error::DateOutOfRange)?;

        Ok(Self {
            title: String::new(),
            start,
            end,
            owner_id: owner_id.into(),
            color: None,
            recurrence: Recurrence::None,
        })
    }

    /// Checks the fields the store cannot be trusted to reject.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.owner_id.trim().is_empty() {
            return Err(ValidationError::MissingOwner);
        }

        if self.end.timestamp() <= self.start.timestamp() {
            return Err(ValidationError::EndNotAfterStart {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }

        if let Some(color) = &self.color {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidColor(color.clone()));
            }
        }

        Ok(())
    }

    /// The event this draft describes, without recurrence.
    pub fn to_event(&self) -> Event {
        Event {
            id: None,
            title: self.title.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            owner_id: self.owner_id.clone(),
            color: self.color.clone(),
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
