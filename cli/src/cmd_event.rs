// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use dayplan_core::{EventDraft, Recurrence, RecurrenceKind};
use jiff::ToSpan;

use crate::arg::{CommonArgs, EventArgs};
use crate::cli::Session;
use crate::event_formatter::EventFormatter;
use crate::util::{ArgOutputFormat, parse_datetime, parse_datetime_range};

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub recurrence: Option<RecurrenceKind>,
    pub color: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new event")
            .arg(EventArgs::title())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::recurrence())
            .arg(EventArgs::color())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            recurrence: EventArgs::get_recurrence(matches),
            color: EventArgs::get_color(matches),

            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let draft = self.draft(session)?;
        let recurrence = draft.recurrence.kind();

        let events = session.planner.create_event(draft).await?;
        if self.output_format == ArgOutputFormat::Table && events.len() > 1 {
            println!(
                "{} {} occurrences ({recurrence})",
                "Created".green(),
                events.len()
            );
        }

        let formatter = EventFormatter::new(session.planner.time_zone().clone())
            .with_output_format(self.output_format);
        println!("{}", formatter.format(&events));
        Ok(())
    }

    fn draft(&self, session: &Session) -> Result<EventDraft, Box<dyn Error>> {
        let planner = &session.planner;
        let now = planner.now();
        let default = planner.default_event_draft(&session.owner)?;

        let (start, end) = match (&self.start, &self.end) {
            (Some(start), Some(end)) => parse_datetime_range(&now, start, end)?,
            (Some(start), None) => {
                let start = parse_datetime(&now, start)?;
                let end = start.checked_add(1.hour())?;
                (start, end)
            }
            (None, Some(end)) => (default.start, parse_datetime(&now, end)?),
            (None, None) => (default.start, default.end),
        };

        let recurrence = self
            .recurrence
            .unwrap_or(session.config.default_recurrence);
        let color = self
            .color
            .clone()
            .unwrap_or_else(|| session.config.default_color.clone());

        Ok(EventDraft {
            title: self.title.clone(),
            start,
            end,
            owner_id: session.owner.clone(),
            color: Some(color),
            recurrence: Recurrence::from(recurrence),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub output_format: ArgOutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "events";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("list")
            .about("List all of your events")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = session.planner.load_events(&session.owner).await?;

        let formatter = EventFormatter::new(session.planner.time_zone().clone())
            .with_output_format(self.output_format);
        println!("{}", formatter.format(&events));
        Ok(())
    }
}
