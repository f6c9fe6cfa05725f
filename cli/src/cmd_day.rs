// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::cli::Session;
use crate::schedule_formatter::ScheduleFormatter;
use crate::util::{ArgOutputFormat, parse_date};

#[derive(Debug, Clone)]
pub struct CmdDay {
    pub date: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl Default for CmdDay {
    fn default() -> Self {
        Self {
            date: None,
            output_format: ArgOutputFormat::Table,
        }
    }
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the schedule of a day, today by default")
            .arg(arg!(date: [DATE] "Date to show, as YYYY-MM-DD, today, tomorrow or yesterday"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: matches.get_one("date").cloned(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    /// Show the events of the day in their half-hour slots.
    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing day schedule...");
        let planner = &session.planner;
        let today = planner.today();
        let date = match &self.date {
            Some(date) => parse_date(today, date)?,
            None => today,
        };

        let events = planner.load_events(&session.owner).await?;
        let schedule = planner.day_schedule(date, &events);

        let formatter = ScheduleFormatter::new().with_output_format(self.output_format);
        if self.output_format == ArgOutputFormat::Table {
            println!("🗓️ {}", date.strftime("%A, %Y-%m-%d").to_string().bold());
        }
        println!("{}", formatter.format(&schedule));
        Ok(())
    }
}
