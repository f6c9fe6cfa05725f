// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use dayplan_core::RecurrenceKind;

use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> ArgOutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn title() -> Arg {
        arg!(title: <TITLE> "Title of the event")
    }

    pub fn get_title(matches: &ArgMatches) -> String {
        matches.get_one::<String>("title").cloned().unwrap_or_default()
    }

    pub fn start() -> Arg {
        arg!(--start <START> "Start date and time of the event")
            .long_help("Start of the event, as YYYY-MM-DD HH:MM or HH:MM for today. Defaults to the next half hour.")
    }

    pub fn get_start(matches: &ArgMatches) -> Option<String> {
        matches.get_one("start").cloned()
    }

    pub fn end() -> Arg {
        arg!(--end <END> "End date and time of the event")
            .long_help("End of the event, as YYYY-MM-DD HH:MM or HH:MM on the start day. Defaults to one hour after the start.")
    }

    pub fn get_end(matches: &ArgMatches) -> Option<String> {
        matches.get_one("end").cloned()
    }

    pub fn recurrence() -> Arg {
        arg!(-r --recurrence <RECURRENCE> "How the event repeats")
            .value_parser(value_parser!(RecurrenceKind))
    }

    pub fn get_recurrence(matches: &ArgMatches) -> Option<RecurrenceKind> {
        matches.get_one("recurrence").copied()
    }

    pub fn color() -> Arg {
        arg!(--color <COLOR> "Display color of the event, as #rrggbb")
    }

    pub fn get_color(matches: &ArgMatches) -> Option<String> {
        matches.get_one("color").cloned()
    }
}
