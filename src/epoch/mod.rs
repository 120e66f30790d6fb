// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Conversion between Unix epoch values and calendar time.
//!
//! Everything here is pure: functions take the instant "now" as an argument
//! where they need it, so the converter view decides where time comes from.
//!
//! # Sub-modules
//!
//! * [`convert`]: Parsing epoch and date input, and calendar formatting.
//! * [`relative`]: Human-readable offsets such as `3 minutes ago`.

pub(crate) mod convert;
pub(crate) mod relative;

pub(crate) use convert::{
    EpochValue, TimezoneMode, date_input_value, digits_only, format_calendar, parse_date_input,
    parse_epoch_input,
};
pub(crate) use relative::relative_time;
