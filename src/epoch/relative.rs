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

//! Relative time descriptions.

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Describes `target_ms` relative to `now_ms`, e.g. `in 30 seconds` or
/// `1 hour ago`.
///
/// The difference is truncated to whole seconds, then placed in the largest
/// bucket it reaches (seconds, minutes, hours, days) and floored to that
/// unit. A difference of exactly zero reads as the future.
pub(crate) fn relative_time(target_ms: i64, now_ms: i64) -> String {
    let diff = target_ms.saturating_sub(now_ms);
    let seconds = diff.unsigned_abs() / 1000;

    let (count, unit) = if seconds < MINUTE {
        (seconds, "second")
    } else if seconds < HOUR {
        (seconds / MINUTE, "minute")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else {
        (seconds / DAY, "day")
    };

    let plural = if count == 1 { "" } else { "s" };

    if diff >= 0 {
        format!("in {count} {unit}{plural}")
    } else {
        format!("{count} {unit}{plural} ago")
    }
}
