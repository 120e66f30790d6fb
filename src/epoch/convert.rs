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

//! Epoch and calendar parsing and formatting.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Inputs longer than this many digits are milliseconds, not seconds.
pub(crate) const SECONDS_MAX_DIGITS: usize = 10;

/// Locale-default style calendar format, e.g. `Tue, 11/14/2023, 22:13:20`.
const CALENDAR_FORMAT: &str = "%a, %m/%d/%Y, %H:%M:%S";

/// Format of the date input at minute precision.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted date input layouts, tried in order.
const DATE_INPUT_LAYOUTS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Which offset calendar values are shown in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum TimezoneMode {
    #[default]
    Local,
    Utc,
}

impl TimezoneMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            TimezoneMode::Local => TimezoneMode::Utc,
            TimezoneMode::Utc => TimezoneMode::Local,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            TimezoneMode::Local => "Local",
            TimezoneMode::Utc => "UTC",
        }
    }
}

/// A point in time given as an epoch count, normalized to milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EpochValue {
    millis: i64,
}

impl EpochValue {
    pub(crate) fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub(crate) fn from_seconds(seconds: i64) -> Option<Self> {
        seconds.checked_mul(1000).map(Self::from_millis)
    }

    pub(crate) fn millis(self) -> i64 {
        self.millis
    }

    /// Seconds since the epoch, fractional when the value came from
    /// milliseconds.
    pub(crate) fn seconds(self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// The calendar instant, or `None` outside the representable range.
    pub(crate) fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }
}

impl From<DateTime<Utc>> for EpochValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_millis(instant.timestamp_millis())
    }
}

/// Strips every character that is not an ASCII digit.
pub(crate) fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parses raw epoch input, deciding the unit from the number of digits.
///
/// Non-digits are discarded first. More than [`SECONDS_MAX_DIGITS`] digits
/// means milliseconds, anything shorter means seconds. Returns `None` when
/// no digits remain, or the value cannot be held as milliseconds.
pub(crate) fn parse_epoch_input(raw: &str) -> Option<EpochValue> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;

    if digits.len() > SECONDS_MAX_DIGITS {
        Some(EpochValue::from_millis(value))
    } else {
        EpochValue::from_seconds(value)
    }
}

/// Formats an instant as calendar time in the given mode.
pub(crate) fn format_calendar(instant: DateTime<Utc>, mode: TimezoneMode) -> String {
    match mode {
        TimezoneMode::Utc => instant.format(CALENDAR_FORMAT).to_string(),
        TimezoneMode::Local => instant.with_timezone(&Local).format(CALENDAR_FORMAT).to_string(),
    }
}

/// Parses date input of the form `YYYY-MM-DDTHH:MM[:SS[.fff]]`.
///
/// In UTC mode the wall-clock text is taken to be UTC. In local mode it is
/// taken to be local time. A local time skipped by a daylight saving change
/// is read with the offset in force before the change, so it lands that far
/// past the transition. An ambiguous local time gives the earlier instant.
pub(crate) fn parse_date_input(text: &str, mode: TimezoneMode) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let naive = DATE_INPUT_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())?;

    match mode {
        TimezoneMode::Utc => Some(naive.and_utc()),
        TimezoneMode::Local => local_to_utc(naive, |local| {
            Local.offset_from_local_datetime(local).earliest()
        }),
    }
}

fn local_to_utc<F>(naive: NaiveDateTime, offset_at: F) -> Option<DateTime<Utc>>
where
    F: Fn(&NaiveDateTime) -> Option<FixedOffset>,
{
    let offset = match offset_at(&naive) {
        Some(offset) => offset,
        None => offset_at(&naive.checked_sub_signed(TimeDelta::days(1))?)?,
    };

    let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(utc.and_utc())
}

/// Renders an instant as date input text, at minute precision.
pub(crate) fn date_input_value(instant: DateTime<Utc>, mode: TimezoneMode) -> String {
    match mode {
        TimezoneMode::Utc => instant.format(DATE_INPUT_FORMAT).to_string(),
        TimezoneMode::Local => instant.with_timezone(&Local).format(DATE_INPUT_FORMAT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_are_seconds() {
        let value = parse_epoch_input("1700000000").unwrap();
        assert_eq!(value.millis(), 1_700_000_000_000);
        assert_eq!(value.seconds(), 1_700_000_000.0);
    }

    #[test]
    fn thirteen_digits_are_milliseconds_of_the_same_instant() {
        assert_eq!(
            parse_epoch_input("1700000000000"),
            parse_epoch_input("1700000000")
        );
    }

    #[test]
    fn milliseconds_keep_their_fraction() {
        let value = parse_epoch_input("1700000000123").unwrap();
        assert_eq!(value.seconds(), 1_700_000_000.123);
    }

    #[test]
    fn non_digits_are_stripped_before_counting() {
        assert_eq!(digits_only("17-0a0 000 000"), "1700000000");
        assert_eq!(
            parse_epoch_input(" 1,700,000,000 "),
            parse_epoch_input("1700000000")
        );
    }

    #[test]
    fn empty_or_non_numeric_input_is_absent() {
        assert_eq!(parse_epoch_input(""), None);
        assert_eq!(parse_epoch_input("abc"), None);
        assert_eq!(parse_epoch_input("--"), None);
    }

    #[test]
    fn oversized_input_is_absent() {
        assert_eq!(parse_epoch_input("99999999999999999999999"), None);
    }

    #[test]
    fn zero_is_the_epoch() {
        let value = parse_epoch_input("0").unwrap();
        assert_eq!(value.to_datetime(), DateTime::from_timestamp(0, 0));
    }

    #[test]
    fn utc_calendar_format() {
        let instant = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(
            format_calendar(instant, TimezoneMode::Utc),
            "Tue, 11/14/2023, 22:13:20"
        );
    }

    #[test]
    fn far_future_values_still_format() {
        let value = parse_epoch_input("253402300799000").unwrap();
        let instant = value.to_datetime().unwrap();
        assert_eq!(
            format_calendar(instant, TimezoneMode::Utc),
            "Fri, 12/31/9999, 23:59:59"
        );
    }

    #[test]
    fn utc_date_input_is_read_as_utc() {
        let instant = parse_date_input("2023-11-14T22:13", TimezoneMode::Utc).unwrap();
        assert_eq!(instant.timestamp(), 1_699_999_980);

        let instant = parse_date_input("2023-11-14T22:13:20", TimezoneMode::Utc).unwrap();
        assert_eq!(instant.timestamp(), 1_700_000_000);

        let instant = parse_date_input("2023-11-14T22:13:20.500", TimezoneMode::Utc).unwrap();
        assert_eq!(instant.timestamp_millis(), 1_700_000_000_500);
    }

    #[test]
    fn local_date_input_matches_local_offset() {
        let expected = Local
            .with_ymd_and_hms(2023, 6, 1, 12, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(
            parse_date_input("2023-06-01T12:00", TimezoneMode::Local),
            Some(expected)
        );
    }

    /// Offsets for a zone that springs forward from +01:00 to +02:00 at
    /// 02:00 local time on 2024-03-31, skipping the 02:00 hour.
    fn spring_forward(local: &NaiveDateTime) -> Option<FixedOffset> {
        let gap_start = NaiveDateTime::parse_from_str("2024-03-31T02:00", "%Y-%m-%dT%H:%M").unwrap();
        let gap_end = gap_start + TimeDelta::hours(1);

        if *local < gap_start {
            FixedOffset::east_opt(3600)
        } else if *local < gap_end {
            None
        } else {
            FixedOffset::east_opt(7200)
        }
    }

    #[test]
    fn skipped_local_time_moves_past_the_transition() {
        let naive = NaiveDateTime::parse_from_str("2024-03-31T02:30", "%Y-%m-%dT%H:%M").unwrap();
        let instant = local_to_utc(naive, spring_forward).unwrap();

        // 02:30 at +01:00, which the zone shows as 03:30 at +02:00
        assert_eq!(instant.to_rfc3339(), "2024-03-31T01:30:00+00:00");
    }

    #[test]
    fn existing_local_times_use_their_own_offset() {
        let before = NaiveDateTime::parse_from_str("2024-03-31T01:30", "%Y-%m-%dT%H:%M").unwrap();
        let after = NaiveDateTime::parse_from_str("2024-03-31T03:30", "%Y-%m-%dT%H:%M").unwrap();

        assert_eq!(
            local_to_utc(before, spring_forward).unwrap().to_rfc3339(),
            "2024-03-31T00:30:00+00:00"
        );
        assert_eq!(
            local_to_utc(after, spring_forward).unwrap().to_rfc3339(),
            "2024-03-31T01:30:00+00:00"
        );
    }

    #[test]
    fn invalid_date_input_is_absent() {
        assert_eq!(parse_date_input("", TimezoneMode::Utc), None);
        assert_eq!(parse_date_input("yesterday", TimezoneMode::Utc), None);
        assert_eq!(parse_date_input("2023-13-01T00:00", TimezoneMode::Utc), None);
        assert_eq!(parse_date_input("2023-02-30T00:00", TimezoneMode::Local), None);
    }

    #[test]
    fn epoch_seconds_survive_a_calendar_round_trip() {
        for seconds in [0_i64, 1, 59, 86_399, 951_782_400, 1_700_000_000, 4_102_444_800] {
            let instant = EpochValue::from_seconds(seconds).unwrap().to_datetime().unwrap();
            let text = instant.format("%Y-%m-%dT%H:%M:%S").to_string();

            let parsed = parse_date_input(&text, TimezoneMode::Utc).unwrap();
            assert_eq!(parsed.timestamp(), seconds, "{text}");
        }
    }

    #[test]
    fn date_input_value_is_minute_precision() {
        let instant = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(date_input_value(instant, TimezoneMode::Utc), "2023-11-14T22:13");
    }

    #[test]
    fn timezone_mode_toggles() {
        assert_eq!(TimezoneMode::Local.toggled(), TimezoneMode::Utc);
        assert_eq!(TimezoneMode::Utc.toggled().label(), "Local");
    }
}
