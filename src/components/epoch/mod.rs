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

//! Epoch converter view state.
//!
//! The view holds the two conversion inputs, their result panels and a live
//! clock. The clock is driven by two [`Interval`] timers posting into the
//! application channel: a one second tick that recomputes the whole reading,
//! and a fast tick that only refreshes the millisecond count. The timers run
//! only while the view is started.

mod event;
mod render;

use std::{sync::mpsc::Sender, time::Duration};

use chrono::{DateTime, Utc};
use tracing::debug;
use tui_input::Input;

use crate::{
    clipboard::CopyTarget,
    components::CopyFeedback,
    epoch::{
        EpochValue, TimezoneMode, date_input_value, digits_only, format_calendar,
        parse_date_input, parse_epoch_input, relative_time,
    },
    events::AppEvent,
    theme::ThemePreference,
    util::timer::Interval,
};

pub(crate) const CLOCK_PERIOD: Duration = Duration::from_secs(1);
pub(crate) const MILLIS_PERIOD: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EpochFocus {
    None,
    EpochInput,
    DateInput,
}

/// Result panel for the epoch input.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EpochResult {
    pub(crate) formatted: String,
    pub(crate) relative: String,
    pub(crate) seconds: f64,
}

/// Result panel for the date input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DateResult {
    pub(crate) seconds: i64,
    pub(crate) millis: i64,
}

impl From<DateTime<Utc>> for DateResult {
    fn from(instant: DateTime<Utc>) -> Self {
        let millis = EpochValue::from(instant).millis();
        Self {
            seconds: millis.div_euclid(1000),
            millis,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ClockReading {
    pub(crate) epoch_seconds: i64,
    pub(crate) epoch_millis: i64,
    pub(crate) formatted: String,
}

struct ClockTimers {
    seconds: Interval,
    millis: Interval,
}

pub(crate) struct EpochView {
    pub(crate) mode: TimezoneMode,
    pub(crate) focus: EpochFocus,
    pub(crate) epoch_input: Input,
    pub(crate) date_input: Input,
    pub(crate) epoch_result: Option<EpochResult>,
    pub(crate) date_result: Option<DateResult>,
    pub(crate) clock: ClockReading,
    pub(crate) date_scheme: ThemePreference,
    pub(crate) copy_feedback: CopyFeedback,
    timers: Option<ClockTimers>,
}

impl EpochView {
    /// Creates the view with the date input already set to `now`.
    pub(crate) fn new(theme: ThemePreference, now: DateTime<Utc>) -> Self {
        let mut view = Self {
            mode: TimezoneMode::default(),
            focus: EpochFocus::None,
            epoch_input: Input::default(),
            date_input: Input::default(),
            epoch_result: None,
            date_result: None,
            clock: ClockReading::default(),
            date_scheme: theme,
            copy_feedback: CopyFeedback::default(),
            timers: None,
        };
        view.refresh_clock(now);
        view.set_date_to_now(now);
        view
    }

    /// Starts the live clock, if it is not already running.
    pub(crate) fn start(&mut self, event_tx: &Sender<AppEvent>, now: DateTime<Utc>) {
        self.refresh_clock(now);

        if self.timers.is_none() {
            self.timers = Some(ClockTimers {
                seconds: Interval::spawn(CLOCK_PERIOD, event_tx.clone(), || AppEvent::ClockTick),
                millis: Interval::spawn(MILLIS_PERIOD, event_tx.clone(), || AppEvent::MillisTick),
            });
            debug!("clock started");
        }
    }

    /// Stops the live clock and clears any pending copy acknowledgement.
    pub(crate) fn teardown(&mut self) {
        if let Some(mut timers) = self.timers.take() {
            timers.seconds.cancel();
            timers.millis.cancel();
            debug!("clock stopped");
        }
        self.copy_feedback.clear();
        self.focus = EpochFocus::None;
    }

    pub(crate) fn is_running(&self) -> bool {
        self.timers
            .as_ref()
            .is_some_and(|timers| timers.seconds.is_active() && timers.millis.is_active())
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.focus != EpochFocus::None
    }

    /// Flips between local and UTC display. The inputs are left as typed and
    /// every populated panel is shown again under the new mode.
    pub(crate) fn toggle_timezone_mode(&mut self, now: DateTime<Utc>) {
        self.mode = self.mode.toggled();
        self.refresh_clock(now);

        if !self.epoch_input.value().is_empty() {
            self.convert_epoch_input(now);
        }
        if !self.date_input.value().is_empty() {
            self.convert_date_input();
        }
    }

    pub(crate) fn refresh_clock(&mut self, now: DateTime<Utc>) {
        self.clock = ClockReading {
            epoch_seconds: now.timestamp(),
            epoch_millis: now.timestamp_millis(),
            formatted: format_calendar(now, self.mode),
        };
    }

    pub(crate) fn refresh_millis(&mut self, now: DateTime<Utc>) {
        self.clock.epoch_millis = now.timestamp_millis();
    }

    /// Called after every edit of the epoch input.
    pub(crate) fn handle_epoch_input(&mut self, now: DateTime<Utc>) {
        let digits = digits_only(self.epoch_input.value());
        if digits != self.epoch_input.value() {
            self.epoch_input = Input::new(digits);
        }
        self.convert_epoch_input(now);
    }

    fn convert_epoch_input(&mut self, now: DateTime<Utc>) {
        self.epoch_result = parse_epoch_input(self.epoch_input.value())
            .and_then(|value| self.display_epoch_result(value, now));
    }

    /// The panel contents for `value`, or `None` if it is outside the
    /// calendar range.
    pub(crate) fn display_epoch_result(
        &self,
        value: EpochValue,
        now: DateTime<Utc>,
    ) -> Option<EpochResult> {
        let instant = value.to_datetime()?;
        Some(EpochResult {
            formatted: format_calendar(instant, self.mode),
            relative: relative_time(value.millis(), now.timestamp_millis()),
            seconds: value.seconds(),
        })
    }

    /// Called after every edit of the date input.
    pub(crate) fn handle_date_input(&mut self) {
        self.convert_date_input();
    }

    fn convert_date_input(&mut self) {
        self.date_result = parse_date_input(self.date_input.value(), self.mode).map(DateResult::from);
    }

    pub(crate) fn set_date_to_now(&mut self, now: DateTime<Utc>) {
        self.date_input = Input::new(date_input_value(now, self.mode));
        self.convert_date_input();
    }

    pub(crate) fn set_color_scheme(&mut self, theme: ThemePreference) {
        self.date_scheme = theme;
    }

    /// The text behind a copy control, if that control currently shows a
    /// value.
    pub(crate) fn copy_text(&self, target: CopyTarget) -> Option<String> {
        match target {
            CopyTarget::CurrentEpochSeconds => Some(self.clock.epoch_seconds.to_string()),
            CopyTarget::CurrentEpochMillis => Some(self.clock.epoch_millis.to_string()),
            CopyTarget::ConvertedTime => self.epoch_result.as_ref().map(|r| r.formatted.clone()),
            CopyTarget::DateEpochSeconds => self.date_result.map(|r| r.seconds.to_string()),
            CopyTarget::DateEpochMillis => self.date_result.map(|r| r.millis.to_string()),
            CopyTarget::FormattedOutput => None,
        }
    }
}
