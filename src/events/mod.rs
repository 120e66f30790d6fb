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

//! Application events and the main event loop.
//!
//! Every state change on the UI thread starts as an [`AppEvent`] received
//! from a single `mpsc` channel. The producers are:
//!
//! * the input thread (keys, pastes, resizes),
//! * the live clock timers and the one-shot UI timers,
//! * the task worker (clipboard results),
//! * the theme controller, through the [`ThemeListener`] implementation for
//!   the channel sender,
//! * the command line and key handlers, for actions that other parts of the
//!   application react to.
//!
//! The screen is redrawn after every event.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    clipboard::CopyTarget,
    format::FormatKind,
    render::draw,
    theme::{ThemeListener, ThemePreference},
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize,

    SetMainView(MainView),

    ToggleTheme,
    SetTheme(String),
    ThemeChanged(ThemePreference),
    ToggleReleased(u64),

    ClockTick,
    MillisTick,
    ToggleTimezone,
    SetDateToNow,

    SelectFormat(FormatKind),

    CopyToClipboard(CopyTarget),
    CopySucceeded(CopyTarget),
    CopyFallback { target: CopyTarget, text: String },
    CopyAckExpired { target: CopyTarget, generation: u64 },
    ToastExpired(u64),

    ExitApplication,

    Error(String),
}

/// Theme changes are forwarded into the event loop, so that views react to
/// them in the same way as to any other event.
impl ThemeListener for Sender<AppEvent> {
    fn on_theme_changed(&self, theme: ThemePreference) {
        let _ = self.send(AppEvent::ThemeChanged(theme));
    }
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Paste(text) => handle_paste(app, text),
        AppEvent::Resize => {}
        AppEvent::SetMainView(view) => handle_set_main_view(app, view),
        AppEvent::ToggleTheme => handle_toggle_theme(app),
        AppEvent::SetTheme(value) => handle_set_theme(app, &value),
        AppEvent::ThemeChanged(theme) => handle_theme_changed(app, theme),
        AppEvent::ToggleReleased(generation) => handle_toggle_released(app, generation),
        AppEvent::ClockTick => handle_clock_tick(app),
        AppEvent::MillisTick => handle_millis_tick(app),
        AppEvent::ToggleTimezone => handle_toggle_timezone(app),
        AppEvent::SetDateToNow => handle_set_date_to_now(app),
        AppEvent::SelectFormat(kind) => handle_select_format(app, kind),
        AppEvent::CopyToClipboard(target) => handle_copy_to_clipboard(app, target)?,
        AppEvent::CopySucceeded(target) => handle_copy_succeeded(app, target),
        AppEvent::CopyFallback { target, text } => handle_copy_fallback(app, target, &text),
        AppEvent::CopyAckExpired { target, generation } => {
            handle_copy_ack_expired(app, target, generation)
        }
        AppEvent::ToastExpired(generation) => handle_toast_expired(app, generation),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
