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

//! Keyboard routing.
//!
//! Keys are offered, in order, to:
//!
//! 1. The command line, while it is open (or to open it with `:`).
//! 2. A few `Ctrl` shortcuts that work everywhere.
//! 3. The active view, if it is editing a text field.
//! 4. The global single-key shortcuts.
//! 5. The active view's own shortcuts.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::handlers::process_view_event;
use crate::{App, MainView, events::AppEvent};

/// Maps keyboard input to application actions.
///
/// # Errors
///
/// Returns an error if an event or task cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some terminals also report releases
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.commander.active() || !app.is_editing() {
        let handled = app.commander.handle_event(&event, &app.event_tx);
        if handled {
            return Ok(());
        }
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ToggleTheme)?;
            return Ok(());
        }
        _ => {}
    }

    if app.is_editing() {
        return process_view_event(app, &event);
    }

    process_global_key_event(app, key, &event)
}

fn process_global_key_event(app: &mut App, key: KeyEvent, event: &Event) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.event_tx.send(AppEvent::ExitApplication)?,
        (KeyCode::Char('t'), _) => app.event_tx.send(AppEvent::ToggleTheme)?,

        (KeyCode::Char('1'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Epoch))?,
        (KeyCode::Char('2'), _) => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Formatter))?,

        _ => process_view_event(app, event)?,
    }

    Ok(())
}
