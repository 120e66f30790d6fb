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

//! Handlers for individual application events.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::event::Event;
use tracing::{debug, error, info, warn};

use crate::{
    App, MainView,
    clipboard::{self, CopyTarget},
    components::ViewAction,
    events::AppEvent,
    format::FormatKind,
    tasks::AppTask,
    theme::ThemePreference,
};

/// How long the theme toggle control is drawn pressed.
pub(crate) const TOGGLE_FEEDBACK: Duration = Duration::from_millis(150);

const COPIED_MESSAGE: &str = "Copied to clipboard";
const COPY_FAILED_MESSAGE: &str = "Could not copy to clipboard";

/// Routes an input event to the active view and carries out whatever it asks
/// for.
pub(super) fn process_view_event(app: &mut App, event: &Event) -> Result<()> {
    let action = match app.main_view {
        MainView::Epoch => app.epoch_view.process_event(event, Utc::now()),
        MainView::Formatter => app.formatter_view.process_event(event),
    };

    if let Some(action) = action {
        handle_view_action(app, action)?;
    }

    Ok(())
}

fn handle_view_action(app: &mut App, action: ViewAction) -> Result<()> {
    match action {
        ViewAction::Copy(target) => handle_copy_to_clipboard(app, target),
    }
}

pub(super) fn handle_paste(app: &mut App, text: String) {
    if app.commander.active() {
        app.commander.paste(&text);
        return;
    }

    if let Err(err) = process_view_event(app, &Event::Paste(text)) {
        warn!(error = %err, "paste failed");
    }
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    if main_view == app.main_view {
        return;
    }

    match main_view {
        MainView::Epoch => app.epoch_view.start(&app.event_tx, Utc::now()),
        MainView::Formatter => app.epoch_view.teardown(),
    }

    debug!(view = ?main_view, "main view changed");
    app.main_view = main_view;
}

pub(super) fn handle_toggle_theme(app: &mut App) {
    let theme = app.theme.toggle();
    info!(%theme, "theme toggled");

    app.toggle_feedback
        .trigger(TOGGLE_FEEDBACK, &app.event_tx, AppEvent::ToggleReleased);
}

pub(super) fn handle_set_theme(app: &mut App, value: &str) {
    app.theme.set_theme(value);
}

pub(super) fn handle_theme_changed(app: &mut App, theme: ThemePreference) {
    app.epoch_view.set_color_scheme(theme);
}

pub(super) fn handle_toggle_released(app: &mut App, generation: u64) {
    app.toggle_feedback.expire(generation);
}

pub(super) fn handle_clock_tick(app: &mut App) {
    app.epoch_view.refresh_clock(Utc::now());
}

pub(super) fn handle_millis_tick(app: &mut App) {
    app.epoch_view.refresh_millis(Utc::now());
}

pub(super) fn handle_toggle_timezone(app: &mut App) {
    app.epoch_view.toggle_timezone_mode(Utc::now());
}

pub(super) fn handle_set_date_to_now(app: &mut App) {
    app.epoch_view.set_date_to_now(Utc::now());
}

pub(super) fn handle_select_format(app: &mut App, kind: FormatKind) {
    app.formatter_view.select_kind(kind);
}

pub(super) fn handle_copy_to_clipboard(app: &mut App, target: CopyTarget) -> Result<()> {
    match app.copy_text(target) {
        Some(text) => app.task_tx.send(AppTask::CopyToClipboard { target, text })?,
        None => debug!(?target, "nothing to copy"),
    }

    Ok(())
}

pub(super) fn handle_copy_succeeded(app: &mut App, target: CopyTarget) {
    let feedback = match target {
        CopyTarget::FormattedOutput => &mut app.formatter_view.copy_feedback,
        _ => &mut app.epoch_view.copy_feedback,
    };
    feedback.acknowledge(target, &app.event_tx);

    app.toast.show(COPIED_MESSAGE, &app.event_tx);
}

/// The platform clipboard failed, so ask the terminal to do it instead.
pub(super) fn handle_copy_fallback(app: &mut App, target: CopyTarget, text: &str) {
    match clipboard::copy_with_osc52(text) {
        Ok(()) => {
            debug!(?target, "copied with terminal escape sequence");
            handle_copy_succeeded(app, target);
        }
        Err(err) => {
            error!(error = %err, "terminal clipboard fallback failed");
            app.toast.show(COPY_FAILED_MESSAGE, &app.event_tx);
        }
    }
}

pub(super) fn handle_copy_ack_expired(app: &mut App, target: CopyTarget, generation: u64) {
    match target {
        CopyTarget::FormattedOutput => app.formatter_view.copy_feedback.expire(target, generation),
        _ => app.epoch_view.copy_feedback.expire(target, generation),
    }
}

pub(super) fn handle_toast_expired(app: &mut App, generation: u64) {
    app.toast.expire(generation);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!(%message, "application error");
    app.toast.show(message, &app.event_tx);
}
