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

//! # toolbelt
//!
//! A handful of small developer utilities in one terminal UI: an epoch
//! timestamp converter with a live clock, and a JSON/XML formatter, all under
//! a dark or light theme that is remembered between runs.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** handles clipboard access, which may block.
//! * **Input and Timer Threads** capture user input and clock ticks and post
//!   them as events to drive the UI state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between the UI and background threads is handled via `std::sync::mpsc`
//! channels.

mod clipboard;
mod commander;
mod components;
mod config;
mod epoch;
mod events;
mod format;
mod logging;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{error, info};

use crate::{
    clipboard::CopyTarget,
    commander::Commander,
    components::{EpochView, FormatterView, Toast},
    config::PreferenceStore,
    events::{AppEvent, process_events},
    render::draw,
    tasks::AppTask,
    theme::{TerminalBackground, ThemeController, ThemeListener},
    util::timer::Transient,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainView {
    Epoch,
    Formatter,
}

/// Application state.
pub(crate) struct App {
    pub theme: ThemeController,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub commander: Commander,

    pub epoch_view: EpochView,
    pub formatter_view: FormatterView,

    pub toast: Toast,
    pub toggle_feedback: Transient,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The theme is resolved and applied here, and the application channel is
    /// subscribed to theme changes.
    pub fn new(store: Box<dyn PreferenceStore>, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let listener: Box<dyn ThemeListener> = Box::new(event_tx.clone());
        let theme = ThemeController::initialize(store, vec![listener]);
        let epoch_view = EpochView::new(theme.current(), Utc::now());

        Self {
            theme,
            main_view: MainView::Epoch,
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
            epoch_view,
            formatter_view: FormatterView::new(),
            toast: Toast::default(),
            toggle_feedback: Transient::default(),
        }
    }

    /// Whether the active view is capturing keys for a text field.
    pub(crate) fn is_editing(&self) -> bool {
        match self.main_view {
            MainView::Epoch => self.epoch_view.is_editing(),
            MainView::Formatter => self.formatter_view.editing,
        }
    }

    pub(crate) fn copy_text(&self, target: CopyTarget) -> Option<String> {
        match target {
            CopyTarget::FormattedOutput => self.formatter_view.copy_text(target),
            _ => self.epoch_view.copy_text(target),
        }
    }

    /// Stops every timer owned by the application.
    pub(crate) fn teardown(&mut self) {
        self.epoch_view.teardown();
        self.formatter_view.copy_feedback.clear();
        self.toast.hide();
        self.toggle_feedback.cancel();
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, paints the terminal in the
/// starting theme, manages the terminal lifecycle, and returns an error if any
/// part of the execution fails.
fn main() -> Result<()> {
    // Logging is optional, the application runs the same without it
    let log_path = logging::init_logging().ok();
    info!(log = ?log_path, "toolbelt starting");

    let store = config::open_preference_store();

    // Apply the starting theme before the first frame is drawn, so the
    // terminal never shows the wrong background
    TerminalBackground.on_theme_changed(theme::initial_theme(store.as_ref()));

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(store, task_tx);
    app.theme.subscribe(Box::new(TerminalBackground));

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            disable_raw_mode().ok();
            util::term::reset_terminal_bg();
            return Err(err);
        }
    };

    let res = run(&mut terminal, &mut app, task_rx);

    app.teardown();
    restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = %err, "application error");
    }
    info!("toolbelt stopped");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables bracketed paste, so pasted text arrives as a single event.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * A task worker to process [`AppTask`]s.
/// * An input thread to read terminal events.
///
/// It then starts the live clock of the initial view, draws the first frame
/// and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks.
    tasks::spawn_task_worker(task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Paste(text)) => AppEvent::Paste(text),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    // Without input there is no way to use or leave the app
                    error!(error = %err, "failed to read terminal event");
                    AppEvent::ExitApplication
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    if app.main_view == MainView::Epoch {
        app.epoch_view.start(&app.event_tx, Utc::now());
    }

    terminal.draw(|f| draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
