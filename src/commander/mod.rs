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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line. It manages a text input
//! component and, when a command is submitted, dispatches the corresponding
//! application event.
//!
//! | Command              | Effect                              |
//! |----------------------|-------------------------------------|
//! | `theme`              | toggle the theme                    |
//! | `theme dark\|light`  | set the theme                       |
//! | `tz`                 | toggle local/UTC display            |
//! | `now`                | set the date input to now           |
//! | `json`, `xml`        | choose the formatter's format       |
//! | `epoch`, `fmt`       | show a tool                         |
//! | `q`                  | quit                                |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::{debug, warn};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent, format::FormatKind};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers an input event to the command line, returning `true` if it was
    /// consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if let Err(err) = self.run_command(&buffer, event_tx) {
                    warn!(error = %err, command = %buffer, "command failed");
                }
                self.input.reset();
                self.active = false;
            }

            // Delegate all other keys to the managed input component
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }

    /// Inserts pasted text, flattened to a single line.
    pub(crate) fn paste(&mut self, text: &str) {
        let line = text.replace(['\r', '\n'], " ");
        let value = format!("{}{}", self.input.value(), line);
        self.input = Input::new(value);
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] | ["quit"] => event_tx.send(AppEvent::ExitApplication)?,

            ["theme"] => event_tx.send(AppEvent::ToggleTheme)?,
            ["theme", value] => event_tx.send(AppEvent::SetTheme(value.to_string()))?,

            ["tz"] => event_tx.send(AppEvent::ToggleTimezone)?,
            ["now"] => event_tx.send(AppEvent::SetDateToNow)?,

            ["json"] => event_tx.send(AppEvent::SelectFormat(FormatKind::Json))?,
            ["xml"] => event_tx.send(AppEvent::SelectFormat(FormatKind::Xml))?,

            ["epoch"] | ["1"] => event_tx.send(AppEvent::SetMainView(MainView::Epoch))?,
            ["fmt"] | ["2"] => event_tx.send(AppEvent::SetMainView(MainView::Formatter))?,

            [] => {}

            [cmd, ..] => debug!(command = %cmd, "unknown command"),
        }

        Ok(())
    }
}
