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

//! Structured-text formatter view state.

mod event;
mod render;

use tracing::debug;

use crate::{clipboard::CopyTarget, components::CopyFeedback, format::FormatKind};

pub(crate) struct FormatterView {
    pub(crate) kind: FormatKind,
    pub(crate) placeholder: String,
    pub(crate) input: String,
    pub(crate) output: String,
    pub(crate) error: Option<String>,
    pub(crate) editing: bool,
    pub(crate) output_scroll: u16,
    pub(crate) copy_feedback: CopyFeedback,
}

impl FormatterView {
    pub(crate) fn new() -> Self {
        let kind = FormatKind::default();
        Self {
            kind,
            placeholder: kind.placeholder(),
            input: String::new(),
            output: String::new(),
            error: None,
            editing: false,
            output_scroll: 0,
            copy_feedback: CopyFeedback::default(),
        }
    }

    /// Chooses the target format. The placeholder follows the format, and any
    /// previous output or error is cleared.
    pub(crate) fn select_kind(&mut self, kind: FormatKind) {
        self.kind = kind;
        self.placeholder = kind.placeholder();
        self.clear_result();
    }

    /// Formats the input, replacing whatever was shown before.
    pub(crate) fn run_format(&mut self) {
        self.clear_result();

        match self.kind.format(&self.input) {
            Ok(output) => self.output = output,
            Err(err) => {
                debug!(error = %err, "format failed");
                self.error = Some(err.to_string());
            }
        }
    }

    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
        self.clear_result();
    }

    fn clear_result(&mut self) {
        self.output.clear();
        self.error = None;
        self.output_scroll = 0;
        self.copy_feedback.clear();
    }

    pub(crate) fn scroll_output(&mut self, delta: i32) {
        let lines = self.output.lines().count().min(u16::MAX as usize) as u16;
        let scroll = i32::from(self.output_scroll) + delta;
        self.output_scroll = scroll.clamp(0, i32::from(lines.saturating_sub(1))) as u16;
    }

    pub(crate) fn copy_text(&self, target: CopyTarget) -> Option<String> {
        match target {
            CopyTarget::FormattedOutput if !self.output.is_empty() => Some(self.output.clone()),
            _ => None,
        }
    }
}
