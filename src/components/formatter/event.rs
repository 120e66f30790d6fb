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

//! Input handling for the formatter.
//!
//! The input pane is a plain multi-line buffer. While editing, `Enter` adds a
//! newline, `Ctrl+F` formats and `Esc` stops editing. Outside of editing,
//! single keys select the format, format, copy and scroll the output.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    clipboard::CopyTarget,
    components::{FormatterView, ViewAction},
    format::FormatKind,
};

const SCROLL_PAGE: i32 = 10;

impl FormatterView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ViewAction> {
        if let Event::Paste(text) = event {
            self.editing = true;
            self.input.push_str(text);
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        if self.editing {
            match (key_event.code, key_event.modifiers) {
                (KeyCode::Esc, _) => self.editing = false,
                (KeyCode::Char('f'), KeyModifiers::CONTROL) => self.run_format(),
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.clear_input(),
                (KeyCode::Enter, _) => self.input.push('\n'),
                (KeyCode::Tab, _) => self.input.push('\t'),
                (KeyCode::Backspace, _) => {
                    self.input.pop();
                }
                (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input.push(c)
                }
                _ => {}
            }
            return None;
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('i'), _) | (KeyCode::Char('e'), _) => self.editing = true,
            (KeyCode::Char('f'), _) | (KeyCode::Enter, _) => self.run_format(),
            (KeyCode::Char('x'), KeyModifiers::NONE) => self.select_kind(self.kind.toggled()),
            (KeyCode::Char('J'), _) => self.select_kind(FormatKind::Json),
            (KeyCode::Char('X'), _) => self.select_kind(FormatKind::Xml),
            (KeyCode::Char('c'), _) => self.clear_input(),
            (KeyCode::Char('y'), _) => return Some(ViewAction::Copy(CopyTarget::FormattedOutput)),

            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.scroll_output(1),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.scroll_output(-1),
            (KeyCode::PageDown, _) => self.scroll_output(SCROLL_PAGE),
            (KeyCode::PageUp, _) => self.scroll_output(-SCROLL_PAGE),
            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn typing_builds_multi_line_input() {
        let mut view = FormatterView::new();

        view.process_event(&key(KeyCode::Char('i')));
        assert!(view.editing);

        for c in "[1,".chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
        view.process_event(&key(KeyCode::Enter));
        for c in "2]x".chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
        view.process_event(&key(KeyCode::Backspace));
        assert_eq!(view.input, "[1,\n2]");

        view.process_event(&ctrl('f'));
        assert_eq!(view.output, "[\n    1,\n    2\n]");
        assert!(view.editing);

        view.process_event(&key(KeyCode::Esc));
        assert!(!view.editing);
    }

    #[test]
    fn paste_appends_and_starts_editing() {
        let mut view = FormatterView::new();

        view.process_event(&Event::Paste("<a>\n<b/></a>".to_string()));
        assert!(view.editing);
        assert_eq!(view.input, "<a>\n<b/></a>");
    }

    #[test]
    fn ctrl_u_clears_input() {
        let mut view = FormatterView::new();
        view.editing = true;
        view.input = "{}".to_string();

        view.process_event(&ctrl('u'));
        assert_eq!(view.input, "");
    }

    #[test]
    fn x_toggles_format_outside_editing() {
        let mut view = FormatterView::new();

        view.process_event(&key(KeyCode::Char('x')));
        assert_eq!(view.kind, FormatKind::Xml);
        assert_eq!(view.placeholder, "Paste XML here...");

        view.process_event(&key(KeyCode::Char('x')));
        assert_eq!(view.kind, FormatKind::Json);
    }

    #[test]
    fn y_requests_copy_of_output() {
        let mut view = FormatterView::new();
        assert_eq!(
            view.process_event(&key(KeyCode::Char('y'))),
            Some(ViewAction::Copy(CopyTarget::FormattedOutput))
        );
    }
}
