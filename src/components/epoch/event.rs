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

//! Input handling for the epoch converter.
//!
//! While neither input has focus, single keys act as shortcuts. Once an input
//! has focus every key edits it, until `Esc` or `Enter` gives focus back.

use chrono::{DateTime, Utc};
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    clipboard::CopyTarget,
    components::{EpochFocus, EpochView, ViewAction},
};

impl EpochView {
    pub(crate) fn process_event(&mut self, event: &Event, now: DateTime<Utc>) -> Option<ViewAction> {
        match self.focus {
            EpochFocus::None => self.process_shortcut(event, now),
            EpochFocus::EpochInput | EpochFocus::DateInput => {
                self.edit_focused_input(event, now);
                None
            }
        }
    }

    fn process_shortcut(&mut self, event: &Event, now: DateTime<Utc>) -> Option<ViewAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('e') | KeyCode::Tab | KeyCode::Enter => {
                    self.focus = EpochFocus::EpochInput
                }
                KeyCode::Char('d') | KeyCode::BackTab => self.focus = EpochFocus::DateInput,

                KeyCode::Char('u') => self.toggle_timezone_mode(now),
                KeyCode::Char('n') => self.set_date_to_now(now),

                KeyCode::Char('s') => return Some(ViewAction::Copy(CopyTarget::CurrentEpochSeconds)),
                KeyCode::Char('m') => return Some(ViewAction::Copy(CopyTarget::CurrentEpochMillis)),
                KeyCode::Char('c') => return Some(ViewAction::Copy(CopyTarget::ConvertedTime)),
                KeyCode::Char('y') => return Some(ViewAction::Copy(CopyTarget::DateEpochSeconds)),
                KeyCode::Char('Y') => return Some(ViewAction::Copy(CopyTarget::DateEpochMillis)),

                _ => {}
            },

            // Pasting without focus goes to the epoch input
            Event::Paste(_) => {
                self.focus = EpochFocus::EpochInput;
                self.edit_focused_input(event, now);
            }

            _ => {}
        }

        None
    }

    fn edit_focused_input(&mut self, event: &Event, now: DateTime<Utc>) {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.focus = EpochFocus::None;
                    return;
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    self.focus = match self.focus {
                        EpochFocus::EpochInput => EpochFocus::DateInput,
                        _ => EpochFocus::EpochInput,
                    };
                    return;
                }
                _ => {}
            }
        }

        let input = match self.focus {
            EpochFocus::EpochInput => &mut self.epoch_input,
            EpochFocus::DateInput => &mut self.date_input,
            EpochFocus::None => return,
        };

        match event {
            Event::Paste(text) => {
                let value = format!("{}{}", input.value(), text.trim());
                *input = Input::new(value);
            }
            _ => {
                input.handle_event(event);
            }
        }

        match self.focus {
            EpochFocus::EpochInput => self.handle_epoch_input(now),
            EpochFocus::DateInput => self.handle_date_input(),
            EpochFocus::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{epoch::TimezoneMode, theme::ThemePreference};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn typing_into_focused_epoch_input() {
        let mut view = EpochView::new(ThemePreference::Dark, now());

        assert_eq!(view.process_event(&key(KeyCode::Char('e')), now()), None);
        assert_eq!(view.focus, EpochFocus::EpochInput);

        for c in "17x0".chars() {
            view.process_event(&key(KeyCode::Char(c)), now());
        }
        assert_eq!(view.epoch_input.value(), "170");
        assert!(view.epoch_result.is_some());

        view.process_event(&key(KeyCode::Backspace), now());
        assert_eq!(view.epoch_input.value(), "17");

        view.process_event(&key(KeyCode::Esc), now());
        assert!(!view.is_editing());
    }

    #[test]
    fn shortcut_letters_are_typed_while_editing() {
        let mut view = EpochView::new(ThemePreference::Dark, now());
        view.focus = EpochFocus::DateInput;
        view.date_input = Input::default();

        for c in "2023-11-14T22:13".chars() {
            assert_eq!(view.process_event(&key(KeyCode::Char(c)), now()), None);
        }
        assert_eq!(view.date_input.value(), "2023-11-14T22:13");
        assert!(view.date_result.is_some());

        view.process_event(&key(KeyCode::Char('u')), now());
        assert_eq!(view.date_input.value(), "2023-11-14T22:13u");
        assert_eq!(view.date_result, None);
        assert_eq!(view.mode, TimezoneMode::Local);
    }

    #[test]
    fn tab_moves_between_inputs() {
        let mut view = EpochView::new(ThemePreference::Dark, now());

        view.process_event(&key(KeyCode::Tab), now());
        assert_eq!(view.focus, EpochFocus::EpochInput);
        view.process_event(&key(KeyCode::Tab), now());
        assert_eq!(view.focus, EpochFocus::DateInput);
        view.process_event(&key(KeyCode::Enter), now());
        assert_eq!(view.focus, EpochFocus::None);
    }

    #[test]
    fn copy_shortcuts_return_actions() {
        let mut view = EpochView::new(ThemePreference::Dark, now());

        assert_eq!(
            view.process_event(&key(KeyCode::Char('s')), now()),
            Some(ViewAction::Copy(CopyTarget::CurrentEpochSeconds))
        );
        assert_eq!(
            view.process_event(&key(KeyCode::Char('Y')), now()),
            Some(ViewAction::Copy(CopyTarget::DateEpochMillis))
        );
    }

    #[test]
    fn timezone_shortcut_toggles_mode() {
        let mut view = EpochView::new(ThemePreference::Dark, now());

        view.process_event(&key(KeyCode::Char('u')), now());
        assert_eq!(view.mode, TimezoneMode::Utc);
    }

    #[test]
    fn paste_goes_to_epoch_input() {
        let mut view = EpochView::new(ThemePreference::Dark, now());

        view.process_event(&Event::Paste(" 1,700,000,000\n".to_string()), now());
        assert_eq!(view.focus, EpochFocus::EpochInput);
        assert_eq!(view.epoch_input.value(), "1700000000");
    }
}
