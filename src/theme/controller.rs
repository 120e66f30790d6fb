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

//! Runtime ownership of the active theme.
//!
//! The [`ThemeController`] decides the starting preference, applies it, and
//! tells every registered [`ThemeListener`] whenever the theme is applied.
//! Listeners never need to know about each other, or about the controller.
//!
//! The starting preference is resolved in order:
//!
//! 1. An explicit choice previously saved in the [`PreferenceStore`].
//! 2. The terminal's dark-mode signal (`COLORFGBG`).
//! 3. [`ThemePreference::Dark`].
//!
//! A store that cannot be read skips the whole chain and starts dark.
//!
//! Saving is best-effort. A store failure is logged and otherwise ignored, so
//! the theme on screen is always the one the user asked for.

use tracing::{debug, warn};

use crate::{
    config::PreferenceStore,
    theme::{Theme, ThemePreference},
    util::term,
};

const COLORFGBG: &str = "COLORFGBG";

/// Observer notified each time a theme is applied.
pub(crate) trait ThemeListener {
    fn on_theme_changed(&self, theme: ThemePreference);
}

/// Paints the terminal emulator's own background to match the theme.
pub(crate) struct TerminalBackground;

impl ThemeListener for TerminalBackground {
    fn on_theme_changed(&self, theme: ThemePreference) {
        if let Some(hex) = Theme::to_hex(Theme::for_preference(theme).background_colour) {
            term::set_terminal_bg(&hex);
        }
    }
}

pub(crate) struct ThemeController {
    current: ThemePreference,
    palette: Theme,
    store: Box<dyn PreferenceStore>,
    listeners: Vec<Box<dyn ThemeListener>>,
}

impl ThemeController {
    /// Resolves the starting preference and applies it, notifying `listeners`
    /// straight away.
    pub(crate) fn initialize(
        store: Box<dyn PreferenceStore>,
        listeners: Vec<Box<dyn ThemeListener>>,
    ) -> Self {
        let preference = initial_theme(store.as_ref());
        Self::with_preference(store, preference, listeners)
    }

    pub(crate) fn with_preference(
        store: Box<dyn PreferenceStore>,
        preference: ThemePreference,
        listeners: Vec<Box<dyn ThemeListener>>,
    ) -> Self {
        let mut controller = Self {
            current: preference,
            palette: Theme::for_preference(preference),
            store,
            listeners,
        };
        controller.apply();
        controller
    }

    /// Registers a listener for subsequent changes.
    pub(crate) fn subscribe(&mut self, listener: Box<dyn ThemeListener>) {
        self.listeners.push(listener);
    }

    pub(crate) fn current(&self) -> ThemePreference {
        self.current
    }

    pub(crate) fn palette(&self) -> &Theme {
        &self.palette
    }

    pub(crate) fn toggle_label(&self) -> &'static str {
        self.current.toggle_label()
    }

    /// Switches to the other theme and saves it as the user's choice.
    pub(crate) fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.apply();
        self.persist();
        self.current
    }

    /// Applies and saves a theme given by name.
    ///
    /// Only `"dark"` and `"light"` are accepted, any other value is ignored
    /// without error.
    pub(crate) fn set_theme(&mut self, value: &str) {
        if let Ok(theme) = value.parse::<ThemePreference>() {
            self.current = theme;
            self.apply();
            self.persist();
        } else {
            debug!(value, "ignoring unknown theme");
        }
    }

    fn apply(&mut self) {
        self.palette = Theme::for_preference(self.current);

        for listener in &self.listeners {
            listener.on_theme_changed(self.current);
        }

        debug!(theme = %self.current, "theme applied");
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.current) {
            warn!(error = %err, "could not save theme preference");
        }
    }
}

/// Reads the theme to use before anything has been drawn.
///
/// This never fails. An unreadable store gives the dark theme.
pub(crate) fn initial_theme(store: &dyn PreferenceStore) -> ThemePreference {
    initial_theme_with(store, system_prefers_dark())
}

fn initial_theme_with(store: &dyn PreferenceStore, system_dark: Option<bool>) -> ThemePreference {
    match store.load() {
        Ok(saved) => resolve_preference(saved, system_dark),
        Err(err) => {
            warn!(error = %err, "could not read theme preference");
            ThemePreference::default()
        }
    }
}

fn resolve_preference(saved: Option<ThemePreference>, system_dark: Option<bool>) -> ThemePreference {
    match (saved, system_dark) {
        (Some(theme), _) => theme,
        (None, Some(true)) => ThemePreference::Dark,
        (None, Some(false)) => ThemePreference::Light,
        (None, None) => ThemePreference::default(),
    }
}

/// The terminal's dark-mode signal, if it advertises one.
fn system_prefers_dark() -> Option<bool> {
    std::env::var(COLORFGBG)
        .ok()
        .and_then(|value| prefers_dark_from_colorfgbg(&value))
}

// COLORFGBG is "fg;bg" or "fg;default;bg", using the 16 ANSI colour indices.
fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::config::{ConfyStore, MemoryStore, StoreError};

    /// Store whose contents stay visible to the test after being boxed.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl PreferenceStore for SharedStore {
        fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
            self.0.borrow().load()
        }

        fn save(&mut self, theme: ThemePreference) -> Result<(), StoreError> {
            self.0.borrow_mut().save(theme)
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<ThemePreference>>>);

    impl ThemeListener for Recorder {
        fn on_theme_changed(&self, theme: ThemePreference) {
            self.0.borrow_mut().push(theme);
        }
    }

    fn controller(preference: ThemePreference) -> (ThemeController, SharedStore, Recorder) {
        let store = SharedStore::default();
        let recorder = Recorder::default();
        let controller = ThemeController::with_preference(
            Box::new(store.clone()),
            preference,
            vec![Box::new(recorder.clone())],
        );
        (controller, store, recorder)
    }

    #[test]
    fn applying_notifies_listeners_immediately() {
        let (controller, store, recorder) = controller(ThemePreference::Light);

        assert_eq!(controller.current(), ThemePreference::Light);
        assert_eq!(controller.palette(), &Theme::light());
        assert_eq!(*recorder.0.borrow(), vec![ThemePreference::Light]);

        // Applying at start-up is not an explicit choice
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn toggle_flips_persists_and_notifies() {
        let (mut controller, store, recorder) = controller(ThemePreference::Dark);

        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.toggle_label(), "Switch to dark mode");
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Light));
        assert_eq!(
            *recorder.0.borrow(),
            vec![ThemePreference::Dark, ThemePreference::Light]
        );
    }

    #[test]
    fn double_toggle_returns_to_original_and_persists_it() {
        let (mut controller, store, _) = controller(ThemePreference::Dark);

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.current(), ThemePreference::Dark);
        assert_eq!(controller.palette(), &Theme::dark());
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Dark));
    }

    #[test]
    fn set_theme_accepts_valid_names() {
        let (mut controller, store, recorder) = controller(ThemePreference::Dark);

        controller.set_theme("light");

        assert_eq!(controller.current(), ThemePreference::Light);
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Light));
        assert_eq!(recorder.0.borrow().last(), Some(&ThemePreference::Light));
    }

    #[test]
    fn set_theme_silently_ignores_invalid_names() {
        let (mut controller, store, recorder) = controller(ThemePreference::Dark);

        controller.set_theme("solarized");
        controller.set_theme("LIGHT");
        controller.set_theme("");

        assert_eq!(controller.current(), ThemePreference::Dark);
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn failed_save_keeps_the_new_theme() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = ConfyStore::at(blocker.join("toolbelt.toml"));

        let recorder = Recorder::default();
        let mut controller = ThemeController::with_preference(
            Box::new(store),
            ThemePreference::Dark,
            vec![Box::new(recorder.clone())],
        );

        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.current(), ThemePreference::Light);
        assert_eq!(controller.palette(), &Theme::light());
        assert_eq!(recorder.0.borrow().last(), Some(&ThemePreference::Light));
    }

    #[test]
    fn subscribers_only_see_later_changes() {
        let (mut controller, _, _) = controller(ThemePreference::Dark);
        let late = Recorder::default();

        controller.subscribe(Box::new(late.clone()));
        assert!(late.0.borrow().is_empty());

        controller.toggle();
        assert_eq!(*late.0.borrow(), vec![ThemePreference::Light]);
    }

    #[test]
    fn saved_preference_wins_over_system_signal() {
        assert_eq!(
            resolve_preference(Some(ThemePreference::Light), Some(true)),
            ThemePreference::Light
        );
        assert_eq!(
            resolve_preference(Some(ThemePreference::Dark), Some(false)),
            ThemePreference::Dark
        );
    }

    #[test]
    fn system_signal_wins_over_default() {
        assert_eq!(resolve_preference(None, Some(false)), ThemePreference::Light);
        assert_eq!(resolve_preference(None, Some(true)), ThemePreference::Dark);
        assert_eq!(resolve_preference(None, None), ThemePreference::Dark);
    }

    #[test]
    fn initial_theme_prefers_saved_value() {
        let mut store = MemoryStore::default();
        store.save(ThemePreference::Light).unwrap();

        assert_eq!(initial_theme(&store), ThemePreference::Light);
    }

    #[test]
    fn initial_theme_follows_system_signal_when_nothing_saved() {
        let store = MemoryStore::default();

        assert_eq!(initial_theme_with(&store, Some(false)), ThemePreference::Light);
        assert_eq!(initial_theme_with(&store, None), ThemePreference::Dark);
    }

    #[test]
    fn unreadable_store_starts_dark_whatever_the_system_signal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbelt.toml");
        std::fs::write(&path, "theme_preference = [not toml").unwrap();
        let store = ConfyStore::at(path);
        assert!(store.load().is_err());

        assert_eq!(initial_theme_with(&store, Some(false)), ThemePreference::Dark);
        assert_eq!(initial_theme_with(&store, Some(true)), ThemePreference::Dark);
    }

    #[test]
    fn colorfgbg_parsing() {
        assert_eq!(prefers_dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(prefers_dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(prefers_dark_from_colorfgbg("0;7"), Some(false));
        assert_eq!(prefers_dark_from_colorfgbg("15;default;8"), Some(true));
        assert_eq!(prefers_dark_from_colorfgbg("15;default"), None);
        assert_eq!(prefers_dark_from_colorfgbg(""), None);
    }
}
