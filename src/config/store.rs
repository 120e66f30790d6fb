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

//! Theme preference persistence.

use std::path::PathBuf;

use thiserror::Error;

use crate::{config::AppConfig, theme::ThemePreference};

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("configuration error: {0}")]
    Config(#[from] confy::ConfyError),
}

/// Durable storage for the user's explicit theme choice.
///
/// A store never deletes a preference, it is only ever overwritten.
pub(crate) trait PreferenceStore {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError>;

    fn save(&mut self, theme: ThemePreference) -> Result<(), StoreError>;
}

/// Stores the preference in the `confy` configuration file.
pub(crate) struct ConfyStore {
    path: PathBuf,
}

impl ConfyStore {
    pub(crate) fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferenceStore for ConfyStore {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        let config: AppConfig = confy::load_path(&self.path)?;
        Ok(config.theme_preference)
    }

    fn save(&mut self, theme: ThemePreference) -> Result<(), StoreError> {
        // An unreadable file is replaced rather than blocking the save
        let mut config: AppConfig = confy::load_path(&self.path).unwrap_or_default();
        config.theme_preference = Some(theme);
        confy::store_path(&self.path, config)?;
        Ok(())
    }
}

/// Session-only store, used when no configuration location is available.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    theme: Option<ThemePreference>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        Ok(self.theme)
    }

    fn save(&mut self, theme: ThemePreference) -> Result<(), StoreError> {
        self.theme = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confy_store_round_trips_preference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbelt.toml");

        let mut store = ConfyStore::at(path.clone());
        assert_eq!(store.load().unwrap(), None);

        store.save(ThemePreference::Light).unwrap();
        assert_eq!(ConfyStore::at(path.clone()).load().unwrap(), Some(ThemePreference::Light));

        store.save(ThemePreference::Dark).unwrap();
        assert_eq!(ConfyStore::at(path).load().unwrap(), Some(ThemePreference::Dark));
    }

    #[test]
    fn confy_store_writes_lowercase_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbelt.toml");

        ConfyStore::at(path.clone()).save(ThemePreference::Light).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("theme_preference = \"light\""), "{contents}");
    }

    #[test]
    fn confy_store_reports_unwritable_location() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = ConfyStore::at(blocker.join("toolbelt.toml"));
        assert!(store.save(ThemePreference::Light).is_err());
    }

    #[test]
    fn memory_store_starts_empty() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), None);

        store.save(ThemePreference::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Dark));
    }
}
