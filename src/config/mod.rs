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

//! Application configuration.
//!
//! This module manages the application configuration file. The only value
//! persisted across runs is the user's explicit theme preference, accessed
//! through the [`PreferenceStore`] abstraction in [`store`].

mod store;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(crate) use store::{ConfyStore, MemoryStore, PreferenceStore, StoreError};

use crate::theme::ThemePreference;

pub(crate) const CONFIG_NAME: &str = "toolbelt";

const LOG_FILE: &str = "toolbelt.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) theme_preference: Option<ThemePreference>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            theme_preference: None,
        }
    }
}

/// Location of the configuration file for this application.
pub(crate) fn config_file_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
}

/// Location of the log file, kept alongside the configuration file.
pub(crate) fn log_file_path() -> Result<PathBuf, confy::ConfyError> {
    let config_path = config_file_path()?;
    Ok(config_path.with_file_name(LOG_FILE))
}

/// Opens the preference store backed by the configuration file.
///
/// If the configuration location cannot be determined the application still
/// runs, with a store that only lives for the current session.
pub(crate) fn open_preference_store() -> Box<dyn PreferenceStore> {
    match config_file_path() {
        Ok(path) => Box::new(ConfyStore::at(path)),
        Err(err) => {
            tracing::warn!(error = %err, "configuration unavailable, preferences will not persist");
            Box::new(MemoryStore::default())
        }
    }
}
