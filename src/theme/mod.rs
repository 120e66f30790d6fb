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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the two colour palettes the application can show, the
//! [`ThemePreference`] that selects between them, and utilities for converting
//! colors between Ratatui's internal representation and external formats
//! (such as hexadecimal strings) used for terminal emulator styling.
//!
//! The [`controller`] sub-module owns the active preference at runtime.

mod controller;

use std::{fmt, str::FromStr};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) use controller::{
    TerminalBackground, ThemeController, ThemeListener, initial_theme,
};

/// The user's theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemePreference {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown theme `{0}`")]
pub(crate) struct UnknownThemeError(String);

impl ThemePreference {
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Label for the toggle control, describing what activating it will do.
    pub(crate) fn toggle_label(self) -> &'static str {
        match self {
            ThemePreference::Dark => "Switch to light mode",
            ThemePreference::Light => "Switch to dark mode",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(UnknownThemeError(other.to_string())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) surface_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) success_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub(crate) const fn dark() -> Self {
        Self {
            background_colour: Color::Rgb(30, 30, 46),
            surface_colour: Color::Rgb(49, 50, 68),
            text_colour: Color::Rgb(205, 214, 244),
            muted_colour: Color::Rgb(147, 153, 178),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            error_colour: Color::Rgb(243, 139, 168),
            success_colour: Color::Rgb(166, 227, 161),
        }
    }

    pub(crate) const fn light() -> Self {
        Self {
            background_colour: Color::Rgb(239, 241, 245),
            surface_colour: Color::Rgb(220, 224, 232),
            text_colour: Color::Rgb(76, 79, 105),
            muted_colour: Color::Rgb(124, 127, 147),
            accent_colour: Color::Rgb(223, 142, 29),
            border_colour: Color::Rgb(172, 176, 190),
            error_colour: Color::Rgb(210, 15, 57),
            success_colour: Color::Rgb(64, 160, 43),
        }
    }

    pub(crate) const fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only `Rgb` colours have a hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_exact_names() {
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert!("blue".parse::<ThemePreference>().is_err());
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(ThemePreference::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(ThemePreference::Light.toggle_label(), "Switch to dark mode");
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::to_hex(Color::Rgb(30, 30, 46)).as_deref(), Some("#1e1e2e"));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
