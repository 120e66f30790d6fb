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

//! Pretty-printing of structured text.
//!
//! Both formatters indent with four spaces per level and report malformed
//! input as a [`FormatError`], whose display form is the message shown to the
//! user (`Invalid JSON: ...` or `Invalid XML: ...`).

mod json;
mod xml;

use thiserror::Error;

pub(crate) use json::format_json;
pub(crate) use xml::format_xml;

const INDENT: &str = "    ";

/// The kinds of text that can be formatted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum FormatKind {
    #[default]
    Json,
    Xml,
}

impl FormatKind {
    pub(crate) fn toggled(self) -> Self {
        match self {
            FormatKind::Json => FormatKind::Xml,
            FormatKind::Xml => FormatKind::Json,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            FormatKind::Json => "JSON",
            FormatKind::Xml => "XML",
        }
    }

    pub(crate) fn placeholder(self) -> String {
        format!("Paste {} here...", self.label())
    }

    pub(crate) fn format(self, text: &str) -> Result<String, FormatError> {
        match self {
            FormatKind::Json => format_json(text),
            FormatKind::Xml => format_xml(text),
        }
    }
}

/// Malformed input, carrying the parser's own message.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum FormatError {
    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Invalid XML: {0}")]
    Xml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_names_the_format() {
        assert_eq!(FormatKind::Json.placeholder(), "Paste JSON here...");
        assert_eq!(FormatKind::Xml.placeholder(), "Paste XML here...");
    }

    #[test]
    fn errors_display_with_prefix() {
        let err = FormatError::Json("expected value at line 1 column 6".to_string());
        assert_eq!(err.to_string(), "Invalid JSON: expected value at line 1 column 6");

        let err = FormatError::Xml("no root element".to_string());
        assert_eq!(err.to_string(), "Invalid XML: no root element");
    }

    #[test]
    fn kind_dispatches_to_its_formatter() {
        assert_eq!(FormatKind::Json.format("[1]").unwrap(), "[\n    1\n]");
        assert_eq!(FormatKind::Xml.format("<a/>").unwrap(), "<a/>");
        assert!(matches!(FormatKind::Xml.format("[1]"), Err(FormatError::Xml(_))));
    }
}
