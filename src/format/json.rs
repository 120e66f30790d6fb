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

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::format::{FormatError, INDENT};

/// Re-serializes JSON text with four-space indentation.
///
/// Object keys keep their source order. On malformed input the parser's
/// message is returned unchanged.
pub(crate) fn format_json(text: &str) -> Result<String, FormatError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| FormatError::Json(err.to_string()))?;

    let mut out = Vec::with_capacity(text.len() * 2);
    let formatter = PrettyFormatter::with_indent(INDENT.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| FormatError::Json(err.to_string()))?;

    String::from_utf8(out).map_err(|err| FormatError::Json(err.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indents_with_four_spaces() {
        let formatted = format_json(r#"{"a":1,"b":[true,null]}"#).unwrap();
        assert_eq!(
            formatted,
            "{\n    \"a\": 1,\n    \"b\": [\n        true,\n        null\n    ]\n}"
        );
    }

    #[test]
    fn keeps_source_key_order() {
        let formatted = format_json(r#"{"zebra":1,"apple":2,"mango":3}"#).unwrap();
        assert_eq!(
            formatted,
            "{\n    \"zebra\": 1,\n    \"apple\": 2,\n    \"mango\": 3\n}"
        );
    }

    #[test]
    fn empty_containers_stay_inline() {
        assert_eq!(format_json("{ }").unwrap(), "{}");
        assert_eq!(format_json("[\n]").unwrap(), "[]");
    }

    #[test]
    fn scalars_format_as_themselves() {
        assert_eq!(format_json(" \"text\" ").unwrap(), "\"text\"");
        assert_eq!(format_json("42").unwrap(), "42");
    }

    #[test]
    fn floats_keep_a_fractional_part() {
        let formatted = format_json(r#"[1.0,-1.5e3,2.5,12345678901234567890]"#).unwrap();
        assert_eq!(
            formatted,
            "[\n    1.0,\n    -1500.0,\n    2.5,\n    12345678901234567890\n]"
        );
    }

    #[test]
    fn out_of_range_numbers_are_malformed() {
        let err = format_json("[1e400]").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON: "), "{err}");
    }

    #[test]
    fn formatted_output_parses_to_the_same_value() {
        let inputs = [
            r#"{"a":{"b":{"c":[1,2,{"d":"e"}]}},"f":-1.5e3,"g":"é\n"}"#,
            r#"[[],{},"",0,false]"#,
            r#"{"dup":1,"dup":2}"#,
        ];

        for input in inputs {
            let formatted = format_json(input).unwrap();
            let original: Value = serde_json::from_str(input).unwrap();
            let reparsed: Value = serde_json::from_str(&formatted).unwrap();
            assert_eq!(original, reparsed, "{input}");
        }
    }

    #[test]
    fn malformed_input_reports_parser_message() {
        let err = format_json(r#"{"a":}"#).unwrap_err();
        let parser_message = serde_json::from_str::<Value>(r#"{"a":}"#)
            .unwrap_err()
            .to_string();

        assert_eq!(err, FormatError::Json(parser_message));
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(format_json("").is_err());
    }
}
