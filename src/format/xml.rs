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

//! XML pretty-printer.
//!
//! The document is first read into a small element tree with `quick-xml`,
//! which also rejects anything that is not well-formed. The tree is then
//! printed from the root element down:
//!
//! * An element with child elements is printed as an opening tag, each child
//!   one level deeper, then a closing tag. Text between child elements is
//!   printed trimmed on its own line; whitespace-only text is dropped.
//! * An element whose only child is a text node is printed on one line as
//!   `<tag>text</tag>`, with the text trimmed.
//! * An element with no child elements and no text is self-closing.
//!
//! Attributes are printed in source order, and both attribute values and
//! text are printed unescaped. Comments, processing instructions and the
//! XML declaration are not printed.

use std::fmt::{Display, Write};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::format::{FormatError, INDENT};

#[derive(Debug)]
enum XmlNode {
    Element(XmlElement),
    Text(String),
    Other,
}

#[derive(Debug)]
struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    fn has_child_elements(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, XmlNode::Element(_)))
    }

    /// Text for the one-line form, or `None` if the element has no text.
    fn inline_text(&self) -> Option<String> {
        if let [XmlNode::Text(text)] = self.children.as_slice() {
            return Some(text.trim().to_string());
        }

        // Text split up by comments or CDATA sections still counts
        let text: String = self
            .children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();

        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn open_tag(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for (name, value) in &self.attributes {
            let _ = write!(tag, " {}=\"{}\"", name, value);
        }
        tag
    }
}

/// Re-indents an XML document with four spaces per nesting level.
pub(crate) fn format_xml(text: &str) -> Result<String, FormatError> {
    let root = parse_document(text)?;

    let mut out = String::with_capacity(text.len() * 2);
    render_element(&root, 0, &mut out);

    Ok(out.trim().to_string())
}

fn render_element(element: &XmlElement, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    let open_tag = element.open_tag();

    if element.has_child_elements() {
        let _ = writeln!(out, "{indent}{open_tag}>");

        for child in &element.children {
            match child {
                XmlNode::Element(child) => render_element(child, depth + 1, out),
                XmlNode::Text(text) => render_text(text, depth + 1, out),
                XmlNode::Other => {}
            }
        }

        let _ = writeln!(out, "{indent}</{}>", element.name);
    } else if let Some(text) = element.inline_text() {
        let _ = writeln!(out, "{indent}{open_tag}>{text}</{}>", element.name);
    } else {
        let _ = writeln!(out, "{indent}{open_tag}/>");
    }
}

fn render_text(text: &str, depth: usize, out: &mut String) {
    let text = text.trim();
    if !text.is_empty() {
        let _ = writeln!(out, "{}{}", INDENT.repeat(depth), text);
    }
}

fn parse_document(text: &str) -> Result<XmlElement, FormatError> {
    let mut reader = Reader::from_str(text);

    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| positioned(&reader, err))?;

        match event {
            Event::Start(start) => {
                if open.is_empty() && root.is_some() {
                    return Err(positioned(&reader, "junk after document element"));
                }
                open.push(element_from(&start)?);
            }

            Event::Empty(start) => {
                let element = element_from(&start)?;
                close_element(&mut open, &mut root, element)
                    .map_err(|err| positioned(&reader, err))?;
            }

            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                let element = match open.pop() {
                    Some(element) if element.name == name => element,
                    Some(element) => {
                        return Err(positioned(
                            &reader,
                            format!("expected </{}>, found </{}>", element.name, name),
                        ));
                    }
                    None => {
                        return Err(positioned(&reader, format!("unexpected </{}>", name)));
                    }
                };
                close_element(&mut open, &mut root, element)
                    .map_err(|err| positioned(&reader, err))?;
            }

            Event::Text(text) => {
                let text = text.unescape().map_err(|err| positioned(&reader, err))?;
                add_text(&mut open, &text).map_err(|err| positioned(&reader, err))?;
            }

            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                add_text(&mut open, &text).map_err(|err| positioned(&reader, err))?;
            }

            Event::Comment(_) | Event::PI(_) => {
                if let Some(parent) = open.last_mut() {
                    parent.children.push(XmlNode::Other);
                }
            }

            Event::Decl(_) | Event::DocType(_) => {}

            Event::Eof => break,
        }
    }

    if let Some(element) = open.last() {
        return Err(FormatError::Xml(format!("unclosed element <{}>", element.name)));
    }

    root.ok_or_else(|| FormatError::Xml("no root element found".to_string()))
}

fn element_from(start: &BytesStart<'_>) -> Result<XmlElement, FormatError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| FormatError::Xml(err.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| FormatError::Xml(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn close_element(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), &'static str> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(XmlNode::Element(element));
        Ok(())
    } else if root.is_some() {
        Err("junk after document element")
    } else {
        *root = Some(element);
        Ok(())
    }
}

fn add_text(open: &mut [XmlElement], text: &str) -> Result<(), &'static str> {
    match open.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Text(text.to_string()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err("text outside the document element"),
    }
}

fn positioned(reader: &Reader<&[u8]>, message: impl Display) -> FormatError {
    FormatError::Xml(format!("{} at position {}", message, reader.buffer_position()))
}
