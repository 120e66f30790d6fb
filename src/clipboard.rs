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

//! System clipboard access.
//!
//! Copying is attempted in two stages:
//!
//! 1. **Platform**: the text is piped into the first clipboard tool that can
//!    be started (`pbcopy`, `wl-copy`, `xclip`, `xsel`, `clip.exe`). This may
//!    block briefly, so it runs on the task worker.
//! 2. **Fallback**: an OSC 52 escape sequence asks the terminal emulator to set
//!    the clipboard itself. This is written from the UI thread, since it shares
//!    `stdout` with the renderer.

use std::{
    io::{self, Write},
    process::{Command, ExitStatus, Stdio},
};

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::util::term;

/// Identifies each value the user can copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CopyTarget {
    CurrentEpochSeconds,
    CurrentEpochMillis,
    ConvertedTime,
    DateEpochSeconds,
    DateEpochMillis,
    FormattedOutput,
}

#[derive(Debug, Error)]
pub(crate) enum ClipboardError {
    #[error("no clipboard tool is available")]
    Unavailable,

    #[error("`{tool}` exited with {status}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
    },

    #[error("clipboard i/o failed: {0}")]
    Io(#[from] io::Error),
}

struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "clip.exe",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
    ClipboardTool {
        program: "clip.exe",
        args: &[],
    },
];

/// Copies `text` using a platform clipboard tool, returning the tool's name.
///
/// Tools that are not installed are skipped. The error from the last tool
/// that could be started is returned if none succeed.
pub(crate) fn copy_with_platform(text: &str) -> Result<&'static str, ClipboardError> {
    let mut last_error = ClipboardError::Unavailable;

    for tool in TOOLS {
        match run_tool(tool, text) {
            Ok(()) => return Ok(tool.program),
            Err(ClipboardError::Io(err)) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => last_error = err,
        }
    }

    Err(last_error)
}

fn run_tool(tool: &ClipboardTool, text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
        // Dropping stdin closes the pipe so the tool sees end of input
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::ToolFailed {
            tool: tool.program,
            status,
        })
    }
}

/// Builds the body of an OSC 52 "set clipboard" sequence.
pub(crate) fn osc52_body(text: &str) -> String {
    format!("52;c;{}", STANDARD.encode(text))
}

/// Asks the terminal emulator to place `text` on the clipboard.
pub(crate) fn copy_with_osc52(text: &str) -> Result<(), ClipboardError> {
    term::write_osc(&osc52_body(text))?;
    Ok(())
}
