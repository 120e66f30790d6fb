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

//! Interactive tool views and their transient UI state.
//!
//! Each tool view owns its own state and splits its behaviour the same way:
//! `mod.rs` holds the state and operations, `event.rs` maps terminal input to
//! those operations, and `render.rs` draws the view.
//!
//! Views never send on the application channel from their key handlers.
//! Anything that needs the rest of the application is returned as a
//! [`ViewAction`] for the event loop to carry out.

mod copy_feedback;
mod epoch;
mod formatter;
mod toast;

pub(crate) use copy_feedback::CopyFeedback;
pub(crate) use epoch::{EpochFocus, EpochView};
pub(crate) use formatter::FormatterView;
pub(crate) use toast::Toast;

use crate::clipboard::CopyTarget;

/// Requests from a view that reach outside its own state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ViewAction {
    Copy(CopyTarget),
}
