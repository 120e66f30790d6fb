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

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    clipboard::{self, CopyTarget},
    events::AppEvent,
    tasks::TaskContext,
};

/// Tries the platform clipboard. On failure the text is handed back to the UI
/// thread, which owns the terminal and can use the escape sequence fallback.
pub(super) fn copy_to_clipboard(ctx: &TaskContext, target: CopyTarget, text: String) -> Result<()> {
    match clipboard::copy_with_platform(&text) {
        Ok(tool) => {
            debug!(tool, ?target, "copied with platform clipboard");
            ctx.event_tx.send(AppEvent::CopySucceeded(target))?;
        }
        Err(err) => {
            warn!(error = %err, "platform clipboard unavailable, falling back to terminal");
            ctx.event_tx.send(AppEvent::CopyFallback { target, text })?;
        }
    }

    Ok(())
}
