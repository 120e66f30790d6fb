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

//! Asynchronous application task processing.
//!
//! This module offloads work that may block from the main UI thread. It
//! provides a dedicated worker loop that carries out [`AppTask`] requests and
//! reports the results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{clipboard::CopyTarget, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    CopyToClipboard { target: CopyTarget, text: String },
}

/// Spawns a background thread to process application tasks.
///
/// The worker runs until every sender for `task_rx` has been dropped.
///
/// # Arguments
///
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::CopyToClipboard { target, text } => copy_to_clipboard(ctx, target, text),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::*;

    #[test]
    fn copy_task_always_reports_back() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(task_rx, event_tx);

        task_tx
            .send(AppTask::CopyToClipboard {
                target: CopyTarget::ConvertedTime,
                text: "Tue, 11/14/2023, 22:13:20".to_string(),
            })
            .unwrap();

        // Which event depends on the tools installed on this machine
        match event_rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            AppEvent::CopySucceeded(target) => assert_eq!(target, CopyTarget::ConvertedTime),
            AppEvent::CopyFallback { target, text } => {
                assert_eq!(target, CopyTarget::ConvertedTime);
                assert_eq!(text, "Tue, 11/14/2023, 22:13:20");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
