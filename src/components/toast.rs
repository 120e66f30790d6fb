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

//! Short-lived notification drawn over the top right of the screen.

use std::{sync::mpsc::Sender, time::Duration};

use crate::{events::AppEvent, util::timer::Transient};

pub(crate) const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A single toast. Showing a new message replaces the current one and
/// restarts the hide timer.
#[derive(Default)]
pub(crate) struct Toast {
    message: String,
    transient: Transient,
}

impl Toast {
    pub(crate) fn show(&mut self, message: impl Into<String>, event_tx: &Sender<AppEvent>) {
        self.message = message.into();
        self.transient
            .trigger(TOAST_DURATION, event_tx, AppEvent::ToastExpired);
    }

    pub(crate) fn expire(&mut self, generation: u64) {
        if self.transient.expire(generation) {
            self.message.clear();
        }
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.transient.is_active()
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn hide(&mut self) {
        self.transient.cancel();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn latest_toast_wins() {
        let (tx, _rx) = mpsc::channel();
        let mut toast = Toast::default();

        toast.show("Copied to clipboard", &tx);
        toast.show("Something else", &tx);

        // The first hide timer was replaced, so its expiry is ignored
        toast.expire(1);
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "Something else");

        toast.expire(2);
        assert!(!toast.is_visible());
        assert_eq!(toast.message(), "");
    }

    #[test]
    fn hide_timer_posts_expiry() {
        let (tx, rx) = mpsc::channel();
        let mut toast = Toast::default();

        toast.show("Copied to clipboard", &tx);
        let event = rx.recv_timeout(TOAST_DURATION * 2).unwrap();
        assert!(matches!(event, AppEvent::ToastExpired(1)));
    }

    #[test]
    fn hide_cancels_the_timer() {
        let (tx, rx) = mpsc::channel();
        let mut toast = Toast::default();

        toast.show("Copied to clipboard", &tx);
        toast.hide();
        assert!(!toast.is_visible());
        assert!(rx.recv_timeout(TOAST_DURATION + Duration::from_millis(500)).is_err());
    }
}
