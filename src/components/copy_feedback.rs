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

use std::{sync::mpsc::Sender, time::Duration};

use crate::{clipboard::CopyTarget, events::AppEvent, util::timer::Transient};

/// How long a copy control shows its "copied" state.
pub(crate) const COPY_ACK_DURATION: Duration = Duration::from_millis(1200);

/// "Copied" acknowledgements, one per copy control.
///
/// Each control runs its own timer, so copying a second value leaves the
/// first one acknowledged until its own time is up.
#[derive(Default)]
pub(crate) struct CopyFeedback {
    acknowledged: Vec<(CopyTarget, Transient)>,
}

impl CopyFeedback {
    pub(crate) fn acknowledge(&mut self, target: CopyTarget, event_tx: &Sender<AppEvent>) {
        let index = match self.acknowledged.iter().position(|(t, _)| *t == target) {
            Some(index) => index,
            None => {
                self.acknowledged.push((target, Transient::default()));
                self.acknowledged.len() - 1
            }
        };

        self.acknowledged[index]
            .1
            .trigger(COPY_ACK_DURATION, event_tx, |generation| {
                AppEvent::CopyAckExpired { target, generation }
            });
    }

    pub(crate) fn expire(&mut self, target: CopyTarget, generation: u64) {
        if let Some((_, transient)) = self.acknowledged.iter_mut().find(|(t, _)| *t == target) {
            transient.expire(generation);
        }
    }

    pub(crate) fn is_copied(&self, target: CopyTarget) -> bool {
        self.acknowledged
            .iter()
            .any(|(t, transient)| *t == target && transient.is_active())
    }

    pub(crate) fn clear(&mut self) {
        self.acknowledged.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn acknowledgement_is_cleared_by_its_own_expiry() {
        let (tx, rx) = mpsc::channel();
        let mut feedback = CopyFeedback::default();

        feedback.acknowledge(CopyTarget::ConvertedTime, &tx);
        assert!(feedback.is_copied(CopyTarget::ConvertedTime));
        assert!(!feedback.is_copied(CopyTarget::DateEpochSeconds));

        let event = rx.recv_timeout(COPY_ACK_DURATION * 3).unwrap();
        let AppEvent::CopyAckExpired { target, generation } = event else {
            panic!("unexpected event {event:?}");
        };
        assert_eq!(target, CopyTarget::ConvertedTime);

        feedback.expire(target, generation);
        assert!(!feedback.is_copied(CopyTarget::ConvertedTime));
    }

    #[test]
    fn stale_expiry_keeps_the_newer_acknowledgement() {
        let (tx, _rx) = mpsc::channel();
        let mut feedback = CopyFeedback::default();

        feedback.acknowledge(CopyTarget::CurrentEpochSeconds, &tx);
        feedback.acknowledge(CopyTarget::CurrentEpochSeconds, &tx);

        // Generation 1 belonged to the first copy
        feedback.expire(CopyTarget::CurrentEpochSeconds, 1);
        assert!(feedback.is_copied(CopyTarget::CurrentEpochSeconds));

        feedback.expire(CopyTarget::CurrentEpochSeconds, 2);
        assert!(!feedback.is_copied(CopyTarget::CurrentEpochSeconds));
    }

    #[test]
    fn each_control_keeps_its_own_acknowledgement() {
        let (tx, _rx) = mpsc::channel();
        let mut feedback = CopyFeedback::default();

        feedback.acknowledge(CopyTarget::CurrentEpochSeconds, &tx);
        feedback.acknowledge(CopyTarget::CurrentEpochMillis, &tx);
        assert!(feedback.is_copied(CopyTarget::CurrentEpochSeconds));
        assert!(feedback.is_copied(CopyTarget::CurrentEpochMillis));

        feedback.expire(CopyTarget::CurrentEpochMillis, 1);
        assert!(feedback.is_copied(CopyTarget::CurrentEpochSeconds));
        assert!(!feedback.is_copied(CopyTarget::CurrentEpochMillis));

        feedback.expire(CopyTarget::CurrentEpochSeconds, 1);
        assert!(!feedback.is_copied(CopyTarget::CurrentEpochSeconds));
    }

    #[test]
    fn clear_drops_the_acknowledgement() {
        let (tx, _rx) = mpsc::channel();
        let mut feedback = CopyFeedback::default();

        feedback.acknowledge(CopyTarget::FormattedOutput, &tx);
        feedback.clear();
        assert!(!feedback.is_copied(CopyTarget::FormattedOutput));
    }
}
