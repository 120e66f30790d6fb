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

//! Cancellable timers that post events into a channel.
//!
//! Each timer runs on its own background thread and sleeps by waiting on a
//! private cancellation channel. Cancelling a timer, or simply dropping its
//! handle, disconnects that channel and wakes the thread so that it exits
//! without posting anything further.
//!
//! * [`Interval`] posts an event repeatedly at a fixed period.
//! * [`Timeout`] posts a single event after a delay.
//! * [`Transient`] manages a replaceable [`Timeout`] for short-lived UI state
//!   such as toasts, where the most recent trigger always wins.

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

/// A recurring timer.
pub(crate) struct Interval {
    cancel_tx: Option<Sender<()>>,
}

impl Interval {
    /// Spawns a timer thread that sends `make_event()` every `period`.
    ///
    /// The thread stops when the interval is cancelled or dropped, or when the
    /// receiving end of `event_tx` has gone away.
    pub(crate) fn spawn<E, F>(period: Duration, event_tx: Sender<E>, make_event: F) -> Self
    where
        E: Send + 'static,
        F: Fn() -> E + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if event_tx.send(make_event()).is_err() {
                            break;
                        }
                    }
                    _ => break,
                }
            }
        });

        Self {
            cancel_tx: Some(cancel_tx),
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.cancel_tx.take();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.cancel_tx.is_some()
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A one-shot timer.
pub(crate) struct Timeout {
    cancel_tx: Option<Sender<()>>,
}

impl Timeout {
    /// Spawns a timer thread that sends `event` once, after `delay`, unless
    /// cancelled first.
    pub(crate) fn spawn<E>(delay: Duration, event_tx: Sender<E>, event: E) -> Self
    where
        E: Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                let _ = event_tx.send(event);
            }
        });

        Self {
            cancel_tx: Some(cancel_tx),
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.cancel_tx.take();
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Replaceable one-shot state with generation tracking.
///
/// Every [`trigger`](Transient::trigger) cancels the pending timeout and
/// starts a new one tagged with a fresh generation number. An expiry event
/// only takes effect when its generation matches the latest trigger, which
/// makes a late event from a timer that was already replaced harmless.
#[derive(Default)]
pub(crate) struct Transient {
    generation: u64,
    timeout: Option<Timeout>,
}

impl Transient {
    pub(crate) fn trigger<E, F>(&mut self, delay: Duration, event_tx: &Sender<E>, make_event: F)
    where
        E: Send + 'static,
        F: FnOnce(u64) -> E,
    {
        self.generation = self.generation.wrapping_add(1);

        // Assigning drops, and so cancels, the previous timeout
        self.timeout = Some(Timeout::spawn(
            delay,
            event_tx.clone(),
            make_event(self.generation),
        ));
    }

    /// Handles an expiry event, returning `true` if it ended the active state.
    pub(crate) fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.timeout.is_some() {
            self.timeout = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.timeout.is_some()
    }

    pub(crate) fn cancel(&mut self) {
        self.timeout = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(500);

    #[test]
    fn interval_posts_repeatedly() {
        let (tx, rx) = mpsc::channel();
        let _interval = Interval::spawn(Duration::from_millis(5), tx, || 7u32);

        assert_eq!(rx.recv_timeout(WAIT), Ok(7));
        assert_eq!(rx.recv_timeout(WAIT), Ok(7));
        assert_eq!(rx.recv_timeout(WAIT), Ok(7));
    }

    #[test]
    fn cancelled_interval_stops_posting() {
        let (tx, rx) = mpsc::channel();
        let mut interval = Interval::spawn(Duration::from_millis(5), tx, || ());
        assert!(rx.recv_timeout(WAIT).is_ok());

        interval.cancel();
        assert!(!interval.is_active());

        // Drain anything already in flight, then the thread must hang up
        while rx.recv_timeout(WAIT).is_ok() {}
        assert_eq!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected));
    }

    #[test]
    fn timeout_fires_once() {
        let (tx, rx) = mpsc::channel();
        let _timeout = Timeout::spawn(Duration::from_millis(5), tx, "done");

        assert_eq!(rx.recv_timeout(WAIT), Ok("done"));
        assert_eq!(rx.recv_timeout(WAIT), Err(RecvTimeoutError::Disconnected));
    }

    #[test]
    fn cancelled_timeout_never_fires() {
        let (tx, rx) = mpsc::channel();
        let mut timeout = Timeout::spawn(Duration::from_millis(100), tx, ());
        timeout.cancel();

        assert_eq!(rx.recv_timeout(WAIT), Err(RecvTimeoutError::Disconnected));
    }

    #[test]
    fn transient_last_trigger_wins() {
        let (tx, rx) = mpsc::channel();
        let mut transient = Transient::default();

        transient.trigger(Duration::from_millis(200), &tx, |g| g);
        transient.trigger(Duration::from_millis(5), &tx, |g| g);
        assert!(transient.is_active());

        let generation = rx.recv_timeout(WAIT).unwrap();
        assert_eq!(generation, 2);

        // A stale generation does nothing
        assert!(!transient.expire(1));
        assert!(transient.is_active());

        assert!(transient.expire(generation));
        assert!(!transient.is_active());

        // The replaced timeout was cancelled and never posts
        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }
}
