//! Session renewal coordination
//!
//! When several in-flight requests see a 401 at the same time only one of
//! them (the leader) renews the session. The others queue up and are released
//! in arrival order once the leader reports the outcome.
//!
//! The state lives behind a `parking_lot` mutex that is only held for the
//! check-and-set, the enqueue, and the drain. It is never held across an
//! `.await`.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Result of one renewal cycle as seen by queued requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalOutcome {
    Renewed,
    Failed,
}

#[derive(Debug, Default)]
struct RefreshState {
    in_progress: bool,
    waiters: VecDeque<oneshot::Sender<RenewalOutcome>>,
}

/// Shared renewal state. Clients that share one coordinator (through an
/// `Arc`) never renew concurrently.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
}

/// What a request that saw a 401 should do next
#[derive(Debug)]
pub enum RefreshTicket<'a> {
    /// Perform the renewal, then call [`RefreshLeader::finish`].
    Leader(RefreshLeader<'a>),
    /// Wait for the leader's outcome.
    Waiter(oneshot::Receiver<RenewalOutcome>),
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the current renewal cycle, starting one if none is running.
    pub fn begin(&self) -> RefreshTicket<'_> {
        let mut state = self.state.lock();
        if state.in_progress {
            let (tx, rx) = oneshot::channel();
            state.waiters.push_back(tx);
            debug!(queued = state.waiters.len(), "session renewal already running; queued");
            return RefreshTicket::Waiter(rx);
        }

        state.in_progress = true;
        RefreshTicket::Leader(RefreshLeader { coordinator: self, finished: false })
    }

    /// Whether a renewal cycle is currently running
    pub fn is_refreshing(&self) -> bool {
        self.state.lock().in_progress
    }

    /// Number of requests waiting on the current cycle
    pub fn queued(&self) -> usize {
        self.state.lock().waiters.len()
    }

    /// Release every waiter in FIFO order and end the cycle.
    fn complete(&self, outcome: RenewalOutcome) -> usize {
        let mut state = self.state.lock();
        let mut released = 0;
        while let Some(waiter) = state.waiters.pop_front() {
            // A closed receiver means that request was cancelled.
            if waiter.send(outcome).is_ok() {
                released += 1;
            }
        }
        state.in_progress = false;
        released
    }
}

/// Proof of leadership for one renewal cycle.
///
/// Dropping it without calling [`finish`](Self::finish) ends the cycle as
/// [`RenewalOutcome::Failed`], so a cancelled leader never leaves the
/// coordinator stuck.
#[derive(Debug)]
pub struct RefreshLeader<'a> {
    coordinator: &'a RefreshCoordinator,
    finished: bool,
}

impl RefreshLeader<'_> {
    /// End the cycle, returning how many waiters were released.
    pub fn finish(mut self, outcome: RenewalOutcome) -> usize {
        self.finished = true;
        self.coordinator.complete(outcome)
    }
}

impl Drop for RefreshLeader<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let released = self.coordinator.complete(RenewalOutcome::Failed);
            warn!(released, "session renewal abandoned before completion");
        }
    }
}
