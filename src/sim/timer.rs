//! Cancellable delayed call, driven by simulation time
//!
//! At most one call is pending: scheduling again replaces whatever was waiting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Pending<T> {
    duration_ms: u64,
    elapsed_ms: f64,
    action: T,
}

/// A single-slot timer that hands back `action` once its duration has passed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryTimer<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for RetryTimer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> RetryTimer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, cancelling any call still pending
    pub fn schedule(&mut self, duration_ms: u64, action: T) {
        if self.pending.is_some() {
            log::debug!("Rescheduling pending call to {} ms", duration_ms);
        }
        self.pending = Some(Pending {
            duration_ms,
            elapsed_ms: 0.0,
            action,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending call fires
    pub fn remaining_ms(&self) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|p| (p.duration_ms as f64 - p.elapsed_ms).max(0.0))
    }

    /// Let `elapsed_ms` pass. Returns the action if it came due.
    pub fn advance(&mut self, elapsed_ms: f32) -> Option<T> {
        let due = match self.pending.as_mut() {
            Some(p) => {
                p.elapsed_ms += elapsed_ms as f64;
                p.elapsed_ms >= p.duration_ms as f64
            }
            None => false,
        };
        if due {
            self.pending.take().map(|p| p.action)
        } else {
            None
        }
    }
}
