//! Per-call deadline and cancellation.
//!
//! # Design
//! Every `Todos` operation takes a `&Context` so the caller decides how long
//! a single round-trip may take. The client is blocking, so cancellation is
//! cooperative: `check` runs right before the request is handed to the
//! transport, and the remaining time bounds the transport's own timeout.
//! Clones share the cancellation flag, so a context can be cancelled from
//! another thread while the first copy is still in use.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A context with no deadline that is never cancelled unless `cancel` is
    /// called on it.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, `None` when there is no deadline.
    /// Saturates at zero once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fails if the context was cancelled or its deadline has passed.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        match self.remaining() {
            Some(left) if left.is_zero() => Err(ApiError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// The timeout to hand to the transport: the tighter of the context's
    /// remaining time and the client's configured timeout.
    pub(crate) fn effective_timeout(&self, configured: Option<Duration>) -> Option<Duration> {
        match (self.remaining(), configured) {
            (Some(left), Some(cfg)) => Some(left.min(cfg)),
            (Some(left), None) => Some(left),
            (None, cfg) => cfg,
        }
    }
}
