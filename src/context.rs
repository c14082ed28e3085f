//! Request context for lifecycle hook invocations.
//!
//! The host framework hands every hook a context; the provider uses it to tag
//! log lines and passes it on to config checkers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

/// Request context for a single lifecycle hook invocation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
    cancelled: Arc<AtomicBool>,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// Signal that the host framework gave up on this request.
    ///
    /// Hooks run to completion regardless; the flag is only informational.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) was called on this context or a clone of it.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = RequestContext::with_generated_id();
        let b = RequestContext::default();
        assert_ne!(a.request_id, b.request_id);
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let ctx = RequestContext::new("req-1");
        let clone = ctx.clone();
        assert!(!clone.is_cancelled());
        ctx.cancel();
        assert!(clone.is_cancelled());
    }
}
