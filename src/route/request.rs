//! Route-request supersession
//!
//! Routing runs against an asynchronous external service, and a fresh
//! position fix can supersede a request that is still in flight. Each
//! request gets a monotonically increasing id; callbacks compare their
//! id against the latest one at delivery time and stale results are
//! dropped.

/// Identifier of an in-flight route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Monotonic counter deciding which routing callback still matters.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request id, superseding every earlier one.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Whether `id` is still the latest issued request.
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}
