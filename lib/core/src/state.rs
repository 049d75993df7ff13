use std::sync::atomic::{AtomicU64, Ordering};

/// The id of the node currently shown in the result region.
///
/// This is the source of truth for deciding whether a relationship endpoint is
/// "this node". The controls input mirrors it but does not own it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    current_id: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Stores `id` (trimmed). Returns `false` when it was already current.
    pub fn set_id(&mut self, id: &str) -> bool {
        let id = id.trim();
        if self.current_id.as_deref() == Some(id) {
            return false;
        }
        self.current_id = Some(id.to_string());
        true
    }

    #[inline]
    pub fn is_current(&self, id: &str) -> bool {
        self.current_id.as_deref() == Some(id.trim())
    }
}

/// Monotonic token source. Each primary load takes a new token; a fetch
/// continuation may only render while its token is still the latest.
#[derive(Debug, Default)]
pub struct Generation {
    latest: AtomicU64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token, superseding every earlier one.
    #[inline]
    pub fn advance(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    #[inline]
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_current(&self, token: u64) -> bool {
        self.latest() == token
    }
}
