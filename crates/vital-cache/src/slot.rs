//! One memoized collection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;

/// Load state of a collection slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    Unloaded,
    Loading,
    Loaded,
}

/// A memoized collection plus a count of loads in flight.
///
/// There is no loading lock: concurrent first readers each fetch and the
/// last store wins. All stores for one artifact are value-equal.
pub(crate) struct Slot<T> {
    value: RwLock<Option<Arc<[T]>>>,
    in_flight: AtomicUsize,
}

impl<T> Slot<T> {
    pub(crate) fn new() -> Self {
        Self {
            value: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) async fn get(&self) -> Option<Arc<[T]>> {
        self.value.read().await.clone()
    }

    pub(crate) async fn set(&self, records: Arc<[T]>) {
        *self.value.write().await = Some(records);
    }

    pub(crate) async fn state(&self) -> SlotState {
        if self.value.read().await.is_some() {
            SlotState::Loaded
        } else if self.in_flight.load(Ordering::Acquire) > 0 {
            SlotState::Loading
        } else {
            SlotState::Unloaded
        }
    }

    /// Mark a load as started; the returned guard marks it finished on drop.
    pub(crate) fn begin(&self) -> InFlight<'_> {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        InFlight(&self.in_flight)
    }
}

pub(crate) struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}
