use std::sync::Mutex;
use std::sync::PoisonError;

/// Running sum of the samples added since the last tick.
///
/// Producers only ever [`add`](Accumulator::add); the renderer only ever
/// [`drain`](Accumulator::drain)s. Both hold the lock for a single float
/// operation.
#[derive(Debug, Default)]
pub struct Accumulator {
    pending: Mutex<f64>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, value: f64) {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *pending += value;
    }

    /// Returns the pending sum and resets it to zero in one critical section.
    pub fn drain(&self) -> f64 {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }

    pub fn pending(&self) -> f64 {
        *self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
