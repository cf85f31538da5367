//! Transaction identifiers

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues `txn_<millis>` ids that never repeat within one generator
///
/// The number is the current Unix time in milliseconds, bumped past the
/// previously issued value when two ids are requested in the same
/// millisecond or the clock steps backwards.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id
    pub fn next_id(&self) -> String {
        format!("txn_{}", self.next_value(now_millis()))
    }

    fn next_value(&self, now: u64) -> u64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
