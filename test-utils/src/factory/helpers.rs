use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-wide unique sequence number for factory defaults.
///
/// Used to keep unique columns (telegram ids, names) from colliding when a
/// test creates several entities with default values.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
