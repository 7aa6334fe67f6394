use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by factories to generate unique names, usernames, and DNI values so
/// that multiple factory calls within one test never collide on unique
/// columns.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
