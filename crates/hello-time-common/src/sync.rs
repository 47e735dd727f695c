use std::sync::Mutex;
use std::sync::MutexGuard;

/// Locks `lock`, taking the inner guard back if a previous holder panicked.
///
/// Only use this for data that stays valid if a holder panics mid-update.
pub fn mutex_lock_or_recover<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("recovering from poisoned mutex");
        poisoned.into_inner()
    })
}
