use std::sync::Arc;

use dashmap::DashMap;
use medcal_core::models::OwnerId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per owner.
///
/// Held across read-check-write sequences so that two bookings for the same
/// owner cannot both pass the conflict check before either is stored. An
/// owner's entry is dropped once nobody holds or waits on its mutex.
#[derive(Debug, Default)]
pub(crate) struct OwnerLocks {
    inner: DashMap<OwnerId, Arc<Mutex<()>>>,
}

impl OwnerLocks {
    pub(crate) async fn acquire(&self, owner: OwnerId) -> OwnerGuard<'_> {
        // Clone the Arc out so the map shard is not held across the await.
        let lock = self.inner.entry(owner).or_default().clone();
        let guard = lock.lock_owned().await;

        OwnerGuard {
            locks: self,
            owner,
            guard: Some(guard),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Releases the owner's mutex on drop and evicts the map entry when it was
/// the last reference.
#[derive(Debug)]
pub(crate) struct OwnerGuard<'a> {
    locks: &'a OwnerLocks,
    owner: OwnerId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for OwnerGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters hold their own clone, so a count of 1 means only the map is left.
        self.locks
            .inner
            .remove_if(&self.owner, |_, lock| Arc::strong_count(lock) == 1);
    }
}
