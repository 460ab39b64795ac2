//! Rewards notification service contracts and baseline adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the browser's rewards notification store.
///
/// Deletion is a command: the confirmation arrives later as an `ON_NOTIFICATION_DELETED`
/// action message.
pub trait NotificationService {
    /// Requests deletion of a notification by its numeric id.
    fn delete_notification(&self, id: i64) -> NotificationFuture<'_, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for unsupported targets.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn delete_notification(&self, _id: i64) -> NotificationFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory notification service that records requested deletions.
pub struct MemoryNotificationService {
    deleted: Rc<RefCell<Vec<i64>>>,
}

impl MemoryNotificationService {
    /// Returns the ids whose deletion has been requested, oldest first.
    pub fn deleted_ids(&self) -> Vec<i64> {
        self.deleted.borrow().clone()
    }
}

impl NotificationService for MemoryNotificationService {
    fn delete_notification(&self, id: i64) -> NotificationFuture<'_, Result<(), String>> {
        Box::pin(async move {
            self.deleted.borrow_mut().push(id);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_notification_service_records_deletions() {
        let service = MemoryNotificationService::default();
        let service_obj: &dyn NotificationService = &service;
        block_on(service_obj.delete_notification(5)).expect("delete");
        block_on(service_obj.delete_notification(9)).expect("delete");
        assert_eq!(service.deleted_ids(), vec![5, 9]);
    }
}
