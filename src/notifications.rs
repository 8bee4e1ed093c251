//! Notification store.
//!
//! Ordered collection with read/unread and delete operations. Seeding is
//! newest-first; `push` keeps that convention by prepending. Mark-as-read
//! and delete are idempotent: unknown ids are no-ops, not errors.

use crate::models::Notification;

#[derive(Debug, Default)]
pub struct NotificationStore {
    items: Vec<Notification>,
}

impl NotificationStore {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Insertion-ordered view (newest first by seeding convention).
    pub fn list(&self) -> &[Notification] {
        &self.items
    }

    /// Derived on demand, never cached, to avoid drift.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Prepend an event-generated notification.
    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
    }

    /// Mark a notification read. Unknown or already-read ids are no-ops.
    pub fn mark_read(&mut self, id: u32) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    /// Remove a notification. Unknown ids are no-ops.
    pub fn delete(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NotificationStore {
        NotificationStore::new(vec![
            Notification::new(1, "Appointment confirmed with Dr. Priya Sharma", "2 hours ago"),
            Notification::new(2, "Lab results are ready", "4 hours ago"),
            Notification {
                read: true,
                ..Notification::new(3, "Prescription refilled", "1 day ago")
            },
        ])
    }

    #[test]
    fn unread_count_is_derived() {
        let mut s = store();
        assert_eq!(s.unread_count(), 2);
        s.mark_read(1);
        assert_eq!(s.unread_count(), 1);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut s = store();
        s.mark_read(2);
        let after_once: Vec<_> = s.list().to_vec();
        s.mark_read(2);
        assert_eq!(s.list(), after_once.as_slice());
    }

    #[test]
    fn mark_read_unknown_id_is_noop() {
        let mut s = store();
        let before: Vec<_> = s.list().to_vec();
        s.mark_read(99);
        assert_eq!(s.list(), before.as_slice());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut s = store();
        s.delete(1);
        assert_eq!(s.list().len(), 2);
        s.delete(1);
        assert_eq!(s.list().len(), 2);
    }

    #[test]
    fn push_prepends() {
        let mut s = store();
        s.push(Notification::new(4, "Payment received", "Just now"));
        assert_eq!(s.list()[0].id, 4);
    }
}
