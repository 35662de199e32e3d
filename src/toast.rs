use std::time::Duration;

use crate::contact::Notice;

/// How long a notification stays up unless dismissed.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Visible notifications, oldest first. Ids are never reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `notice` and returns the id to dismiss it with.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice });
        id
    }

    /// Removes the toast; `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_in_order() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notice::success("sent"));
        let second = queue.push(Notice::error("failed"));

        assert_ne!(first, second);
        let messages: Vec<_> = queue.items().iter().map(|t| t.notice.message.as_str()).collect();
        assert_eq!(messages, vec!["sent", "failed"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notice::success("a"));
        let second = queue.push(Notice::success("b"));

        assert!(queue.dismiss(first));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);

        // manual dismiss followed by the expiry timer
        assert!(!queue.dismiss(first));
        assert!(queue.dismiss(second));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notice::success("a"));
        queue.dismiss(first);
        let second = queue.push(Notice::success("b"));
        assert!(second > first);

        // a stale timer for the old id leaves the new toast alone
        assert!(!queue.dismiss(first));
        assert_eq!(queue.items().len(), 1);
    }
}
