use super::modal::{ModalController, ModalState, Opened, Ticket};
use super::scroll_lock::{OverflowHost, ScrollLock};

/// A [`ModalController`] that keeps a shared [`ScrollLock`] balanced.
///
/// The lock is taken only when the overlay goes from fully closed to shown,
/// and given back only by the teardown that actually closes it. Reopening
/// mid-teardown or swapping the item leaves the lock alone.
#[derive(Debug, Clone)]
pub struct LockedModal<T> {
    modal: ModalController<T>,
}

impl<T> Default for LockedModal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LockedModal<T> {
    pub fn new() -> Self {
        Self {
            modal: ModalController::new(),
        }
    }

    pub fn controller(&self) -> &ModalController<T> {
        &self.modal
    }

    pub fn is_animating(&self) -> bool {
        self.modal.is_animating()
    }

    pub fn open<H: OverflowHost>(&mut self, item: T, lock: &mut ScrollLock<H>) -> Opened
    where
        T: PartialEq,
    {
        let opened = self.modal.open(item);
        if opened.needs_lock() {
            lock.acquire();
        }
        log::debug!("modal open: {opened:?}");
        opened
    }

    pub fn close(&mut self) -> Option<Ticket> {
        let ticket = self.modal.close();
        if ticket.is_some() {
            log::debug!("modal closing");
        }
        ticket
    }

    pub fn finish_opening(&mut self, ticket: Ticket) -> bool {
        self.modal.finish_opening(ticket)
    }

    /// Tears the overlay down and releases the lock, unless `ticket` is
    /// stale.
    pub fn finish_closing<H: OverflowHost>(&mut self, ticket: Ticket, lock: &mut ScrollLock<H>) -> bool {
        if !self.modal.finish_closing(ticket) {
            return false;
        }
        lock.release();
        log::debug!("modal torn down");
        true
    }

    pub fn state(&self) -> ModalState<T>
    where
        T: Clone,
    {
        self.modal.state()
    }

    /// The item to render, `None` once torn down.
    pub fn shown(&self) -> Option<T>
    where
        T: Clone,
    {
        let state = self.state();
        state.visible.then_some(state.open_item).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::scroll_lock::fixtures::FakeBody;

    #[test]
    fn test_reopen_during_teardown_keeps_lock_balanced() {
        let body = FakeBody::with_overflow("scroll");
        let mut lock = ScrollLock::new(&body);
        let mut modal = LockedModal::new();

        assert!(modal.open("a", &mut lock).needs_lock());
        let stale = modal.close().unwrap();
        assert!(matches!(modal.open("b", &mut lock), Opened::Reopened(_)));
        assert_eq!(lock.holders(), 1);

        // the first teardown timer fires after the reopen
        assert!(!modal.finish_closing(stale, &mut lock));
        assert_eq!(lock.holders(), 1);
        assert_eq!(modal.shown(), Some("b"));

        let current = modal.close().unwrap();
        assert!(modal.finish_closing(current, &mut lock));

        assert_eq!(lock.holders(), 0);
        assert_eq!(*body.overflow.borrow(), "scroll");
        assert_eq!(*body.writes.borrow(), 2);
        assert_eq!(modal.state(), ModalState::default());
    }

    #[test]
    fn test_replace_and_repeat_do_not_relock() {
        let body = FakeBody::default();
        let mut lock = ScrollLock::new(&body);
        let mut modal = LockedModal::new();

        modal.open("a", &mut lock);
        assert_eq!(modal.open("a", &mut lock), Opened::Unchanged);
        assert_eq!(modal.open("b", &mut lock), Opened::Replaced);
        assert_eq!(lock.holders(), 1);

        let ticket = modal.close().unwrap();
        assert_eq!(modal.close(), None);
        assert!(modal.finish_closing(ticket, &mut lock));
        assert!(!modal.finish_closing(ticket, &mut lock));
        assert_eq!(lock.holders(), 0);
        assert_eq!(*body.writes.borrow(), 2);
    }

    #[test]
    fn test_stacked_modals_share_one_lock() {
        let body = FakeBody::with_overflow("auto");
        let mut lock = ScrollLock::new(&body);
        let mut journey = LockedModal::new();
        let mut company = LockedModal::new();

        journey.open(vec!["first", "second"], &mut lock);
        company.open("second", &mut lock);
        assert_eq!(lock.holders(), 2);

        let ticket = company.close().unwrap();
        assert!(company.finish_closing(ticket, &mut lock));
        assert_eq!(*body.overflow.borrow(), "hidden");

        let ticket = journey.close().unwrap();
        assert!(journey.finish_closing(ticket, &mut lock));
        assert_eq!(*body.overflow.borrow(), "auto");
        assert!(!lock.is_locked());
    }
}
