/// Lifecycle of a single overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Generation token handed out when a transition schedules deferred work.
/// Deferred work only applies while its ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Outcome of [`ModalController::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opened {
    /// Was fully closed. Caller takes the scroll lock.
    Presented(Ticket),
    /// Was mid-teardown. The scroll lock is still held.
    Reopened(Ticket),
    /// Already showing a different item, now swapped.
    Replaced,
    /// Already showing this item.
    Unchanged,
}

impl Opened {
    pub fn ticket(&self) -> Option<Ticket> {
        match self {
            Opened::Presented(t) | Opened::Reopened(t) => Some(*t),
            Opened::Replaced | Opened::Unchanged => None,
        }
    }

    pub fn needs_lock(&self) -> bool {
        matches!(self, Opened::Presented(_))
    }
}

/// Snapshot of what the overlay renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState<T> {
    pub open_item: Option<T>,
    pub visible: bool,
    pub animating: bool,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self {
            open_item: None,
            visible: false,
            animating: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalController<T> {
    phase: Phase,
    item: Option<T>,
    generation: u64,
}

impl<T> Default for ModalController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ModalController<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            item: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// True while the enter styles apply, false while hiding or closed.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Open)
    }

    fn advance(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn open(&mut self, item: T) -> Opened
    where
        T: PartialEq,
    {
        match self.phase {
            Phase::Closed => {
                self.item = Some(item);
                self.phase = Phase::Opening;
                Opened::Presented(self.advance())
            }
            Phase::Closing => {
                self.item = Some(item);
                self.phase = Phase::Opening;
                Opened::Reopened(self.advance())
            }
            Phase::Opening | Phase::Open => {
                if self.item.as_ref() == Some(&item) {
                    Opened::Unchanged
                } else {
                    self.item = Some(item);
                    Opened::Replaced
                }
            }
        }
    }

    /// Opens when an item is present; an absent item leaves the modal alone.
    pub fn open_maybe(&mut self, item: Option<T>) -> Option<Opened>
    where
        T: PartialEq,
    {
        item.map(|item| self.open(item))
    }

    /// Starts hiding. Returns the ticket to pass to [`Self::finish_closing`]
    /// once the teardown delay elapses, or `None` if nothing was showing.
    pub fn close(&mut self) -> Option<Ticket> {
        match self.phase {
            Phase::Opening | Phase::Open => {
                self.phase = Phase::Closing;
                Some(self.advance())
            }
            Phase::Closed | Phase::Closing => None,
        }
    }

    pub fn finish_opening(&mut self, ticket: Ticket) -> bool {
        if self.phase == Phase::Opening && ticket.0 == self.generation {
            self.phase = Phase::Open;
            true
        } else {
            false
        }
    }

    /// Completes teardown. Returns true if the modal is now closed and the
    /// caller should release its scroll lock.
    pub fn finish_closing(&mut self, ticket: Ticket) -> bool {
        if self.phase == Phase::Closing && ticket.0 == self.generation {
            self.phase = Phase::Closed;
            self.item = None;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> ModalState<T>
    where
        T: Clone,
    {
        ModalState {
            open_item: self.item.clone(),
            visible: self.is_visible(),
            animating: self.is_animating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{fixtures, ContentItem};

    fn cert(id: &str) -> ContentItem {
        ContentItem::Certification(fixtures::certification(id, &["AWS", "EC2"]))
    }

    #[test]
    fn test_open_close_teardown_restores_initial_state() {
        let items = [
            cert("aws-saa"),
            cert("ckad"),
            ContentItem::Project(fixtures::project("dira")),
        ];
        for item in items {
            let mut modal = ModalController::new();
            let opened = modal.open(item.clone());
            assert!(opened.needs_lock());
            assert_eq!(
                modal.state(),
                ModalState {
                    open_item: Some(item),
                    visible: true,
                    animating: true,
                }
            );

            let ticket = modal.close().expect("an open modal should start closing");
            let hiding = modal.state();
            assert!(hiding.visible);
            assert!(!hiding.animating);

            assert!(modal.finish_closing(ticket));
            assert_eq!(modal.state(), ModalState::default());
            assert_eq!(modal.phase(), Phase::Closed);
        }
    }

    #[test]
    fn test_reopen_beats_stale_teardown() {
        let mut modal = ModalController::new();
        modal.open(cert("a"));
        let stale = modal.close().unwrap();

        let opened = modal.open(cert("b"));
        assert!(matches!(opened, Opened::Reopened(_)));
        assert!(!opened.needs_lock());

        // the teardown timer from the first close fires late
        assert!(!modal.finish_closing(stale));
        let state = modal.state();
        assert_eq!(state.open_item, Some(cert("b")));
        assert!(state.visible);
        assert!(state.animating);
    }

    #[test]
    fn test_double_open_is_single_open() {
        let mut single = ModalController::new();
        single.open(cert("a"));

        let mut double = ModalController::new();
        let first = double.open(cert("a"));
        let second = double.open(cert("a"));
        assert!(first.needs_lock());
        assert_eq!(second, Opened::Unchanged);
        assert_eq!(double.state(), single.state());
        assert_eq!(double.phase(), single.phase());
    }

    #[test]
    fn test_replace_while_open() {
        let mut modal = ModalController::new();
        let ticket = modal.open(cert("a")).ticket().unwrap();
        assert!(modal.finish_opening(ticket));
        assert_eq!(modal.phase(), Phase::Open);

        assert_eq!(modal.open(cert("b")), Opened::Replaced);
        assert_eq!(modal.phase(), Phase::Open);
        assert_eq!(modal.item(), Some(&cert("b")));
    }

    #[test]
    fn test_stale_opening_ticket_ignored_after_close() {
        let mut modal = ModalController::new();
        let opening = modal.open(cert("a")).ticket().unwrap();
        let closing = modal.close().unwrap();

        assert!(!modal.finish_opening(opening));
        assert_eq!(modal.phase(), Phase::Closing);
        assert!(modal.finish_closing(closing));
        assert!(!modal.finish_closing(closing));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut modal: ModalController<ContentItem> = ModalController::new();
        assert_eq!(modal.close(), None);

        modal.open(cert("a"));
        let ticket = modal.close();
        assert!(ticket.is_some());
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn test_absent_item_is_noop() {
        let mut modal: ModalController<ContentItem> = ModalController::new();
        assert_eq!(modal.open_maybe(None), None);
        assert_eq!(modal.state(), ModalState::default());
    }

    #[test]
    fn test_certification_without_skills_opens() {
        let empty = ContentItem::Certification(fixtures::certification("bare", &[]));
        let mut modal = ModalController::new();
        modal.open(empty.clone());
        let shown = modal.item().expect("item should be showing");
        assert!(shown.tags().is_empty());
        assert_eq!(shown, &empty);
    }
}
