/// Whatever owns the page's overflow policy (the `<body>` element in the
/// browser).
pub trait OverflowHost {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Counted lock over the page scroll. The first holder saves the current
/// overflow value and the last one to release puts it back.
#[derive(Debug, Clone)]
pub struct ScrollLock<H> {
    host: H,
    holders: usize,
    saved: Option<String>,
}

impl<H: OverflowHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            holders: 0,
            saved: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> usize {
        self.holders
    }

    pub fn acquire(&mut self) {
        if self.holders == 0 {
            self.saved = Some(self.host.overflow());
            self.host.set_overflow("hidden");
        }
        self.holders += 1;
        log::debug!("scroll lock acquired, holders={}", self.holders);
    }

    pub fn release(&mut self) {
        if self.holders == 0 {
            log::debug!("scroll lock released without holders");
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            let prior = self.saved.take().unwrap_or_default();
            self.host.set_overflow(&prior);
        }
        log::debug!("scroll lock released, holders={}", self.holders);
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::cell::RefCell;

    use super::OverflowHost;

    /// Records the overflow value and how many times it was written.
    #[derive(Default)]
    pub struct FakeBody {
        pub overflow: RefCell<String>,
        pub writes: RefCell<usize>,
    }

    impl FakeBody {
        pub fn with_overflow(value: &str) -> Self {
            let body = Self::default();
            *body.overflow.borrow_mut() = value.to_string();
            body
        }
    }

    impl OverflowHost for &FakeBody {
        fn overflow(&self) -> String {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
            *self.writes.borrow_mut() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::FakeBody;
    use super::*;

    #[test]
    fn test_restores_prior_policy() {
        let body = FakeBody::with_overflow("scroll");
        let mut lock = ScrollLock::new(&body);

        lock.acquire();
        assert_eq!(*body.overflow.borrow(), "hidden");
        assert!(lock.is_locked());

        lock.release();
        assert_eq!(*body.overflow.borrow(), "scroll");
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_nested_holders() {
        let body = FakeBody::default();
        let mut lock = ScrollLock::new(&body);

        lock.acquire();
        lock.acquire();
        assert_eq!(lock.holders(), 2);
        lock.release();
        assert_eq!(*body.overflow.borrow(), "hidden");
        lock.release();
        assert_eq!(*body.overflow.borrow(), "");
        // one write to lock, one to restore
        assert_eq!(*body.writes.borrow(), 2);
    }

    #[test]
    fn test_extra_release_is_noop() {
        let body = FakeBody::with_overflow("auto");
        let mut lock = ScrollLock::new(&body);

        lock.release();
        assert_eq!(*body.writes.borrow(), 0);

        lock.acquire();
        lock.release();
        lock.release();
        assert_eq!(*body.overflow.borrow(), "auto");
        assert_eq!(*body.writes.borrow(), 2);
        assert_eq!(lock.holders(), 0);
    }
}
