//! Scoped guards for page-wide modal side effects.
//!
//! Two shared toggles exist while the profile popover is open: the scroll
//! lock (background panels stop scrolling) and the global Escape listener.
//! Both are reference-counted and released on `Drop`, so any exit path —
//! explicit close, Escape, backdrop click, app teardown — restores them, and
//! overlapping modal lifetimes cannot leave a flag stuck.

use std::cell::Cell;
use std::rc::Rc;

/// Reference-counted page scroll lock. The UI is single-threaded, so a
/// plain `Rc<Cell>` is the whole mechanism.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock. The page stays locked until every guard is dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.set(self.holders.get() + 1);
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    pub fn holder_count(&self) -> usize {
        self.holders.get()
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let n = self.holders.get();
        debug_assert!(n > 0, "scroll lock released more times than acquired");
        self.holders.set(n.saturating_sub(1));
    }
}

/// Registry of global Escape listeners, same discipline as [`ScrollLock`].
/// Opening the profile popover registers exactly one listener; dropping the
/// guard removes exactly that one.
#[derive(Debug, Clone, Default)]
pub struct EscapeRegistry {
    listeners: Rc<Cell<usize>>,
}

impl EscapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> EscapeGuard {
        self.listeners.set(self.listeners.get() + 1);
        EscapeGuard {
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Whether any listener wants the next Escape press.
    pub fn wants_escape(&self) -> bool {
        self.listeners.get() > 0
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.get()
    }
}

#[derive(Debug)]
pub struct EscapeGuard {
    listeners: Rc<Cell<usize>>,
}

impl Drop for EscapeGuard {
    fn drop(&mut self) {
        let n = self.listeners.get();
        debug_assert!(n > 0, "escape listener removed more times than registered");
        self.listeners.set(n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_tracks_guard_lifetime() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());
        {
            let _guard = lock.acquire();
            assert!(lock.is_locked());
            assert_eq!(lock.holder_count(), 1);
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn overlapping_guards_do_not_stick() {
        let lock = ScrollLock::new();
        let a = lock.acquire();
        let b = lock.acquire();
        assert_eq!(lock.holder_count(), 2);
        drop(a);
        assert!(lock.is_locked());
        drop(b);
        assert!(!lock.is_locked());
    }

    #[test]
    fn no_listener_leak_across_cycles() {
        let registry = EscapeRegistry::new();
        for _ in 0..10 {
            let guard = registry.register();
            assert_eq!(registry.listener_count(), 1);
            drop(guard);
        }
        assert_eq!(registry.listener_count(), 0);
        assert!(!registry.wants_escape());
    }
}
